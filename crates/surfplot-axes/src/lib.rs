//! Axis layout: canonical tick/label construction plus the rigid placement
//! of three axes onto the faces of a plot's bounding box.

pub mod axis;
pub mod layout;

pub use axis::{build_axis, Axis, AxisStyle, TextLabel, TickMark};
pub use layout::{build_axes, PlacedAxis};
