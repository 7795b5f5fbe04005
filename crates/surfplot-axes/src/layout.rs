//! Placement of three axes onto the faces of the plot's bounding box
//! `[-x_max, x_max] x [-y_max, y_max] x [z_min, z_max]`.
//!
//! Each axis is built in the canonical frame of [`crate::axis`] and then
//! rigidly moved into place. The rotation angles are deliberate visual
//! layout choices: x and z meet at the box corner `(-x_max, -y_max, z_min)`,
//! y runs along the top-left edge, and each roll turns the tick labels
//! outward so none overlap the plot.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use surfplot_core::Result;
use surfplot_math::{Point3, Transform, Vector3};

use crate::axis::{build_axis, Axis, AxisStyle};

/// x-axis roll about itself: folds the tick/label plane outward under the
/// floor-front edge of the box.
const X_AXIS_ROLL: f64 = 5.0 * PI / 4.0;

/// y-axis yaw into the y-direction, then a 45-degree roll so its labels
/// face the viewer from the top-left edge.
const Y_AXIS_YAW: f64 = PI / 2.0;
const Y_AXIS_ROLL: f64 = PI / 4.0;

/// z-axis yaw upright (canonical +x becomes +z), then a roll that swings
/// its labels away from the box along the near-left vertical edge.
const Z_AXIS_YAW: f64 = -PI / 2.0;
const Z_AXIS_ROLL: f64 = 3.0 * PI / 4.0;

/// An axis together with the rigid transform that moves its canonical-frame
/// geometry onto a box face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedAxis {
    pub axis: Axis,
    pub placement: Transform,
}

impl PlacedAxis {
    /// The axis geometry in world coordinates. Label positions are
    /// transformed as points; the labels themselves stay billboards.
    pub fn world(&self) -> Axis {
        let tp = |p: Point3| self.placement.transform_point(p);
        let mut axis = self.axis.clone();
        axis.segment = [tp(axis.segment[0]), tp(axis.segment[1])];
        for tick in &mut axis.ticks {
            tick.segment = [tp(tick.segment[0]), tp(tick.segment[1])];
            tick.label.position = tp(tick.label.position);
        }
        axis.name.position = tp(axis.name.position);
        axis
    }
}

/// Lay out x, y and z axes on three faces of the bounding box.
#[allow(clippy::too_many_arguments)]
pub fn build_axes(
    x_max: f64,
    x_ticks: &[f64],
    y_max: f64,
    y_ticks: &[f64],
    z_min: f64,
    z_max: f64,
    z_ticks: &[f64],
    style: &AxisStyle,
) -> Result<[PlacedAxis; 3]> {
    // x runs along the floor-front edge.
    let x_axis = PlacedAxis {
        axis: build_axis(-x_max, x_max, "x", x_ticks, style)?,
        placement: Transform::from_rotation_x(X_AXIS_ROLL)
            .then(&Transform::from_translation(Vector3::new(0.0, -y_max, z_min))),
    };

    // y runs along the top-left edge.
    let y_axis = PlacedAxis {
        axis: build_axis(-y_max, y_max, "y", y_ticks, style)?,
        placement: Transform::from_rotation_x(Y_AXIS_ROLL)
            .then(&Transform::from_rotation_z(Y_AXIS_YAW))
            .then(&Transform::from_translation(Vector3::new(-x_max, 0.0, z_max))),
    };

    // z runs up the near-left vertical edge.
    let z_axis = PlacedAxis {
        axis: build_axis(z_min, z_max, "z", z_ticks, style)?,
        placement: Transform::from_rotation_x(Z_AXIS_ROLL)
            .then(&Transform::from_rotation_y(Z_AXIS_YAW))
            .then(&Transform::from_translation(Vector3::new(-x_max, -y_max, 0.0))),
    };

    Ok([x_axis, y_axis, z_axis])
}
