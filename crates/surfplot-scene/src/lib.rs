//! Scene layer: the data handed to the external rendering collaborator,
//! plus the pure recompute path driven by slider events.

pub mod material;
pub mod options;
pub mod plot;
pub mod quadric;
pub mod scene;
pub mod slice;
pub mod slider;

pub use material::{surface_material, LineStyle, SurfaceFinish, SurfaceMaterial};
pub use options::PlotOptions;
pub use plot::{plot_over_disk, plot_over_square, PlotProduct};
pub use quadric::{PlotDomain, QuadricCoeffs, SecondOrderModel};
pub use scene::{Scene, SceneLabel, SceneMesh, ScenePolyline};
pub use slice::{SliceAxis, SlicePlane};
pub use slider::{Slider, SliderEvent, SliderPhase};
