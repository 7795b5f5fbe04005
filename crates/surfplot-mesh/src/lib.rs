pub mod grid;
pub mod offset;
pub mod tessellate;
pub mod triangulate;

pub use grid::build_grid;
pub use offset::{offset_curve, CurvePair};
pub use tessellate::tessellate;
pub use triangulate::TriangleMesh;
