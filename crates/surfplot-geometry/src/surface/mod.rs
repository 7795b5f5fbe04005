//! Surface traits and domain adapters.

mod disk;
mod parametric;
mod square;

use surfplot_math::{Point3, Vector3};

pub use disk::DiskGraph;
pub use parametric::ParametricSurface;
pub use square::SquareGraph;

/// Trait for parametric surfaces in 3D space.
///
/// The normal field is used only to push grid curves off the shaded surface;
/// shading normals are computed from the triangulated geometry by the
/// rendering collaborator.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(s, t)`.
    fn point_at(&self, s: f64, t: f64) -> Point3;

    /// Evaluate the offset normal at parameters `(s, t)`.
    fn normal_at(&self, s: f64, t: f64) -> Vector3;

    /// Return the s-parameter domain `(s_min, s_max)`.
    fn domain_s(&self) -> (f64, f64);

    /// Return the t-parameter domain `(t_min, t_max)`.
    fn domain_t(&self) -> (f64, f64);
}
