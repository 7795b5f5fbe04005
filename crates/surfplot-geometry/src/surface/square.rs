//! Graph of a function f(x, y) over a centered square.

use surfplot_core::{PlotError, Result, Tolerance};
use surfplot_math::{DVec3, Point3, Vector3};

use super::Surface;

/// The graph of `z = f(x, y)` over the square `[-a, a] x [-a, a]`.
///
/// The offset normal is the constant `(0, 0, 1)`: grid ribbons are pushed
/// straight up/down rather than along the true surface normal. This is a
/// known limitation for steeply sloped surfaces, where ribbons may slightly
/// interpenetrate the shaded mesh.
pub struct SquareGraph<F> {
    f: F,
    half_size: f64,
}

impl<F> SquareGraph<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    /// Create the graph over `[-half_size, half_size]^2`.
    pub fn new(f: F, half_size: f64) -> Result<Self> {
        if !Tolerance::default_precision().is_valid_span(0.0, half_size) {
            return Err(PlotError::InvalidDomain(format!(
                "square half-size must be positive, got {half_size}"
            )));
        }
        Ok(Self { f, half_size })
    }

    /// The unit square `[-1, 1]^2`.
    pub fn unit(f: F) -> Self {
        Self { f, half_size: 1.0 }
    }
}

impl<F> Surface for SquareGraph<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn point_at(&self, s: f64, t: f64) -> Point3 {
        Point3::new(s, t, (self.f)(s, t))
    }

    fn normal_at(&self, _s: f64, _t: f64) -> Vector3 {
        DVec3::Z
    }

    fn domain_s(&self) -> (f64, f64) {
        (-self.half_size, self.half_size)
    }

    fn domain_t(&self) -> (f64, f64) {
        (-self.half_size, self.half_size)
    }
}
