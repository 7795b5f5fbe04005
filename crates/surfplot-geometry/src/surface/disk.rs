//! Graph of a function f(x, y) over a disk, via polar substitution.

use std::f64::consts::{PI, SQRT_2};

use surfplot_core::{PlotError, Result, Tolerance};
use surfplot_math::{DVec3, Point3, Vector3};

use super::Surface;

/// The graph of `z = f(x, y)` over the disk of a given radius, parameterized
/// by `(r, theta)` in `[0, radius] x [0, 2*PI]`:
///
/// `P(r, theta) = (r*cos(theta), r*sin(theta), f(r*cos(theta), r*sin(theta)))`
///
/// The parameterization is degenerate at `r = 0` (the whole theta row maps to
/// one point); this is tolerated, since evaluation there is still well-defined.
/// The offset normal is the constant `(0, 0, 1)`, as for [`super::SquareGraph`].
pub struct DiskGraph<F> {
    f: F,
    radius: f64,
}

impl<F> DiskGraph<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    pub fn new(f: F, radius: f64) -> Result<Self> {
        if !Tolerance::default_precision().is_valid_span(0.0, radius) {
            return Err(PlotError::InvalidDomain(format!(
                "disk radius must be positive, got {radius}"
            )));
        }
        Ok(Self { f, radius })
    }

    /// Disk of radius sqrt(2), covering the unit square's circumscribed
    /// region for side-by-side comparison with [`super::SquareGraph::unit`].
    pub fn covering_square(f: F) -> Self {
        Self { f, radius: SQRT_2 }
    }
}

impl<F> Surface for DiskGraph<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn point_at(&self, r: f64, theta: f64) -> Point3 {
        let x = r * theta.cos();
        let y = r * theta.sin();
        Point3::new(x, y, (self.f)(x, y))
    }

    fn normal_at(&self, _r: f64, _theta: f64) -> Vector3 {
        DVec3::Z
    }

    fn domain_s(&self) -> (f64, f64) {
        (0.0, self.radius)
    }

    fn domain_t(&self) -> (f64, f64) {
        (0.0, 2.0 * PI)
    }
}
