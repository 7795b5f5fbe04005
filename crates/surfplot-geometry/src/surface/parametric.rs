//! Generic closure-based parametric surface.

use surfplot_core::{PlotError, Result, Tolerance};
use surfplot_math::{Point3, Vector3};

use super::Surface;

/// A surface patch defined by an arbitrary map `phi(s, t)` on the rectangle
/// `[s0, s1] x [t0, t1]`, together with a unit normal field used for grid
/// push-offs. Both closures must be total on the domain.
pub struct ParametricSurface<P, N> {
    phi: P,
    normal: N,
    domain_s: (f64, f64),
    domain_t: (f64, f64),
}

impl<P, N> ParametricSurface<P, N>
where
    P: Fn(f64, f64) -> Point3 + Send + Sync,
    N: Fn(f64, f64) -> Vector3 + Send + Sync,
{
    pub fn new(phi: P, normal: N, s0: f64, s1: f64, t0: f64, t1: f64) -> Result<Self> {
        let tol = Tolerance::default_precision();
        if !tol.is_valid_span(s0, s1) {
            return Err(PlotError::InvalidDomain(format!(
                "s-domain [{s0}, {s1}] is empty or reversed"
            )));
        }
        if !tol.is_valid_span(t0, t1) {
            return Err(PlotError::InvalidDomain(format!(
                "t-domain [{t0}, {t1}] is empty or reversed"
            )));
        }
        Ok(Self {
            phi,
            normal,
            domain_s: (s0, s1),
            domain_t: (t0, t1),
        })
    }
}

impl<P, N> Surface for ParametricSurface<P, N>
where
    P: Fn(f64, f64) -> Point3 + Send + Sync,
    N: Fn(f64, f64) -> Vector3 + Send + Sync,
{
    fn point_at(&self, s: f64, t: f64) -> Point3 {
        (self.phi)(s, t)
    }

    fn normal_at(&self, s: f64, t: f64) -> Vector3 {
        (self.normal)(s, t)
    }

    fn domain_s(&self) -> (f64, f64) {
        self.domain_s
    }

    fn domain_t(&self) -> (f64, f64) {
        self.domain_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use surfplot_math::DVec3;

    fn cylinder() -> impl Surface {
        ParametricSurface::new(
            |s, t| DVec3::new(t.cos(), t.sin(), s),
            |_, t| DVec3::new(t.cos(), t.sin(), 0.0),
            0.0,
            1.0,
            0.0,
            2.0 * PI,
        )
        .unwrap()
    }

    #[test]
    fn test_cylinder_point_and_normal() {
        let c = cylinder();
        let p = c.point_at(0.5, 0.0);
        assert!((p - DVec3::new(1.0, 0.0, 0.5)).length() < 1e-12);
        let n = c.normal_at(0.5, 0.0);
        assert!((n - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_rejects_reversed_domain() {
        let r = ParametricSurface::new(
            |s, t| DVec3::new(s, t, 0.0),
            |_, _| DVec3::Z,
            1.0,
            0.0,
            0.0,
            1.0,
        );
        assert!(r.is_err());
    }

    #[test]
    fn test_rejects_empty_domain() {
        let r = ParametricSurface::new(
            |s, t| DVec3::new(s, t, 0.0),
            |_, _| DVec3::Z,
            0.0,
            1.0,
            2.0,
            2.0,
        );
        assert!(r.is_err());
    }
}
