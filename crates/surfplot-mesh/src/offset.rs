//! Double offsetting of curves on a surface along its normal field.

use surfplot_core::{PlotError, Result};
use surfplot_geometry::Surface;
use surfplot_math::Point3;

/// A curve on a surface, pushed off to both sides along the normal field.
///
/// Rendered with the shaded surface sandwiched between the two polylines,
/// neither is coplanar with (and thus z-fighting against) the mesh. With a
/// zero push-off both polylines coincide with the raw surface curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePair {
    pub top: Vec<Point3>,
    pub bottom: Vec<Point3>,
}

/// Sample `phi(path(u))` for `u = i/samples`, `i` in `0..=samples`, emitting
/// `p + epsilon*normal` into the top polyline and `p - epsilon*normal` into
/// the bottom one. `path` maps `[0, 1]` into the surface's parameter domain.
pub fn offset_curve<P>(
    surface: &dyn Surface,
    path: P,
    samples: usize,
    epsilon: f64,
) -> Result<CurvePair>
where
    P: Fn(f64) -> (f64, f64),
{
    if samples < 1 {
        return Err(PlotError::InvalidResolution(
            "curve needs at least one sample interval".into(),
        ));
    }

    let mut top = Vec::with_capacity(samples + 1);
    let mut bottom = Vec::with_capacity(samples + 1);
    for i in 0..=samples {
        let u = i as f64 / samples as f64;
        let (s, t) = path(u);
        let p = surface.point_at(s, t);
        let v = surface.normal_at(s, t);
        top.push(p + epsilon * v);
        bottom.push(p - epsilon * v);
    }
    Ok(CurvePair { top, bottom })
}
