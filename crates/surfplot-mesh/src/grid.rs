//! Iso-parameter grid-curve overlay for a parametric surface.

use surfplot_core::{PlotError, Result};
use surfplot_geometry::Surface;

use crate::offset::{offset_curve, CurvePair};

/// Build the full grid overlay: `s_grid + 1` curves running in the
/// s-direction (t held constant) and `t_grid + 1` curves running in the
/// t-direction (s held constant), each sampled `samples + 1` times and
/// pushed off by `epsilon`. Returns `s_grid + t_grid + 2` curve pairs.
pub fn build_grid(
    surface: &dyn Surface,
    s_grid: usize,
    t_grid: usize,
    samples: usize,
    epsilon: f64,
) -> Result<Vec<CurvePair>> {
    if s_grid < 1 || t_grid < 1 {
        return Err(PlotError::InvalidResolution(format!(
            "need at least one gridline interval per direction, got s_grid={s_grid}, t_grid={t_grid}"
        )));
    }

    let (s0, s1) = surface.domain_s();
    let (t0, t1) = surface.domain_t();
    let mut curves = Vec::with_capacity(s_grid + t_grid + 2);

    for i in 0..=s_grid {
        let t = t0 + (t1 - t0) * i as f64 / s_grid as f64;
        curves.push(offset_curve(
            surface,
            |u| (s0 + (s1 - s0) * u, t),
            samples,
            epsilon,
        )?);
    }

    for i in 0..=t_grid {
        let s = s0 + (s1 - s0) * i as f64 / t_grid as f64;
        curves.push(offset_curve(
            surface,
            |u| (s, t0 + (t1 - t0) * u),
            samples,
            epsilon,
        )?);
    }

    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use surfplot_geometry::surface::{DiskGraph, SquareGraph};

    #[test]
    fn test_curve_count() {
        let g = SquareGraph::unit(|x, y| x * y);
        for (a, b) in [(1, 1), (6, 6), (12, 6), (3, 9)] {
            let grid = build_grid(&g, a, b, 20, 0.01).unwrap();
            assert_eq!(grid.len(), a + b + 2);
        }
    }

    #[test]
    fn test_rejects_zero_gridlines() {
        let g = SquareGraph::unit(|_, _| 0.0);
        assert!(build_grid(&g, 0, 6, 20, 0.01).is_err());
        assert!(build_grid(&g, 6, 0, 20, 0.01).is_err());
    }

    #[test]
    fn test_constant_t_curves_span_s_domain() {
        let g = SquareGraph::new(|x, y| x + y, 2.0).unwrap();
        let grid = build_grid(&g, 4, 4, 10, 0.0).unwrap();
        // First family: t constant, endpoints at s0 and s1.
        for pair in &grid[..5] {
            let first = pair.top.first().unwrap();
            let last = pair.top.last().unwrap();
            assert_relative_eq!(first.x, -2.0, max_relative = 1e-12);
            assert_relative_eq!(last.x, 2.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_disk_grid_is_circles_and_spokes() {
        let g = DiskGraph::new(|_, _| 0.0, 1.0).unwrap();
        let grid = build_grid(&g, 2, 4, 16, 0.0).unwrap();
        assert_eq!(grid.len(), 8);
        // Second family holds r constant: the last one is the rim circle.
        let rim = &grid[grid.len() - 1];
        for p in &rim.top {
            assert_relative_eq!(p.length(), 1.0, max_relative = 1e-12);
        }
    }
}
