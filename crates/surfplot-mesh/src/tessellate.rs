//! Uniform tessellation of a parametric surface into a triangle mesh.

use rayon::prelude::*;

use surfplot_core::{PlotError, Result};
use surfplot_geometry::Surface;
use surfplot_math::Point3;

use crate::TriangleMesh;

/// Tessellate `surface` over its own parameter domain with `m` divisions in
/// s and `n` divisions in t.
///
/// The vertex grid has `(m+1) * (n+1)` points with the flattening
/// `k = (m+1)*j + i` (i is the s-index, j the t-index), connected by
/// `2*m*n` triangles, two per cell with a fixed diagonal:
/// `(k, k+1, k+m+2)` and `(k, k+m+2, k+m+1)`. Index generation and vertex
/// generation share this formula; triangles wind counter-clockwise seen
/// from +z for the identity map.
///
/// NaN/Inf produced by a pathological surface propagate unchecked; choosing
/// a numerically sane parameterization is the caller's responsibility.
pub fn tessellate(surface: &dyn Surface, m: usize, n: usize) -> Result<TriangleMesh> {
    if m < 1 || n < 1 {
        return Err(PlotError::InvalidResolution(format!(
            "need at least one division per direction, got m={m}, n={n}"
        )));
    }

    let (s0, s1) = surface.domain_s();
    let (t0, t1) = surface.domain_t();
    let row = m + 1;
    let total = row * (n + 1);

    // Each vertex is a pure function of (i, j), so sampling parallelizes
    // over the flattened index with no write conflicts.
    let positions: Vec<Point3> = (0..total)
        .into_par_iter()
        .map(|k| {
            let i = k % row;
            let j = k / row;
            let s = s0 + (s1 - s0) * i as f64 / m as f64;
            let t = t0 + (t1 - t0) * j as f64 / n as f64;
            surface.point_at(s, t)
        })
        .collect();

    let stride = row as u32;
    let mut indices = Vec::with_capacity(m * n * 6);
    for j in 0..n {
        for i in 0..m {
            let k = (row * j + i) as u32;
            indices.extend_from_slice(&[k, k + 1, k + stride + 1]);
            indices.extend_from_slice(&[k, k + stride + 1, k + stride]);
        }
    }

    Ok(TriangleMesh {
        positions,
        normals: vec![],
        indices,
    })
}
