//! Cross-section "slicer" planes, dragged along one coordinate axis.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use surfplot_core::{PlotError, Result, Tolerance};
use surfplot_math::{Point3, Transform, Vector3};
use surfplot_mesh::TriangleMesh;

use crate::material::SurfaceMaterial;

/// x-slice: stand the canonical z=0 quad upright facing +x.
const X_SLICE_PITCH: f64 = -FRAC_PI_2;
const X_SLICE_SPIN: f64 = -FRAC_PI_2;

/// y-slice: tip the canonical quad up to face +y.
const Y_SLICE_TILT: f64 = PI / 2.0;

/// Which coordinate axis a slice plane is perpendicular to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceAxis {
    X,
    Y,
    Z,
}

impl SliceAxis {
    /// Per-axis highlight color (orange / slate blue / navy).
    pub fn color(self) -> [f32; 3] {
        match self {
            SliceAxis::X => [0.910, 0.467, 0.133],
            SliceAxis::Y => [0.376, 0.431, 0.698],
            SliceAxis::Z => [0.0, 0.125, 0.345],
        }
    }
}

/// A translucent helper plane at coordinate `c` along `axis`, spanning
/// `[a0, a1] x [b0, b1]` in the two remaining coordinates. Shown while the
/// slice slider is being dragged, removed when the drag ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlicePlane {
    pub axis: SliceAxis,
    pub c: f64,
    pub a: (f64, f64),
    pub b: (f64, f64),
}

impl SlicePlane {
    pub fn new(axis: SliceAxis, c: f64, a: (f64, f64), b: (f64, f64)) -> Result<Self> {
        let tol = Tolerance::default_precision();
        if !tol.is_valid_span(a.0, a.1) || !tol.is_valid_span(b.0, b.1) {
            return Err(PlotError::InvalidDomain(format!(
                "slice extents [{}, {}] x [{}, {}] are empty or reversed",
                a.0, a.1, b.0, b.1
            )));
        }
        Ok(Self { axis, c, a, b })
    }

    /// The plane as a two-triangle quad in its canonical frame (z = 0).
    pub fn quad(&self) -> TriangleMesh {
        let (a0, a1) = self.a;
        let (b0, b1) = self.b;
        let mut mesh = TriangleMesh {
            positions: vec![
                Point3::new(a0, b0, 0.0),
                Point3::new(a1, b0, 0.0),
                Point3::new(a1, b1, 0.0),
                Point3::new(a0, b1, 0.0),
            ],
            normals: vec![],
            indices: vec![0, 1, 2, 0, 2, 3],
        };
        mesh.compute_normals();
        mesh
    }

    /// Rigid transform that carries the canonical quad to coordinate `c`
    /// along the slice axis.
    pub fn placement(&self) -> Transform {
        match self.axis {
            SliceAxis::Z => Transform::from_translation(Vector3::new(0.0, 0.0, self.c)),
            SliceAxis::X => Transform::from_rotation_z(X_SLICE_SPIN)
                .then(&Transform::from_rotation_y(X_SLICE_PITCH))
                .then(&Transform::from_translation(Vector3::new(self.c, 0.0, 0.0))),
            SliceAxis::Y => Transform::from_rotation_x(Y_SLICE_TILT)
                .then(&Transform::from_translation(Vector3::new(0.0, self.c, 0.0))),
        }
    }

    /// Faint, double-sided fill.
    pub fn material(&self) -> SurfaceMaterial {
        SurfaceMaterial {
            color: self.axis.color(),
            opacity: 0.1,
            transparent: true,
            double_sided: true,
        }
    }
}
