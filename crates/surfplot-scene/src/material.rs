//! Material and line-style descriptors consumed by the renderer.

use serde::{Deserialize, Serialize};

/// Default surface color (light gray).
pub const SURFACE_COLOR: [f32; 3] = [0.933, 0.933, 0.933];

/// Default grid-line color (dark gray).
pub const GRID_COLOR: [f32; 3] = [0.267, 0.267, 0.267];

/// Axis line and label color.
pub const AXIS_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

/// Shading descriptor for a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMaterial {
    pub color: [f32; 3],
    pub opacity: f32,
    pub transparent: bool,
    pub double_sided: bool,
}

/// The default surface material at the given opacity, or `None` when the
/// surface should not be drawn at all.
pub fn surface_material(opacity: f64) -> Option<SurfaceMaterial> {
    if opacity <= 0.0 {
        return None;
    }
    Some(SurfaceMaterial {
        color: SURFACE_COLOR,
        opacity: opacity as f32,
        transparent: opacity < 1.0,
        double_sided: true,
    })
}

/// Display mode for the shaded surface, as picked from a UI menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceFinish {
    Invisible,
    Transparent,
    Solid,
}

impl SurfaceFinish {
    pub fn opacity(self) -> f64 {
        match self {
            SurfaceFinish::Invisible => 0.0,
            SurfaceFinish::Transparent => 0.3,
            SurfaceFinish::Solid => 1.0,
        }
    }

    pub fn material(self) -> Option<SurfaceMaterial> {
        surface_material(self.opacity())
    }
}

/// Color and width for a rendered polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: [f32; 3],
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: GRID_COLOR,
            width: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_opacity_means_no_material() {
        assert!(surface_material(0.0).is_none());
        assert!(SurfaceFinish::Invisible.material().is_none());
    }

    #[test]
    fn test_partial_opacity_is_transparent() {
        let m = surface_material(0.3).unwrap();
        assert!(m.transparent);
        assert!((m.opacity - 0.3).abs() < 1e-6);
        assert!(m.double_sided);
    }

    #[test]
    fn test_solid_is_opaque() {
        let m = SurfaceFinish::Solid.material().unwrap();
        assert!(!m.transparent);
        assert_eq!(m.opacity, 1.0);
    }
}
