//! The renderer-facing scene: named meshes, polylines and text labels.
//!
//! This is the interface boundary of the system. A rendering collaborator
//! consumes these buffers and descriptors; the scene itself never draws.

use surfplot_axes::{PlacedAxis, TextLabel};
use surfplot_math::{Aabb3, Point3};
use surfplot_mesh::TriangleMesh;

use crate::material::{LineStyle, SurfaceMaterial, AXIS_COLOR};

/// A named mesh with its material.
#[derive(Debug, Clone)]
pub struct SceneMesh {
    pub name: String,
    pub mesh: TriangleMesh,
    pub material: SurfaceMaterial,
}

/// A named polyline with its line style.
#[derive(Debug, Clone)]
pub struct ScenePolyline {
    pub name: String,
    pub points: Vec<Point3>,
    pub style: LineStyle,
}

/// A named billboard text label.
#[derive(Debug, Clone)]
pub struct SceneLabel {
    pub name: String,
    pub label: TextLabel,
}

/// A 3D scene, rebuilt piecewise: the caller removes a name and re-adds its
/// recomputed content on every update.
#[derive(Debug, Default)]
pub struct Scene {
    pub meshes: Vec<SceneMesh>,
    pub polylines: Vec<ScenePolyline>,
    pub labels: Vec<SceneLabel>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, name: &str, mesh: TriangleMesh, material: SurfaceMaterial) {
        self.meshes.push(SceneMesh {
            name: name.to_string(),
            mesh,
            material,
        });
    }

    pub fn add_polyline(&mut self, name: &str, points: Vec<Point3>, style: LineStyle) {
        self.polylines.push(ScenePolyline {
            name: name.to_string(),
            points,
            style,
        });
    }

    pub fn add_label(&mut self, name: &str, label: TextLabel) {
        self.labels.push(SceneLabel {
            name: name.to_string(),
            label,
        });
    }

    /// Remove every mesh, polyline and label registered under `name`.
    /// Returns the number of objects removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.meshes.len() + self.polylines.len() + self.labels.len();
        self.meshes.retain(|m| m.name != name);
        self.polylines.retain(|p| p.name != name);
        self.labels.retain(|l| l.name != name);
        before - (self.meshes.len() + self.polylines.len() + self.labels.len())
    }

    /// Install a laid-out axis triple as polylines and labels under `name`.
    pub fn add_axes(&mut self, name: &str, axes: &[PlacedAxis; 3]) {
        for placed in axes {
            let axis = placed.world();
            let style = LineStyle {
                color: AXIS_COLOR,
                width: axis.line_width as f32,
            };
            self.add_polyline(name, axis.segment.to_vec(), style);
            for tick in &axis.ticks {
                self.add_polyline(name, tick.segment.to_vec(), style);
                self.add_label(name, tick.label.clone());
            }
            self.add_label(name, axis.name.clone());
        }
    }

    /// Bounding box over all mesh vertices and polyline points.
    pub fn bounds(&self) -> Option<Aabb3> {
        let mut bounds: Option<Aabb3> = None;
        let mut grow = |points: &[Point3]| {
            if let Some(b) = Aabb3::from_points(points) {
                bounds = Some(match bounds {
                    Some(prev) => prev.merge(&b),
                    None => b,
                });
            }
        };
        for m in &self.meshes {
            grow(&m.mesh.positions);
        }
        for p in &self.polylines {
            grow(&p.points);
        }
        bounds
    }

    /// Total triangle count across all meshes.
    pub fn total_triangles(&self) -> usize {
        self.meshes.iter().map(|m| m.mesh.triangle_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::surface_material;
    use surfplot_axes::{build_axes, AxisStyle};
    use surfplot_math::DVec3;

    fn flat_quad() -> TriangleMesh {
        TriangleMesh {
            positions: vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
            ],
            normals: vec![],
            indices: vec![0, 1, 3, 0, 3, 2],
        }
    }

    #[test]
    fn test_remove_by_name() {
        let mut scene = Scene::new();
        let mat = surface_material(1.0).unwrap();
        scene.add_mesh("plot", flat_quad(), mat);
        scene.add_polyline("plot", vec![DVec3::ZERO, DVec3::X], LineStyle::default());
        scene.add_mesh("slice", flat_quad(), mat);

        assert_eq!(scene.remove("plot"), 2);
        assert_eq!(scene.meshes.len(), 1);
        assert_eq!(scene.meshes[0].name, "slice");
        assert!(scene.polylines.is_empty());
        assert_eq!(scene.remove("plot"), 0);
    }

    #[test]
    fn test_total_triangles() {
        let mut scene = Scene::new();
        let mat = surface_material(0.3).unwrap();
        scene.add_mesh("a", flat_quad(), mat);
        scene.add_mesh("b", flat_quad(), mat);
        assert_eq!(scene.total_triangles(), 4);
    }

    #[test]
    fn test_bounds_cover_meshes_and_lines() {
        let mut scene = Scene::new();
        scene.add_mesh("a", flat_quad(), surface_material(1.0).unwrap());
        scene.add_polyline(
            "line",
            vec![DVec3::new(-2.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 5.0)],
            LineStyle::default(),
        );
        let b = scene.bounds().unwrap();
        assert_eq!(b.min, DVec3::new(-2.0, 0.0, 0.0));
        assert_eq!(b.max, DVec3::new(1.0, 1.0, 5.0));
    }

    #[test]
    fn test_add_axes_counts() {
        let mut scene = Scene::new();
        let ticks = [-1.0, 0.0, 1.0];
        let axes = build_axes(
            1.5, &ticks, 1.5, &ticks, -3.5, 3.5, &ticks, &AxisStyle::default(),
        )
        .unwrap();
        scene.add_axes("axes", &axes);
        // Per axis: 1 segment + 3 ticks = 4 polylines, 3 tick labels + 1 name.
        assert_eq!(scene.polylines.len(), 12);
        assert_eq!(scene.labels.len(), 12);
        scene.remove("axes");
        assert!(scene.polylines.is_empty() && scene.labels.is_empty());
    }
}
