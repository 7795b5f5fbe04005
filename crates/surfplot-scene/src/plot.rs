//! Pure recompute of a function plot: options in, mesh and grid out.
//!
//! The caller owns the scene lifecycle: remove the previous plot's name,
//! recompute, add the new product. Nothing here mutates shared state.

use surfplot_core::{Result, Validate};
use surfplot_geometry::surface::{DiskGraph, SquareGraph};
use surfplot_geometry::Surface;
use surfplot_mesh::{build_grid, tessellate, CurvePair, TriangleMesh};

use crate::material::{surface_material, LineStyle, SurfaceMaterial};
use crate::options::PlotOptions;
use crate::scene::Scene;

/// Everything one plot update produces.
#[derive(Debug, Clone)]
pub struct PlotProduct {
    /// The shaded mesh, absent at opacity 0 (grid-only display)
    pub surface: Option<TriangleMesh>,
    pub material: Option<SurfaceMaterial>,
    /// Grid overlay ribbons (top/bottom pairs)
    pub grid: Vec<CurvePair>,
    pub grid_style: LineStyle,
}

impl PlotProduct {
    /// Add this product to a scene under `name`. The caller removes any
    /// previous content under the same name first.
    pub fn add_to(&self, scene: &mut Scene, name: &str) {
        if let (Some(mesh), Some(material)) = (&self.surface, &self.material) {
            scene.add_mesh(name, mesh.clone(), *material);
        }
        for pair in &self.grid {
            scene.add_polyline(name, pair.top.clone(), self.grid_style);
            scene.add_polyline(name, pair.bottom.clone(), self.grid_style);
        }
    }
}

/// Plot `z = f(x, y)` over the square `[-a, a]^2` (a = `opts.square_size`).
pub fn plot_over_square<F>(f: F, opts: &PlotOptions) -> Result<PlotProduct>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    opts.validate()?;
    let graph = SquareGraph::new(f, opts.square_size)?;
    plot_surface(&graph, opts)
}

/// Plot `z = f(x, y)` over the disk of radius `opts.disk_radius`.
pub fn plot_over_disk<F>(f: F, opts: &PlotOptions) -> Result<PlotProduct>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    opts.validate()?;
    let graph = DiskGraph::new(f, opts.disk_radius)?;
    plot_surface(&graph, opts)
}

/// Shared driver: tessellate the shaded surface (unless invisible) and build
/// the grid overlay. With no shaded surface there is nothing to z-fight
/// against, so the grid push-off drops to zero.
fn plot_surface(surface: &dyn Surface, opts: &PlotOptions) -> Result<PlotProduct> {
    let material = surface_material(opts.opacity);

    let mesh = match material {
        Some(_) => {
            let mut mesh = tessellate(surface, opts.samples, opts.samples)?;
            mesh.compute_normals();
            Some(mesh)
        }
        None => None,
    };

    let epsilon = if material.is_some() {
        opts.grid_push_off
    } else {
        0.0
    };
    let grid = if opts.show_grid {
        build_grid(surface, opts.s_grid, opts.t_grid, opts.samples, epsilon)?
    } else {
        Vec::new()
    };

    Ok(PlotProduct {
        surface: mesh,
        material,
        grid,
        grid_style: LineStyle::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn paraboloid(x: f64, y: f64) -> f64 {
        x * x + y * y
    }

    #[test]
    fn test_square_plot_counts() {
        let opts = PlotOptions::square();
        let product = plot_over_square(paraboloid, &opts).unwrap();
        let mesh = product.surface.unwrap();
        assert_eq!(mesh.vertex_count(), 41 * 41);
        assert_eq!(mesh.triangle_count(), 2 * 40 * 40);
        assert_eq!(mesh.normals.len(), mesh.vertex_count());
        assert_eq!(product.grid.len(), 6 + 6 + 2);
    }

    #[test]
    fn test_disk_plot_counts() {
        let opts = PlotOptions::disk();
        let product = plot_over_disk(paraboloid, &opts).unwrap();
        assert!(product.surface.is_some());
        assert_eq!(product.grid.len(), 12 + 6 + 2);
    }

    #[test]
    fn test_invisible_surface_means_flat_grid() {
        let mut opts = PlotOptions::square();
        opts.opacity = 0.0;
        let product = plot_over_square(|_, _| 0.0, &opts).unwrap();
        assert!(product.surface.is_none());
        assert!(product.material.is_none());
        // No push-off: both ribbons collapse onto the surface curve.
        for pair in &product.grid {
            assert_eq!(pair.top, pair.bottom);
            for p in &pair.top {
                assert_relative_eq!(p.z, 0.0, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_visible_surface_pushes_grid_off() {
        let opts = PlotOptions::square();
        let product = plot_over_square(|_, _| 0.0, &opts).unwrap();
        for pair in &product.grid {
            for (top, bottom) in pair.top.iter().zip(&pair.bottom) {
                assert_relative_eq!(top.z, 0.01, epsilon = 1e-15);
                assert_relative_eq!(bottom.z, -0.01, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_grid_disabled() {
        let mut opts = PlotOptions::square();
        opts.show_grid = false;
        let product = plot_over_square(paraboloid, &opts).unwrap();
        assert!(product.grid.is_empty());
        assert!(product.surface.is_some());
    }

    #[test]
    fn test_add_to_and_replace_in_scene() {
        let mut scene = Scene::new();
        let opts = PlotOptions::square();

        let product = plot_over_square(paraboloid, &opts).unwrap();
        product.add_to(&mut scene, "plot");
        assert_eq!(scene.meshes.len(), 1);
        assert_eq!(scene.polylines.len(), 2 * (6 + 6 + 2));

        // A slider moved: recompute and swap under the same name.
        scene.remove("plot");
        let product = plot_over_square(|x, y| x - y, &opts).unwrap();
        product.add_to(&mut scene, "plot");
        assert_eq!(scene.meshes.len(), 1);
        assert_eq!(scene.polylines.len(), 2 * (6 + 6 + 2));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let mut opts = PlotOptions::square();
        opts.opacity = 2.0;
        assert!(plot_over_square(paraboloid, &opts).is_err());
    }
}
