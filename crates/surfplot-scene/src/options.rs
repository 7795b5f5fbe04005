//! Plot configuration, validated once at construction.

use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};
use surfplot_core::{PlotError, Result, Validate};

/// All knobs of a function plot, with named fields instead of an or-default
/// options bag. Build one from [`PlotOptions::square`] or
/// [`PlotOptions::disk`] and adjust fields before handing it to the plot
/// functions, which validate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Tessellation divisions per parameter direction
    pub samples: usize,
    /// Gridline intervals along the s-direction (curves of constant t)
    pub s_grid: usize,
    /// Gridline intervals along the t-direction (curves of constant s)
    pub t_grid: usize,
    /// Half-size of the square domain
    pub square_size: f64,
    /// Radius of the disk domain
    pub disk_radius: f64,
    /// Push-off distance for grid ribbons (applied only when the shaded
    /// surface is drawn)
    pub grid_push_off: f64,
    /// Whether to build the grid overlay
    pub show_grid: bool,
    /// Surface opacity; 0 disables the shaded surface entirely
    pub opacity: f64,
}

impl PlotOptions {
    /// Defaults for a square-domain plot.
    pub fn square() -> Self {
        Self {
            samples: 40,
            s_grid: 6,
            t_grid: 6,
            square_size: 1.0,
            disk_radius: SQRT_2,
            grid_push_off: 0.01,
            show_grid: true,
            opacity: 1.0,
        }
    }

    /// Defaults for a disk-domain plot: denser sampling (the polar map
    /// bends gridlines) and more radial spokes.
    pub fn disk() -> Self {
        Self {
            samples: 100,
            s_grid: 12,
            t_grid: 6,
            ..Self::square()
        }
    }
}

impl Validate for PlotOptions {
    fn validate(&self) -> Result<()> {
        if self.samples < 1 {
            return Err(PlotError::InvalidOptions(
                "samples must be at least 1".into(),
            ));
        }
        if self.s_grid < 1 || self.t_grid < 1 {
            return Err(PlotError::InvalidOptions(format!(
                "gridline counts must be at least 1, got s_grid={}, t_grid={}",
                self.s_grid, self.t_grid
            )));
        }
        if self.square_size <= 0.0 || self.disk_radius <= 0.0 {
            return Err(PlotError::InvalidOptions(format!(
                "domain sizes must be positive, got square_size={}, disk_radius={}",
                self.square_size, self.disk_radius
            )));
        }
        if self.grid_push_off < 0.0 {
            return Err(PlotError::InvalidOptions(format!(
                "grid push-off must be non-negative, got {}",
                self.grid_push_off
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(PlotError::InvalidOptions(format!(
                "opacity must be in [0, 1], got {}",
                self.opacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PlotOptions::square().validate().is_ok());
        assert!(PlotOptions::disk().validate().is_ok());
    }

    #[test]
    fn test_disk_defaults() {
        let opts = PlotOptions::disk();
        assert_eq!(opts.samples, 100);
        assert_eq!(opts.s_grid, 12);
        assert_eq!(opts.t_grid, 6);
        assert!((opts.disk_radius - SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_bad_fields() {
        let mut opts = PlotOptions::square();
        opts.samples = 0;
        assert!(opts.validate().is_err());

        let mut opts = PlotOptions::square();
        opts.grid_push_off = -0.01;
        assert!(opts.validate().is_err());

        let mut opts = PlotOptions::square();
        opts.opacity = 1.5;
        assert!(opts.validate().is_err());

        let mut opts = PlotOptions::square();
        opts.t_grid = 0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_options_from_json() {
        let opts: PlotOptions = serde_json::from_str(
            r#"{
                "samples": 60,
                "s_grid": 8,
                "t_grid": 4,
                "square_size": 1.5,
                "disk_radius": 1.0,
                "grid_push_off": 0.02,
                "show_grid": false,
                "opacity": 0.3
            }"#,
        )
        .unwrap();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.samples, 60);
        assert!(!opts.show_grid);
    }
}
