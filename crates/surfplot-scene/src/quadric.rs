//! The second-order model demo: a general quadric graph with one slider per
//! coefficient.

use serde::{Deserialize, Serialize};
use surfplot_core::Result;

use crate::material::SurfaceFinish;
use crate::options::PlotOptions;
use crate::plot::{plot_over_disk, plot_over_square, PlotProduct};

/// Coefficients of `f(x, y) = A + B*x + C*y + D*x*y + E*x^2 + F*y^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadricCoeffs {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl QuadricCoeffs {
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        self.a + self.b * x + self.c * y + self.d * x * y + self.e * x * x + self.f * y * y
    }
}

impl Default for QuadricCoeffs {
    /// All sliders at their demo start value.
    fn default() -> Self {
        Self {
            a: 0.5,
            b: 0.5,
            c: 0.5,
            d: 0.5,
            e: 0.5,
            f: 0.5,
        }
    }
}

/// Which parameter domain the model is plotted over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotDomain {
    Square,
    Disk,
}

/// Full, explicit state of the demo: coefficients plus display choices.
/// Every slider or menu change updates a field and calls [`Self::recompute`];
/// the caller swaps the product into the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondOrderModel {
    pub coeffs: QuadricCoeffs,
    pub domain: PlotDomain,
    pub show_grid: bool,
    /// Display mode of the shaded surface, as picked from the menu
    pub finish: SurfaceFinish,
}

impl Default for SecondOrderModel {
    fn default() -> Self {
        Self {
            coeffs: QuadricCoeffs::default(),
            domain: PlotDomain::Square,
            show_grid: true,
            finish: SurfaceFinish::Solid,
        }
    }
}

impl SecondOrderModel {
    /// Pure state-to-geometry transition.
    pub fn recompute(&self) -> Result<PlotProduct> {
        let mut opts = match self.domain {
            PlotDomain::Square => PlotOptions::square(),
            PlotDomain::Disk => PlotOptions::disk(),
        };
        opts.show_grid = self.show_grid;
        opts.opacity = self.finish.opacity();

        let coeffs = self.coeffs;
        let f = move |x: f64, y: f64| coeffs.eval(x, y);
        match self.domain {
            PlotDomain::Square => plot_over_square(f, &opts),
            PlotDomain::Disk => plot_over_disk(f, &opts),
        }
    }
}
