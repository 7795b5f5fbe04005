//! Canonical-frame construction of a single labeled axis.

use serde::{Deserialize, Serialize};
use surfplot_core::{PlotError, Result, Validate};
use surfplot_math::Point3;

/// Sizing of ticks and labels on an axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AxisStyle {
    /// Length of a tick mark, dropped perpendicular to the axis
    pub tick_len: f64,
    /// Offset of a tick's numeric label on the other side of the axis
    pub tick_label_sep: f64,
    /// Offset of the axis-name label from the segment midpoint
    pub axis_label_sep: f64,
    /// Line width handed to the renderer
    pub line_width: f64,
    /// Font size of the axis-name label; tick labels use 0.75x this
    pub font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            tick_len: 0.12,
            tick_label_sep: 0.25,
            axis_label_sep: 0.7,
            line_width: 0.5,
            font_size: 20.0,
        }
    }
}

impl Validate for AxisStyle {
    fn validate(&self) -> Result<()> {
        if self.tick_len <= 0.0 || self.line_width <= 0.0 || self.font_size <= 0.0 {
            return Err(PlotError::InvalidOptions(format!(
                "axis style lengths must be positive: {self:?}"
            )));
        }
        Ok(())
    }
}

/// A billboard text label, positioned by the caller's text collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub position: Point3,
    pub font_size: f64,
    pub italic: bool,
}

/// One tick: a short perpendicular mark plus its numeric label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickMark {
    pub value: f64,
    pub segment: [Point3; 2],
    pub label: TextLabel,
}

/// A labeled axis in its canonical frame: the segment runs along +x, ticks
/// drop in -y, labels sit in +y. [`crate::layout`] moves it into place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axis {
    pub segment: [Point3; 2],
    pub ticks: Vec<TickMark>,
    pub name: TextLabel,
    pub line_width: f64,
}

/// Build an axis from `min` to `max` with the given tick values, in the
/// canonical frame.
pub fn build_axis(
    min: f64,
    max: f64,
    name: &str,
    ticks: &[f64],
    style: &AxisStyle,
) -> Result<Axis> {
    style.validate()?;
    if min >= max {
        return Err(PlotError::InvalidDomain(format!(
            "axis range [{min}, {max}] is empty or reversed"
        )));
    }

    let tick_marks = ticks
        .iter()
        .map(|&v| TickMark {
            value: v,
            segment: [
                Point3::new(v, 0.0, 0.0),
                Point3::new(v, -style.tick_len, 0.0),
            ],
            label: TextLabel {
                text: format_tick(v),
                position: Point3::new(v, style.tick_label_sep, 0.0),
                font_size: 0.75 * style.font_size,
                italic: false,
            },
        })
        .collect();

    Ok(Axis {
        segment: [Point3::new(min, 0.0, 0.0), Point3::new(max, 0.0, 0.0)],
        ticks: tick_marks,
        name: TextLabel {
            text: name.to_string(),
            position: Point3::new((min + max) / 2.0, style.axis_label_sep, 0.0),
            font_size: style.font_size,
            italic: true,
        },
        line_width: style.line_width,
    })
}

/// Format a tick value the way the labels read on screen: integers without
/// a decimal point, everything else to one decimal place.
fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}
