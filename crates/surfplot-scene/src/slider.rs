//! Plain-data model of the slider UI collaborator.
//!
//! The UI fires a continuous stream of drag events; applying one updates the
//! slider's value and reports whether the change is mid-drag (interactive)
//! or final, so the caller can choose between a full and a lightweight
//! rebuild (e.g. showing a translucent helper plane only while dragging).

use serde::{Deserialize, Serialize};
use surfplot_core::{PlotError, Result};

/// A slider notification, each carrying the current value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    DragStart(f64),
    DragUpdate(f64),
    DragEnd(f64),
}

/// Whether an update is still in flight or settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPhase {
    Interactive,
    Final,
}

/// A numeric control with a value and a range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slider {
    pub label: String,
    value: f64,
    pub min: f64,
    pub max: f64,
}

impl Slider {
    pub fn new(label: &str, start: f64, min: f64, max: f64) -> Result<Self> {
        if min >= max {
            return Err(PlotError::InvalidDomain(format!(
                "slider range [{min}, {max}] is empty or reversed"
            )));
        }
        Ok(Self {
            label: label.to_string(),
            value: start.clamp(min, max),
            min,
            max,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Apply a drag event, clamping the value into range.
    pub fn apply(&mut self, event: SliderEvent) -> SliderPhase {
        let (value, phase) = match event {
            SliderEvent::DragStart(v) | SliderEvent::DragUpdate(v) => {
                (v, SliderPhase::Interactive)
            }
            SliderEvent::DragEnd(v) => (v, SliderPhase::Final),
        };
        self.value = value.clamp(self.min, self.max);
        phase
    }

    /// The label shown next to the control, value to one decimal place.
    pub fn label_text(&self) -> String {
        format!("{}{:.1}", self.label, self.value)
    }
}
