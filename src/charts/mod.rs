//! Chart Contract
//!
//! Typed chart descriptions handed to whatever surface draws them. Building
//! a chart is pure data work here; rendering happens elsewhere, so the same
//! description can feed the terminal UI or be printed as JSON.

use ratatui::style::Color;
use serde::{Serialize, Serializer};

pub mod radar;
pub mod scatter;

pub use radar::{RadarChart, RadarDataset, RadarSeries, build_individual_chart, build_radar_dataset};
pub use scatter::{ScatterChart, ScatterPoint, ScatterSeries, build_matrix_chart, tooltip_label};

/// A fully described chart, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartSpec {
    Radar(RadarChart),
    Scatter(ScatterChart),
}

/// An RGBA color carried by chart series.
///
/// Serializes to the CSS notation the web frontend uses, and converts to a
/// terminal color for the TUI renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, `rgb(...)` when fully opaque.
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    /// Nearest terminal color. Alpha is dropped; terminals have no blending.
    pub fn terminal_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

/// Suggested-range axis scale.
///
/// The suggested bounds are a floor, not a clamp. Data inside the range
/// leaves the bounds untouched; data outside widens them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub suggested_min: f64,
    pub suggested_max: f64,
    pub tick_step: f64,
}

impl AxisScale {
    /// The 1-5 score scale every assessment axis starts from.
    pub fn score_scale() -> Self {
        use crate::consts::ui_consts::{SCORE_AXIS_MAX, SCORE_AXIS_MIN, SCORE_TICK_STEP};
        Self {
            title: None,
            suggested_min: SCORE_AXIS_MIN,
            suggested_max: SCORE_AXIS_MAX,
            tick_step: SCORE_TICK_STEP,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Final bounds for a set of values: widen-only around the suggestion.
    pub fn bounds_for(&self, values: impl IntoIterator<Item = f64>) -> (f64, f64) {
        let mut min = self.suggested_min;
        let mut max = self.suggested_max;
        for value in values {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
        (min, max)
    }
}
