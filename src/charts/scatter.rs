//! Matrix scatter construction
//!
//! The overview chart: every assessment as one point, adequacy on the
//! horizontal axis and potential on the vertical one.

use crate::assessment::Assessment;
use crate::charts::{AxisScale, Rgba};
use serde::Serialize;

/// Point color of the matrix scatter.
pub const SCATTER_FILL: Rgba = Rgba::new(25, 135, 84, 0.7);

/// Name of the single scatter series.
pub const SCATTER_SERIES_NAME: &str = "Procjene";

/// One plotted assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Hover text carrying the person and category behind the point.
    pub label: String,
    /// Category of the underlying assessment, for summaries.
    pub category: String,
}

/// The scatter series with its point color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSeries {
    pub label: String,
    pub data: Vec<ScatterPoint>,
    pub background_color: Rgba,
}

/// A scatter chart with both axis scales.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterChart {
    pub series: ScatterSeries,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
}

/// Hover text for one assessment, mirroring the web frontend wording.
pub fn tooltip_label(assessment: &Assessment) -> String {
    format!(
        "{} (Adekv.: {}, Potenc.: {}) - {}",
        assessment.full_name, assessment.adequacy, assessment.potential, assessment.category
    )
}

/// Builds the adequacy/potential matrix over all given assessments,
/// in their given order.
pub fn build_matrix_chart(assessments: &[Assessment]) -> ScatterChart {
    let data = assessments
        .iter()
        .map(|assessment| ScatterPoint {
            x: assessment.adequacy,
            y: assessment.potential,
            label: tooltip_label(assessment),
            category: assessment.category.clone(),
        })
        .collect();

    ScatterChart {
        series: ScatterSeries {
            label: SCATTER_SERIES_NAME.to_string(),
            data,
            background_color: SCATTER_FILL,
        },
        x_scale: AxisScale::score_scale().with_title("Adekvatnost"),
        y_scale: AxisScale::score_scale().with_title("Potencijal"),
    }
}
