//! Dashboard Core
//!
//! Mode dispatch and the rendering contract. A dashboard run reads one
//! configuration, picks the view it names and drives that view against an
//! abstract surface. Surfaces that lack a target simply skip it, and data
//! errors abort the affected view without any user-visible noise.

use crate::api::AssessmentsApi;
use crate::charts::ChartSpec;
use std::str::FromStr;

pub mod insight;
pub mod views;

pub use insight::{fetch_insight_message, run_insight_fetch};

/// Which of the three views a dashboard run drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    /// Scatter of every assessment, adequacy against potential.
    Matrix,
    /// Radar profile of one selected assessment.
    Individual,
    /// Two radar profiles side by side.
    Comparison,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matrix" => Ok(ViewMode::Matrix),
            "individual" => Ok(ViewMode::Individual),
            "comparison" => Ok(ViewMode::Comparison),
            _ => Err(format!("Unknown view mode: {}", s)),
        }
    }
}

/// Everything a dashboard run needs to know.
///
/// `dimension_keys` and `dimension_labels` are parallel arrays; the run
/// draws one radar axis per label and looks scores up per key, without
/// reconciling a length mismatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardConfig {
    /// The view to drive. `None` renders nothing.
    pub mode: Option<ViewMode>,
    pub dimension_keys: Vec<String>,
    pub dimension_labels: Vec<String>,
    /// Record shown by the individual view and targeted by insight requests.
    pub selected_id: Option<String>,
    /// Left comparison slot.
    pub comparison_a: Option<String>,
    /// Right comparison slot.
    pub comparison_b: Option<String>,
}

impl DashboardConfig {
    /// Builds a configuration, enforcing the alignment invariant between
    /// dimension keys and labels. A mismatched pair is rejected here so no
    /// renderer ever sees it.
    pub fn new(
        mode: Option<ViewMode>,
        dimension_keys: Vec<String>,
        dimension_labels: Vec<String>,
        selected_id: Option<String>,
        comparison_a: Option<String>,
        comparison_b: Option<String>,
    ) -> Result<Self, String> {
        if dimension_keys.len() != dimension_labels.len() {
            return Err(format!(
                "Dimension keys and labels must align: {} keys, {} labels",
                dimension_keys.len(),
                dimension_labels.len()
            ));
        }
        Ok(Self {
            mode,
            dimension_keys,
            dimension_labels,
            selected_id,
            comparison_a,
            comparison_b,
        })
    }
}

/// Where charts and texts land on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "camelCase")]
pub enum TargetId {
    MatrixChart,
    IndividualChart,
    ComparisonChartA,
    ComparisonChartB,
    GenerateInsight,
    InsightOutput,
}

/// A place charts can be drawn on.
///
/// The terminal view state and the headless printer both implement this.
/// Which targets exist depends on the surface; renderers probe before they
/// do any work, so a surface without some target costs nothing.
pub trait ChartSurface {
    /// Whether this surface can show the given target.
    fn has_target(&self, target: TargetId) -> bool;

    /// Put a chart on a target, replacing whatever was there.
    fn bind_chart(&mut self, target: TargetId, chart: ChartSpec);

    /// Put plain text on a target, replacing whatever was there.
    fn set_text(&mut self, target: TargetId, text: &str);
}

/// Runs one dashboard pass: dispatches on the configured mode and drives
/// the matching view. Without a mode this does nothing, and view failures
/// stay off the surface.
pub async fn run_dashboard(
    config: &DashboardConfig,
    api: &dyn AssessmentsApi,
    surface: &mut (dyn ChartSurface + Send),
) {
    match config.mode {
        Some(ViewMode::Matrix) => {
            if let Err(error) = views::render_matrix(api, surface).await {
                log::debug!("Matrix view aborted: {}", error);
            }
        }
        Some(ViewMode::Individual) => {
            if let Err(error) = views::render_individual(config, api, surface).await {
                log::debug!("Individual view aborted: {}", error);
            }
        }
        Some(ViewMode::Comparison) => {
            views::render_comparison(config, api, surface).await;
        }
        None => {
            log::debug!("No view mode configured, nothing to render");
        }
    }
}
