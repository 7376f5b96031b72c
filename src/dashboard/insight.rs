//! Insight generation flow
//!
//! The one place where errors become user-visible text. The flow posts a
//! pending message, asks the backend for an insight and replaces the
//! message with either the generated content or a Croatian error text.

use crate::api::AssessmentsApi;
use crate::consts::ui_consts::INSIGHT_PENDING;
use crate::dashboard::{ChartSurface, DashboardConfig, TargetId};

/// Resolves one insight request to the text the user should see.
///
/// Server-written error messages are passed through; everything else maps
/// to one of the generic failure texts.
pub async fn fetch_insight_message(api: &dyn AssessmentsApi, id: &str) -> String {
    match api.get_insight(id).await {
        Ok(insight) => insight.content,
        Err(error) => {
            log::debug!("Insight request for {} failed: {}", id, error);
            error.user_message()
        }
    }
}

/// Drives a full insight request against a surface.
///
/// Needs the trigger, the output target and a selected record; missing any
/// of the three, the flow never starts and the output keeps its previous
/// content. Otherwise the output shows the pending text until the request
/// resolves.
pub async fn run_insight_fetch(
    config: &DashboardConfig,
    api: &dyn AssessmentsApi,
    surface: &mut (dyn ChartSurface + Send),
) {
    if !surface.has_target(TargetId::GenerateInsight)
        || !surface.has_target(TargetId::InsightOutput)
    {
        return;
    }
    let Some(id) = config.selected_id.as_deref() else {
        return;
    };

    surface.set_text(TargetId::InsightOutput, INSIGHT_PENDING);
    let message = fetch_insight_message(api, id).await;
    surface.set_text(TargetId::InsightOutput, &message);
}
