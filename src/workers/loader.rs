//! View loading and insight generation tasks

use super::{UiUpdate, UpdateSender};
use crate::api::{ApiClient, AssessmentsApi};
use crate::charts::ChartSpec;
use crate::consts::ui_consts::INSIGHT_PENDING;
use crate::dashboard::{ChartSurface, DashboardConfig, TargetId, run_dashboard};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use tokio::task::JoinHandle;

/// Surface that forwards every binding over the update channel.
///
/// Lets background tasks drive the regular dashboard entry points while the
/// UI loop applies the results on its own side.
pub struct ChannelSurface {
    targets: Vec<TargetId>,
    sender: UpdateSender,
    bound: usize,
}

impl ChannelSurface {
    pub fn new(targets: Vec<TargetId>, sender: UpdateSender) -> Self {
        Self {
            targets,
            sender,
            bound: 0,
        }
    }

    /// How many charts have been bound through this surface.
    pub fn bound_count(&self) -> usize {
        self.bound
    }
}

impl ChartSurface for ChannelSurface {
    fn has_target(&self, target: TargetId) -> bool {
        self.targets.contains(&target)
    }

    fn bind_chart(&mut self, target: TargetId, chart: ChartSpec) {
        self.bound += 1;
        // The queue outsizes anything one run can produce; a full queue
        // means the UI loop is gone and dropping is fine.
        let _ = self.sender.try_send(UiUpdate::ChartBound(target, chart));
    }

    fn set_text(&mut self, target: TargetId, text: &str) {
        let _ = self
            .sender
            .try_send(UiUpdate::TextSet(target, text.to_string()));
    }
}

/// Spawns a task that loads the configured view and streams the resulting
/// charts back to the UI.
pub fn start_view_loader(
    config: DashboardConfig,
    api: ApiClient,
    targets: Vec<TargetId>,
    sender: UpdateSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let _ = sender
            .send(UiUpdate::Activity(Event::view_loader_with_level(
                "Dohvaćam podatke procjena...".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            )))
            .await;

        let mut surface = ChannelSurface::new(targets, sender.clone());
        run_dashboard(&config, &api, &mut surface).await;

        let event = if surface.bound_count() > 0 {
            Event::view_loader_with_level(
                format!("Prikaz je spreman ({} grafikona)", surface.bound_count()),
                EventType::Success,
                LogLevel::Info,
            )
        } else {
            // Nothing was drawn: aborted silently or an empty surface.
            Event::view_loader_with_level(
                "Nema podataka za prikaz".to_string(),
                EventType::Waiting,
                LogLevel::Debug,
            )
        };
        let _ = sender.send(UiUpdate::Activity(event)).await;
    })
}

/// Spawns a task that runs one insight request and reports the outcome.
///
/// Mirrors the plain insight flow but narrates it on the activity strip,
/// which only a background task can do.
pub fn start_insight_worker(
    config: DashboardConfig,
    api: ApiClient,
    targets: Vec<TargetId>,
    sender: UpdateSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut surface = ChannelSurface::new(targets, sender.clone());
        if !surface.has_target(TargetId::GenerateInsight)
            || !surface.has_target(TargetId::InsightOutput)
        {
            return;
        }
        let Some(id) = config.selected_id.clone() else {
            return;
        };

        let _ = sender
            .send(UiUpdate::Activity(Event::insight_fetcher_with_level(
                "Generiranje uvida je zatraženo".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            )))
            .await;
        surface.set_text(TargetId::InsightOutput, INSIGHT_PENDING);

        let event = match api.get_insight(&id).await {
            Ok(insight) => {
                surface.set_text(TargetId::InsightOutput, &insight.content);
                Event::insight_fetcher_with_level(
                    "Uvid je generiran".to_string(),
                    EventType::Success,
                    LogLevel::Info,
                )
            }
            Err(error) => {
                let level = ErrorClassifier::new().classify_fetch_error(&error);
                surface.set_text(TargetId::InsightOutput, &error.user_message());
                Event::insight_fetcher_with_level(
                    format!("Uvid nije dostupan: {}", error),
                    EventType::Error,
                    level,
                )
            }
        };
        let _ = sender.send(UiUpdate::Activity(event)).await;
    })
}
