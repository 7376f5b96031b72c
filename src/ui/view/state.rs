//! View state management
//!
//! Holds everything the renderer needs for the active view: the bound
//! charts and texts, the activity strip and a little animation state. The
//! state is itself the surface background tasks render onto.

use crate::charts::ChartSpec;
use crate::consts::ui_consts::MAX_ACTIVITY_LOGS;
use crate::dashboard::{ChartSurface, DashboardConfig, TargetId, ViewMode};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Targets the terminal offers for a given view mode. Mirrors which
/// elements the matching page would carry.
pub fn targets_for_mode(mode: Option<ViewMode>) -> &'static [TargetId] {
    match mode {
        Some(ViewMode::Matrix) => &[TargetId::MatrixChart],
        Some(ViewMode::Individual) => &[
            TargetId::IndividualChart,
            TargetId::GenerateInsight,
            TargetId::InsightOutput,
        ],
        Some(ViewMode::Comparison) => &[TargetId::ComparisonChartA, TargetId::ComparisonChartB],
        None => &[],
    }
}

#[derive(Debug)]
pub struct ViewState {
    /// The configuration this view was started with.
    pub config: DashboardConfig,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Charts bound to this surface, one per target.
    charts: HashMap<TargetId, ChartSpec>,
    /// Texts bound to this surface, one per target.
    texts: HashMap<TargetId, String>,
    /// Activity logs for display (last 50 events)
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether an insight request is currently in flight.
    pub insight_generating: bool,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl ViewState {
    pub fn new(
        config: DashboardConfig,
        environment: Environment,
        start_time: Instant,
        with_background_color: bool,
    ) -> Self {
        Self {
            config,
            environment,
            start_time,
            charts: HashMap::new(),
            texts: HashMap::new(),
            activity_logs: VecDeque::new(),
            insight_generating: false,
            with_background_color,
            tick: 0,
        }
    }

    /// Advance animation state by one frame.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn chart(&self, target: TargetId) -> Option<&ChartSpec> {
        self.charts.get(&target)
    }

    pub fn text(&self, target: TargetId) -> Option<&str> {
        self.texts.get(&target).map(String::as_str)
    }

    /// Name of the selected person, once their profile chart is in.
    pub fn selected_name(&self) -> Option<&str> {
        match self.chart(TargetId::IndividualChart) {
            Some(ChartSpec::Radar(chart)) => chart
                .data
                .datasets
                .first()
                .map(|series| series.label.as_str()),
            _ => None,
        }
    }

    /// Whether this view supports triggering insight generation.
    pub fn can_generate_insight(&self) -> bool {
        self.has_target(TargetId::GenerateInsight)
            && self.has_target(TargetId::InsightOutput)
            && self.config.selected_id.is_some()
    }

    /// Add an event to activity logs with size limit
    pub fn add_event(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

impl ChartSurface for ViewState {
    fn has_target(&self, target: TargetId) -> bool {
        targets_for_mode(self.config.mode).contains(&target)
    }

    fn bind_chart(&mut self, target: TargetId, chart: ChartSpec) {
        self.charts.insert(target, chart);
    }

    fn set_text(&mut self, target: TargetId, text: &str) {
        self.texts.insert(target, text.to_string());
    }
}
