//! The three dashboard views
//!
//! Each renderer probes the surface for its target before doing any network
//! work, fetches what it needs and binds exactly one chart per target.
//! Failures bubble up as errors for the dispatcher to log; nothing is ever
//! drawn for a view that could not complete.

use crate::api::AssessmentsApi;
use crate::api::error::ApiError;
use crate::charts::{ChartSpec, build_individual_chart, build_matrix_chart};
use crate::dashboard::{ChartSurface, DashboardConfig, TargetId};

/// Scatter of every assessment. Skips silently when the surface has no
/// matrix target.
pub async fn render_matrix(
    api: &dyn AssessmentsApi,
    surface: &mut (dyn ChartSurface + Send),
) -> Result<(), ApiError> {
    if !surface.has_target(TargetId::MatrixChart) {
        return Ok(());
    }

    let assessments = api.get_assessments().await?;
    let chart = build_matrix_chart(&assessments);
    surface.bind_chart(TargetId::MatrixChart, ChartSpec::Scatter(chart));
    Ok(())
}

/// Radar profile of the selected assessment. Needs both the target and a
/// selection; without either it does nothing, including no fetch.
pub async fn render_individual(
    config: &DashboardConfig,
    api: &dyn AssessmentsApi,
    surface: &mut (dyn ChartSurface + Send),
) -> Result<(), ApiError> {
    if !surface.has_target(TargetId::IndividualChart) {
        return Ok(());
    }
    let Some(id) = config.selected_id.as_deref() else {
        return Ok(());
    };

    let assessment = api.get_assessment(id).await?;
    let chart = build_individual_chart(
        &config.dimension_labels,
        &config.dimension_keys,
        &assessment,
    );
    surface.bind_chart(TargetId::IndividualChart, ChartSpec::Radar(chart));
    Ok(())
}

/// Both comparison slots, left then right. The slots are independent: an
/// empty or failing slot leaves the other one alone.
pub async fn render_comparison(
    config: &DashboardConfig,
    api: &dyn AssessmentsApi,
    surface: &mut (dyn ChartSurface + Send),
) {
    let slots = [
        (config.comparison_a.as_deref(), TargetId::ComparisonChartA),
        (config.comparison_b.as_deref(), TargetId::ComparisonChartB),
    ];

    for (id, target) in slots {
        if let Err(error) = render_comparison_slot(config, id, target, api, surface).await {
            log::debug!("Comparison slot {} aborted: {}", target, error);
        }
    }
}

async fn render_comparison_slot(
    config: &DashboardConfig,
    id: Option<&str>,
    target: TargetId,
    api: &dyn AssessmentsApi,
    surface: &mut (dyn ChartSurface + Send),
) -> Result<(), ApiError> {
    if !surface.has_target(target) {
        return Ok(());
    }
    let Some(id) = id else {
        return Ok(());
    };

    let assessment = api.get_assessment(id).await?;
    let chart = build_individual_chart(
        &config.dimension_labels,
        &config.dimension_keys,
        &assessment,
    )
    .without_legend();
    surface.bind_chart(target, ChartSpec::Radar(chart));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAssessmentsApi;
    use crate::assessment::Assessment;
    use crate::dashboard::testing::RecordingSurface;
    use mockall::Sequence;
    use mockall::predicate::eq;
    use std::collections::HashMap;

    fn assessment(id: &str, name: &str) -> Assessment {
        Assessment {
            id: id.to_string(),
            full_name: name.to_string(),
            dimensions: HashMap::from([("A".to_string(), 4.0), ("B".to_string(), 2.0)]),
            adequacy: 3.0,
            potential: 3.5,
            category: "Adekvatan".to_string(),
            assessed_by: String::new(),
            position: String::new(),
            management_level: String::new(),
        }
    }

    fn config_with_keys(mode: crate::dashboard::ViewMode) -> DashboardConfig {
        DashboardConfig {
            mode: Some(mode),
            dimension_keys: vec!["A".to_string(), "B".to_string()],
            dimension_labels: vec!["Prva".to_string(), "Druga".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    // Without the matrix target there is no fetch at all.
    async fn test_matrix_without_target_skips_fetch() {
        let mut api = MockAssessmentsApi::new();
        api.expect_get_assessments().never();
        let mut surface = RecordingSurface::with_targets(&[]);

        let result = render_matrix(&api, &mut surface).await;

        assert!(result.is_ok());
        assert!(surface.charts.is_empty());
    }

    #[tokio::test]
    async fn test_matrix_failure_leaves_surface_untouched() {
        let mut api = MockAssessmentsApi::new();
        api.expect_get_assessments().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: None,
            })
        });
        let mut surface = RecordingSurface::with_targets(&[TargetId::MatrixChart]);

        let result = render_matrix(&api, &mut surface).await;

        assert!(result.is_err());
        assert!(surface.charts.is_empty());
        assert!(surface.texts.is_empty());
    }

    #[tokio::test]
    async fn test_matrix_plots_every_assessment_in_order() {
        let mut api = MockAssessmentsApi::new();
        api.expect_get_assessments()
            .returning(|| Ok(vec![assessment("1", "Ana"), assessment("2", "Pero")]));
        let mut surface = RecordingSurface::with_targets(&[TargetId::MatrixChart]);

        render_matrix(&api, &mut surface).await.unwrap();

        let Some(ChartSpec::Scatter(chart)) = surface.chart_for(TargetId::MatrixChart) else {
            panic!("expected a scatter chart");
        };
        assert_eq!(chart.series.data.len(), 2);
        assert!(chart.series.data[0].label.starts_with("Ana"));
        assert!(chart.series.data[1].label.starts_with("Pero"));
    }

    #[tokio::test]
    // No selection means no fetch, even with the target present.
    async fn test_individual_without_selection_skips_fetch() {
        let mut api = MockAssessmentsApi::new();
        api.expect_get_assessment().never();
        let mut surface = RecordingSurface::with_targets(&[TargetId::IndividualChart]);
        let config = config_with_keys(crate::dashboard::ViewMode::Individual);

        let result = render_individual(&config, &api, &mut surface).await;

        assert!(result.is_ok());
        assert!(surface.charts.is_empty());
    }

    #[tokio::test]
    async fn test_individual_binds_named_radar() {
        let mut api = MockAssessmentsApi::new();
        api.expect_get_assessment()
            .with(eq("7f0c"))
            .returning(|_| Ok(assessment("7f0c", "Iva Ivić")));
        let mut surface = RecordingSurface::with_targets(&[TargetId::IndividualChart]);
        let mut config = config_with_keys(crate::dashboard::ViewMode::Individual);
        config.selected_id = Some("7f0c".to_string());

        render_individual(&config, &api, &mut surface).await.unwrap();

        let Some(ChartSpec::Radar(chart)) = surface.chart_for(TargetId::IndividualChart) else {
            panic!("expected a radar chart");
        };
        assert!(chart.legend);
        assert_eq!(chart.data.datasets[0].label, "Iva Ivić");
        assert_eq!(chart.data.datasets[0].data, vec![Some(4.0), Some(2.0)]);
        assert_eq!(chart.data.labels, vec!["Prva", "Druga"]);
    }

    #[tokio::test]
    async fn test_individual_missing_record_binds_nothing() {
        let mut api = MockAssessmentsApi::new();
        api.expect_get_assessment().returning(|_| {
            Err(ApiError::Http {
                status: 404,
                message: Some("Procjena nije pronađena.".to_string()),
            })
        });
        let mut surface = RecordingSurface::with_targets(&[TargetId::IndividualChart]);
        let mut config = config_with_keys(crate::dashboard::ViewMode::Individual);
        config.selected_id = Some("missing".to_string());

        let result = render_individual(&config, &api, &mut surface).await;

        assert!(result.is_err());
        assert!(surface.charts.is_empty());
    }

    #[tokio::test]
    // Slot A is fetched before slot B, and each lands on its own target.
    async fn test_comparison_fills_both_slots_in_order() {
        let mut api = MockAssessmentsApi::new();
        let mut sequence = Sequence::new();
        api.expect_get_assessment()
            .with(eq("a1"))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(assessment("a1", "Ana")));
        api.expect_get_assessment()
            .with(eq("b2"))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(assessment("b2", "Pero")));
        let mut surface = RecordingSurface::with_targets(&[
            TargetId::ComparisonChartA,
            TargetId::ComparisonChartB,
        ]);
        let mut config = config_with_keys(crate::dashboard::ViewMode::Comparison);
        config.comparison_a = Some("a1".to_string());
        config.comparison_b = Some("b2".to_string());

        render_comparison(&config, &api, &mut surface).await;

        let Some(ChartSpec::Radar(left)) = surface.chart_for(TargetId::ComparisonChartA) else {
            panic!("expected a radar chart in slot A");
        };
        let Some(ChartSpec::Radar(right)) = surface.chart_for(TargetId::ComparisonChartB) else {
            panic!("expected a radar chart in slot B");
        };
        assert_eq!(left.data.datasets[0].label, "Ana");
        assert_eq!(right.data.datasets[0].label, "Pero");
        // Comparison radars keep their legends off; the panels name them.
        assert!(!left.legend);
        assert!(!right.legend);
    }

    #[tokio::test]
    // An empty slot stays empty without blocking the other one.
    async fn test_comparison_slot_without_selection_is_skipped() {
        let mut api = MockAssessmentsApi::new();
        api.expect_get_assessment()
            .with(eq("b2"))
            .times(1)
            .returning(|_| Ok(assessment("b2", "Pero")));
        let mut surface = RecordingSurface::with_targets(&[
            TargetId::ComparisonChartA,
            TargetId::ComparisonChartB,
        ]);
        let mut config = config_with_keys(crate::dashboard::ViewMode::Comparison);
        config.comparison_b = Some("b2".to_string());

        render_comparison(&config, &api, &mut surface).await;

        assert!(surface.chart_for(TargetId::ComparisonChartA).is_none());
        assert!(surface.chart_for(TargetId::ComparisonChartB).is_some());
    }

    #[tokio::test]
    // A failing slot does not keep the other slot from rendering.
    async fn test_comparison_slot_failure_is_isolated() {
        let mut api = MockAssessmentsApi::new();
        api.expect_get_assessment().with(eq("a1")).returning(|_| {
            Err(ApiError::Http {
                status: 404,
                message: None,
            })
        });
        api.expect_get_assessment()
            .with(eq("b2"))
            .returning(|_| Ok(assessment("b2", "Pero")));
        let mut surface = RecordingSurface::with_targets(&[
            TargetId::ComparisonChartA,
            TargetId::ComparisonChartB,
        ]);
        let mut config = config_with_keys(crate::dashboard::ViewMode::Comparison);
        config.comparison_a = Some("a1".to_string());
        config.comparison_b = Some("b2".to_string());

        render_comparison(&config, &api, &mut surface).await;

        assert!(surface.chart_for(TargetId::ComparisonChartA).is_none());
        assert!(surface.chart_for(TargetId::ComparisonChartB).is_some());
    }

    #[tokio::test]
    // A surface showing only slot B never asks for slot A's record.
    async fn test_comparison_respects_missing_targets() {
        let mut api = MockAssessmentsApi::new();
        api.expect_get_assessment()
            .with(eq("b2"))
            .times(1)
            .returning(|_| Ok(assessment("b2", "Pero")));
        let mut surface = RecordingSurface::with_targets(&[TargetId::ComparisonChartB]);
        let mut config = config_with_keys(crate::dashboard::ViewMode::Comparison);
        config.comparison_a = Some("a1".to_string());
        config.comparison_b = Some("b2".to_string());

        render_comparison(&config, &api, &mut surface).await;

        assert!(surface.chart_for(TargetId::ComparisonChartA).is_none());
        assert!(surface.chart_for(TargetId::ComparisonChartB).is_some());
    }
}
