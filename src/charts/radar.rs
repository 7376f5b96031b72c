//! Radar chart construction
//!
//! Builds the per-person dimension profile charts. The dataset builder is
//! pure: given the same labels, keys and scores it always produces the same
//! dataset, and it never touches its inputs.

use crate::assessment::Assessment;
use crate::charts::{AxisScale, Rgba};
use serde::Serialize;
use std::collections::HashMap;

/// Fill color of the radar polygon.
pub const RADAR_FILL: Rgba = Rgba::new(13, 110, 253, 0.2);

/// Border and point color of the radar polygon.
pub const RADAR_BORDER: Rgba = Rgba::new(13, 110, 253, 1.0);

/// One named series on a radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSeries {
    pub label: String,
    /// Scores in axis order. A dimension the record does not carry is `None`
    /// and leaves a gap on that spoke.
    pub data: Vec<Option<f64>>,
    pub fill: bool,
    pub background_color: Rgba,
    pub border_color: Rgba,
    pub point_background_color: Rgba,
}

/// Axis labels plus the series drawn over them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarDataset {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarSeries>,
}

/// A radar chart with its radial scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarChart {
    pub data: RadarDataset,
    pub scale: AxisScale,
    /// Whether the series name is shown next to the chart. The comparison
    /// view hides it; its panel titles already name the slots.
    pub legend: bool,
}

impl RadarChart {
    pub fn without_legend(mut self) -> Self {
        self.legend = false;
        self
    }

    /// All non-missing scores across every series, for axis sizing.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data
            .datasets
            .iter()
            .flat_map(|series| series.data.iter().flatten().copied())
    }
}

/// Builds a single-series radar dataset.
///
/// `keys` decides the axis order; `labels` must run parallel to it. Scores
/// are looked up per key, so records with missing or extra dimensions are
/// fine.
pub fn build_radar_dataset(
    labels: &[String],
    keys: &[String],
    scores: &HashMap<String, f64>,
    series_name: &str,
) -> RadarDataset {
    let data = keys.iter().map(|key| scores.get(key).copied()).collect();

    RadarDataset {
        labels: labels.to_vec(),
        datasets: vec![RadarSeries {
            label: series_name.to_string(),
            data,
            fill: true,
            background_color: RADAR_FILL,
            border_color: RADAR_BORDER,
            point_background_color: RADAR_BORDER,
        }],
    }
}

/// The radar chart for one person, labeled with their name.
pub fn build_individual_chart(
    labels: &[String],
    keys: &[String],
    assessment: &Assessment,
) -> RadarChart {
    RadarChart {
        data: build_radar_dataset(labels, keys, &assessment.dimensions, &assessment.full_name),
        scale: AxisScale::score_scale(),
        legend: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_dimension_keys, default_dimension_labels};

    fn scores(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    fn person(dimensions: HashMap<String, f64>) -> Assessment {
        Assessment {
            id: "x1".to_string(),
            full_name: "Iva Ivić".to_string(),
            dimensions,
            adequacy: 3.0,
            potential: 3.0,
            category: "Adekvatan".to_string(),
            assessed_by: String::new(),
            position: String::new(),
            management_level: String::new(),
        }
    }

    #[test]
    // One data point per key, in key order, regardless of map iteration order.
    fn test_data_follows_key_order() {
        let keys: Vec<String> = ["C", "A", "B"].iter().map(|k| k.to_string()).collect();
        let labels: Vec<String> = ["c", "a", "b"].iter().map(|k| k.to_string()).collect();
        let scores = scores(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);

        let dataset = build_radar_dataset(&labels, &keys, &scores, "Test");
        assert_eq!(dataset.datasets[0].data, vec![Some(3.0), Some(1.0), Some(2.0)]);
        assert_eq!(dataset.labels, labels);
    }

    #[test]
    // A key without a score leaves a gap rather than inventing a value.
    fn test_missing_key_yields_none() {
        let keys: Vec<String> = ["A", "Z"].iter().map(|k| k.to_string()).collect();
        let labels = keys.clone();
        let scores = scores(&[("A", 4.0)]);

        let dataset = build_radar_dataset(&labels, &keys, &scores, "Test");
        assert_eq!(dataset.datasets[0].data, vec![Some(4.0), None]);
    }

    #[test]
    fn test_builder_is_deterministic() {
        let keys = default_dimension_keys();
        let labels = default_dimension_labels();
        let scores = scores(&[("A", 4.0), ("E", 2.5)]);

        let first = build_radar_dataset(&labels, &keys, &scores, "Test");
        let second = build_radar_dataset(&labels, &keys, &scores, "Test");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_keys_produce_empty_data() {
        let dataset = build_radar_dataset(&[], &[], &HashMap::new(), "Test");
        assert!(dataset.datasets[0].data.is_empty());
        assert!(dataset.labels.is_empty());
    }

    #[test]
    fn test_individual_chart_is_named_after_person() {
        let keys = default_dimension_keys();
        let labels = default_dimension_labels();
        let assessment = person(scores(&[("A", 4.0), ("B", 3.0)]));

        let chart = build_individual_chart(&labels, &keys, &assessment);
        assert!(chart.legend);
        assert!(!chart.clone().without_legend().legend);
        assert_eq!(chart.data.datasets.len(), 1);
        assert_eq!(chart.data.datasets[0].label, "Iva Ivić");
        assert_eq!(chart.data.datasets[0].background_color, RADAR_FILL);
        assert!(chart.data.datasets[0].fill);
        assert_eq!(chart.scale.suggested_min, 1.0);
        assert_eq!(chart.scale.suggested_max, 5.0);
    }

    #[test]
    fn test_chart_values_skip_gaps() {
        let keys: Vec<String> = ["A", "B", "C"].iter().map(|k| k.to_string()).collect();
        let labels = keys.clone();
        let assessment = person(scores(&[("A", 2.0), ("C", 5.5)]));

        let chart = build_individual_chart(&labels, &keys, &assessment);
        let values: Vec<f64> = chart.values().collect();
        assert_eq!(values, vec![2.0, 5.5]);
        assert_eq!(chart.scale.bounds_for(chart.values()), (1.0, 5.5));
    }
}
