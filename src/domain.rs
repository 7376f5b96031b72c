//! Assessment Domain Catalog
//!
//! The nine evaluation dimensions and the category ladder used by the
//! assessment backend. The dashboard only consumes these for default axis
//! configuration and display; all scoring happens server-side.

use ratatui::style::Color;

/// One named evaluation axis.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Dimension {
    /// Single-letter key used in the API payload (`dimensions` map).
    pub key: &'static str,
    /// Croatian display name shown on chart axes.
    pub name: &'static str,
    /// Group the dimension contributes to.
    pub group: DimensionGroup,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DimensionGroup {
    /// Dimensions A-D, averaged into the adequacy score.
    Adekvatnost,
    /// Dimensions E-I, averaged into the potential score.
    Potencijal,
}

/// The full catalog, in the order the backend defines it. Dashboard defaults
/// (dimension keys and labels) come from here, in this order.
pub const DIMENSIONS: [Dimension; 9] = [
    Dimension {
        key: "A",
        name: "Svrhovito i sustavno razmišljanje",
        group: DimensionGroup::Adekvatnost,
    },
    Dimension {
        key: "B",
        name: "Način vođenja i suradnje",
        group: DimensionGroup::Adekvatnost,
    },
    Dimension {
        key: "C",
        name: "Donošenje odluka i učenje",
        group: DimensionGroup::Adekvatnost,
    },
    Dimension {
        key: "D",
        name: "Integritet i svrhovitost",
        group: DimensionGroup::Adekvatnost,
    },
    Dimension {
        key: "E",
        name: "Samorefleksija",
        group: DimensionGroup::Potencijal,
    },
    Dimension {
        key: "F",
        name: "Tolerancija paradoksa",
        group: DimensionGroup::Potencijal,
    },
    Dimension {
        key: "G",
        name: "Integrativno razmišljanje",
        group: DimensionGroup::Potencijal,
    },
    Dimension {
        key: "H",
        name: "Učenje iz povratne sprege",
        group: DimensionGroup::Potencijal,
    },
    Dimension {
        key: "I",
        name: "Etika i povjerenje",
        group: DimensionGroup::Potencijal,
    },
];

/// Dimension keys in catalog order.
pub fn default_dimension_keys() -> Vec<String> {
    DIMENSIONS.iter().map(|d| d.key.to_string()).collect()
}

/// Dimension display names in catalog order, aligned with the keys.
pub fn default_dimension_labels() -> Vec<String> {
    DIMENSIONS.iter().map(|d| d.name.to_string()).collect()
}

/// Category names the backend can assign, best first. `Eliminirati` is the
/// fall-through when no rule matches.
pub const CATEGORIES: [&str; 5] = [
    "Primjer",
    "Potencijal",
    "Adekvatan",
    "Neadekvatan s potencijalom",
    "Eliminirati",
];

/// Stable color per category for the matrix view. Unknown categories get a
/// neutral color rather than an error.
pub fn category_color(category: &str) -> Color {
    match category {
        "Primjer" => Color::Green,
        "Potencijal" => Color::Cyan,
        "Adekvatan" => Color::Yellow,
        "Neadekvatan s potencijalom" => Color::Magenta,
        "Eliminirati" => Color::Red,
        _ => Color::Gray,
    }
}

/// Per-category share of a set of assessments.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    /// Percentage of the whole, rounded to two decimals.
    pub percentage: f64,
}

/// Counts assessments per category, name-sorted, with two-decimal
/// percentages. Empty input yields an empty summary.
pub fn summarize_by_category(categories: impl IntoIterator<Item = String>) -> Vec<CategoryShare> {
    let mut counts: std::collections::BTreeMap<String, usize> = std::collections::BTreeMap::new();
    let mut total = 0usize;
    for category in categories {
        *counts.entry(category).or_insert(0) += 1;
        total += 1;
    }
    counts
        .into_iter()
        .map(|(category, count)| {
            let percentage = if total == 0 {
                0.0
            } else {
                (count as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
            };
            CategoryShare {
                category,
                count,
                percentage,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Default keys and labels stay aligned and in catalog order.
    fn test_default_lists_are_aligned() {
        let keys = default_dimension_keys();
        let labels = default_dimension_labels();
        assert_eq!(keys.len(), labels.len());
        assert_eq!(keys.first().map(String::as_str), Some("A"));
        assert_eq!(keys.last().map(String::as_str), Some("I"));
        assert_eq!(
            labels.first().map(String::as_str),
            Some("Svrhovito i sustavno razmišljanje")
        );
    }

    #[test]
    // Four adequacy dimensions, five potential dimensions.
    fn test_group_split() {
        let adequacy = DIMENSIONS
            .iter()
            .filter(|d| d.group == DimensionGroup::Adekvatnost)
            .count();
        assert_eq!(adequacy, 4);
        assert_eq!(DIMENSIONS.len() - adequacy, 5);
    }

    #[test]
    // Every known category has a dedicated color; unknown ones fall back to gray.
    fn test_category_colors() {
        let known: Vec<Color> = CATEGORIES.iter().map(|c| category_color(c)).collect();
        for color in &known {
            assert_ne!(*color, Color::Gray);
        }
        assert_eq!(category_color("Nepoznato"), Color::Gray);
    }

    #[test]
    // Counts and two-decimal percentages, name-sorted.
    fn test_summarize_by_category() {
        let summary = summarize_by_category(
            ["Primjer", "Adekvatan", "Primjer"]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, "Adekvatan");
        assert_eq!(summary[0].count, 1);
        assert_eq!(summary[0].percentage, 33.33);
        assert_eq!(summary[1].category, "Primjer");
        assert_eq!(summary[1].count, 2);
        assert_eq!(summary[1].percentage, 66.67);
    }

    #[test]
    // No assessments, no shares.
    fn test_summarize_empty() {
        assert!(summarize_by_category(Vec::new()).is_empty());
    }
}
