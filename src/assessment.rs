//! Assessment Records
//!
//! Wire types for the assessment API. The backend serializes more fields
//! than the charts need; the extras are tolerated and defaulted so older
//! servers keep working.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Display;

/// A scored evaluation record, as returned by `/api/assessments`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Assessment {
    /// Record identifier.
    #[serde(default)]
    pub id: String,

    /// Display name of the evaluated person.
    pub full_name: String,

    /// Per-dimension scores, keyed by dimension key.
    #[serde(default)]
    pub dimensions: HashMap<String, f64>,

    /// Averaged adequacy score (dimensions A-D).
    pub adequacy: f64,

    /// Averaged potential score (dimensions E-I).
    pub potential: f64,

    /// Category label assigned by the backend.
    pub category: String,

    /// Email of the evaluator.
    #[serde(default)]
    pub assessed_by: String,

    /// Job position of the evaluated person.
    #[serde(default)]
    pub position: String,

    /// Management level (B-1, B-2, B-3, Ostalo).
    #[serde(default)]
    pub management_level: String,
}

impl Assessment {
    /// Score for one dimension key, if the record carries it.
    pub fn score(&self, key: &str) -> Option<f64> {
        self.dimensions.get(key).copied()
    }
}

impl Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.full_name, self.category)
    }
}

/// Generated insight payload from `/api/insights/{id}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Insight {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // A full backend payload deserializes with every field populated.
    fn test_deserialize_full_payload() {
        let json = r#"{
            "id": "7f0c",
            "assessed_by": "master@example.com",
            "full_name": "Ana Anić",
            "position": "Voditeljica razvoja",
            "management_level": "B-2",
            "dimensions": {"A": 4, "B": 3, "C": 5},
            "adequacy": 4.0,
            "potential": 3.6,
            "category": "Potencijal"
        }"#;
        let assessment: Assessment = serde_json::from_str(json).unwrap();
        assert_eq!(assessment.full_name, "Ana Anić");
        assert_eq!(assessment.score("A"), Some(4.0));
        assert_eq!(assessment.score("Z"), None);
        assert_eq!(assessment.management_level, "B-2");
    }

    #[test]
    // Only the chart-bearing fields are required.
    fn test_deserialize_minimal_payload() {
        let json = r#"{
            "full_name": "A",
            "adequacy": 2,
            "potential": 4,
            "category": "X"
        }"#;
        let assessment: Assessment = serde_json::from_str(json).unwrap();
        assert_eq!(assessment.adequacy, 2.0);
        assert_eq!(assessment.potential, 4.0);
        assert!(assessment.dimensions.is_empty());
        assert!(assessment.id.is_empty());
    }

    #[test]
    fn test_insight_payload() {
        let insight: Insight = serde_json::from_str(r#"{"content": "Hello"}"#).unwrap();
        assert_eq!(insight.content, "Hello");
    }
}
