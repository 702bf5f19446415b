//! Score report schema - boundary types for the audit engine's JSON output
//!
//! The engine emits a large, loosely-typed report. Only the parts this tool
//! acts on (`categories`, per-category `score`) are modeled; everything else
//! is carried through `#[serde(flatten)]` so the emitted JSON stays a
//! superset of what the engine produced.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A structured audit result keyed by category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// URL the audit was requested for
    #[serde(rename = "requestedUrl", skip_serializing_if = "Option::is_none")]
    pub requested_url: Option<String>,
    /// Category id -> scored category record
    pub categories: BTreeMap<String, Category>,
    /// Per-category trend deltas, present only after enrichment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deltas: Option<BTreeMap<String, CategoryDelta>>,
    /// Engine fields this tool does not interpret
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// One audit dimension (performance, accessibility, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Human-readable title, when the engine provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Score in [0, 1]; the engine emits null for unscorable categories
    pub score: Option<f64>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// Difference between a category's current and previously recorded score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryDelta {
    pub current: f64,
    pub previous: f64,
    pub delta: f64,
}

impl ScoreReport {
    /// Validate raw engine output into the report schema.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serialize for file output, pretty-printed.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Score of a category, if it exists and was scorable.
    pub fn category_score(&self, id: &str) -> Option<f64> {
        self.categories.get(id).and_then(|c| c.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGINE_JSON: &str = r#"{
        "requestedUrl": "https://example.com/",
        "lighthouseVersion": "11.0.0",
        "fetchTime": "2025-03-01T10:00:00.000Z",
        "categories": {
            "performance": { "title": "Performance", "score": 0.93, "auditRefs": [] },
            "seo": { "title": "SEO", "score": 0.81 },
            "pwa": { "title": "PWA", "score": null }
        },
        "audits": {}
    }"#;

    #[test]
    fn parses_engine_output() {
        let report = ScoreReport::from_json(ENGINE_JSON).unwrap();
        assert_eq!(report.requested_url.as_deref(), Some("https://example.com/"));
        assert_eq!(report.categories.len(), 3);
        assert_eq!(report.category_score("performance"), Some(0.93));
        assert_eq!(report.category_score("pwa"), None);
        assert!(report.deltas.is_none());
    }

    #[test]
    fn unknown_engine_fields_survive_the_round_trip() {
        let report = ScoreReport::from_json(ENGINE_JSON).unwrap();
        let out = report.to_pretty_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["lighthouseVersion"], "11.0.0");
        assert_eq!(value["categories"]["performance"]["auditRefs"], serde_json::json!([]));
        assert_eq!(value["requestedUrl"], "https://example.com/");
    }

    #[test]
    fn deltas_serialize_when_present() {
        let mut report = ScoreReport::from_json(ENGINE_JSON).unwrap();
        let mut deltas = BTreeMap::new();
        deltas.insert(
            "performance".to_string(),
            CategoryDelta {
                current: 0.93,
                previous: 0.88,
                delta: 0.05,
            },
        );
        report.deltas = Some(deltas);
        let value: serde_json::Value =
            serde_json::from_str(&report.to_pretty_json().unwrap()).unwrap();
        assert_eq!(value["deltas"]["performance"]["previous"], 0.88);
    }

    #[test]
    fn rejects_reports_without_categories() {
        let err = ScoreReport::from_json(r#"{"requestedUrl": "https://a.com"}"#);
        assert!(err.is_err());
    }
}
