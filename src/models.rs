//! Typed payloads for the detection backend's read endpoints.
//!
//! The backend keys its label counts by the strings `"true"`/`"false"` and
//! its prediction counts by `"REAL"`/`"FAKE"`. Those string-keyed shapes are
//! mapped onto structs with named numeric fields so the rest of the crate
//! gets compile-time exhaustiveness instead of map lookups.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single social-media post with its ground-truth label and the model's
/// prediction. Immutable once fetched; held in view state until the next
/// fetch overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPost {
    pub title: String,
    pub body: String,
    pub platform: String,
    pub date: NaiveDate,
    /// Ground truth: `true` = real, `false` = fake.
    pub label: bool,
    pub ai_prediction: Prediction,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The model's classification output, independent of the ground-truth label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    #[serde(rename = "REAL")]
    Real,
    #[serde(rename = "FAKE")]
    Fake,
}

impl Prediction {
    /// Whether this prediction agrees with a ground-truth label.
    pub fn matches_label(self, label: bool) -> bool {
        matches!((self, label), (Prediction::Real, true) | (Prediction::Fake, false))
    }
}

/// Ground-truth label counts over the full corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    /// Posts labeled real (backend key `"true"`).
    #[serde(rename = "true")]
    pub real: u64,
    /// Posts labeled fake (backend key `"false"`).
    #[serde(rename = "false")]
    pub fake: u64,
}

impl LabelCounts {
    pub fn total(&self) -> u64 {
        self.real + self.fake
    }
}

/// Aggregate breakdowns over the full post corpus, as opposed to the
/// paginated post list. The label, platform, and region breakdowns are
/// independent; their totals need not agree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetTrends {
    pub dataset_labels: LabelCounts,
    pub platforms: HashMap<String, u64>,
    pub regions: HashMap<String, u64>,
}

/// Model prediction counts over the full corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionCounts {
    #[serde(rename = "REAL")]
    pub real: u64,
    #[serde(rename = "FAKE")]
    pub fake: u64,
}

impl PredictionCounts {
    pub fn total(&self) -> u64 {
        self.real + self.fake
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTrends {
    pub ai_prediction_counts: PredictionCounts,
}

/// Joined result of the two concurrent trend fetches. Each side falls back
/// independently, so one degraded endpoint never discards the other's live
/// data.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedTrends {
    pub dataset: DatasetTrends,
    pub ai: AiTrends,
}

/// Selectable options for the dashboard's filter controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiltersData {
    pub languages: Vec<String>,
    pub platforms: Vec<String>,
    pub regions: Vec<String>,
}

impl FiltersData {
    /// Region options cleaned up for display: drops empty, dash-only, and
    /// single-character entries, sorted alphabetically. The raw dataset
    /// contains placeholder regions like `"-"`; hiding them is purely a
    /// display concern and leaves the authoritative set untouched.
    pub fn displayable_regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self
            .regions
            .iter()
            .filter(|region| {
                let trimmed = region.trim();
                trimmed.len() > 1 && !trimmed.chars().all(|c| c == '-')
            })
            .cloned()
            .collect();
        regions.sort();
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn label_counts_deserialize_from_backend_keys() {
        let counts: LabelCounts = serde_json::from_str(r#"{"true": 15913, "false": 10319}"#).unwrap();
        assert_eq!(counts.real, 15913);
        assert_eq!(counts.fake, 10319);
        assert_eq!(counts.total(), 26232);
    }

    #[test]
    fn prediction_counts_deserialize_from_backend_keys() {
        let counts: PredictionCounts =
            serde_json::from_str(r#"{"REAL": 21577, "FAKE": 4655}"#).unwrap();
        assert_eq!(counts.real, 21577);
        assert_eq!(counts.fake, 4655);
    }

    #[test]
    fn news_post_deserializes_without_image() {
        let json = r#"{
            "title": "Local Community Center Opens New Youth Program",
            "body": "The Riverside Community Center announced today...",
            "platform": "Facebook",
            "date": "2024-01-15",
            "label": true,
            "ai_prediction": "REAL",
            "region": "Local"
        }"#;
        let post: NewsPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.platform, "Facebook");
        assert_eq!(post.ai_prediction, Prediction::Real);
        assert!(post.image.is_none());
        assert!(post.ai_prediction.matches_label(post.label));
    }

    #[test]
    fn prediction_label_agreement() {
        assert!(Prediction::Real.matches_label(true));
        assert!(Prediction::Fake.matches_label(false));
        assert!(!Prediction::Real.matches_label(false));
        assert!(!Prediction::Fake.matches_label(true));
    }

    #[test]
    fn displayable_regions_hides_placeholders_and_sorts() {
        let filters = FiltersData {
            languages: vec![],
            platforms: vec![],
            regions: vec![
                "National".to_string(),
                "-".to_string(),
                "---".to_string(),
                "".to_string(),
                "  ".to_string(),
                "x".to_string(),
                "International".to_string(),
            ],
        };
        assert_eq!(
            filters.displayable_regions(),
            vec!["International".to_string(), "National".to_string()]
        );
        // Authoritative set is untouched.
        assert_eq!(filters.regions.len(), 7);
    }
}
