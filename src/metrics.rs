//! Pure derivations over already-fetched aggregate structures.
//!
//! Every ratio here is defined as `0.0` when its denominator is zero; the
//! dashboard renders zeroed metrics rather than faulting on an empty corpus.

use crate::models::{AiTrends, DatasetTrends};

/// Total labeled posts in the corpus (real + fake).
pub fn total_posts(trends: &DatasetTrends) -> u64 {
    trends.dataset_labels.total()
}

/// Share of the corpus labeled fake, as a percentage in [0, 100].
pub fn fake_news_percentage(trends: &DatasetTrends) -> f64 {
    let total = total_posts(trends);
    if total == 0 {
        return 0.0;
    }
    trends.dataset_labels.fake as f64 / total as f64 * 100.0
}

/// Total model predictions in the corpus.
pub fn total_predictions(ai: &AiTrends) -> u64 {
    ai.ai_prediction_counts.total()
}

/// Approximate model accuracy from aggregate rate similarity, in [0, 100].
///
/// This compares the dataset's fake rate against the model's predicted fake
/// rate; it never sees per-item label/prediction pairs, because the trends
/// endpoints expose none. It is a heuristic, not a confusion-matrix accuracy,
/// and downstream displays label it "estimated". Keep it that way.
pub fn ai_accuracy_approx(dataset: &DatasetTrends, ai: &AiTrends) -> f64 {
    let total_dataset = total_posts(dataset);
    let total_ai = total_predictions(ai);
    if total_dataset == 0 || total_ai == 0 {
        return 0.0;
    }

    let dataset_fake_rate = dataset.dataset_labels.fake as f64 / total_dataset as f64;
    let ai_fake_rate = ai.ai_prediction_counts.fake as f64 / total_ai as f64;

    (100.0 - (dataset_fake_rate - ai_fake_rate).abs() * 100.0).clamp(0.0, 100.0)
}

/// Share of predictions classified real, as a percentage in [0, 100].
pub fn real_detection_share(ai: &AiTrends) -> f64 {
    let total = total_predictions(ai);
    if total == 0 {
        return 0.0;
    }
    ai.ai_prediction_counts.real as f64 / total as f64 * 100.0
}

/// Share of predictions classified fake, as a percentage in [0, 100].
pub fn fake_detection_share(ai: &AiTrends) -> f64 {
    let total = total_predictions(ai);
    if total == 0 {
        return 0.0;
    }
    ai.ai_prediction_counts.fake as f64 / total as f64 * 100.0
}

/// One row of the dataset-vs-predictions comparison chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub category: &'static str,
    pub dataset: u64,
    pub ai_prediction: u64,
}

/// The two-row Real/Fake comparison series the trends chart plots.
pub fn comparison_rows(dataset: &DatasetTrends, ai: &AiTrends) -> Vec<ComparisonRow> {
    vec![
        ComparisonRow {
            category: "Real News",
            dataset: dataset.dataset_labels.real,
            ai_prediction: ai.ai_prediction_counts.real,
        },
        ComparisonRow {
            category: "Fake News",
            dataset: dataset.dataset_labels.fake,
            ai_prediction: ai.ai_prediction_counts.fake,
        },
    ]
}
