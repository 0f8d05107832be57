//! Built-in fallback data substituted when the backend is unreachable.
//!
//! The values are fixed snapshots of the production dataset; the dashboard
//! renders them verbatim in demo mode. Tests rely on the exact literals, so
//! treat any edit here as a contract change.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{
    AiTrends, DatasetTrends, FiltersData, LabelCounts, NewsPost, Prediction, PredictionCounts,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date literal")
}

/// Four sample posts covering both label values and both prediction values.
pub fn sample_posts() -> Vec<NewsPost> {
    vec![
        NewsPost {
            title: "Share by stating the old video of PM Modi's highest civilian honor of UAE"
                .to_string(),
            body: "A video of Prime Minister Narendra Modi being honored with a gold chain has \
                   gone viral on social media. It is being claimed that \"Sultan of Arabia\"…"
                .to_string(),
            platform: "Twitter".to_string(),
            date: date(2022, 7, 9),
            label: false,
            ai_prediction: Prediction::Real,
            region: "National".to_string(),
            image: Some(
                "https://i0.wp.com/www.altnews.in/Hindi/wp-content/uploads/sites/2/2022/07/Copy-of-FI-Template-25.jpg?resize=300%2C169&ssl=1"
                    .to_string(),
            ),
        },
        NewsPost {
            title: "Fact-check: A reporter in Telangana stopped speaking to Home Minister Amit Shah?"
                .to_string(),
            body: "A video is viral on social media in which a journalist can be seen questioning \
                   Home Minister Amit Shah. In the video, journalist asked Amit Shah…"
                .to_string(),
            platform: "Twitter".to_string(),
            date: date(2022, 7, 9),
            label: false,
            ai_prediction: Prediction::Real,
            region: "Telangana".to_string(),
            image: None,
        },
        NewsPost {
            title: "Local Community Center Opens New Youth Program".to_string(),
            body: "The Riverside Community Center announced today the launch of their new \
                   after-school program designed to provide educational support and recreational \
                   activities for local youth..."
                .to_string(),
            platform: "Facebook".to_string(),
            date: date(2024, 1, 15),
            label: true,
            ai_prediction: Prediction::Real,
            region: "Local".to_string(),
            image: None,
        },
        NewsPost {
            title: "BREAKING: Scientists Discover Cure for All Diseases Using Common Household Item"
                .to_string(),
            body: "In a shocking revelation, researchers claim that lemon juice mixed with baking \
                   soda can cure any disease known to mankind. This miracle cure has been hidden \
                   by big pharma..."
                .to_string(),
            platform: "Twitter".to_string(),
            date: date(2024, 1, 14),
            label: false,
            ai_prediction: Prediction::Fake,
            region: "International".to_string(),
            image: None,
        },
    ]
}

/// Fixed dataset trend snapshot. The platform map intentionally carries the
/// dataset's spelling variants ("twitter", "Facbook"); they are real keys in
/// the corpus, not typos to clean up.
pub fn sample_trends() -> DatasetTrends {
    DatasetTrends {
        dataset_labels: LabelCounts {
            real: 15913,
            fake: 10319,
        },
        platforms: HashMap::from([
            ("Twitter".to_string(), 21879),
            ("Facebook".to_string(), 625),
            ("twitter".to_string(), 1713),
            ("Facbook".to_string(), 313),
        ]),
        regions: HashMap::from([
            ("National".to_string(), 5000),
            ("International".to_string(), 3000),
            ("Local".to_string(), 2500),
        ]),
    }
}

pub fn sample_ai_trends() -> AiTrends {
    AiTrends {
        ai_prediction_counts: PredictionCounts {
            real: 21577,
            fake: 4655,
        },
    }
}

pub fn sample_filters() -> FiltersData {
    FiltersData {
        languages: vec![
            "English".to_string(),
            "Hindi".to_string(),
            "Bengali".to_string(),
        ],
        platforms: vec!["Twitter".to_string(), "Facebook".to_string()],
        regions: vec![
            "National".to_string(),
            "International".to_string(),
            "Local".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_posts_cover_both_labels_and_predictions() {
        let posts = sample_posts();
        assert_eq!(posts.len(), 4);
        assert!(posts.iter().any(|p| p.label));
        assert!(posts.iter().any(|p| !p.label));
        assert!(posts.iter().any(|p| p.ai_prediction == Prediction::Real));
        assert!(posts.iter().any(|p| p.ai_prediction == Prediction::Fake));
    }

    #[test]
    fn sample_trends_snapshot_values() {
        let trends = sample_trends();
        assert_eq!(trends.dataset_labels.real, 15913);
        assert_eq!(trends.dataset_labels.fake, 10319);
        assert_eq!(trends.platforms.len(), 4);
        assert_eq!(trends.regions.len(), 3);
    }

    #[test]
    fn sample_ai_trends_snapshot_values() {
        let ai = sample_ai_trends();
        assert_eq!(ai.ai_prediction_counts.fake, 4655);
        assert_eq!(ai.ai_prediction_counts.real, 21577);
    }

    #[test]
    fn sample_filters_sizes() {
        let filters = sample_filters();
        assert_eq!(filters.languages.len(), 3);
        assert_eq!(filters.platforms.len(), 2);
        assert_eq!(filters.regions.len(), 3);
    }
}
