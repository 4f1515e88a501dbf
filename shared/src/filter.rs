//! Client-side history filtering.
//!
//! The history view filters the fetched list locally; nothing here
//! touches the network.

use crate::{Prediction, PredictionLabel};

/// Category filter selected in the history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Benign,
    Malignant,
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Benign => "Benign",
            CategoryFilter::Malignant => "Malignant",
        }
    }

    fn accepts(&self, label: PredictionLabel) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Benign => label == PredictionLabel::Benign,
            CategoryFilter::Malignant => label == PredictionLabel::Malignant,
        }
    }
}

/// Whether a record satisfies both the category and the search predicate.
///
/// The search term matches case-insensitively against the source image
/// filename; an empty term matches everything.
pub fn matches(record: &Prediction, filter: CategoryFilter, search: &str) -> bool {
    let matches_search = search.is_empty()
        || record
            .image_filename
            .to_lowercase()
            .contains(&search.to_lowercase());
    filter.accepts(record.prediction) && matches_search
}

/// Apply both predicates to a fetched history page, preserving order.
pub fn filter_history(
    records: &[Prediction],
    filter: CategoryFilter,
    search: &str,
) -> Vec<Prediction> {
    records
        .iter()
        .filter(|r| matches(r, filter, search))
        .cloned()
        .collect()
}

// =========================================================
// Unit Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Probabilities;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, label: PredictionLabel, filename: &str) -> Prediction {
        Prediction {
            id,
            prediction: label,
            confidence: 0.9,
            processing_time: 0.5,
            probabilities: Probabilities::default(),
            image_filename: filename.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 11, 2, 9, 30, 0).unwrap(),
        }
    }

    fn sample() -> Vec<Prediction> {
        vec![
            record(1, PredictionLabel::Benign, "left_breast_scan.png"),
            record(2, PredictionLabel::Malignant, "right_breast_scan.jpg"),
            record(3, PredictionLabel::Benign, "biopsy_044.tiff"),
        ]
    }

    #[test]
    fn test_all_with_empty_search_is_identity() {
        let records = sample();
        let filtered = filter_history(&records, CategoryFilter::All, "");
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_category_filter_keeps_only_matching_labels() {
        let filtered = filter_history(&sample(), CategoryFilter::Benign, "");
        assert_eq!(filtered.len(), 2);
        assert!(filtered
            .iter()
            .all(|r| r.prediction == PredictionLabel::Benign));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filtered = filter_history(&sample(), CategoryFilter::All, "SCAN");
        assert_eq!(filtered.len(), 2);
        assert!(filter_history(&sample(), CategoryFilter::All, "nope").is_empty());
    }

    #[test]
    fn test_combined_predicates_are_a_conjunction() {
        let filtered = filter_history(&sample(), CategoryFilter::Benign, "scan");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_order_is_preserved() {
        let filtered = filter_history(&sample(), CategoryFilter::Benign, "");
        let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
