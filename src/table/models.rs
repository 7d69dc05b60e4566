// Column names and the raw CSV record

/// Canonical column names
///
/// These follow the Amazon review dataset headers so a stock export
/// loads without any renaming.
pub mod columns {
    pub const REVIEWER_ID: &str = "reviewerID";
    pub const PRODUCT_ID: &str = "asin";
    pub const REVIEWER_NAME: &str = "reviewerName";
    pub const RATING: &str = "overall";
    pub const REVIEW_TIME: &str = "reviewTime";
    pub const TOTAL_VOTE: &str = "total_vote";
    pub const HELPFUL_YES: &str = "helpful_yes";

    // Derived by the caller before scoring
    pub const HELPFUL_NO: &str = "helpful_no";
    pub const AGE_IN_DAYS: &str = "days";

    // Added by the scoring functions
    pub const SCORE_POS_NEG_DIFF: &str = "score_pos_neg_diff";
    pub const SCORE_AVERAGE_RATING: &str = "score_average_rating";
    pub const WILSON_LOWER_BOUND: &str = "wilson_lower_bound";

    /// Columns a row must have for it to be kept
    pub const REQUIRED: &[&str] = &[
        REVIEWER_ID,
        PRODUCT_ID,
        RATING,
        REVIEW_TIME,
        TOTAL_VOTE,
        HELPFUL_YES,
    ];
}

use serde::{Deserialize, Serialize};

/// One CSV row as it comes off disk
///
/// Every field is optional so rows with gaps can be counted and dropped
/// instead of failing the whole load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "reviewerID")]
    pub reviewer_id: Option<String>,
    #[serde(rename = "asin")]
    pub product_id: Option<String>,
    #[serde(rename = "reviewerName", default)]
    pub reviewer_name: Option<String>,
    pub overall: Option<f64>,
    #[serde(rename = "reviewTime")]
    pub review_time: Option<String>,
    pub total_vote: Option<i64>,
    pub helpful_yes: Option<i64>,
}

/// A row with every required field present
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteRecord {
    pub reviewer_id: String,
    pub product_id: String,
    pub reviewer_name: String,
    pub overall: f64,
    pub review_time: String,
    pub total_vote: i64,
    pub helpful_yes: i64,
}

impl ReviewRecord {
    /// Returns the complete row, or None if any required field is missing
    pub fn complete(self) -> Option<CompleteRecord> {
        Some(CompleteRecord {
            reviewer_id: non_empty(self.reviewer_id)?,
            product_id: non_empty(self.product_id)?,
            reviewer_name: self.reviewer_name.unwrap_or_default(),
            overall: self.overall?,
            review_time: non_empty(self.review_time)?,
            total_vote: self.total_vote?,
            helpful_yes: self.helpful_yes?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> ReviewRecord {
        ReviewRecord {
            reviewer_id: Some("A3SBTW3WS4IQSN".to_string()),
            product_id: Some("B007WTAJTO".to_string()),
            reviewer_name: None,
            overall: Some(4.0),
            review_time: Some("2014-07-23".to_string()),
            total_vote: Some(0),
            helpful_yes: Some(0),
        }
    }

    #[test]
    fn test_complete_record() {
        let complete = full_record().complete().unwrap();
        assert_eq!(complete.reviewer_id, "A3SBTW3WS4IQSN");
        assert_eq!(complete.reviewer_name, "");
        assert_eq!(complete.overall, 4.0);
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut record = full_record();
        record.helpful_yes = None;
        assert!(record.complete().is_none());

        let mut record = full_record();
        record.review_time = Some("   ".to_string());
        assert!(record.complete().is_none());
    }

    #[test]
    fn test_required_columns() {
        assert_eq!(columns::REQUIRED.len(), 6);
        assert!(!columns::REQUIRED.contains(&columns::REVIEWER_NAME));
    }
}
