// Main analyzer orchestrator
//
// Prepares the derived inputs and runs every scorer over a review table.

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::scoring::{self, TimeWeightedSummary};
use crate::table::{self, columns, Column, ReviewTable};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

/// Main analyzer
pub struct Analyzer {
    config: ScoringConfig,
}

impl Analyzer {
    /// Create a new analyzer
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Run full analysis
    ///
    /// Adds `helpful_no` and `days`, then the three comment score columns,
    /// and returns the plain and time-weighted product ratings.
    pub fn analyze(&self, table: &mut ReviewTable) -> Result<AnalysisReport> {
        table::derive_helpful_no(table, columns::TOTAL_VOTE, columns::HELPFUL_YES)?;

        let reference_date = match self.config.reference_date {
            Some(date) => Some(date),
            None => table::latest_date(table, columns::REVIEW_TIME)?,
        };

        match reference_date {
            Some(date) => table::derive_age_in_days(table, columns::REVIEW_TIME, date)?,
            // Only happens for an empty table
            None => table.add_column(columns::AGE_IN_DAYS, Column::Int(Vec::new()))?,
        }
        debug!(reference = ?reference_date, "review ages derived");

        let average_rating = table.mean(columns::RATING)?;
        let time_weighted = scoring::time_weighted_breakdown(
            table,
            columns::RATING,
            columns::REVIEW_TIME,
            &self.config.weights,
        )?;
        scoring::log_summary(&time_weighted);

        scoring::score_pos_neg_diff(table, columns::HELPFUL_YES, columns::HELPFUL_NO)?;
        scoring::score_average_rating(table, columns::HELPFUL_YES, columns::HELPFUL_NO)?;
        scoring::wilson_lower_bound(
            table,
            columns::HELPFUL_YES,
            columns::HELPFUL_NO,
            self.config.confidence,
        )?;

        info!(
            rows = table.len(),
            average_rating,
            time_weighted = time_weighted.value,
            "analysis complete"
        );

        Ok(AnalysisReport {
            rows: table.len(),
            reference_date,
            average_rating,
            time_weighted,
        })
    }
}

/// Analysis report
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub rows: usize,
    pub reference_date: Option<NaiveDate>,
    pub average_rating: f64,
    pub time_weighted: TimeWeightedSummary,
}
