// Loads review datasets from CSV
//
// Rows missing any required value get dropped (and counted), extra columns
// are ignored. Dates are parsed up front so later stages never see strings.

use crate::error::{Result, ReviewRankError};
use crate::table::models::{columns, CompleteRecord, ReviewRecord};
use crate::table::{Column, ReviewTable};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

// Accepted review date formats, tried in order. The last one is the raw
// Amazon export ("12 7, 2014").
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Load a review table from a CSV file
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<ReviewTable> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading reviews");

    let file = std::fs::File::open(path)?;
    read_reviews(file)
}

/// Read a review table from any CSV source with a header row
pub fn read_reviews<R: Read>(reader: R) -> Result<ReviewTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Bail early if the file isn't a review dataset at all
    let headers = rdr.headers()?.clone();
    for required in columns::REQUIRED {
        if !headers.iter().any(|h| h == *required) {
            return Err(ReviewRankError::ColumnNotFound(required.to_string()));
        }
    }

    let mut kept = Vec::new();
    let mut dropped = 0usize;

    for result in rdr.deserialize::<ReviewRecord>() {
        match result?.complete() {
            Some(record) => kept.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(dropped, kept = kept.len(), "dropped rows with missing values");
    }

    build_table(kept)
}

/// Turn complete records into a column-oriented table
pub fn build_table(records: Vec<CompleteRecord>) -> Result<ReviewTable> {
    let mut reviewer_ids = Vec::with_capacity(records.len());
    let mut product_ids = Vec::with_capacity(records.len());
    let mut reviewer_names = Vec::with_capacity(records.len());
    let mut ratings = Vec::with_capacity(records.len());
    let mut review_times = Vec::with_capacity(records.len());
    let mut total_votes = Vec::with_capacity(records.len());
    let mut helpful_yes = Vec::with_capacity(records.len());

    for record in records {
        review_times.push(parse_review_date(&record.review_time)?);
        reviewer_ids.push(record.reviewer_id);
        product_ids.push(record.product_id);
        reviewer_names.push(record.reviewer_name);
        ratings.push(record.overall);
        total_votes.push(record.total_vote);
        helpful_yes.push(record.helpful_yes);
    }

    let mut table = ReviewTable::new();
    table.add_column(columns::REVIEWER_ID, Column::Text(reviewer_ids))?;
    table.add_column(columns::PRODUCT_ID, Column::Text(product_ids))?;
    table.add_column(columns::REVIEWER_NAME, Column::Text(reviewer_names))?;
    table.add_column(columns::RATING, Column::Float(ratings))?;
    table.add_column(columns::REVIEW_TIME, Column::Date(review_times))?;
    table.add_column(columns::TOTAL_VOTE, Column::Int(total_votes))?;
    table.add_column(columns::HELPFUL_YES, Column::Int(helpful_yes))?;

    debug!(rows = table.len(), "review table built");

    Ok(table)
}

/// Parse a review date in any of the accepted formats
pub fn parse_review_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| ReviewRankError::InvalidDate(raw.to_string()))
}
