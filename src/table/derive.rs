// Derived inputs the scorers expect to already be on the table:
// down votes (helpful_no) and review age in days.

use crate::error::Result;
use crate::table::models::columns;
use crate::table::{Column, ReviewTable};
use chrono::NaiveDate;

/// Add `helpful_no = total - up`
pub fn derive_helpful_no(table: &mut ReviewTable, total_col: &str, up_col: &str) -> Result<()> {
    let down: Vec<i64> = table
        .integers(total_col)?
        .iter()
        .zip(table.integers(up_col)?)
        .map(|(total, up)| total - up)
        .collect();

    table.add_column(columns::HELPFUL_NO, Column::Int(down))
}

/// Add `days = reference - date` as whole days
///
/// Reviews dated after the reference end up with a negative age. That
/// isn't checked here; the period split just treats them as newest.
pub fn derive_age_in_days(
    table: &mut ReviewTable,
    date_col: &str,
    reference: NaiveDate,
) -> Result<()> {
    let days: Vec<i64> = table
        .dates(date_col)?
        .iter()
        .map(|date| (reference - *date).num_days())
        .collect();

    table.add_column(columns::AGE_IN_DAYS, Column::Int(days))
}

/// Most recent date in a date column
pub fn latest_date(table: &ReviewTable, date_col: &str) -> Result<Option<NaiveDate>> {
    Ok(table.dates(date_col)?.iter().max().copied())
}
