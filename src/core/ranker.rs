// Picks the best reviews by a score column
//
// Highest first. NaN sorts last, ties keep table order.

use crate::error::Result;
use crate::table::ReviewTable;
use std::cmp::Ordering;

/// Row indices of the top `limit` rows by a numeric column
///
/// # Arguments
/// * `table` - Scored review table
/// * `column` - Any Int or Float column, e.g. `wilson_lower_bound`
/// * `limit` - Maximum rows to return
pub fn top_rows(table: &ReviewTable, column: &str, limit: usize) -> Result<Vec<usize>> {
    let values = table.numeric(column)?;

    let mut rows: Vec<usize> = (0..values.len()).collect();
    rows.sort_by(|&a, &b| descending(values[a], values[b]));
    rows.truncate(limit);

    Ok(rows)
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
