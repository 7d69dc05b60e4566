// Comment scoring
//
// Three ways to rank reviews by their helpfulness votes. Each one reads
// the same up/down vote columns and writes a single new column, so they
// can run in any order and re-running one just rewrites its column.

use crate::error::Result;
use crate::scoring::stats;
use crate::table::{columns, Column, ReviewTable};
use tracing::debug;

/// Confidence level used for the Wilson bound unless configured otherwise
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Net votes: up minus down. Negative when a review is mostly down-voted.
pub fn pos_neg_diff(up: i64, down: i64) -> i64 {
    up - down
}

/// Share of votes that were up votes
///
/// A review nobody voted on scores 0, not NaN.
pub fn average_rating(up: i64, down: i64) -> f64 {
    let total = up + down;
    if total == 0 {
        return 0.0;
    }
    up as f64 / total as f64
}

/// Lower bound of the Wilson score interval for the up-vote rate
///
/// Treats up votes as successes out of `up + down` trials. Few votes
/// means a wide interval, so a 2-0 review ranks below a 90-10 one even
/// though its raw ratio is higher.
///
/// # Arguments
/// * `up` - Up votes
/// * `down` - Down votes
/// * `confidence` - Two-sided confidence level, usually 0.95
///
/// # Returns
/// * 0.0 when there are no votes, otherwise a value in [0, 1]
pub fn wilson_score(up: i64, down: i64, confidence: f64) -> f64 {
    let n = (up + down) as f64;
    if n == 0.0 {
        return 0.0;
    }

    let z = stats::z_score(confidence);
    wilson_with_z(up as f64, n, z)
}

fn wilson_with_z(up: f64, n: f64, z: f64) -> f64 {
    let phat = up / n;
    let z2 = z * z;

    (phat + z2 / (2.0 * n) - z * ((phat * (1.0 - phat) + z2 / (4.0 * n)) / n).sqrt())
        / (1.0 + z2 / n)
}

/// Add `score_pos_neg_diff` (up - down) for every row
pub fn score_pos_neg_diff(table: &mut ReviewTable, up_col: &str, down_col: &str) -> Result<()> {
    let scores: Vec<i64> = votes(table, up_col, down_col)?
        .map(|(up, down)| pos_neg_diff(up, down))
        .collect();

    table.add_column(columns::SCORE_POS_NEG_DIFF, Column::Int(scores))
}

/// Add `score_average_rating` (up / total, 0 without votes) for every row
pub fn score_average_rating(
    table: &mut ReviewTable,
    up_col: &str,
    down_col: &str,
) -> Result<()> {
    let scores: Vec<f64> = votes(table, up_col, down_col)?
        .map(|(up, down)| average_rating(up, down))
        .collect();

    table.add_column(columns::SCORE_AVERAGE_RATING, Column::Float(scores))
}

/// Add `wilson_lower_bound` for every row
///
/// One z-score is shared by the whole table.
pub fn wilson_lower_bound(
    table: &mut ReviewTable,
    up_col: &str,
    down_col: &str,
    confidence: f64,
) -> Result<()> {
    let z = stats::z_score(confidence);
    debug!(confidence, z, "scoring wilson lower bound");

    let scores: Vec<f64> = votes(table, up_col, down_col)?
        .map(|(up, down)| {
            let n = up + down;
            if n == 0 {
                0.0
            } else {
                wilson_with_z(up as f64, n as f64, z)
            }
        })
        .collect();

    table.add_column(columns::WILSON_LOWER_BOUND, Column::Float(scores))
}

// Pairs of (up, down) per row
fn votes<'a>(
    table: &'a ReviewTable,
    up_col: &str,
    down_col: &str,
) -> Result<impl Iterator<Item = (i64, i64)> + 'a> {
    let up = table.integers(up_col)?;
    let down = table.integers(down_col)?;
    Ok(up.iter().copied().zip(down.iter().copied()))
}
