// Time-based weighted average rating
//
// Splits reviews into four periods by age (20th/40th/60th percentile of
// the `days` column) and blends the per-period rating means, giving the
// newest period the most weight. Empty periods produce NaN means, which
// carry through into the result.

use crate::error::Result;
use crate::scoring::stats;
use crate::table::{columns, ReviewTable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Percentiles of review age that separate the four periods
pub const PERIOD_CUTS: [f64; 3] = [0.2, 0.4, 0.6];

/// Percentage weight of each period, newest first
///
/// Expected to add up to 100 but not checked; callers own the policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodWeights {
    pub recent: f64,
    pub second: f64,
    pub third: f64,
    pub oldest: f64,
}

impl Default for PeriodWeights {
    fn default() -> Self {
        Self {
            recent: 28.0,
            second: 26.0,
            third: 24.0,
            oldest: 22.0,
        }
    }
}

impl PeriodWeights {
    pub fn new(recent: f64, second: f64, third: f64, oldest: f64) -> Self {
        Self {
            recent,
            second,
            third,
            oldest,
        }
    }

    /// Sum of all four weights
    pub fn total(&self) -> f64 {
        self.recent + self.second + self.third + self.oldest
    }

    pub fn weight(&self, period: Period) -> f64 {
        match period {
            Period::Recent => self.recent,
            Period::Second => self.second,
            Period::Third => self.third,
            Period::Oldest => self.oldest,
        }
    }
}

/// One of the four age periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Recent, // age <= q1
    Second, // q1 < age <= q2
    Third,  // q2 < age <= q3
    Oldest, // age > q3
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Recent, Period::Second, Period::Third, Period::Oldest];

    /// Which period an age falls into, given the three cut points
    ///
    /// With NaN cut points (empty table) no period matches and None comes back.
    pub fn of(age: f64, cuts: &[f64; 3]) -> Option<Period> {
        if age <= cuts[0] {
            Some(Period::Recent)
        } else if age > cuts[0] && age <= cuts[1] {
            Some(Period::Second)
        } else if age > cuts[1] && age <= cuts[2] {
            Some(Period::Third)
        } else if age > cuts[2] {
            Some(Period::Oldest)
        } else {
            None
        }
    }

    fn index(self) -> usize {
        match self {
            Period::Recent => 0,
            Period::Second => 1,
            Period::Third => 2,
            Period::Oldest => 3,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Period::Recent => "recent",
            Period::Second => "second",
            Period::Third => "third",
            Period::Oldest => "oldest",
        };
        write!(f, "{}", s)
    }
}

/// Detail for a single period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub weight: f64,
    pub rows: usize,
    pub mean: f64,
    /// `mean * weight / 100`
    pub contribution: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Full breakdown of a time-weighted average
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeWeightedSummary {
    pub cut_points: [f64; 3],
    pub periods: Vec<PeriodSummary>,
    pub value: f64,
}

/// Time-weighted average rating
///
/// The table needs a `days` column (see `table::derive_age_in_days`).
/// Logs each period's date range, weight and mean at info level.
///
/// # Arguments
/// * `table` - Reviews with ratings, dates and ages
/// * `rating_col` - Numeric rating column
/// * `date_col` - Date column, only used to report period boundaries
/// * `weights` - Percentage weight per period
pub fn time_based_weighted_avg(
    table: &ReviewTable,
    rating_col: &str,
    date_col: &str,
    weights: &PeriodWeights,
) -> Result<f64> {
    let summary = time_weighted_breakdown(table, rating_col, date_col, weights)?;
    log_summary(&summary);

    Ok(summary.value)
}

/// Log one info event per period
pub fn log_summary(summary: &TimeWeightedSummary) {
    for p in &summary.periods {
        info!(
            period = %p.period,
            from = ?p.first_date,
            to = ?p.last_date,
            weight = p.weight,
            rows = p.rows,
            mean = p.mean,
            "rating period"
        );
    }
}

/// Same computation as `time_based_weighted_avg`, returning every period
pub fn time_weighted_breakdown(
    table: &ReviewTable,
    rating_col: &str,
    date_col: &str,
    weights: &PeriodWeights,
) -> Result<TimeWeightedSummary> {
    let ages = table.numeric(columns::AGE_IN_DAYS)?;
    let ratings = table.numeric(rating_col)?;
    let dates = table.dates(date_col)?;

    let cuts = stats::quantiles(&ages, &PERIOD_CUTS);
    let cut_points = [cuts[0], cuts[1], cuts[2]];

    let mut buckets: [Vec<f64>; 4] = Default::default();
    let mut ranges: [Option<(NaiveDate, NaiveDate)>; 4] = [None; 4];

    for ((age, rating), date) in ages.iter().zip(&ratings).zip(dates) {
        let Some(period) = Period::of(*age, &cut_points) else {
            continue;
        };
        let i = period.index();
        buckets[i].push(*rating);
        ranges[i] = Some(match ranges[i] {
            Some((first, last)) => (first.min(*date), last.max(*date)),
            None => (*date, *date),
        });
    }

    let periods: Vec<PeriodSummary> = Period::ALL
        .iter()
        .map(|&period| {
            let i = period.index();
            let weight = weights.weight(period);
            let mean = stats::mean(&buckets[i]);

            PeriodSummary {
                period,
                weight,
                rows: buckets[i].len(),
                mean,
                contribution: mean * weight / 100.0,
                first_date: ranges[i].map(|(first, _)| first),
                last_date: ranges[i].map(|(_, last)| last),
            }
        })
        .collect();

    let value = periods.iter().map(|p| p.contribution).sum();

    Ok(TimeWeightedSummary {
        cut_points,
        periods,
        value,
    })
}
