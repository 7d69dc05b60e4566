/// Scoring module
///
/// Helpfulness scores for individual reviews and the time-weighted
/// product rating.

pub mod comment;
pub mod stats;
pub mod time_weighted;

pub use comment::{
    average_rating, pos_neg_diff, score_average_rating, score_pos_neg_diff, wilson_lower_bound,
    wilson_score, DEFAULT_CONFIDENCE,
};
pub use time_weighted::{
    log_summary, time_based_weighted_avg, time_weighted_breakdown, Period, PeriodSummary,
    PeriodWeights, TimeWeightedSummary,
};
