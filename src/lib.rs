/// review-rank library
///
/// Scores product reviews by helpfulness votes and computes a
/// time-weighted product rating.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod scoring;
pub mod table;

// Re-exports for convenience
pub use config::ScoringConfig;
pub use error::{Result, ReviewRankError};
pub use table::{Column, ReviewTable};
