// Scoring configuration
//
// Loaded from JSON: an explicit --config file wins, then
// ~/.review-rank/config.json if it exists, then built-in defaults.
// Any field left out of the file keeps its default.

use crate::error::{Result, ReviewRankError};
use crate::scoring::{PeriodWeights, DEFAULT_CONFIDENCE};
use crate::table::columns;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".review-rank";
const CONFIG_FILE: &str = "config.json";

/// Settings for a scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Confidence level for the Wilson lower bound
    pub confidence: f64,
    /// Period weights for the time-weighted average
    pub weights: PeriodWeights,
    /// Date review ages are measured from. None = latest review in the data.
    pub reference_date: Option<NaiveDate>,
    /// How many reviews to show
    pub top: usize,
    /// Column to rank reviews by
    pub sort_by: String,
    pub log_level: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            weights: PeriodWeights::default(),
            reference_date: None,
            top: 20,
            sort_by: columns::WILSON_LOWER_BOUND.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ScoringConfig {
    /// Read a config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ReviewRankError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: ScoringConfig = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Where the per-user config file lives
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load config using the usual precedence
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_fallback(explicit, Self::default_path())
    }

    /// Explicit file, else fallback file if present, else defaults
    pub fn load_with_fallback(explicit: Option<&Path>, fallback: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match fallback {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse "28,26,24,22" into period weights
    pub fn parse_weights(raw: &str) -> Result<PeriodWeights> {
        let parts: Vec<f64> = raw
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| ReviewRankError::Config(format!("bad weights '{}': {}", raw, e)))?;

        match parts.as_slice() {
            [recent, second, third, oldest] => {
                Ok(PeriodWeights::new(*recent, *second, *third, *oldest))
            }
            _ => Err(ReviewRankError::Config(format!(
                "expected 4 weights, got {}",
                parts.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.confidence, 0.95);
        assert_eq!(config.weights, PeriodWeights::new(28.0, 26.0, 24.0, 22.0));
        assert_eq!(config.reference_date, None);
        assert_eq!(config.top, 20);
        assert_eq!(config.sort_by, "wilson_lower_bound");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"confidence": 0.9, "reference_date": "2014-12-09", "weights": {{"recent": 40}}}}"#
        )
        .unwrap();

        let config = ScoringConfig::from_file(file.path()).unwrap();
        assert_eq!(config.confidence, 0.9);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2014, 12, 9));
        assert_eq!(config.weights.recent, 40.0);
        assert_eq!(config.weights.second, 26.0);
        assert_eq!(config.top, 20);
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = ScoringConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ReviewRankError::Serialization(_)));
    }

    #[test]
    fn test_load_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("config.json");

        // Nothing on disk: defaults
        let config = ScoringConfig::load_with_fallback(None, Some(fallback.clone())).unwrap();
        assert_eq!(config, ScoringConfig::default());

        std::fs::write(&fallback, r#"{"top": 5}"#).unwrap();
        let config = ScoringConfig::load_with_fallback(None, Some(fallback.clone())).unwrap();
        assert_eq!(config.top, 5);

        let explicit = dir.path().join("explicit.json");
        std::fs::write(&explicit, r#"{"top": 7}"#).unwrap();
        let config =
            ScoringConfig::load_with_fallback(Some(explicit.as_path()), Some(fallback)).unwrap();
        assert_eq!(config.top, 7);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = ScoringConfig::load_with_fallback(Some(Path::new("/no/such/config.json")), None)
            .unwrap_err();
        assert!(matches!(err, ReviewRankError::Config(_)));
    }

    #[test]
    fn test_parse_weights() {
        let weights = ScoringConfig::parse_weights("40, 30,20,10").unwrap();
        assert_eq!(weights, PeriodWeights::new(40.0, 30.0, 20.0, 10.0));

        assert!(ScoringConfig::parse_weights("1,2,3").is_err());
        assert!(ScoringConfig::parse_weights("a,b,c,d").is_err());
    }
}
