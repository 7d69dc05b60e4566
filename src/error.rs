// Error types for review-rank
//
// Everything that can go wrong while loading a review table or scoring it.
// Numeric edge cases (no votes, empty periods) are not errors - they come
// back as 0 or NaN.

use thiserror::Error;

/// Main error type for review-rank operations
#[derive(Error, Debug)]
pub enum ReviewRankError {
    /// I/O errors (opening the dataset, reading config)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Named column is not in the table
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Column exists but holds the wrong kind of values
    #[error("Column '{column}' is not {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
    },

    /// Column length doesn't match the table's row count
    #[error("Column '{column}' has {actual} rows, table has {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Date value that none of the known formats accept
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for review-rank operations
pub type Result<T> = std::result::Result<T, ReviewRankError>;

/// Convert ReviewRankError to a user-friendly error message
impl ReviewRankError {
    pub fn user_message(&self) -> String {
        match self {
            ReviewRankError::Io(e) => {
                format!("File system error. Check the path and permissions. Details: {}", e)
            }
            ReviewRankError::Csv(e) => {
                format!("Could not read the review dataset. Details: {}", e)
            }
            ReviewRankError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            ReviewRankError::ColumnNotFound(name) => {
                format!("The dataset has no '{}' column", name)
            }
            ReviewRankError::ColumnType { column, expected } => {
                format!("Column '{}' should hold {} values", column, expected)
            }
            ReviewRankError::ColumnLength {
                column,
                expected,
                actual,
            } => {
                format!(
                    "Column '{}' has {} values but the table has {} rows",
                    column, actual, expected
                )
            }
            ReviewRankError::InvalidDate(raw) => {
                format!("Could not understand the date '{}'", raw)
            }
            ReviewRankError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            ReviewRankError::Generic(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = ReviewRankError::ColumnNotFound("helpful_yes".to_string());
        assert!(err.user_message().contains("helpful_yes"));

        let err = ReviewRankError::InvalidDate("yesterday".to_string());
        assert!(err.user_message().contains("yesterday"));
    }

    #[test]
    fn test_error_display() {
        let err = ReviewRankError::ColumnType {
            column: "overall".to_string(),
            expected: "numeric",
        };
        let display = format!("{}", err);
        assert!(display.contains("overall"));
        assert!(display.contains("numeric"));

        let err = ReviewRankError::ColumnLength {
            column: "days".to_string(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(format!("{}", err), "Column 'days' has 2 rows, table has 3");
    }
}
