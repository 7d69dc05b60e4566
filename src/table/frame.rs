// Column-oriented review table
//
// Every column has the same number of rows. Columns can be added or
// overwritten but never removed.

use crate::error::{Result, ReviewRankError};
use chrono::NaiveDate;

/// A typed, homogeneous column of values
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
    Date(Vec<NaiveDate>),
}

impl Column {
    /// Number of values in the column
    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Date(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory table of reviews, one named column per field
#[derive(Debug, Clone, Default)]
pub struct ReviewTable {
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl ReviewTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Add a column, or overwrite the existing column with the same name
    ///
    /// Overwriting keeps the column's position, so calling a scoring
    /// function twice leaves the table exactly as after the first call.
    /// The first column added to an empty table sets the row count.
    pub fn add_column(&mut self, name: &str, column: Column) -> Result<()> {
        if self.columns.is_empty() {
            self.rows = column.len();
        } else if column.len() != self.rows {
            return Err(ReviewRankError::ColumnLength {
                column: name.to_string(),
                expected: self.rows,
                actual: column.len(),
            });
        }

        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name.to_string(), column)),
        }

        Ok(())
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| ReviewRankError::ColumnNotFound(name.to_string()))
    }

    pub fn integers(&self, name: &str) -> Result<&[i64]> {
        match self.column(name)? {
            Column::Int(v) => Ok(v),
            _ => Err(type_error(name, "integer")),
        }
    }

    pub fn floats(&self, name: &str) -> Result<&[f64]> {
        match self.column(name)? {
            Column::Float(v) => Ok(v),
            _ => Err(type_error(name, "float")),
        }
    }

    pub fn texts(&self, name: &str) -> Result<&[String]> {
        match self.column(name)? {
            Column::Text(v) => Ok(v),
            _ => Err(type_error(name, "text")),
        }
    }

    pub fn dates(&self, name: &str) -> Result<&[NaiveDate]> {
        match self.column(name)? {
            Column::Date(v) => Ok(v),
            _ => Err(type_error(name, "date")),
        }
    }

    /// Read an Int or Float column as f64 values
    pub fn numeric(&self, name: &str) -> Result<Vec<f64>> {
        match self.column(name)? {
            Column::Int(v) => Ok(v.iter().map(|&x| x as f64).collect()),
            Column::Float(v) => Ok(v.clone()),
            _ => Err(type_error(name, "numeric")),
        }
    }

    /// Arithmetic mean of a numeric column (NaN for an empty table)
    pub fn mean(&self, name: &str) -> Result<f64> {
        Ok(crate::scoring::stats::mean(&self.numeric(name)?))
    }
}

fn type_error(column: &str, expected: &'static str) -> ReviewRankError {
    ReviewRankError::ColumnType {
        column: column.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReviewTable {
        let mut table = ReviewTable::new();
        table
            .add_column("helpful_yes", Column::Int(vec![10, 1, 0]))
            .unwrap();
        table
            .add_column("overall", Column::Float(vec![5.0, 4.0, 3.0]))
            .unwrap();
        table
    }

    #[test]
    fn test_first_column_sets_row_count() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column_names(), vec!["helpful_yes", "overall"]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut table = sample();
        let err = table
            .add_column("days", Column::Int(vec![1, 2]))
            .unwrap_err();
        assert!(matches!(
            err,
            ReviewRankError::ColumnLength {
                expected: 3,
                actual: 2,
                ..
            }
        ));
        assert!(!table.contains("days"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut table = sample();
        table
            .add_column("helpful_yes", Column::Int(vec![7, 7, 7]))
            .unwrap();

        assert_eq!(table.column_names(), vec!["helpful_yes", "overall"]);
        assert_eq!(table.integers("helpful_yes").unwrap(), &[7, 7, 7]);
    }

    #[test]
    fn test_typed_access() {
        let table = sample();
        assert!(matches!(
            table.floats("helpful_yes"),
            Err(ReviewRankError::ColumnType { .. })
        ));
        assert!(matches!(
            table.integers("missing"),
            Err(ReviewRankError::ColumnNotFound(_))
        ));
        assert_eq!(table.numeric("helpful_yes").unwrap(), vec![10.0, 1.0, 0.0]);
    }

    #[test]
    fn test_mean() {
        let table = sample();
        assert_eq!(table.mean("overall").unwrap(), 4.0);

        let empty = ReviewTable::new();
        assert!(matches!(
            empty.mean("overall"),
            Err(ReviewRankError::ColumnNotFound(_))
        ));

        let mut no_rows = ReviewTable::new();
        no_rows.add_column("overall", Column::Float(vec![])).unwrap();
        assert!(no_rows.mean("overall").unwrap().is_nan());
    }
}
