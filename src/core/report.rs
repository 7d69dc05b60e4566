// Presentation of scored reviews
//
// Fixed-width text for the terminal, JSON for everything else. Floats are
// shown with five decimals.

use crate::core::AnalysisReport;
use crate::error::Result;
use crate::table::{columns, Column, ReviewTable};
use serde_json::{json, Map, Value};

/// Columns shown for ranked reviews unless the caller picks others
pub const DISPLAY_COLUMNS: &[&str] = &[
    columns::REVIEWER_ID,
    columns::RATING,
    columns::SCORE_POS_NEG_DIFF,
    columns::SCORE_AVERAGE_RATING,
    columns::WILSON_LOWER_BOUND,
];

const FLOAT_DECIMALS: usize = 5;

/// Render selected rows as a fixed-width text table
///
/// The first column is the row's position in the original table.
pub fn render_table(table: &ReviewTable, rows: &[usize], names: &[&str]) -> Result<String> {
    let selected: Vec<&Column> = names
        .iter()
        .map(|name| table.column(name))
        .collect::<Result<_>>()?;

    let mut header = vec![String::new()];
    header.extend(names.iter().map(|n| n.to_string()));

    let mut body: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for &row in rows {
        let mut line = vec![row.to_string()];
        line.extend(selected.iter().map(|col| format_cell(col, row)));
        body.push(line);
    }

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            body.iter()
                .map(|line| line[i].len())
                .chain(std::iter::once(header[i].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    for line in &body {
        push_line(&mut out, line, &widths);
    }

    Ok(out)
}

/// Selected rows as a JSON array of objects keyed by column name
pub fn rows_to_json(table: &ReviewTable, rows: &[usize], names: &[&str]) -> Result<Value> {
    let selected: Vec<(&str, &Column)> = names
        .iter()
        .map(|name| table.column(name).map(|col| (*name, col)))
        .collect::<Result<_>>()?;

    let records = rows
        .iter()
        .map(|&row| {
            let mut record = Map::new();
            record.insert("row".to_string(), json!(row));
            for (name, col) in &selected {
                record.insert(name.to_string(), cell_value(col, row));
            }
            Value::Object(record)
        })
        .collect();

    Ok(Value::Array(records))
}

/// Human-readable summary of an analysis run
pub fn render_summary(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Reviews:                 {}\n", report.rows));
    if let Some(date) = report.reference_date {
        out.push_str(&format!("Reference date:          {}\n", date));
    }
    out.push_str(&format!(
        "Average rating:          {:.*}\n",
        FLOAT_DECIMALS, report.average_rating
    ));
    out.push_str(&format!(
        "Time-weighted rating:    {:.*}\n",
        FLOAT_DECIMALS, report.time_weighted.value
    ));

    for p in &report.time_weighted.periods {
        let range = match (p.first_date, p.last_date) {
            (Some(first), Some(last)) => format!("{} - {}", first, last),
            _ => "no reviews".to_string(),
        };
        out.push_str(&format!(
            "  {:<8} {:>5.1}%  {:<25} mean {:.*}\n",
            p.period.to_string(),
            p.weight,
            range,
            FLOAT_DECIMALS,
            p.mean
        ));
    }

    out
}

fn format_cell(col: &Column, row: usize) -> String {
    match col {
        Column::Int(v) => v[row].to_string(),
        Column::Float(v) => format!("{:.*}", FLOAT_DECIMALS, v[row]),
        Column::Text(v) => v[row].clone(),
        Column::Date(v) => v[row].format("%Y-%m-%d").to_string(),
    }
}

fn cell_value(col: &Column, row: usize) -> Value {
    match col {
        Column::Int(v) => json!(v[row]),
        // NaN has no JSON form and becomes null
        Column::Float(v) => json!(v[row]),
        Column::Text(v) => json!(v[row]),
        Column::Date(v) => json!(v[row].format("%Y-%m-%d").to_string()),
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = width))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Period, PeriodSummary, TimeWeightedSummary};
    use chrono::NaiveDate;

    fn table() -> ReviewTable {
        let mut table = ReviewTable::new();
        table
            .add_column(
                columns::REVIEWER_ID,
                Column::Text(vec!["A1".to_string(), "B22".to_string()]),
            )
            .unwrap();
        table
            .add_column(columns::SCORE_POS_NEG_DIFF, Column::Int(vec![10, -3]))
            .unwrap();
        table
            .add_column(columns::WILSON_LOWER_BOUND, Column::Float(vec![0.72247, f64::NAN]))
            .unwrap();
        table
            .add_column(
                columns::REVIEW_TIME,
                Column::Date(vec![
                    NaiveDate::from_ymd_opt(2014, 12, 7).unwrap(),
                    NaiveDate::from_ymd_opt(2013, 1, 2).unwrap(),
                ]),
            )
            .unwrap();
        table
    }

    #[test]
    fn test_render_table() {
        let table = table();
        let out = render_table(
            &table,
            &[1, 0],
            &[columns::REVIEWER_ID, columns::WILSON_LOWER_BOUND],
        )
        .unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("reviewerID"));
        assert!(lines[0].contains("wilson_lower_bound"));
        assert!(lines[1].starts_with('1'));
        assert!(lines[1].contains("NaN"));
        assert!(lines[2].contains("0.72247"));
        assert!(lines[2].contains("A1"));
    }

    #[test]
    fn test_render_unknown_column() {
        let table = table();
        assert!(render_table(&table, &[0], &["nope"]).is_err());
    }

    #[test]
    fn test_rows_to_json() {
        let table = table();
        let value = rows_to_json(
            &table,
            &[0, 1],
            &[
                columns::REVIEWER_ID,
                columns::SCORE_POS_NEG_DIFF,
                columns::WILSON_LOWER_BOUND,
                columns::REVIEW_TIME,
            ],
        )
        .unwrap();

        assert_eq!(value[0]["row"], 0);
        assert_eq!(value[0]["reviewerID"], "A1");
        assert_eq!(value[0]["score_pos_neg_diff"], 10);
        assert_eq!(value[0]["reviewTime"], "2014-12-07");
        assert!(value[1]["wilson_lower_bound"].is_null());
    }

    #[test]
    fn test_render_summary() {
        let summary = TimeWeightedSummary {
            cut_points: [1.0, 2.0, 3.0],
            periods: vec![PeriodSummary {
                period: Period::Recent,
                weight: 28.0,
                rows: 0,
                mean: f64::NAN,
                contribution: f64::NAN,
                first_date: None,
                last_date: None,
            }],
            value: f64::NAN,
        };
        let report = AnalysisReport {
            rows: 0,
            reference_date: None,
            average_rating: 4.5,
            time_weighted: summary,
        };

        let out = render_summary(&report);
        assert!(out.contains("Average rating:          4.50000"));
        assert!(out.contains("recent"));
        assert!(out.contains("no reviews"));
        assert!(!out.contains("Reference date"));
    }
}
