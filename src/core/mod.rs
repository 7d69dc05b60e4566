/// Core functionality modules
///
/// Orchestrates a scoring run and turns the scored table into ranked,
/// printable output.

pub mod analyzer;
pub mod ranker;
pub mod report;

pub use analyzer::{AnalysisReport, Analyzer};
pub use ranker::top_rows;
pub use report::{render_summary, render_table, rows_to_json, DISPLAY_COLUMNS};
