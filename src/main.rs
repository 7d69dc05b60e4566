// review-rank - finds the reviews worth reading
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::{bail, Context, Result};
use review_rank_lib::{
    core::{render_summary, render_table, rows_to_json, top_rows, Analyzer, DISPLAY_COLUMNS},
    logging,
    table::{self, loader},
    ReviewRankError, ScoringConfig,
};
use std::env;
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "score" => handle_score(&args[2..]),
        "version" | "-v" | "--version" => {
            println!("review-rank v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        // Library errors have a friendlier wording than the raw chain
        match e.downcast_ref::<ReviewRankError>() {
            Some(err) => eprintln!("Error: {}", err.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

/// Flags accepted by `score`
#[derive(Debug, Default)]
struct ScoreArgs {
    file: Option<PathBuf>,
    config: Option<PathBuf>,
    reference_date: Option<String>,
    confidence: Option<String>,
    weights: Option<String>,
    top: Option<String>,
    sort_by: Option<String>,
    json: bool,
}

fn parse_score_args(args: &[String]) -> Result<ScoreArgs> {
    let mut parsed = ScoreArgs::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--json" => parsed.json = true,
            "--config" | "--reference-date" | "--confidence" | "--weights" | "--top"
            | "--sort-by" => {
                i += 1;
                let Some(value) = args.get(i).cloned() else {
                    bail!("{} needs a value", flag);
                };
                match flag {
                    "--config" => parsed.config = Some(PathBuf::from(value)),
                    "--reference-date" => parsed.reference_date = Some(value),
                    "--confidence" => parsed.confidence = Some(value),
                    "--weights" => parsed.weights = Some(value),
                    "--top" => parsed.top = Some(value),
                    _ => parsed.sort_by = Some(value),
                }
            }
            other if other.starts_with("--") => bail!("Unknown option: {}", other),
            path => parsed.file = Some(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(parsed)
}

fn handle_score(args: &[String]) -> Result<()> {
    let parsed = parse_score_args(args)?;

    let Some(file) = parsed.file.clone() else {
        eprintln!("Error: No dataset provided");
        print_usage();
        return Ok(());
    };

    let config = build_config(&parsed)?;
    logging::init_logging(&config.log_level);

    let mut reviews = table::load_reviews(&file)
        .with_context(|| format!("loading reviews from {}", file.display()))?;

    let analyzer = Analyzer::new(config);
    let report = analyzer.analyze(&mut reviews)?;

    let config = analyzer.config();
    let top = top_rows(&reviews, &config.sort_by, config.top)?;

    if parsed.json {
        let output = serde_json::json!({
            "summary": report,
            "top": rows_to_json(&reviews, &top, DISPLAY_COLUMNS)?,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n{}", "=".repeat(60));
    println!("Review Ranking Report");
    println!("{}", "=".repeat(60));
    print!("{}", render_summary(&report));

    if top.is_empty() {
        println!("\nNo reviews to rank.");
    } else {
        println!("\nTop {} reviews by {}:\n", top.len(), config.sort_by);
        print!("{}", render_table(&reviews, &top, DISPLAY_COLUMNS)?);
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

// Config file first, then whatever was passed on the command line
fn build_config(parsed: &ScoreArgs) -> Result<ScoringConfig> {
    let mut config = ScoringConfig::load(parsed.config.as_deref()).context("loading config")?;

    if let Some(raw) = &parsed.reference_date {
        config.reference_date = Some(loader::parse_review_date(raw)?);
    }
    if let Some(raw) = &parsed.confidence {
        config.confidence = raw
            .parse()
            .with_context(|| format!("invalid --confidence '{}'", raw))?;
    }
    if let Some(raw) = &parsed.weights {
        config.weights = ScoringConfig::parse_weights(raw)?;
    }
    if let Some(raw) = &parsed.top {
        config.top = raw
            .parse()
            .with_context(|| format!("invalid --top '{}'", raw))?;
    }
    if let Some(column) = &parsed.sort_by {
        config.sort_by = column.clone();
    }

    Ok(config)
}

fn print_usage() {
    println!(
        r#"review-rank v{} - Find the reviews worth reading

USAGE:
    review-rank <COMMAND> [OPTIONS]

COMMANDS:
    score <file.csv>       Score reviews and show the best ones
    version                Show version
    help                   Show this help

SCORE OPTIONS:
    --reference-date DATE  Measure review age from DATE (default: newest review)
    --confidence F         Wilson lower bound confidence (default: 0.95)
    --weights A,B,C,D      Period weights, newest first (default: 28,26,24,22)
    --top N                Number of reviews to show (default: 20)
    --sort-by COLUMN       Ranking column (default: wilson_lower_bound)
    --config PATH          JSON config file (default: ~/.review-rank/config.json)
    --json                 Print JSON instead of a table

EXAMPLES:
    review-rank score amazon_review.csv
    review-rank score amazon_review.csv --reference-date 2014-12-09 --top 10
    review-rank score amazon_review.csv --sort-by score_pos_neg_diff --json

The CSV needs reviewerID, asin, overall, reviewTime, total_vote and
helpful_yes columns. Rows missing any of them are skipped.
"#,
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_score_args() {
        let parsed = parse_score_args(&args(&[
            "reviews.csv",
            "--top",
            "5",
            "--weights",
            "40,30,20,10",
            "--json",
        ]))
        .unwrap();

        assert_eq!(parsed.file, Some(PathBuf::from("reviews.csv")));
        assert_eq!(parsed.top.as_deref(), Some("5"));
        assert_eq!(parsed.weights.as_deref(), Some("40,30,20,10"));
        assert!(parsed.json);
    }

    #[test]
    fn test_parse_score_args_errors() {
        assert!(parse_score_args(&args(&["--top"])).is_err());
        assert!(parse_score_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_build_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"top": 3, "confidence": 0.9}"#).unwrap();

        let parsed = parse_score_args(&args(&[
            "--config",
            config_path.to_str().unwrap(),
            "--confidence",
            "0.99",
            "--reference-date",
            "2014-12-09",
        ]))
        .unwrap();

        let config = build_config(&parsed).unwrap();
        assert_eq!(config.top, 3);
        assert_eq!(config.confidence, 0.99);
        assert_eq!(
            config.reference_date,
            chrono::NaiveDate::from_ymd_opt(2014, 12, 9)
        );
    }
}
