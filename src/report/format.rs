//! Formatted terminal output.

use crate::domain::{RunConfig, SnapshotStats};
use crate::report::TenorSummary;
use chrono::NaiveDate;

/// Format the run header: snapshot provenance + fit inputs.
pub fn format_run_summary(asof: NaiveDate, stats: &SnapshotStats, config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("=== tsg - Term-Structure Scenarios ===\n");
    out.push_str(&format!("As-of: {asof}\n"));
    let source = match &config.csv_path {
        Some(path) => format!("csv ({})", path.display()),
        None => "FRED".to_string(),
    };
    out.push_str(&format!("Source: {source}\n"));
    out.push_str(&format!(
        "Knots: {} | tenor range: {:.2}..{:.2}y | yield range: {:.4}..{:.4}\n",
        stats.n_points, stats.tenor_min, stats.tenor_max, stats.y_min, stats.y_max
    ));

    let seed = match config.seed {
        Some(s) => s.to_string(),
        None => "entropy".to_string(),
    };
    out.push_str(&format!(
        "Scenarios: {} | vol: {:.4} | seed: {seed}\n",
        config.n_scenarios, config.vol
    ));

    out
}

/// Format the per-tenor scenario distribution table.
pub fn format_tenor_table(summary: &[TenorSummary]) -> String {
    let mut out = String::new();

    out.push_str("tenor_y     base      mean   std_dev       p05       p95\n");
    for s in summary {
        out.push_str(&format!(
            "{:>7.2} {:>8.4} {:>9.4} {:>9.5} {:>9.4} {:>9.4}\n",
            s.tenor, s.base, s.mean, s.std_dev, s.p05, s.p95
        ));
    }

    out
}

/// One-line accounting of skipped ingest rows, or `None` when clean.
pub fn format_row_errors(rows_read: usize, rows_used: usize, n_errors: usize) -> Option<String> {
    if n_errors == 0 {
        return None;
    }
    Some(format!(
        "Warning: skipped {n_errors} of {rows_read} rows ({rows_used} used)."
    ))
}
