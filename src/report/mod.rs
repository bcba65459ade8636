//! Reporting utilities: per-tenor scenario statistics and terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;

use crate::domain::ScenarioMatrix;

/// Distribution summary of one scenario matrix column.
#[derive(Debug, Clone)]
pub struct TenorSummary {
    pub tenor: f64,
    pub base: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub p05: f64,
    pub p95: f64,
}

/// Summarize each tenor column of the matrix.
///
/// With zero scenario rows the mean falls back to the base value and the
/// spread statistics are zero; the summary stays printable either way.
pub fn summarize_columns(matrix: &ScenarioMatrix) -> Vec<TenorSummary> {
    (0..matrix.n_tenors())
        .map(|j| {
            let tenor = matrix.tenors()[j];
            let base = matrix.base()[j];
            let col = matrix.column(j);
            if col.is_empty() {
                return TenorSummary {
                    tenor,
                    base,
                    mean: base,
                    std_dev: 0.0,
                    p05: base,
                    p95: base,
                };
            }

            let n = col.len() as f64;
            let mean = col.iter().sum::<f64>() / n;
            let variance = if col.len() > 1 {
                col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
            } else {
                0.0
            };

            let mut sorted = col;
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            TenorSummary {
                tenor,
                base,
                mean,
                std_dev: variance.sqrt(),
                p05: percentile(&sorted, 0.05),
                p95: percentile(&sorted, 0.95),
            }
        })
        .collect()
}

/// Nearest-rank percentile over an ascending slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    let rank = ((q * n as f64).ceil() as usize).clamp(1, n);
    sorted[rank - 1]
}
