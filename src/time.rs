//! Date-to-year-fraction normalization.
//!
//! Tenors are measured in fractions of a 365.25-day year relative to the
//! earliest date in the input. This is a pragmatic average-year convention,
//! not a market day-count (ACT/360, 30/360, ...); configurable day counts
//! are out of scope for this tool.

use chrono::NaiveDate;

use crate::error::CurveError;

/// Denominator of the fixed average-year convention.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Convert dates to year fractions relative to the earliest date.
///
/// The output has the same length and order as the input. A single-element
/// input yields `[0.0]`. An empty input is an error: there is no epoch to
/// normalize against.
pub fn year_fractions(dates: &[NaiveDate]) -> Result<Vec<f64>, CurveError> {
    let epoch = dates
        .iter()
        .min()
        .copied()
        .ok_or_else(|| CurveError::invalid_input("No dates to normalize."))?;

    Ok(dates
        .iter()
        .map(|d| (*d - epoch).num_days() as f64 / DAYS_PER_YEAR)
        .collect())
}
