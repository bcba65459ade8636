//! CSV observation ingest and normalization.
//!
//! Turns a `date,maturity,yield` observation CSV into term-structure
//! snapshots that are safe to fit.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (grouping and ordering never depend on map
//!   iteration order)
//! - **Separation of concerns**: no fitting logic here

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::{Observation, ObservationSet};
use crate::error::CurveError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: grouped snapshots + row accounting.
#[derive(Debug, Clone)]
pub struct IngestedData {
    /// Snapshots ordered by as-of date ascending.
    pub snapshots: Vec<ObservationSet>,
    pub rows_read: usize,
    pub rows_used: usize,
    pub row_errors: Vec<RowError>,
}

/// Load and group an observation CSV into snapshots.
///
/// Required columns (by header name): `date`, `maturity`, `yield`. Dates are
/// `YYYY-MM-DD`. Rows with unparseable dates or non-finite yields are
/// skipped and reported; if nothing survives, the whole file is rejected.
pub fn load_observations(path: &Path) -> Result<IngestedData, CurveError> {
    let file = File::open(path).map_err(|e| {
        CurveError::invalid_input(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| CurveError::invalid_input(format!("Failed to read CSV header: {e}")))?
        .clone();

    let date_idx = column_index(&headers, "date")?;
    let maturity_idx = column_index(&headers, "maturity")?;
    let yield_idx = column_index(&headers, "yield")?;

    let mut by_asof: BTreeMap<NaiveDate, Vec<Observation>> = BTreeMap::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_used = 0usize;

    for (i, record) in reader.records().enumerate() {
        // Header is line 1; data starts at line 2.
        let line = i + 2;
        rows_read += 1;

        let record = match record {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("Unreadable row: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, date_idx, maturity_idx, yield_idx) {
            Ok((asof, obs)) => {
                by_asof.entry(asof).or_default().push(obs);
                rows_used += 1;
            }
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    if by_asof.is_empty() {
        return Err(CurveError::invalid_input(format!(
            "No usable observations in '{}' ({} rows read, {} row errors).",
            path.display(),
            rows_read,
            row_errors.len()
        )));
    }

    let snapshots = by_asof
        .into_iter()
        .map(|(asof, observations)| ObservationSet { asof, observations })
        .collect();

    Ok(IngestedData {
        snapshots,
        rows_read,
        rows_used,
        row_errors,
    })
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, CurveError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            CurveError::invalid_input(format!(
                "CSV is missing required column '{name}' (found: {}).",
                headers.iter().collect::<Vec<_>>().join(", ")
            ))
        })
}

fn parse_row(
    record: &StringRecord,
    date_idx: usize,
    maturity_idx: usize,
    yield_idx: usize,
) -> Result<(NaiveDate, Observation), String> {
    let date_raw = record.get(date_idx).unwrap_or("");
    let asof = NaiveDate::parse_from_str(date_raw, DATE_FORMAT)
        .map_err(|e| format!("Bad date '{date_raw}': {e}"))?;

    let maturity_raw = record.get(maturity_idx).unwrap_or("");
    let maturity = NaiveDate::parse_from_str(maturity_raw, DATE_FORMAT)
        .map_err(|e| format!("Bad maturity '{maturity_raw}': {e}"))?;

    let yield_raw = record.get(yield_idx).unwrap_or("");
    let value: f64 = yield_raw
        .parse()
        .map_err(|e| format!("Bad yield '{yield_raw}': {e}"))?;
    if !value.is_finite() {
        return Err(format!("Non-finite yield '{yield_raw}'."));
    }

    Ok((asof, Observation { maturity, value }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn groups_rows_into_snapshots_by_date() {
        let path = write_temp_csv(
            "tsg_ingest_groups.csv",
            "date,maturity,yield\n\
             2025-06-02,2026-06-02,0.041\n\
             2025-06-02,2030-06-02,0.044\n\
             2025-06-01,2026-06-01,0.040\n",
        );
        let out = load_observations(&path).unwrap();
        assert_eq!(out.snapshots.len(), 2);
        assert_eq!(out.rows_used, 3);
        assert!(out.row_errors.is_empty());

        // Ordered ascending; the last snapshot is the latest.
        let latest = out.snapshots.last().unwrap();
        assert_eq!(latest.asof, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(latest.observations.len(), 2);
    }

    #[test]
    fn bad_rows_are_collected_not_fatal() {
        let path = write_temp_csv(
            "tsg_ingest_bad_rows.csv",
            "date,maturity,yield\n\
             2025-06-02,2026-06-02,0.041\n\
             not-a-date,2026-06-02,0.041\n\
             2025-06-02,2030-06-02,abc\n",
        );
        let out = load_observations(&path).unwrap();
        assert_eq!(out.rows_read, 3);
        assert_eq!(out.rows_used, 1);
        assert_eq!(out.row_errors.len(), 2);
        assert_eq!(out.row_errors[0].line, 3);
        assert_eq!(out.row_errors[1].line, 4);
    }

    #[test]
    fn missing_column_is_rejected() {
        let path = write_temp_csv(
            "tsg_ingest_missing_col.csv",
            "date,yield\n2025-06-02,0.041\n",
        );
        let err = load_observations(&path).unwrap_err();
        assert!(matches!(err, CurveError::InvalidInput(_)));
    }

    #[test]
    fn all_rows_bad_is_rejected() {
        let path = write_temp_csv(
            "tsg_ingest_all_bad.csv",
            "date,maturity,yield\nx,y,z\n",
        );
        let err = load_observations(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn header_matching_is_case_insensitive() {
        let path = write_temp_csv(
            "tsg_ingest_case.csv",
            "Date,Maturity,Yield\n2025-06-02,2026-06-02,0.041\n",
        );
        let out = load_observations(&path).unwrap();
        assert_eq!(out.rows_used, 1);
    }
}
