//! Export the scenario matrix to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: tenor values as column headers, one row per scenario.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::ScenarioMatrix;
use crate::error::CurveError;

/// Write the scenario matrix to a CSV file.
pub fn write_scenarios_csv(path: &Path, matrix: &ScenarioMatrix) -> Result<(), CurveError> {
    let file = File::create(path).map_err(|e| {
        CurveError::source(format!(
            "Failed to create scenario CSV '{}': {e}",
            path.display()
        ))
    })?;
    let mut file = BufWriter::new(file);

    let header = matrix
        .tenors()
        .iter()
        .map(|t| format_tenor(*t))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(file, "{header}")
        .map_err(|e| CurveError::source(format!("Failed to write scenario CSV header: {e}")))?;

    for row in matrix.rows() {
        let line = row
            .iter()
            .map(|v| format!("{v:.10}"))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(file, "{line}")
            .map_err(|e| CurveError::source(format!("Failed to write scenario CSV row: {e}")))?;
    }

    Ok(())
}

/// Tenor labels: trim trailing zeros so `1.0 -> "1"` and `0.25 -> "0.25"`.
fn format_tenor(t: f64) -> String {
    let s = format!("{t:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenor_labels_are_trimmed() {
        assert_eq!(format_tenor(1.0), "1");
        assert_eq!(format_tenor(0.25), "0.25");
        assert_eq!(format_tenor(10.0), "10");
        assert_eq!(format_tenor(2.5), "2.5");
    }

    #[test]
    fn csv_has_tenor_header_and_one_line_per_scenario() {
        let matrix = ScenarioMatrix::new(
            vec![1.0, 2.0],
            vec![0.01, 0.02],
            vec![vec![0.011, 0.021], vec![0.009, 0.019]],
        );
        let path = std::env::temp_dir().join("tsg_export_matrix.csv");
        write_scenarios_csv(&path, &matrix).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1,2");
        assert!(lines[1].starts_with("0.0110000000,"));
    }

    #[test]
    fn empty_matrix_writes_header_only() {
        let matrix = ScenarioMatrix::new(vec![1.0, 5.0, 10.0], vec![0.01, 0.02, 0.03], vec![]);
        let path = std::env::temp_dir().join("tsg_export_empty.csv");
        write_scenarios_csv(&path, &matrix).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert_eq!(content.lines().next().unwrap(), "1,5,10");
    }
}
