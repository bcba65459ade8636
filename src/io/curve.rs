//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a fitted curve:
//! - the fitted knots (tenor years + yields), enough to refit exactly
//! - a precomputed sampled grid for quick plotting
//! - run metadata (as-of date)
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{CurveFile, CurveGrid};
use crate::error::CurveError;
use crate::fit::CubicSpline;

/// Write a curve JSON file.
pub fn write_curve_json(
    path: &Path,
    curve: &CubicSpline,
    asof: NaiveDate,
    grid_points: usize,
) -> Result<(), CurveError> {
    let file = File::create(path).map_err(|e| {
        CurveError::source(format!(
            "Failed to create curve JSON '{}': {e}",
            path.display()
        ))
    })?;

    let x = curve.knots_x();
    let (tenors, y) = build_grid(curve, x[0], x[x.len() - 1], grid_points);

    let out = CurveFile {
        tool: "tsg".to_string(),
        asof_date: asof,
        knots: CurveGrid {
            tenor_years: curve.knots_x().to_vec(),
            y: curve.knots_y().to_vec(),
        },
        grid: CurveGrid { tenor_years: tenors, y },
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| CurveError::source(format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, CurveError> {
    let file = File::open(path).map_err(|e| {
        CurveError::invalid_input(format!("Failed to open curve JSON '{}': {e}", path.display()))
    })?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| CurveError::invalid_input(format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

/// Sample the fitted curve on a uniform grid.
pub fn build_grid(curve: &CubicSpline, t_min: f64, t_max: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let n = n.max(2);
    let mut t0 = t_min;
    let mut t1 = t_max;
    if !(t0.is_finite() && t1.is_finite()) || t1 <= t0 {
        t0 = 0.0;
        t1 = 30.0;
    }
    if (t1 - t0).abs() < 1e-9 {
        t0 = (t0 - 0.5).max(0.0);
        t1 += 0.5;
    }

    let mut tenors = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        tenors.push(t0 + u * (t1 - t0));
    }
    let y = curve.values(&tenors);

    (tenors, y)
}
