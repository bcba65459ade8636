//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting and scenario generation
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// A single yield observation: the maturity it refers to and its value.
///
/// `value` is a decimal rate (e.g. `0.025` for 2.5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub maturity: NaiveDate,
    pub value: f64,
}

/// One term-structure snapshot: all observations sharing an as-of date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationSet {
    pub asof: NaiveDate,
    pub observations: Vec<Observation>,
}

impl ObservationSet {
    /// Return the observations sorted by maturity with exact duplicate
    /// maturities removed (first occurrence wins).
    ///
    /// Spline construction requires strictly increasing knots, so the
    /// pipeline normalizes snapshots through this before fitting. Sorting
    /// is stable, which is what makes "first occurrence wins" well defined.
    pub fn sorted_deduped(&self) -> Vec<Observation> {
        let mut obs = self.observations.clone();
        obs.sort_by_key(|o| o.maturity);
        obs.dedup_by_key(|o| o.maturity);
        obs
    }
}

/// Summary stats about the snapshot actually used for fitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotStats {
    pub n_points: usize,
    pub tenor_min: f64,
    pub tenor_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl SnapshotStats {
    pub fn from_points(tenors: &[f64], values: &[f64]) -> Option<Self> {
        let mut tenor_min = f64::INFINITY;
        let mut tenor_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for (&t, &y) in tenors.iter().zip(values.iter()) {
            tenor_min = tenor_min.min(t);
            tenor_max = tenor_max.max(t);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        if !(tenor_min.is_finite() && tenor_max.is_finite() && y_min.is_finite() && y_max.is_finite())
        {
            return None;
        }

        Some(Self {
            n_points: tenors.len().min(values.len()),
            tenor_min,
            tenor_max,
            y_min,
            y_max,
        })
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Observation CSV path; `None` means fetch from FRED.
    pub csv_path: Option<PathBuf>,

    /// Tenor query points (years) at which scenarios are generated.
    pub tenors: Vec<f64>,
    /// Number of scenario rows to draw.
    pub n_scenarios: usize,
    /// Standard deviation of the additive Gaussian shocks.
    pub vol: f64,
    /// Shock seed; `None` means OS entropy (nondeterministic across runs).
    pub seed: Option<u64>,

    pub export_scenarios: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    /// Number of points in the sampled grid written to curve JSON.
    pub grid_points: usize,

    /// Write a markdown debug bundle next to the outputs.
    pub debug: bool,
}

impl RunConfig {
    /// Validate the generation parameters up front so failures surface
    /// before any fetching or fitting happens.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.tenors.is_empty() {
            return Err(CurveError::invalid_parameter("Tenor list is empty."));
        }
        if self.tenors.iter().any(|t| !t.is_finite()) {
            return Err(CurveError::invalid_parameter("Tenor list contains non-finite values."));
        }
        if !self.vol.is_finite() || self.vol < 0.0 {
            return Err(CurveError::invalid_parameter(format!(
                "Volatility must be a non-negative finite number (got {}).",
                self.vol
            )));
        }
        Ok(())
    }
}

/// An immutable scenario ensemble.
///
/// Rows are independent scenario draws, columns correspond to the tenor
/// query points. Built once by the generator; only accessors afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioMatrix {
    tenors: Vec<f64>,
    base: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl ScenarioMatrix {
    pub fn new(tenors: Vec<f64>, base: Vec<f64>, rows: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(tenors.len(), base.len());
        debug_assert!(rows.iter().all(|r| r.len() == tenors.len()));
        Self { tenors, base, rows }
    }

    /// Tenor query points (column labels), in years.
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Base curve evaluation at the tenor points (the unshocked row).
    pub fn base(&self) -> &[f64] {
        &self.base
    }

    pub fn n_scenarios(&self) -> usize {
        self.rows.len()
    }

    pub fn n_tenors(&self) -> usize {
        self.tenors.len()
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Values of one column (tenor index) across all scenarios.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[j]).collect()
    }
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub asof_date: NaiveDate,
    /// Fitted knots (tenor years + observed yields).
    pub knots: CurveGrid,
    /// Densely sampled fitted curve for quick plotting.
    pub grid: CurveGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub tenor_years: Vec<f64>,
    pub y: Vec<f64>,
}
