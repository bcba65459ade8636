//! Shared run-pipeline logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! source fetch -> latest snapshot -> normalize -> fit -> scenarios -> summary
//!
//! The CLI can then focus on presentation (printing, exports, plots).

use chrono::NaiveDate;

use crate::data::{CsvSource, FredClient, ObservationSource};
use crate::domain::{ObservationSet, RunConfig, ScenarioMatrix, SnapshotStats};
use crate::error::CurveError;
use crate::fit::CubicSpline;
use crate::report::{self, TenorSummary};
use crate::scen::{GaussianShocks, generate_scenarios};
use crate::time::year_fractions;

/// All computed outputs of a single run.
#[derive(Debug)]
pub struct RunOutput {
    pub snapshot: ObservationSet,
    pub stats: SnapshotStats,
    pub curve: CubicSpline,
    pub matrix: ScenarioMatrix,
    pub summary: Vec<TenorSummary>,
    /// Row-error warning from CSV ingest, if any rows were skipped.
    pub ingest_note: Option<String>,
}

/// Execute the full pipeline: fetch observations, then fit and generate.
pub fn run(config: &RunConfig) -> Result<RunOutput, CurveError> {
    config.validate()?;

    let (snapshots, ingest_note) = match &config.csv_path {
        Some(path) => {
            let ingested = CsvSource::new(path.clone()).load()?;
            let note = report::format_row_errors(
                ingested.rows_read,
                ingested.rows_used,
                ingested.row_errors.len(),
            );
            (ingested.snapshots, note)
        }
        None => {
            let client = FredClient::from_env()?;
            (client.fetch()?, None)
        }
    };

    run_with_snapshots(config, snapshots, ingest_note)
}

/// Execute the pipeline with pre-fetched snapshots.
///
/// This is what tests drive directly, and it lets callers refit without
/// re-fetching.
pub fn run_with_snapshots(
    config: &RunConfig,
    snapshots: Vec<ObservationSet>,
    ingest_note: Option<String>,
) -> Result<RunOutput, CurveError> {
    config.validate()?;

    // 1) Most recent snapshot wins.
    let snapshot = snapshots
        .into_iter()
        .max_by_key(|s| s.asof)
        .ok_or_else(|| CurveError::insufficient("Observation source returned no snapshots."))?;

    // 2) Strictly increasing maturities for the fitter.
    let observations = snapshot.sorted_deduped();

    // 3) Normalize dates to year fractions. The as-of date is included so it
    //    anchors the epoch: tenors read as years from the snapshot date.
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(observations.len() + 1);
    dates.push(snapshot.asof);
    dates.extend(observations.iter().map(|o| o.maturity));
    let fractions = year_fractions(&dates)?;
    let tenors = &fractions[1..];

    let values: Vec<f64> = observations.iter().map(|o| o.value).collect();

    // 4) Fit the interpolant.
    let curve = CubicSpline::fit(tenors, &values)?;
    let stats = SnapshotStats::from_points(tenors, &values)
        .ok_or_else(|| CurveError::invalid_input("Snapshot has non-finite points."))?;

    // 5) Generate the scenario ensemble.
    let mut shocks = GaussianShocks::from_config_seed(config.seed);
    let matrix = generate_scenarios(
        &curve,
        &config.tenors,
        config.n_scenarios,
        config.vol,
        &mut shocks,
    )?;
    let summary = report::summarize_columns(&matrix);

    Ok(RunOutput {
        snapshot: ObservationSet {
            asof: snapshot.asof,
            observations,
        },
        stats,
        curve,
        matrix,
        summary,
        ingest_note,
    })
}
