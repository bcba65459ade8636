//! Debug bundle writer for inspecting snapshot inputs and scenario outputs.
//!
//! Produces a timestamped markdown file under `./debug` with everything
//! needed to reason about a run offline: the snapshot, the fitted knots, a
//! sampled curve grid, and the per-tenor scenario distribution.

use std::fs::create_dir_all;
use std::path::PathBuf;

use chrono::Local;

use crate::app::pipeline::RunOutput;
use crate::domain::RunConfig;
use crate::error::CurveError;
use crate::io::curve::build_grid;

pub fn write_debug_bundle(run: &RunOutput, config: &RunConfig) -> Result<PathBuf, CurveError> {
    let dir = PathBuf::from("debug");
    create_dir_all(&dir)
        .map_err(|e| CurveError::source(format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let date = run.snapshot.asof.format("%Y%m%d");
    let path = dir.join(format!("tsg_debug_{date}_{ts}.md"));

    let body = render_bundle(run, config);
    std::fs::write(&path, body)
        .map_err(|e| CurveError::source(format!("Failed to write debug bundle: {e}")))?;

    Ok(path)
}

fn render_bundle(run: &RunOutput, config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("# tsg debug bundle\n");
    out.push_str(&format!("- generated: {}\n", Local::now().to_rfc3339()));
    out.push_str(&format!("- snapshot_date: {}\n", run.snapshot.asof));
    out.push_str(&format!(
        "- knots: {} | tenor_range: {:.2}..{:.2}\n",
        run.stats.n_points, run.stats.tenor_min, run.stats.tenor_max
    ));
    out.push_str(&format!(
        "- scenarios: {} | vol: {:.4} | seed: {:?}\n",
        config.n_scenarios, config.vol, config.seed
    ));
    out.push_str(&format!("- tenor_queries: {:?}\n", config.tenors));

    out.push_str("\n## Knots\n");
    out.push_str("| tenor_y | yield |\n");
    out.push_str("| - | - |\n");
    for (&t, &y) in run.curve.knots_x().iter().zip(run.curve.knots_y().iter()) {
        out.push_str(&format!("| {t:.4} | {y:.6} |\n"));
    }

    out.push_str("\n## Fitted grid\n");
    out.push_str("| tenor_y | yield |\n");
    out.push_str("| - | - |\n");
    let x = run.curve.knots_x();
    let (grid_t, grid_y) = build_grid(&run.curve, x[0], x[x.len() - 1], 21);
    for (&t, &y) in grid_t.iter().zip(grid_y.iter()) {
        out.push_str(&format!("| {t:.4} | {y:.6} |\n"));
    }

    out.push_str("\n## Scenario distribution\n");
    out.push_str("| tenor_y | base | mean | std_dev | p05 | p95 |\n");
    out.push_str("| - | - | - | - | - | - |\n");
    for s in &run.summary {
        out.push_str(&format!(
            "| {:.4} | {:.6} | {:.6} | {:.6} | {:.6} | {:.6} |\n",
            s.tenor, s.base, s.mean, s.std_dev, s.p05, s.p95
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_with_snapshots;
    use crate::domain::{Observation, ObservationSet};
    use chrono::{Duration, NaiveDate};

    #[test]
    fn bundle_lists_knots_and_summary() {
        let asof = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let snap = ObservationSet {
            asof,
            observations: [(1.0, 0.015), (5.0, 0.025), (10.0, 0.03)]
                .iter()
                .map(|&(t, v)| Observation {
                    maturity: asof + Duration::days((t * 365.25_f64).round() as i64),
                    value: v,
                })
                .collect(),
        };
        let config = RunConfig {
            csv_path: None,
            tenors: vec![2.0, 7.0],
            n_scenarios: 10,
            vol: 0.01,
            seed: Some(1),
            export_scenarios: None,
            export_curve: None,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            grid_points: 101,
            debug: true,
        };
        let run = run_with_snapshots(&config, vec![snap], None).unwrap();

        let body = render_bundle(&run, &config);
        assert!(body.contains("# tsg debug bundle"));
        assert!(body.contains("## Knots"));
        assert!(body.contains("## Scenario distribution"));
        // One distribution row per tenor query.
        assert!(body.contains("| 2.0000 |"));
        assert!(body.contains("| 7.0000 |"));
        assert_eq!(run.summary.len(), 2);
    }
}
