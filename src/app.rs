//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the fit/scenario pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, PlotArgs, RunArgs};
use crate::domain::RunConfig;
use crate::error::CurveError;

pub mod pipeline;

/// Entry point for the `tsg` binary.
pub fn run() -> Result<(), CurveError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Fit(args) => handle_run(args, OutputMode::CurveOnly),
        Command::Scen(args) => handle_run(args, OutputMode::Scenarios),
        Command::Plot(args) => handle_plot(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    /// Fit and show the curve; skip scenario draws.
    CurveOnly,
    /// Full run: curve plus the shocked ensemble.
    Scenarios,
}

fn handle_run(args: RunArgs, mode: OutputMode) -> Result<(), CurveError> {
    let mut config = run_config_from_args(&args);
    if mode == OutputMode::CurveOnly {
        // `fit` reuses the pipeline with an empty ensemble; the scenario
        // edge case (0 rows, full column count) makes this free.
        config.n_scenarios = 0;
    }

    let run = pipeline::run(&config)?;

    if let Some(note) = &run.ingest_note {
        eprintln!("{note}");
    }

    println!(
        "{}",
        crate::report::format_run_summary(run.snapshot.asof, &run.stats, &config)
    );
    if mode == OutputMode::Scenarios {
        println!("{}", crate::report::format_tenor_table(&run.summary));
    }

    if config.plot {
        let x = run.curve.knots_x();
        let (grid_t, grid_y) =
            crate::io::curve::build_grid(&run.curve, x[0], x[x.len() - 1], config.plot_width);
        let line: Vec<(f64, f64)> = grid_t.into_iter().zip(grid_y).collect();
        let knots: Vec<(f64, f64)> = x.iter().copied().zip(run.curve.knots_y().iter().copied()).collect();
        let band = match mode {
            OutputMode::Scenarios if run.matrix.n_scenarios() > 0 => Some(run.summary.as_slice()),
            _ => None,
        };
        let plot =
            crate::plot::render_ascii_plot(&line, &knots, band, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    if let Some(path) = &config.export_scenarios {
        crate::io::export::write_scenarios_csv(path, &run.matrix)?;
    }
    if let Some(path) = &config.export_curve {
        crate::io::curve::write_curve_json(path, &run.curve, run.snapshot.asof, config.grid_points)?;
    }
    if config.debug {
        let path = crate::debug::write_debug_bundle(&run, &config)?;
        eprintln!("Debug bundle written to {}", path.display());
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), CurveError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_ascii_plot_from_curve_file(&curve, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn run_config_from_args(args: &RunArgs) -> RunConfig {
    RunConfig {
        csv_path: args.csv.clone(),
        tenors: args.tenors.clone(),
        n_scenarios: args.n_scenarios,
        vol: args.vol,
        seed: args.seed,
        export_scenarios: args.export.clone(),
        export_curve: args.export_curve.clone(),
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        grid_points: args.grid_points,
        debug: args.debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_plot_flag_overrides_the_default() {
        let cli = crate::cli::Cli::parse_from(["tsg", "scen", "--no-plot"]);
        let Command::Scen(args) = cli.command else {
            panic!("expected scen subcommand");
        };
        let config = run_config_from_args(&args);
        assert!(!config.plot);
    }

    #[test]
    fn config_carries_generation_parameters() {
        let cli = crate::cli::Cli::parse_from([
            "tsg", "scen", "-n", "250", "--vol", "0.02", "--seed", "9",
        ]);
        let Command::Scen(args) = cli.command else {
            panic!("expected scen subcommand");
        };
        let config = run_config_from_args(&args);
        assert_eq!(config.n_scenarios, 250);
        assert_eq!(config.vol, 0.02);
        assert_eq!(config.seed, Some(9));
    }
}
