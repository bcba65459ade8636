//! Command-line parsing for the term-structure scenario generator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tsg", version, about = "Term-Structure Scenario Generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the curve from the latest snapshot and print/plot it.
    Fit(RunArgs),
    /// Fit the curve and generate a shocked scenario ensemble.
    Scen(RunArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Common options for fitting and scenario generation.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Observation CSV (columns: date,maturity,yield). Omit to fetch from FRED.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Tenor query points in years (comma separated).
    #[arg(long, value_delimiter = ',', default_values_t = [1.0, 2.0, 5.0, 10.0])]
    pub tenors: Vec<f64>,

    /// Number of scenarios to generate.
    #[arg(short = 'n', long = "scenarios", default_value_t = 1000)]
    pub n_scenarios: usize,

    /// Standard deviation of the additive Gaussian shocks.
    #[arg(long, default_value_t = 0.01)]
    pub vol: f64,

    /// Shock seed for reproducible ensembles; omit for OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the scenario matrix to CSV (tenors as column headers).
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the fitted curve (knots + sampled grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Number of points in the sampled grid written to curve JSON.
    #[arg(long, default_value_t = 101)]
    pub grid_points: usize,

    /// Write a markdown debug bundle under ./debug.
    #[arg(long)]
    pub debug: bool,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `tsg fit --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scen_defaults_match_documented_configuration() {
        let cli = Cli::parse_from(["tsg", "scen"]);
        let Command::Scen(args) = cli.command else {
            panic!("expected scen subcommand");
        };
        assert_eq!(args.tenors, vec![1.0, 2.0, 5.0, 10.0]);
        assert_eq!(args.n_scenarios, 1000);
        assert_eq!(args.vol, 0.01);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn tenors_parse_as_comma_list() {
        let cli = Cli::parse_from(["tsg", "scen", "--tenors", "0.5,1,7.5"]);
        let Command::Scen(args) = cli.command else {
            panic!("expected scen subcommand");
        };
        assert_eq!(args.tenors, vec![0.5, 1.0, 7.5]);
    }

    #[test]
    fn negative_scenario_count_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["tsg", "scen", "-n", "-5"]);
        assert!(result.is_err());
    }
}
