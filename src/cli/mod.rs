//! Command-line parsing for the least-squares curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.
//!
//! Point-count bounds and grid density can also come from the environment
//! (`LSQ_MIN_POINTS`, `LSQ_MAX_POINTS`, `LSQ_GRID_POINTS`), including a `.env` file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_GRID_POINTS, DEFAULT_MAX_POINTS, DEFAULT_MIN_POINTS, ModelKind};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lsq", version, about = "Least-squares fits of linear, polynomial, exponential, logarithmic and power models")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit every model, print the summary, and optionally export.
    Fit(FitArgs),
    /// Print the goodness-of-fit ranking only (useful for scripting).
    Rank(FitArgs),
    /// Generate a synthetic dataset from one model (text layout, one `x y` per line).
    Sample(SampleArgs),
}

/// Common options for fitting and ranking.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Point file: `x y` per line, or a `.csv` with `x`,`y` columns. `-` reads stdin.
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Model(s) to fit; repeat the flag or comma-separate. Defaults to all six.
    #[arg(short, long = "model", value_enum, value_delimiter = ',')]
    pub models: Vec<ModelKind>,

    /// Minimum number of points accepted from the input.
    #[arg(long, env = "LSQ_MIN_POINTS", default_value_t = DEFAULT_MIN_POINTS)]
    pub min_points: usize,

    /// Maximum number of points accepted from the input.
    #[arg(long, env = "LSQ_MAX_POINTS", default_value_t = DEFAULT_MAX_POINTS)]
    pub max_points: usize,

    /// Samples per curve in the exported evaluation grid.
    #[arg(long, env = "LSQ_GRID_POINTS", default_value_t = DEFAULT_GRID_POINTS)]
    pub grid_points: usize,

    /// Export per-point fitted values and residuals to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export fitted curves (coefficients, metrics, evaluation grid) to JSON.
    #[arg(long = "export-curves")]
    pub export_curves: Option<PathBuf>,
}

/// Options for synthetic sample generation.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    /// Model to sample from.
    #[arg(short, long, value_enum)]
    pub model: ModelKind,

    /// Model coefficients, comma-separated (`a0,a1,...` for polynomials, `a,b` otherwise).
    #[arg(short, long = "coef", value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub coefficients: Vec<f64>,

    /// Number of points.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Smallest x value.
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub x_min: f64,

    /// Largest x value.
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    pub x_max: f64,

    /// Relative Gaussian noise (standard deviation as a fraction of y).
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed for the noise.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write points to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_defaults_to_all_models_and_bounds() {
        let cli = Cli::try_parse_from(["lsq", "fit", "--input", "points.txt"]).unwrap();
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert!(args.models.is_empty());
        assert_eq!(args.grid_points, DEFAULT_GRID_POINTS);
    }

    #[test]
    fn models_accept_commas() {
        let cli = Cli::try_parse_from(["lsq", "rank", "-i", "-", "--model", "linear,power"]).unwrap();
        let Command::Rank(args) = cli.command else {
            panic!("expected rank");
        };
        assert_eq!(args.models, vec![ModelKind::Linear, ModelKind::Power]);
    }

    #[test]
    fn sample_accepts_negative_coefficients() {
        let cli = Cli::try_parse_from([
            "lsq", "sample", "--model", "quadratic", "--coef", "-1,0.5,2", "--x-min", "-3",
        ])
        .unwrap();
        let Command::Sample(args) = cli.command else {
            panic!("expected sample");
        };
        assert_eq!(args.coefficients, vec![-1.0, 0.5, 2.0]);
        assert_eq!(args.x_min, -3.0);
    }
}
