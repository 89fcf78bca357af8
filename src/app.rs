//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and parses CLI arguments
//! - reads the point file
//! - runs the model catalog + ranking
//! - prints reports
//! - writes optional exports

use std::fs::File;
use std::io::Write;

use clap::Parser;

use crate::cli::{Command, FitArgs, SampleArgs};
use crate::data::{SampleConfig, generate_sample};
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lsq` binary.
pub fn run() -> Result<(), AppError> {
    // Missing `.env` is fine; it only feeds `LSQ_*` defaults.
    dotenvy::dotenv().ok();
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Fit(args) => handle_fit(args, OutputMode::Full),
        Command::Rank(args) => handle_fit(args, OutputMode::RankOnly),
        Command::Sample(args) => handle_sample(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    RankOnly,
}

fn handle_fit(args: FitArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    match mode {
        OutputMode::Full => {
            println!(
                "{}",
                crate::report::format_run_summary(&run.ingest.source, &run.ingest.stats, &run.results)
            );
            println!("{}", crate::report::format_rankings(&run.results));
        }
        OutputMode::RankOnly => print!("{}", crate::report::format_rankings(&run.results)),
    }

    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run.ingest.dataset, &run.results)?;
    }
    if let Some(path) = &config.export_curves {
        crate::io::curve::write_curves_json(path, run.ingest.stats, &run.results, config.grid_points)?;
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = SampleConfig {
        model: args.model,
        coefficients: args.coefficients,
        count: args.count,
        x_min: args.x_min,
        x_max: args.x_max,
        noise: args.noise,
        seed: args.seed,
    };
    let data = generate_sample(&config)?;

    match &args.output {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| {
                AppError::new(2, format!("Failed to create '{}': {e}", path.display()))
            })?;
            crate::io::export::write_points(&mut file, &data)
                .and_then(|()| file.flush())
                .map_err(|e| AppError::new(2, format!("Failed to write points: {e}")))?;
        }
        None => {
            let stdout = std::io::stdout();
            crate::io::export::write_points(&mut stdout.lock(), &data)
                .map_err(|e| AppError::new(2, format!("Failed to write points: {e}")))?;
        }
    }

    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        input: args.input.clone(),
        models: args.models.clone(),
        min_points: args.min_points,
        max_points: args.max_points,
        grid_points: args.grid_points,
        export_results: args.export.clone(),
        export_curves: args.export_curves.clone(),
    }
}
