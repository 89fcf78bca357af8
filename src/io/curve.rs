//! Write fitted curves to JSON.
//!
//! The curves file is the portable representation of a run:
//! - tool name + creation time
//! - dataset stats
//! - per requested model: the full fit plus a dense evaluation grid over
//!   `[min(x), max(x)]` for plotting, or the reason it is unfit

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{DatasetStats, FitResult, ModelKind, ResultSet};
use crate::error::{AppError, FitError};
use crate::models::predict;

#[derive(Debug, Clone, Serialize)]
pub struct CurvesFile<'a> {
    pub tool: &'static str,
    pub created_at: DateTime<Utc>,
    pub dataset: DatasetStats,
    pub best: Option<ModelKind>,
    pub models: Vec<CurveEntry<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurveEntry<'a> {
    pub model: ModelKind,
    #[serde(flatten)]
    pub status: CurveStatus<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CurveStatus<'a> {
    Fit { fit: &'a FitResult, grid: CurveGrid },
    Unfit { reason: String, error: &'a FitError },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Assemble the curves document for a run.
pub fn build_curves_file<'a>(
    stats: DatasetStats,
    results: &'a ResultSet,
    grid_points: usize,
) -> CurvesFile<'a> {
    let models = results
        .iter()
        .map(|(model, outcome)| CurveEntry {
            model,
            status: match outcome {
                Ok(fit) => CurveStatus::Fit {
                    fit,
                    grid: build_grid(fit, stats.x_min, stats.x_max, grid_points),
                },
                Err(error) => CurveStatus::Unfit {
                    reason: error.to_string(),
                    error,
                },
            },
        })
        .collect();

    CurvesFile {
        tool: "lsq",
        created_at: Utc::now(),
        dataset: stats,
        best: results.best().map(|f| f.model),
        models,
    }
}

/// Write a curves JSON file.
pub fn write_curves_json(
    path: &Path,
    stats: DatasetStats,
    results: &ResultSet,
    grid_points: usize,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curves JSON '{}': {e}", path.display())))?;

    let curves = build_curves_file(stats, results, grid_points);
    serde_json::to_writer_pretty(file, &curves)
        .map_err(|e| AppError::new(2, format!("Failed to write curves JSON: {e}")))?;

    Ok(())
}

/// Evenly spaced samples of the fitted model; non-finite samples are dropped.
pub fn build_grid(fit: &FitResult, x_min: f64, x_max: f64, n: usize) -> CurveGrid {
    let n = n.max(2);
    let mut grid = CurveGrid::default();
    if !(x_min.is_finite() && x_max.is_finite()) || x_max < x_min {
        return grid;
    }

    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x_min + u * (x_max - x_min);
        let y = predict(fit.model, x, &fit.coefficients);
        if y.is_finite() {
            grid.x.push(x);
            grid.y.push(y);
        }
    }

    grid
}
