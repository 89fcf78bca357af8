//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - rendered by the text reports

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, FitError};
use crate::metrics::{PearsonBand, RSquaredBand};

/// Default lower bound on the number of points accepted from input files.
pub const DEFAULT_MIN_POINTS: usize = 8;
/// Default upper bound on the number of points accepted from input files.
pub const DEFAULT_MAX_POINTS: usize = 11;
/// Default number of samples in exported evaluation grids.
pub const DEFAULT_GRID_POINTS: usize = 101;

/// One observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

/// An ordered, validated set of observations.
///
/// Construction guarantees matching lengths, at least two points and finite
/// values; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    pub fn from_xy(x: Vec<f64>, y: Vec<f64>) -> Result<Self, AppError> {
        if x.len() != y.len() {
            return Err(AppError::new(
                2,
                format!("x/y length mismatch: {} x values, {} y values.", x.len(), y.len()),
            ));
        }
        if x.len() < 2 {
            return Err(AppError::new(2, "At least 2 points are required."));
        }
        if let Some(i) = x
            .iter()
            .zip(&y)
            .position(|(a, b)| !(a.is_finite() && b.is_finite()))
        {
            return Err(AppError::new(2, format!("Point {} is not finite.", i + 1)));
        }
        Ok(Self { x, y })
    }

    pub fn from_points(points: &[DataPoint]) -> Result<Self, AppError> {
        Self::from_xy(
            points.iter().map(|p| p.x).collect(),
            points.iter().map(|p| p.y).collect(),
        )
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| DataPoint { x, y })
    }

    pub fn stats(&self) -> DatasetStats {
        let (x_min, x_max) = min_max(&self.x);
        let (y_min, y_max) = min_max(&self.y);
        DatasetStats {
            n_points: self.len(),
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// Summary stats about a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// The six model families in the catalog.
///
/// Declaration order is the catalog order (simplest first) and is used as the
/// final ranking tie-breaker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Linear,
    Quadratic,
    Cubic,
    Exponential,
    Logarithmic,
    Power,
}

impl ModelKind {
    pub const ALL: [ModelKind; 6] = [
        ModelKind::Linear,
        ModelKind::Quadratic,
        ModelKind::Cubic,
        ModelKind::Exponential,
        ModelKind::Logarithmic,
        ModelKind::Power,
    ];

    /// Stable lowercase key used in result sets and exports.
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Quadratic => "quadratic",
            ModelKind::Cubic => "cubic",
            ModelKind::Exponential => "exponential",
            ModelKind::Logarithmic => "logarithmic",
            ModelKind::Power => "power",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear",
            ModelKind::Quadratic => "Quadratic",
            ModelKind::Cubic => "Cubic",
            ModelKind::Exponential => "Exponential",
            ModelKind::Logarithmic => "Logarithmic",
            ModelKind::Power => "Power",
        }
    }

    /// Number of fitted coefficients.
    pub fn param_count(self) -> usize {
        match self {
            ModelKind::Quadratic => 3,
            ModelKind::Cubic => 4,
            ModelKind::Linear | ModelKind::Exponential | ModelKind::Logarithmic | ModelKind::Power => 2,
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pearson correlation of the raw data, reported with the linear model only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlation {
    pub pearson: f64,
    pub band: PearsonBand,
}

/// Everything computed for one successfully fitted model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult {
    pub model: ModelKind,
    pub coefficients: Vec<f64>,
    pub equation: String,
    /// Model evaluated at each input x, in input order.
    pub predicted: Vec<f64>,
    /// `predicted - observed`, in input order.
    pub residuals: Vec<f64>,
    pub mse: f64,
    pub rmse: f64,
    pub r_squared: f64,
    pub r_squared_band: RSquaredBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<Correlation>,
}

/// Per-model outcome of a run.
pub type ModelOutcome = Result<FitResult, FitError>;

/// Outcome for every requested model, keyed in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    entries: BTreeMap<ModelKind, ModelOutcome>,
}

impl ResultSet {
    pub fn insert(&mut self, model: ModelKind, outcome: ModelOutcome) {
        self.entries.insert(model, outcome);
    }

    pub fn get(&self, model: ModelKind) -> Option<&ModelOutcome> {
        self.entries.get(&model)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModelKind, &ModelOutcome)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn fitted(&self) -> impl Iterator<Item = &FitResult> + '_ {
        self.entries.values().filter_map(|o| o.as_ref().ok())
    }

    pub fn unfit(&self) -> impl Iterator<Item = (ModelKind, &FitError)> + '_ {
        self.entries
            .iter()
            .filter_map(|(k, o)| o.as_ref().err().map(|e| (*k, e)))
    }
}

impl FromIterator<(ModelKind, ModelOutcome)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (ModelKind, ModelOutcome)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus environment defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub input: PathBuf,
    pub models: Vec<ModelKind>,
    pub min_points: usize,
    pub max_points: usize,
    pub grid_points: usize,
    pub export_results: Option<PathBuf>,
    pub export_curves: Option<PathBuf>,
}

impl FitConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.min_points < 2 {
            return Err(AppError::new(2, "min-points must be >= 2."));
        }
        if self.min_points > self.max_points {
            return Err(AppError::new(
                2,
                format!(
                    "min-points ({}) must not exceed max-points ({}).",
                    self.min_points, self.max_points
                ),
            ));
        }
        if self.grid_points < 2 {
            return Err(AppError::new(2, "grid-points must be >= 2."));
        }
        Ok(())
    }

    /// Requested models, or the whole catalog when none were named.
    pub fn requested_models(&self) -> Vec<ModelKind> {
        if self.models.is_empty() {
            ModelKind::ALL.to_vec()
        } else {
            self.models.clone()
        }
    }
}
