//! Linearizing transforms for the nonlinear families.
//!
//! Each nonlinear model becomes a straight line after taking logs of one or
//! both axes. The linear model itself is the identity case.
//!
//! | model       | fit line on    | back-transform           |
//! |-------------|----------------|--------------------------|
//! | linear      | `(x, y)`       | `a = intercept, b = slope`   |
//! | exponential | `(x, ln y)`    | `a = e^intercept, b = slope` |
//! | logarithmic | `(ln x, y)`    | `a = intercept, b = slope`   |
//! | power       | `(ln x, ln y)` | `a = e^intercept, b = slope` |
//!
//! The line is fitted with the closed-form [`fit_line`]. Domain checks happen
//! before any log is taken.

use crate::domain::ModelKind;
use crate::error::FitError;
use crate::math::{LineFit, fit_line};
use crate::models::check_domain;

/// Per-axis variable substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisTransform {
    Identity,
    Ln,
}

impl AxisTransform {
    fn apply(self, values: &[f64]) -> Vec<f64> {
        match self {
            AxisTransform::Identity => values.to_vec(),
            AxisTransform::Ln => values.iter().map(|v| v.ln()).collect(),
        }
    }
}

/// The substitution that turns a model into `y' = intercept + slope * x'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linearization {
    pub x: AxisTransform,
    pub y: AxisTransform,
}

impl Linearization {
    /// `None` for quadratic and cubic, which go through the normal equations.
    pub fn for_model(model: ModelKind) -> Option<Self> {
        use AxisTransform::{Identity, Ln};
        match model {
            ModelKind::Quadratic | ModelKind::Cubic => None,
            ModelKind::Linear => Some(Self { x: Identity, y: Identity }),
            ModelKind::Exponential => Some(Self { x: Identity, y: Ln }),
            ModelKind::Logarithmic => Some(Self { x: Ln, y: Identity }),
            ModelKind::Power => Some(Self { x: Ln, y: Ln }),
        }
    }

    /// Map the fitted line back to the model's `[a, b]`.
    pub fn back_transform(self, line: LineFit) -> [f64; 2] {
        let a = match self.y {
            AxisTransform::Identity => line.intercept,
            AxisTransform::Ln => line.intercept.exp(),
        };
        [a, line.slope]
    }

    /// Fit `model` through this substitution, returning its `[a, b]`.
    pub fn fit(self, model: ModelKind, x: &[f64], y: &[f64]) -> Result<[f64; 2], FitError> {
        check_domain(model, x, y)?;
        let line = fit_line(&self.x.apply(x), &self.y.apply(y))?;
        Ok(self.back_transform(line))
    }
}
