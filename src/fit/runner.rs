//! Run the model catalog over one dataset.
//!
//! Every requested model gets exactly one entry in the [`ResultSet`]: either
//! its [`FitResult`](crate::domain::FitResult) or the [`FitError`](crate::error::FitError)
//! that made it unfit. A failing model never aborts the run.
//!
//! Fits are independent pure functions of the dataset, so they run in parallel;
//! results land in an ordered map, which makes the output identical to a
//! sequential run.

use log::{debug, info};
use rayon::prelude::*;

use crate::domain::{Dataset, ModelKind, ModelOutcome, ResultSet};
use crate::fit::fitter::fit_model;

/// Fit every model in `models` (duplicates collapse to one entry).
pub fn run_models(data: &Dataset, models: &[ModelKind]) -> ResultSet {
    let outcomes: Vec<(ModelKind, ModelOutcome)> = models
        .par_iter()
        .map(|&model| (model, fit_model(model, data)))
        .collect();

    for (model, outcome) in &outcomes {
        match outcome {
            Ok(fit) => debug!(
                "{model}: R²={:.6} RMSE={:.6} ({})",
                fit.r_squared, fit.rmse, fit.equation
            ),
            Err(err) => info!("{model}: unfit ({err})"),
        }
    }

    outcomes.into_iter().collect()
}

/// Fit the whole catalog.
pub fn run_all(data: &Dataset) -> ResultSet {
    run_models(data, &ModelKind::ALL)
}
