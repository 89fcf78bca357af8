//! Shared "fit pipeline" logic used by the `fit` and `rank` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate config -> load points -> fit catalog -> rank
//!
//! The commands can then focus on presentation.

use log::{info, warn};

use crate::domain::{Dataset, FitConfig, ResultSet};
use crate::error::AppError;
use crate::fit::run_models;
use crate::io::ingest::{IngestedData, load_points};

/// All computed outputs of a single `lsq fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub results: ResultSet,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    config.validate()?;
    let ingest = load_points(config)?;
    let results = fit_dataset(&ingest.dataset, config);
    Ok(RunOutput { ingest, results })
}

/// Fit the requested models on an already loaded dataset.
pub fn fit_dataset(data: &Dataset, config: &FitConfig) -> ResultSet {
    let models = config.requested_models();
    info!("fitting {} model(s) on {} points", models.len(), data.len());

    let results = run_models(data, &models);
    let n_unfit = results.unfit().count();
    if n_unfit == results.len() {
        warn!("no model could be fit to the data");
    }
    results
}
