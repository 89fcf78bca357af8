//! Synthetic dataset generation from a catalog model.
//!
//! x values are evenly spaced over `[x_min, x_max]`; y is the model value with
//! optional relative Gaussian noise:
//!
//! `y_i = f(x_i) * (1 + noise * z_i)`,  `z_i ~ N(0, 1)`
//!
//! The generator is seeded, so the same config always yields the same points.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Dataset, ModelKind};
use crate::error::{AppError, Axis};
use crate::models::{positive_axes, predict};

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub model: ModelKind,
    pub coefficients: Vec<f64>,
    pub count: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Relative standard deviation of the noise (0 = exact model values).
    pub noise: f64,
    pub seed: u64,
}

pub fn generate_sample(config: &SampleConfig) -> Result<Dataset, AppError> {
    let model = config.model;
    if config.coefficients.len() != model.param_count() {
        return Err(AppError::new(
            2,
            format!(
                "Model {model} takes {} coefficients, got {}.",
                model.param_count(),
                config.coefficients.len()
            ),
        ));
    }
    if !config.coefficients.iter().all(|c| c.is_finite()) {
        return Err(AppError::new(2, "Coefficients must be finite."));
    }
    if config.count < 2 {
        return Err(AppError::new(2, "Sample count must be >= 2."));
    }
    if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_max > config.x_min) {
        return Err(AppError::new(2, "Invalid x range for sample generation."));
    }
    if positive_axes(model).contains(&Axis::X) && config.x_min <= 0.0 {
        return Err(AppError::new(2, format!("Model {model} needs x_min > 0.")));
    }
    if !(config.noise.is_finite() && config.noise >= 0.0) {
        return Err(AppError::new(2, "Noise must be finite and >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(2, format!("Noise distribution error: {e}")))?;

    let step = (config.x_max - config.x_min) / (config.count as f64 - 1.0);
    let mut x = Vec::with_capacity(config.count);
    let mut y = Vec::with_capacity(config.count);
    for i in 0..config.count {
        let xi = config.x_min + step * i as f64;
        let clean = predict(model, xi, &config.coefficients);
        let z: f64 = normal.sample(&mut rng);
        x.push(xi);
        y.push(clean * (1.0 + config.noise * z));
    }

    Dataset::from_xy(x, y)
}
