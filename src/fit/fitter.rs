//! Fitting routine for a single model kind.
//!
//! Given a dataset and a model kind we:
//! - obtain coefficients (normal equations for quadratic/cubic, a fitted line
//!   through the model's linearizing substitution otherwise)
//! - evaluate the *original* model at the original x values
//! - score those predictions against the original y values
//!
//! Scoring in the original space matters for the log-transformed families: the
//! line fit minimizes error in `ln y`, but users care about error in `y`.

use crate::domain::{Correlation, Dataset, FitResult, ModelKind};
use crate::error::FitError;
use crate::fit::transform::Linearization;
use crate::math::fit_polynomial;
use crate::metrics::{PearsonBand, evaluate, pearson};
use crate::models::{format_equation, predict};

/// Fit one model to the dataset.
///
/// Any failure (domain, singular system, non-finite numbers) is returned as a
/// [`FitError`]; the result is all-or-nothing.
pub fn fit_model(model: ModelKind, data: &Dataset) -> Result<FitResult, FitError> {
    let x = data.x();
    let y = data.y();

    let coefficients = fit_coefficients(model, x, y)?;
    if !coefficients.iter().all(|c| c.is_finite()) {
        return Err(FitError::NonFinite { stage: "coefficients" });
    }

    let predicted: Vec<f64> = x.iter().map(|&xi| predict(model, xi, &coefficients)).collect();
    if !predicted.iter().all(|p| p.is_finite()) {
        return Err(FitError::NonFinite { stage: "predictions" });
    }

    let score = evaluate(y, &predicted);
    if !score.is_finite() {
        return Err(FitError::NonFinite { stage: "metrics" });
    }

    let correlation = match model {
        ModelKind::Linear => {
            let r = pearson(x, y);
            Some(Correlation {
                pearson: r,
                band: PearsonBand::from_pearson(r),
            })
        }
        _ => None,
    };

    Ok(FitResult {
        model,
        equation: format_equation(model, &coefficients),
        coefficients,
        predicted,
        residuals: score.residuals,
        mse: score.mse,
        rmse: score.rmse,
        r_squared: score.r_squared,
        r_squared_band: score.r_squared_band,
        correlation,
    })
}

fn fit_coefficients(model: ModelKind, x: &[f64], y: &[f64]) -> Result<Vec<f64>, FitError> {
    match Linearization::for_model(model) {
        Some(lin) => lin.fit(model, x, y).map(|ab| ab.to_vec()),
        None => fit_polynomial(x, y, model.param_count() - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(f: impl Fn(f64) -> f64) -> Dataset {
        let x: Vec<f64> = (1..=8).map(f64::from).collect();
        let y = x.iter().map(|&xi| f(xi)).collect();
        Dataset::from_xy(x, y).unwrap()
    }

    #[test]
    fn linear_fit_on_exact_line() {
        let data = dataset(|x| 2.0 * x + 3.0);
        let fit = fit_model(ModelKind::Linear, &data).unwrap();

        assert!((fit.coefficients[0] - 3.0).abs() < 1e-9);
        assert!((fit.coefficients[1] - 2.0).abs() < 1e-9);
        assert!(fit.rmse < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
        assert_eq!(fit.equation, "3.0000 + 2.0000 * x");

        let corr = fit.correlation.unwrap();
        assert!((corr.pearson - 1.0).abs() < 1e-12);
        assert_eq!(corr.band, PearsonBand::VeryStrong);
    }

    #[test]
    fn only_linear_reports_correlation() {
        let data = dataset(|x| x * x + 1.0);
        let fit = fit_model(ModelKind::Quadratic, &data).unwrap();
        assert!(fit.correlation.is_none());
        assert_eq!(fit.coefficients.len(), 3);
    }

    #[test]
    fn exponential_metrics_are_in_original_space() {
        let data = dataset(|x| 2.0 * (0.5 * x).exp());
        let fit = fit_model(ModelKind::Exponential, &data).unwrap();

        for (p, y) in fit.predicted.iter().zip(data.y()) {
            assert!((p - y).abs() < 1e-6 * y.abs());
        }
        assert!((fit.coefficients[0] - 2.0).abs() < 1e-3);
        assert!((fit.coefficients[1] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn non_positive_y_is_unfit_for_exponential() {
        let data = dataset(|x| x - 3.0);
        assert!(matches!(
            fit_model(ModelKind::Exponential, &data),
            Err(FitError::DomainViolation { .. })
        ));
    }

    #[test]
    fn overflowing_metrics_are_unfit() {
        // The log-line fit is finite, but squared residuals near 1e300 overflow.
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 800.0];
        let y = vec![1.0, 1e10, 1e20, 1e30, 1e40, 1e50, 1e60, 1e300];
        let data = Dataset::from_xy(x, y).unwrap();
        let err = fit_model(ModelKind::Exponential, &data).unwrap_err();
        assert!(matches!(err, FitError::NonFinite { .. }), "got {err:?}");
    }
}
