//! Ranking fitted models by goodness of fit.
//!
//! Ordering rules:
//! 1. Higher R² first
//! 2. On equal R², lower RMSE first
//! 3. On a full tie, the simpler model (catalog order) first

use std::cmp::Ordering;

use crate::domain::{FitResult, ResultSet};

impl ResultSet {
    /// Fitted models, best first. Unfit models are not ranked.
    pub fn ranked(&self) -> Vec<&FitResult> {
        let mut fits: Vec<&FitResult> = self.fitted().collect();
        fits.sort_by(|a, b| compare_fits(a, b));
        fits
    }

    /// The top-ranked model, if anything could be fit.
    pub fn best(&self) -> Option<&FitResult> {
        self.ranked().into_iter().next()
    }
}

fn compare_fits(a: &FitResult, b: &FitResult) -> Ordering {
    b.r_squared
        .total_cmp(&a.r_squared)
        .then_with(|| a.rmse.total_cmp(&b.rmse))
        .then_with(|| a.model.cmp(&b.model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;
    use crate::error::FitError;
    use crate::metrics::RSquaredBand;

    fn fit(model: ModelKind, r_squared: f64, rmse: f64) -> FitResult {
        FitResult {
            model,
            coefficients: vec![],
            equation: String::new(),
            predicted: vec![],
            residuals: vec![],
            mse: rmse * rmse,
            rmse,
            r_squared,
            r_squared_band: RSquaredBand::from_r_squared(r_squared),
            correlation: None,
        }
    }

    #[test]
    fn ranks_by_r_squared_then_rmse_then_simplicity() {
        let results: ResultSet = [
            (ModelKind::Linear, Ok(fit(ModelKind::Linear, 0.90, 1.0))),
            (ModelKind::Cubic, Ok(fit(ModelKind::Cubic, 0.99, 0.2))),
            (ModelKind::Quadratic, Ok(fit(ModelKind::Quadratic, 0.99, 0.2))),
            (ModelKind::Power, Ok(fit(ModelKind::Power, 0.99, 0.1))),
            (ModelKind::Exponential, Err(FitError::SingularMatrix)),
        ]
        .into_iter()
        .collect();

        let order: Vec<ModelKind> = results.ranked().iter().map(|f| f.model).collect();
        assert_eq!(
            order,
            [ModelKind::Power, ModelKind::Quadratic, ModelKind::Cubic, ModelKind::Linear]
        );
        assert_eq!(results.best().map(|f| f.model), Some(ModelKind::Power));
    }

    #[test]
    fn best_is_none_when_nothing_fits() {
        let results: ResultSet = [(ModelKind::Power, Err::<FitResult, _>(FitError::SingularMatrix))]
            .into_iter()
            .collect();
        assert!(results.best().is_none());
        assert_eq!(results.unfit().count(), 1);
    }
}
