//! Goodness-of-fit metrics.
//!
//! All metrics are computed in the original (untransformed) space:
//!
//! - residuals `e_i = ŷ_i - y_i`
//! - `MSE = Σe²/n`, `RMSE = √MSE`
//! - `R² = 1 - SS_res/SS_tot`, with `R² = 1` when y is constant
//! - Pearson `r = Σ(x-x̄)(y-ȳ) / √(Σ(x-x̄)² Σ(y-ȳ)²)`, `0` when x or y is constant
//!
//! Constant inputs are detected on the raw values: for a constant like `0.1`
//! the mean is inexact and the sums of squares come out tiny but non-zero.

use serde::Serialize;

use crate::math::is_constant;
use crate::metrics::bands::RSquaredBand;

/// Metrics for one set of predictions against the observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoodnessOfFit {
    pub residuals: Vec<f64>,
    pub mse: f64,
    pub rmse: f64,
    pub r_squared: f64,
    pub r_squared_band: RSquaredBand,
}

impl GoodnessOfFit {
    pub fn is_finite(&self) -> bool {
        self.mse.is_finite() && self.rmse.is_finite() && self.r_squared.is_finite()
    }
}

/// Score `predicted` against `observed` (same length, same order).
pub fn evaluate(observed: &[f64], predicted: &[f64]) -> GoodnessOfFit {
    debug_assert_eq!(observed.len(), predicted.len());

    let residuals = residuals(observed, predicted);
    let ss_res: f64 = residuals.iter().map(|e| e * e).sum();
    let mse = ss_res / observed.len() as f64;
    let r_squared = r_squared(observed, ss_res);

    GoodnessOfFit {
        residuals,
        mse,
        rmse: mse.sqrt(),
        r_squared,
        r_squared_band: RSquaredBand::from_r_squared(r_squared),
    }
}

/// `predicted - observed`, element-wise.
pub fn residuals(observed: &[f64], predicted: &[f64]) -> Vec<f64> {
    predicted.iter().zip(observed).map(|(p, o)| p - o).collect()
}

/// Coefficient of determination given the residual sum of squares.
pub fn r_squared(observed: &[f64], ss_res: f64) -> f64 {
    let y_mean = mean(observed);
    let ss_tot: f64 = observed.iter().map(|y| (y - y_mean).powi(2)).sum();
    if is_constant(observed) || ss_tot == 0.0 {
        // Constant y: the mean already predicts perfectly.
        return 1.0;
    }
    1.0 - ss_res / ss_tot
}

/// Pearson correlation coefficient between `x` and `y`.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if is_constant(x) || is_constant(y) {
        return 0.0;
    }
    let mx = mean(x);
    let my = mean(y);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let den = (sxx * syy).sqrt();
    if den == 0.0 {
        return 0.0;
    }
    // Rounding can push |r| a hair past 1 for perfectly collinear data.
    (sxy / den).clamp(-1.0, 1.0)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_prediction() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let g = evaluate(&y, &y);
        assert_eq!(g.residuals, vec![0.0; 4]);
        assert_eq!(g.rmse, 0.0);
        assert_eq!(g.r_squared, 1.0);
        assert_eq!(g.r_squared_band, RSquaredBand::Strong);
    }

    #[test]
    fn residual_sign_is_predicted_minus_observed() {
        let g = evaluate(&[1.0, 1.0], &[2.0, 0.0]);
        assert_eq!(g.residuals, vec![1.0, -1.0]);
        assert!((g.mse - 1.0).abs() < 1e-12);
        assert!((g.rmse - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_y_gives_unit_r_squared() {
        let g = evaluate(&[5.0, 5.0, 5.0], &[4.0, 5.0, 6.0]);
        assert_eq!(g.r_squared, 1.0);
    }

    #[test]
    fn inexact_constant_y_gives_unit_r_squared() {
        for c in [0.1, 0.7, 3.3] {
            let g = evaluate(&[c; 8], &[c * 1.01; 8]);
            assert_eq!(g.r_squared, 1.0, "y = {c}");
            assert_eq!(g.r_squared_band, RSquaredBand::Strong);
        }
    }

    #[test]
    fn worse_than_mean_is_negative() {
        let y = [1.0, 2.0, 3.0];
        let g = evaluate(&y, &[3.0, 2.0, 1.0]);
        assert!(g.r_squared < 0.0);
        assert_eq!(g.r_squared_band, RSquaredBand::Negligible);
    }

    #[test]
    fn pearson_bounds_and_degenerate_cases() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson(&x, &[2.0, 4.0, 6.0, 8.0]) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &[8.0, 6.0, 4.0, 2.0]) + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&x, &[3.0; 4]), 0.0);
        assert_eq!(pearson(&[2.0; 4], &x), 0.0);

        let irregular = [0.3, 1.7, 2.2, 5.9, 6.1];
        assert_eq!(pearson(&irregular, &[0.1; 5]), 0.0);
        assert_eq!(pearson(&[1.1; 5], &irregular), 0.0);
    }
}
