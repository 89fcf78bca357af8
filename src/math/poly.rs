//! Polynomial least squares via the normal equations.
//!
//! For `y ≈ Σ a_k x^k` (k = 0..=d) the normal equations are
//!
//! ```text
//! Σ_j S_{i+j} a_j = B_i      for i = 0..=d
//! S_k = Σ x^k                (k = 0..=2d)
//! B_k = Σ y x^k              (k = 0..=d)
//! ```
//!
//! We assemble the `(d+1) x (d+2)` augmented matrix and hand it to
//! [`solve_augmented`].

use nalgebra::DMatrix;

use crate::error::FitError;
use crate::math::gauss::solve_augmented;

/// `S_k = Σ x_i^k` for `k = 0..=max_power`.
pub fn power_sums(x: &[f64], max_power: usize) -> Vec<f64> {
    (0..=max_power)
        .map(|k| x.iter().map(|&xi| xi.powi(k as i32)).sum())
        .collect()
}

/// `B_k = Σ y_i x_i^k` for `k = 0..=max_power`.
pub fn moment_sums(x: &[f64], y: &[f64], max_power: usize) -> Vec<f64> {
    (0..=max_power)
        .map(|k| {
            x.iter()
                .zip(y)
                .map(|(&xi, &yi)| yi * xi.powi(k as i32))
                .sum()
        })
        .collect()
}

/// Build the augmented normal-equations matrix for a degree-`degree` fit.
pub fn normal_equations(x: &[f64], y: &[f64], degree: usize) -> DMatrix<f64> {
    let m = degree + 1;
    let s = power_sums(x, 2 * degree);
    let b = moment_sums(x, y, degree);
    DMatrix::from_fn(m, m + 1, |i, j| if j < m { s[i + j] } else { b[i] })
}

/// Least-squares polynomial coefficients `[a_0, a_1, ..., a_degree]`.
pub fn fit_polynomial(x: &[f64], y: &[f64], degree: usize) -> Result<Vec<f64>, FitError> {
    debug_assert_eq!(x.len(), y.len());
    let solution = solve_augmented(normal_equations(x, y, degree))?;
    Ok(solution.iter().copied().collect())
}

/// Evaluate `Σ coeffs[k] x^k` (Horner).
pub fn eval_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
