//! Closed-form simple linear regression.
//!
//! For `y = a + b x` the least-squares solution follows directly from the sums
//! `n, Σx, Σy, Σx², Σxy`:
//!
//! ```text
//! det = n Σx² - (Σx)²
//! a   = (Σy Σx² - Σx Σxy) / det
//! b   = (n Σxy - Σx Σy) / det
//! ```
//!
//! `det` vanishes when every x is identical, but with inexact constants
//! (`0.1`, `ln 1.1`) rounding leaves it small and non-zero, so constant x is
//! detected on the values themselves and reported as a singular system. This is also the workhorse for the linearized families
//! (exponential, logarithmic, power), which call it on transformed values.

use crate::error::FitError;

/// Intercept and slope of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub intercept: f64,
    pub slope: f64,
}

/// Fit `y = intercept + slope * x` by ordinary least squares.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LineFit, FitError> {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;

    let sx: f64 = x.iter().sum();
    let sy: f64 = y.iter().sum();
    let sxx: f64 = x.iter().map(|v| v * v).sum();
    let sxy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

    let det = n * sxx - sx * sx;
    if is_constant(x) || det == 0.0 {
        return Err(FitError::SingularMatrix);
    }

    Ok(LineFit {
        intercept: (sy * sxx - sx * sxy) / det,
        slope: (n * sxy - sx * sy) / det,
    })
}

/// True when every value equals the first (and for empty input).
pub fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}
