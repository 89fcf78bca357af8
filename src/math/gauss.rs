//! Gaussian elimination with partial pivoting.
//!
//! The systems solved here are tiny (at most 4 unknowns for a cubic fit), so a
//! direct elimination on the augmented matrix `[A | b]` is all we need.
//!
//! At step `k` the row with the largest `|a[r][k]|` among rows `k..n` becomes
//! the pivot. A pivot below [`SINGULAR_PIVOT_EPS`] means the system has no
//! unique solution and the call returns [`FitError::SingularMatrix`].

use nalgebra::{DMatrix, DVector};

use crate::error::FitError;

/// Pivot magnitude below which a system is treated as singular.
pub const SINGULAR_PIVOT_EPS: f64 = 1e-12;

/// Solve `A x = b` given the `n x (n + 1)` augmented matrix `[A | b]`.
///
/// The matrix is consumed and reduced in place.
pub fn solve_augmented(mut a: DMatrix<f64>) -> Result<DVector<f64>, FitError> {
    let n = a.nrows();
    if n == 0 || a.ncols() != n + 1 {
        return Err(FitError::InvalidSystem {
            rows: n,
            cols: a.ncols(),
        });
    }

    for k in 0..n {
        // First row with the largest magnitude wins ties.
        let mut pivot_row = k;
        for r in (k + 1)..n {
            if a[(r, k)].abs() > a[(pivot_row, k)].abs() {
                pivot_row = r;
            }
        }

        // Written negated so a NaN pivot is also rejected.
        if !(a[(pivot_row, k)].abs() >= SINGULAR_PIVOT_EPS) {
            return Err(FitError::SingularMatrix);
        }
        if pivot_row != k {
            a.swap_rows(k, pivot_row);
        }

        let pivot = a[(k, k)];
        for j in k..=n {
            a[(k, j)] /= pivot;
        }

        for r in (k + 1)..n {
            let factor = a[(r, k)];
            if factor == 0.0 {
                continue;
            }
            for j in k..=n {
                let delta = factor * a[(k, j)];
                a[(r, j)] -= delta;
            }
        }
    }

    let mut x = DVector::<f64>::zeros(n);
    for i in (0..n).rev() {
        let tail: f64 = ((i + 1)..n).map(|j| a[(i, j)] * x[j]).sum();
        x[i] = a[(i, n)] - tail;
    }

    Ok(x)
}
