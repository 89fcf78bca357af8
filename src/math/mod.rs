//! Numerical kernels: a pivoting linear solver, polynomial normal equations,
//! and closed-form simple regression.

pub mod gauss;
pub mod ols;
pub mod poly;

pub use gauss::*;
pub use ols::*;
pub use poly::*;
