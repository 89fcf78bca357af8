//! Curve fitting orchestration.
//!
//! Responsibilities:
//!
//! - linearize the nonlinear families (`transform`)
//! - fit and score a single model (`fitter`)
//! - run the catalog over a dataset (parallel) (`runner`)
//! - rank the fitted models (`selection`)

pub mod fitter;
pub mod runner;
pub mod selection;
pub mod transform;

pub use fitter::*;
pub use runner::*;
pub use transform::*;
