//! `lsq-curves` library crate.
//!
//! Fits a small set of `(x, y)` observations to six model families (linear,
//! quadratic, cubic, exponential, logarithmic, power) by least squares and
//! ranks the fits by R².
//!
//! The binary (`lsq`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable outside the CLI

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod metrics;
pub mod models;
pub mod report;
