//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated input (`Dataset`, `DataPoint`)
//! - the model catalog tag (`ModelKind`)
//! - fit outputs (`FitResult`, `ResultSet`)
//! - run configuration (`FitConfig`)

pub mod types;

pub use types::*;
