//! Input/output helpers.
//!
//! - point file ingest + validation (`ingest`)
//! - per-point CSV export and text point writer (`export`)
//! - fitted curves JSON (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
