//! Goodness-of-fit metrics and their qualitative interpretation.

pub mod bands;
pub mod goodness;

pub use bands::*;
pub use goodness::*;
