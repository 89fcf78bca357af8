//! The model catalog: linear, quadratic, cubic, exponential, logarithmic, power.
//!
//! Models are implemented as small, pure functions so that fitting code can
//! stay generic.

pub mod model;

pub use model::*;
