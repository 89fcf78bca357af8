//! Error types.
//!
//! Two layers:
//!
//! - [`FitError`]: why a single model could not be fit. It is recorded in the
//!   result set for that model and never aborts a run.
//! - [`AppError`]: a process-level failure (bad input file, bad flags) carrying
//!   the exit code the binary should return.

use serde::Serialize;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Which variable a transform precondition was checked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Reason a model is reported as unfit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FitError {
    /// Elimination hit a pivot below the singularity threshold.
    SingularMatrix,
    /// A logarithmic transform needs strictly positive values.
    DomainViolation { axis: Axis, index: usize, value: f64 },
    /// Coefficients, predictions or metrics came out as NaN/Inf.
    NonFinite { stage: &'static str },
    /// The augmented matrix is not `n x (n + 1)`.
    InvalidSystem { rows: usize, cols: usize },
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::SingularMatrix => write!(f, "singular normal equations"),
            FitError::DomainViolation { axis, index, value } => write!(
                f,
                "{axis} must be > 0 for this model (point {} has {axis}={value})",
                index + 1
            ),
            FitError::NonFinite { stage } => write!(f, "non-finite {stage}"),
            FitError::InvalidSystem { rows, cols } => {
                write!(f, "augmented matrix must be n x (n+1), got {rows} x {cols}")
            }
        }
    }
}

impl std::error::Error for FitError {}
