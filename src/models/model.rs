//! Model evaluation and presentation for the six catalog families.
//!
//! The fitter relies on three primitive operations per model kind:
//! - check the domain the model's linearizing transform needs
//! - predict `y(x)` given coefficients (for residuals, metrics and grids)
//! - format the fitted equation with 4-decimal coefficients

use crate::domain::ModelKind;
use crate::error::{Axis, FitError};
use crate::math::eval_polynomial;

/// Predict `y(x)` for the given model kind.
///
/// Coefficient layout:
/// - polynomials: `[a0, a1, ...]` in ascending powers
/// - exponential `a·e^(b·x)`, logarithmic `a + b·ln x`, power `a·x^b`: `[a, b]`
pub fn predict(model: ModelKind, x: f64, coeffs: &[f64]) -> f64 {
    match model {
        ModelKind::Linear | ModelKind::Quadratic | ModelKind::Cubic => eval_polynomial(coeffs, x),
        ModelKind::Exponential => coeffs[0] * (coeffs[1] * x).exp(),
        ModelKind::Logarithmic => coeffs[0] + coeffs[1] * x.ln(),
        ModelKind::Power => coeffs[0] * x.powf(coeffs[1]),
    }
}

/// Format the fitted model as text, e.g. `1.2345 + 2.3456 * x`.
pub fn format_equation(model: ModelKind, coeffs: &[f64]) -> String {
    match model {
        ModelKind::Linear => format!("{:.4} + {:.4} * x", coeffs[0], coeffs[1]),
        ModelKind::Quadratic => format!(
            "{:.4} + {:.4} * x + {:.4} * x^2",
            coeffs[0], coeffs[1], coeffs[2]
        ),
        ModelKind::Cubic => format!(
            "{:.4} + {:.4} * x + {:.4} * x^2 + {:.4} * x^3",
            coeffs[0], coeffs[1], coeffs[2], coeffs[3]
        ),
        ModelKind::Exponential => format!("{:.4} * e^({:.4} * x)", coeffs[0], coeffs[1]),
        ModelKind::Logarithmic => format!("{:.4} + {:.4} * ln(x)", coeffs[0], coeffs[1]),
        ModelKind::Power => format!("{:.4} * x^{:.4}", coeffs[0], coeffs[1]),
    }
}

/// Which axes must be strictly positive for the model's transform.
pub fn positive_axes(model: ModelKind) -> &'static [Axis] {
    match model {
        ModelKind::Linear | ModelKind::Quadratic | ModelKind::Cubic => &[],
        ModelKind::Exponential => &[Axis::Y],
        ModelKind::Logarithmic => &[Axis::X],
        ModelKind::Power => &[Axis::X, Axis::Y],
    }
}

/// Reject data outside the model's domain (first offending point wins).
pub fn check_domain(model: ModelKind, x: &[f64], y: &[f64]) -> Result<(), FitError> {
    for &axis in positive_axes(model) {
        let values = match axis {
            Axis::X => x,
            Axis::Y => y,
        };
        if let Some(index) = values.iter().position(|&v| v <= 0.0) {
            return Err(FitError::DomainViolation {
                axis,
                index,
                value: values[index],
            });
        }
    }
    Ok(())
}
