//! Error types for low-level astronomical math.
//!
//! [`AstroError`] covers the failure modes of the primitives in this crate:
//! values outside their physical domain and non-finite inputs.
//!
//! ```
//! use celestial_core::{AstroError, MathErrorKind};
//!
//! fn safe_divide(a: f64, b: f64) -> Result<f64, AstroError> {
//!     if b == 0.0 {
//!         return Err(AstroError::math_error(
//!             "safe_divide",
//!             MathErrorKind::DivisionByZero,
//!             "divisor is zero",
//!         ));
//!     }
//!     Ok(a / b)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Attempted division by zero or near-zero value.
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Result is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum AstroError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] when this is a math error.
    pub fn math_kind(&self) -> Option<&MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(kind),
        }
    }
}
