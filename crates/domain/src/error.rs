//! Domain error types.

use thiserror::Error;

use crate::locale::FormatError;

/// A value object or entity invariant was violated.
///
/// Raised at the point of construction or operation; no partially built
/// value ever escapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The input could not be read as an instant.
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// The instant lies after the construction-time "now".
    #[error("Date cannot be in the future: {0}")]
    FutureDate(String),

    /// The code is not three uppercase ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// Money amounts are never negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(f64),

    /// NaN or infinite amount.
    #[error("Amount must be a finite number: {0}")]
    NonFiniteAmount(f64),

    /// Addition across two different currencies.
    #[error("Cannot add amounts with different currencies: {left} and {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Multiplication by a negative factor.
    #[error("Factor cannot be negative: {0}")]
    NegativeFactor(f64),

    /// NaN or infinite factor.
    #[error("Factor must be a finite number: {0}")]
    NonFiniteFactor(f64),

    /// Blank or whitespace-only name.
    #[error("Name cannot be empty")]
    EmptyName,
}

/// Errors that can occur across the domain model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// An invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The formatting layer rejected its input.
    #[error(transparent)]
    Format(#[from] FormatError),
}
