//! Error types for the calculator SDK.

use thiserror::Error;

/// Error type for calculator operations.
///
/// Every variant is an invalid-argument failure raised before any
/// computation happens. The display strings are part of the public
/// contract; callers match on them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Divider cannot be zero.")]
    DivisionByZero,

    #[error("Modulo by zero not allowed.")]
    ModuloByZero,

    #[error("Negative exponent not supported.")]
    NegativeExponent,
}

impl CalculatorError {
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::DivisionByZero
    }

    #[must_use]
    pub fn modulo_by_zero() -> Self {
        Self::ModuloByZero
    }

    #[must_use]
    pub fn negative_exponent() -> Self {
        Self::NegativeExponent
    }
}
