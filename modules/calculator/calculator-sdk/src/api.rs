//! Calculator API trait
//!
//! Contract trait for the calculator service.

use crate::errors::CalculatorError;

/// Calculator API trait
///
/// A stateless service that performs integer arithmetic and number-theory
/// operations. Every method is synchronous and free of side effects, so an
/// implementation may be shared across threads without synchronization.
///
/// Arithmetic uses wraparound (two's complement) semantics on overflow.
pub trait CalculatorApi: Send + Sync {
    /// Add two numbers and return the sum.
    fn add(&self, a: i32, b: i32) -> i32;

    /// Subtract `b` from `a` and return the difference.
    fn subtract(&self, a: i32, b: i32) -> i32;

    /// Multiply two numbers and return the product.
    fn multiply(&self, a: i32, b: i32) -> i32;

    /// Divide `a` by `b`, truncating the quotient toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is zero.
    fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError>;

    /// Remainder of `a / b` under truncating division; the result carries
    /// the sign of the dividend `a`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::ModuloByZero`] when `b` is zero.
    fn modulo(&self, a: i32, b: i32) -> Result<i32, CalculatorError>;

    /// Whether `n` is even.
    fn is_even(&self, n: i32) -> bool;

    /// Whether `n` is prime. Numbers below 2 are not prime.
    fn is_prime(&self, n: i32) -> bool;

    /// Raise `base` to `exponent` by repeated multiplication;
    /// `exponent == 0` yields 1 for every base.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::NegativeExponent`] when `exponent` is
    /// negative.
    fn power(&self, base: i32, exponent: i32) -> Result<i32, CalculatorError>;
}
