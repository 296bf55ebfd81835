//! Domain service for calculator
//!
//! Contains the core logic for the arithmetic and number-theory operations.

use calculator_sdk::CalculatorError;
use tracing::debug;

/// Domain service that performs integer arithmetic.
///
/// A stateless service: every operation is a pure function of its operands.
/// Arithmetic follows wraparound (two's complement) semantics on overflow,
/// including `i32::MIN / -1` for division and remainder.
#[derive(Clone, Copy, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    /// Subtract `b` from `a` and return the difference.
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing subtraction");
        a.wrapping_sub(b)
    }

    /// Multiply two numbers and return the product.
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing multiplication");
        a.wrapping_mul(b)
    }

    /// Divide `a` by `b`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is zero.
    pub fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        debug!(a, b, "performing division");
        if b == 0 {
            return Err(CalculatorError::division_by_zero());
        }
        Ok(a.wrapping_div(b))
    }

    /// Remainder of `a / b`; carries the sign of the dividend `a`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::ModuloByZero`] when `b` is zero.
    pub fn modulo(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        debug!(a, b, "performing modulo");
        if b == 0 {
            return Err(CalculatorError::modulo_by_zero());
        }
        Ok(a.wrapping_rem(b))
    }

    /// Whether `n` is even.
    pub fn is_even(&self, n: i32) -> bool {
        debug!(n, "checking parity");
        n % 2 == 0
    }

    /// Whether `n` is prime.
    ///
    /// Trial division by odd candidates up to the square root of `n`. The
    /// candidate square is compared in `i64` so the bound check cannot
    /// overflow near `i32::MAX`.
    pub fn is_prime(&self, n: i32) -> bool {
        debug!(n, "checking primality");
        if n <= 1 {
            return false;
        }
        if n == 2 {
            return true;
        }
        if n % 2 == 0 {
            return false;
        }

        let n = i64::from(n);
        let mut candidate = 3i64;
        while candidate * candidate <= n {
            if n % candidate == 0 {
                return false;
            }
            candidate += 2;
        }
        true
    }

    /// Raise `base` to `exponent` by repeated multiplication.
    ///
    /// `exponent == 0` yields 1 for every base, including zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::NegativeExponent`] when `exponent` is
    /// negative.
    pub fn power(&self, base: i32, exponent: i32) -> Result<i32, CalculatorError> {
        debug!(base, exponent, "performing exponentiation");
        if exponent < 0 {
            return Err(CalculatorError::negative_exponent());
        }
        let mut result = 1i32;
        for _ in 0..exponent {
            result = result.wrapping_mul(base);
        }
        Ok(result)
    }
}
