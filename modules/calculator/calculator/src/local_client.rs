//! In-process `CalculatorApi` implementation
//!
//! Delegates every call to the domain service directly. This is the
//! handle consumers of the `calculator-sdk` trait receive when the
//! service runs in the same process.

use calculator_sdk::{CalculatorApi, CalculatorError};

use crate::domain::Service;

/// In-process calculator client backed by [`Service`].
///
/// Stateless and `Copy`; safe to share across threads.
#[derive(Clone, Copy, Default)]
pub struct LocalCalculator {
    service: Service,
}

impl LocalCalculator {
    /// Create a new client with a fresh domain service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: Service::new(),
        }
    }
}

impl CalculatorApi for LocalCalculator {
    fn add(&self, a: i32, b: i32) -> i32 {
        self.service.add(a, b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        self.service.subtract(a, b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        self.service.multiply(a, b)
    }

    fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        self.service.divide(a, b)
    }

    fn modulo(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        self.service.modulo(a, b)
    }

    fn is_even(&self, n: i32) -> bool {
        self.service.is_even(n)
    }

    fn is_prime(&self, n: i32) -> bool {
        self.service.is_prime(n)
    }

    fn power(&self, base: i32, exponent: i32) -> Result<i32, CalculatorError> {
        self.service.power(base, exponent)
    }
}
