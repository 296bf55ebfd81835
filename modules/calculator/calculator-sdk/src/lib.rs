//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorApi`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::CalculatorApi;
//!
//! // Obtain an implementation (the `calculator` crate provides an
//! // in-process one) and call through the trait.
//! let sum = calc.add(1, 2);
//! let quotient = calc.divide(10, 2)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::CalculatorApi;

mod errors;
pub use errors::CalculatorError;
