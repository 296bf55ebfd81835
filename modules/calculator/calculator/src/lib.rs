//! Calculator Module
//!
//! A stateless integer arithmetic and number-theory service.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic logic
//! - `local_client.rs` - In-process [`CalculatorApi`](calculator_sdk::CalculatorApi) implementation
//!
//! External consumers should program against the `calculator-sdk` crate,
//! which provides the API trait and error types; [`LocalCalculator`] is the
//! implementation handed to them.
//!
//! ```
//! use calculator::LocalCalculator;
//! use calculator_sdk::CalculatorApi;
//!
//! let calc = LocalCalculator::new();
//! assert_eq!(calc.add(2, 3), 5);
//! assert_eq!(calc.divide(10, 2), Ok(5));
//! assert!(calc.is_prime(17));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === INTERNAL MODULES ===
pub mod domain;
pub use domain::Service;

mod local_client;
pub use local_client::LocalCalculator;
