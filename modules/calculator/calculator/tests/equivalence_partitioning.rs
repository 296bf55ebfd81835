//! Black-box equivalence partitioning suites.
//!
//! Each test exercises one representative per input class through the
//! public `CalculatorApi` trait.

use calculator::LocalCalculator;
use calculator_sdk::{CalculatorApi, CalculatorError};

fn client() -> Box<dyn CalculatorApi> {
    Box::new(LocalCalculator::new())
}

#[test]
fn divide_valid_input_classes() {
    let calc = client();
    // positive operands, negative dividend, negative divisor
    let cases = [(10, 2, 5), (-10, 2, -5), (10, -2, -5)];
    for (a, b, expected) in cases {
        assert_eq!(calc.divide(a, b), Ok(expected), "divide({a}, {b})");
    }
}

#[test]
fn divide_invalid_input_class_zero_divisor() {
    assert_eq!(
        client().divide(10, 0),
        Err(CalculatorError::DivisionByZero)
    );
}

#[test]
fn modulo_valid_and_invalid_classes() {
    let calc = client();
    assert_eq!(calc.modulo(10, 3), Ok(1));
    assert_eq!(calc.modulo(5, 0), Err(CalculatorError::ModuloByZero));
}

#[test]
fn is_prime_input_classes() {
    let calc = client();
    // non-prime at the lower edge, smallest prime, larger prime, composite
    let cases = [(1, false), (2, true), (17, true), (4, false)];
    for (n, expected) in cases {
        assert_eq!(calc.is_prime(n), expected, "is_prime({n})");
    }
}

#[test]
fn is_even_input_classes() {
    let calc = client();
    assert!(calc.is_even(8));
    assert!(!calc.is_even(9));
}

#[test]
fn power_valid_and_invalid_classes() {
    let calc = client();
    assert_eq!(calc.power(2, 3), Ok(8));
    assert_eq!(calc.power(2, -1), Err(CalculatorError::NegativeExponent));
}

#[test]
fn unguarded_operations_single_class() {
    let calc = client();
    assert_eq!(calc.add(2, 3), 5);
    assert_eq!(calc.subtract(7, 3), 4);
    assert_eq!(calc.multiply(4, 3), 12);
}
