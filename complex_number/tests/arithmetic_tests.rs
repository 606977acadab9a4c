//! Tests for complex arithmetic: add, subtract, multiply, divide,
//! conjugate, modulus, and argument.

use complex_number::functions::{abs, arg, im, re};
use complex_number::{ComplexError, ComplexNumber};

fn assert_complex_close(z: ComplexNumber, real: f64, imaginary: f64) {
    assert!(
        (z.real() - real).abs() < 1e-10,
        "Expected real {}, got {}",
        real,
        z.real()
    );
    assert!(
        (z.imaginary() - imaginary).abs() < 1e-10,
        "Expected imaginary {}, got {}",
        imaginary,
        z.imaginary()
    );
}

// ==================== Addition / Subtraction ====================

#[test]
fn test_add() {
    let z = ComplexNumber::new(1.0, 0.0).unwrap();
    let w = ComplexNumber::new(0.0, 1.0).unwrap();
    let sum = z.add(w).unwrap();
    assert_eq!(sum.real(), 1.0);
    assert_eq!(sum.imaginary(), 1.0);
}

#[test]
fn test_add_real_operand_matches_coerced_form() {
    let z = ComplexNumber::new(1.5, -2.0).unwrap();
    let direct = z.add(5).unwrap();
    let coerced = z.add(ComplexNumber::new(5, 0).unwrap()).unwrap();
    assert_eq!(direct, coerced);
}

#[test]
fn test_subtract() {
    let z = ComplexNumber::new(3.0, 4.0).unwrap();
    let diff = z.subtract(ComplexNumber::new(1.0, 1.0).unwrap()).unwrap();
    assert_eq!(diff.real(), 2.0);
    assert_eq!(diff.imaginary(), 3.0);
}

#[test]
fn test_add_then_subtract_round_trip() {
    let cases = [(1.0, 2.0, 3.0, -4.0), (0.5, 0.0, -7.25, 2.5), (0.0, 0.0, 1e8, -1e-8)];
    for (zx, zy, wx, wy) in cases {
        let z = ComplexNumber::new(zx, zy).unwrap();
        let w = ComplexNumber::new(wx, wy).unwrap();
        let back = z.add(w).unwrap().subtract(w).unwrap();
        assert_complex_close(back, zx, zy);
    }
}

// ==================== Multiplication / Division ====================

#[test]
fn test_multiply() {
    let z = ComplexNumber::new(1.0, 1.0).unwrap();
    let w = ComplexNumber::new(1.0, -1.0).unwrap();
    let product = z.multiply(w).unwrap();
    assert_eq!(product.real(), 2.0);
    assert_eq!(product.imaginary(), 0.0);
}

#[test]
fn test_multiply_by_imaginary_unit_rotates() {
    // i * i = -1
    let product = ComplexNumber::I.multiply(ComplexNumber::I).unwrap();
    assert_complex_close(product, -1.0, 0.0);
}

#[test]
fn test_divide() {
    // (1 + i) / (1 - i) = i
    let z = ComplexNumber::new(1.0, 1.0).unwrap();
    let w = ComplexNumber::new(1.0, -1.0).unwrap();
    let quotient = z.divide(w).unwrap();
    assert_complex_close(quotient, 0.0, 1.0);
}

#[test]
fn test_divide_zero_numerator_is_valid() {
    let quotient = ComplexNumber::ZERO
        .divide(ComplexNumber::new(1.0, 0.0).unwrap())
        .unwrap();
    assert_eq!(quotient, ComplexNumber::ZERO);
}

#[test]
fn test_divide_by_zero_fails() {
    let z = ComplexNumber::new(1.0, 0.0).unwrap();
    assert!(matches!(
        z.divide(ComplexNumber::ZERO),
        Err(ComplexError::DivisionByZero(_))
    ));
    assert!(matches!(z.divide(0), Err(ComplexError::DivisionByZero(_))));
}

#[test]
fn test_divide_by_real() {
    let z = ComplexNumber::new(4.0, -2.0).unwrap();
    let quotient = z.divide(2).unwrap();
    assert_complex_close(quotient, 2.0, -1.0);
}

#[test]
fn test_multiply_then_divide_round_trip() {
    let cases = [(1.0, 2.0, 3.0, -4.0), (-0.5, 0.25, 0.0, 2.0), (7.0, 0.0, 1e-3, 1e3)];
    for (zx, zy, wx, wy) in cases {
        let z = ComplexNumber::new(zx, zy).unwrap();
        let w = ComplexNumber::new(wx, wy).unwrap();
        let back = z.multiply(w).unwrap().divide(w).unwrap();
        assert_complex_close(back, zx, zy);
    }
}

// ==================== Aliases ====================

#[test]
fn test_aliases_match_canonical_operations() {
    let z = ComplexNumber::new(2.0, -3.0).unwrap();
    let w = ComplexNumber::new(-1.0, 0.5).unwrap();

    assert_eq!(z.plus(w).unwrap(), z.add(w).unwrap());
    assert_eq!(z.minus(w).unwrap(), z.subtract(w).unwrap());
    assert_eq!(z.times(w).unwrap(), z.multiply(w).unwrap());
    assert_eq!(z.multiplied_by(w).unwrap(), z.multiply(w).unwrap());
    assert_eq!(z.over(w).unwrap(), z.divide(w).unwrap());
    assert_eq!(z.divided_by(w).unwrap(), z.divide(w).unwrap());
}

// ==================== Conjugate / Modulus / Argument ====================

#[test]
fn test_conjugate_involution() {
    let z = ComplexNumber::new(2.0, -3.0).unwrap();
    assert_eq!(z.conjugate().conjugate(), z);
}

#[test]
fn test_conjugate_times_self_is_squared_modulus() {
    let z = ComplexNumber::new(3.0, 4.0).unwrap();
    let product = z.multiply(z.conjugate()).unwrap();
    assert_complex_close(product, 25.0, 0.0);
}

#[test]
fn test_modulus_three_four_five() {
    let z = ComplexNumber::new(3.0, 4.0).unwrap();
    assert_eq!(z.modulus(), 5.0);
}

#[test]
fn test_abs_is_nonnegative() {
    for (x, y) in [(0.0, 0.0), (-3.0, 4.0), (1e-20, -1e-20), (-5.0, 0.0)] {
        let z = ComplexNumber::new(x, y).unwrap();
        assert!(abs(z).unwrap() >= 0.0, "abs({}) < 0", z);
    }
    assert_eq!(abs(ComplexNumber::ZERO).unwrap(), 0.0);
}

#[test]
fn test_modulus_is_stable_for_extreme_components() {
    // Naive x*x + y*y would overflow to infinity here.
    let z = ComplexNumber::new(3e200, 4e200).unwrap();
    assert!(
        (z.modulus() - 5e200).abs() < 1e190,
        "Expected 5e200, got {}",
        z.modulus()
    );
}

#[test]
fn test_coercing_accessor_functions() {
    assert_eq!(re(7).unwrap(), 7.0);
    assert_eq!(im(7).unwrap(), 0.0);
    let z = ComplexNumber::new(-1.0, 1.0).unwrap();
    assert_eq!(re(z).unwrap(), -1.0);
    assert_eq!(im(z).unwrap(), 1.0);
    assert!(
        (arg(z).unwrap() - 3.0 * std::f64::consts::FRAC_PI_4).abs() < 1e-10,
        "Expected 3π/4, got {}",
        arg(z).unwrap()
    );
}
