//! Free-function accessors and transcendental operations.
//!
//! The function forms accept either a `ComplexNumber` or a plain real
//! operand and coerce before delegating. The transcendental set is
//! single-valued: every result lies on the principal branch fixed by
//! `ComplexNumber::argument`.

use num_traits::Zero;

use crate::complex::ComplexNumber;
use crate::convert::IntoComplex;
use crate::error::{ComplexError, ComplexResult};

// ========== Coercing accessors ==========

/// The real component Re(z)
pub fn re<T: IntoComplex>(z: T) -> ComplexResult<f64> {
    Ok(z.into_complex()?.real())
}

/// The imaginary component Im(z)
pub fn im<T: IntoComplex>(z: T) -> ComplexResult<f64> {
    Ok(z.into_complex()?.imaginary())
}

/// The modulus |z|
pub fn abs<T: IntoComplex>(z: T) -> ComplexResult<f64> {
    Ok(z.into_complex()?.modulus())
}

/// The argument arg(z), in the range (-π, π]
pub fn arg<T: IntoComplex>(z: T) -> ComplexResult<f64> {
    Ok(z.into_complex()?.argument())
}

// ========== Transcendental functions ==========

/// The principal square root of `z`.
///
/// Built through the polar constructor with modulus √|z| and argument
/// arg(z)/2, which keeps the result on the (-π/2, π/2] branch.
pub fn sqrt<T: IntoComplex>(z: T) -> ComplexResult<ComplexNumber> {
    let z = z.into_complex()?;
    ComplexNumber::from_polar(z.modulus().sqrt(), z.argument() / 2.0)
}

/// The complex exponential e^z = e^x·(cos y + i·sin y)
pub fn exp<T: IntoComplex>(z: T) -> ComplexResult<ComplexNumber> {
    let z = z.into_complex()?;
    let scale = z.real().exp();
    Ok(ComplexNumber::from_parts(
        scale * z.imaginary().cos(),
        scale * z.imaginary().sin(),
    ))
}

/// The principal natural logarithm ln|z| + i·arg(z).
///
/// Fails with `ArithmeticError` when z = 0 + 0i.
pub fn log<T: IntoComplex>(z: T) -> ComplexResult<ComplexNumber> {
    let z = z.into_complex()?;
    if z.is_zero() {
        return Err(ComplexError::arithmetic(
            "in log(), the argument \"z\" must be nonzero",
        ));
    }
    Ok(ComplexNumber::from_parts(z.modulus().ln(), z.argument()))
}

/// The logarithm of `z` in an arbitrary real or complex `base`, via the
/// change-of-base identity log(z) / log(base).
///
/// Fails with `ArithmeticError` when z = 0, when the base is zero, or
/// when the logarithm of the base is zero (base = 1). `log_base(z, E)`
/// agrees with [`log`].
pub fn log_base<T: IntoComplex, B: IntoComplex>(z: T, base: B) -> ComplexResult<ComplexNumber> {
    let z = z.into_complex()?;
    let base = base.into_complex()?;
    if base.is_zero() {
        return Err(ComplexError::arithmetic(
            "in log_base(), the base must be nonzero",
        ));
    }
    let numerator = log(z)?;
    let denominator = log(base)?;
    if denominator.is_zero() {
        return Err(ComplexError::arithmetic(
            "in log_base(), the logarithm of the base must be nonzero",
        ));
    }
    numerator.divide(denominator)
}

/// z raised to the complex power w, single-valued on the principal
/// branch: exp(w·log z).
///
/// The zero base is special-cased: (0 + 0i)^w is 0 + 0i when
/// Re(w) > 0, 1 + 0i when Re(w) = 0, and fails with `ArithmeticError`
/// when Re(w) < 0 (the result is complex infinity).
pub fn pow<T: IntoComplex, U: IntoComplex>(z: T, w: U) -> ComplexResult<ComplexNumber> {
    let z = z.into_complex()?;
    let w = w.into_complex()?;
    if z.is_zero() {
        if w.real() > 0.0 {
            return Ok(ComplexNumber::ZERO);
        }
        if w.real() == 0.0 {
            return Ok(ComplexNumber::ONE);
        }
        return Err(ComplexError::arithmetic(
            "in pow(), (0 + 0i)^w is undefined for Re(w) < 0",
        ));
    }
    exp(w.multiply(log(z)?)?)
}
