//! Operand coercion for mixed real/complex arithmetic.
//!
//! Every arithmetic operation accepts either a `ComplexNumber` or a
//! plain real number. Real operands are lifted to a complex number with
//! zero imaginary part; a non-finite real operand is rejected before
//! the operation runs.

use crate::complex::ComplexNumber;
use crate::error::ComplexResult;

/// Conversion into a `ComplexNumber` operand.
///
/// Implemented for `ComplexNumber` itself (the identity) and for the
/// primitive numeric types, which coerce to (value, 0). Coercing a
/// primitive fails with `InvalidArgument` when the value is not a
/// finite real number.
pub trait IntoComplex {
    /// Coerce `self` into a `ComplexNumber`
    fn into_complex(self) -> ComplexResult<ComplexNumber>;
}

impl IntoComplex for ComplexNumber {
    fn into_complex(self) -> ComplexResult<ComplexNumber> {
        Ok(self)
    }
}

impl IntoComplex for &ComplexNumber {
    fn into_complex(self) -> ComplexResult<ComplexNumber> {
        Ok(*self)
    }
}

impl IntoComplex for f64 {
    fn into_complex(self) -> ComplexResult<ComplexNumber> {
        ComplexNumber::from_real(self)
    }
}

impl IntoComplex for f32 {
    fn into_complex(self) -> ComplexResult<ComplexNumber> {
        ComplexNumber::from_real(self)
    }
}

impl IntoComplex for i64 {
    fn into_complex(self) -> ComplexResult<ComplexNumber> {
        ComplexNumber::from_real(self)
    }
}

impl IntoComplex for i32 {
    fn into_complex(self) -> ComplexResult<ComplexNumber> {
        ComplexNumber::from_real(self)
    }
}
