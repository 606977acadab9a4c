//! The `ComplexNumber` value type.
//!
//! Represents z = x + iy in rectangular form. Values are immutable once
//! constructed; every operation returns a fresh value and leaves its
//! operands untouched.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::convert::IntoComplex;
use crate::error::{ComplexError, ComplexResult};

/// A complex number z = x + iy with finite `f64` components.
///
/// Construction validates that both components are finite real numbers.
/// Operation results follow IEEE 754 semantics and are not
/// re-validated, so a long chain of operations may overflow to infinity
/// the same way plain `f64` arithmetic does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexNumber {
    x: f64,
    y: f64,
}

/// Validate one constructor component: must convert to a finite `f64`.
fn finite_component<T: ToPrimitive>(value: T, name: &str) -> ComplexResult<f64> {
    match value.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ComplexError::invalid_argument(format!(
            "{} of the complex number must be a finite real number",
            name
        ))),
    }
}

impl ComplexNumber {
    /// The additive identity 0 + 0i
    pub const ZERO: ComplexNumber = ComplexNumber { x: 0.0, y: 0.0 };

    /// The multiplicative identity 1 + 0i
    pub const ONE: ComplexNumber = ComplexNumber { x: 1.0, y: 0.0 };

    /// The imaginary unit 0 + 1i
    pub const I: ComplexNumber = ComplexNumber { x: 0.0, y: 1.0 };

    // ========== Constructors ==========

    /// Create a complex number from rectangular components.
    ///
    /// Both components accept any primitive numeric type. Fails with
    /// `InvalidArgument` when a component is not a finite real number.
    pub fn new<X: ToPrimitive, Y: ToPrimitive>(x: X, y: Y) -> ComplexResult<ComplexNumber> {
        let x = finite_component(x, "the real part \"x\"")?;
        let y = finite_component(y, "the imaginary part \"y\"")?;
        Ok(ComplexNumber { x, y })
    }

    /// Create a complex number from a real value, with zero imaginary part
    pub fn from_real<X: ToPrimitive>(x: X) -> ComplexResult<ComplexNumber> {
        ComplexNumber::new(x, 0.0)
    }

    /// Create a complex number from polar components r·e^(iθ).
    ///
    /// The modulus `r` must be nonnegative and the argument `theta`
    /// must lie within (-π, π]; anything else fails with
    /// `InvalidArgument`. The stored components are (r·cos θ, r·sin θ).
    pub fn from_polar<R: ToPrimitive, T: ToPrimitive>(r: R, theta: T) -> ComplexResult<ComplexNumber> {
        let r = finite_component(r, "the modulus \"r\"")?;
        let theta = finite_component(theta, "the argument \"theta\"")?;
        if r < 0.0 {
            return Err(ComplexError::invalid_argument(
                "the modulus \"r\" of the complex number must be nonnegative",
            ));
        }
        if !(theta > -PI && theta <= PI) {
            return Err(ComplexError::invalid_argument(
                "the argument \"theta\" of the complex number must lie within the range (-PI, PI]",
            ));
        }
        Ok(ComplexNumber {
            x: r * theta.cos(),
            y: r * theta.sin(),
        })
    }

    /// Build a value directly from raw components, skipping validation.
    ///
    /// Operation results go through here so that overflow to infinity
    /// behaves like plain `f64` arithmetic.
    pub(crate) fn from_parts(x: f64, y: f64) -> ComplexNumber {
        ComplexNumber { x, y }
    }

    // ========== Accessors ==========

    /// The real component x of z = x + iy
    pub fn real(&self) -> f64 {
        self.x
    }

    /// The imaginary component y of z = x + iy
    pub fn imaginary(&self) -> f64 {
        self.y
    }

    /// The modulus |z| = √(x² + y²).
    ///
    /// Computed with `f64::hypot`, which stays accurate where naive
    /// squaring of large or small components would overflow or
    /// underflow.
    pub fn modulus(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The squared modulus |z|² = x² + y², without the square root
    pub fn modulus_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// The argument arg(z), in the range (-π, π].
    ///
    /// Two-argument arctangent of (y, x); `argument()` of the zero
    /// value is 0 by the atan2 convention. This fixes the principal
    /// branch used by `sqrt`, `log`, and `pow`.
    pub fn argument(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// The complex conjugate z* = x - iy
    pub fn conjugate(&self) -> ComplexNumber {
        ComplexNumber {
            x: self.x,
            y: -self.y,
        }
    }

    // ========== Arithmetic ==========

    /// Add `z` to this number, returning a new value.
    ///
    /// `z` may be a `ComplexNumber` or a plain real number; a real
    /// operand is treated as (value, 0).
    pub fn add<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        let w = z.into_complex()?;
        Ok(ComplexNumber::from_parts(self.x + w.x, self.y + w.y))
    }

    /// Alias of [`ComplexNumber::add`]
    pub fn plus<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        self.add(z)
    }

    /// Subtract `z` from this number, returning a new value
    pub fn subtract<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        let w = z.into_complex()?;
        Ok(ComplexNumber::from_parts(self.x - w.x, self.y - w.y))
    }

    /// Alias of [`ComplexNumber::subtract`]
    pub fn minus<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        self.subtract(z)
    }

    /// Multiply this number by `z`, returning a new value
    pub fn multiply<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        let w = z.into_complex()?;
        Ok(ComplexNumber::from_parts(
            self.x * w.x - self.y * w.y,
            self.x * w.y + self.y * w.x,
        ))
    }

    /// Alias of [`ComplexNumber::multiply`]
    pub fn times<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        self.multiply(z)
    }

    /// Alias of [`ComplexNumber::multiply`]
    pub fn multiplied_by<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        self.multiply(z)
    }

    /// Divide this number by `z`, returning a new value.
    ///
    /// Fails with `DivisionByZero` when `z` coerces to 0 + 0i.
    pub fn divide<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        let w = z.into_complex()?;
        if w.is_zero() {
            return Err(ComplexError::division_by_zero(
                "in divide(), the divisor \"z\" must be nonzero",
            ));
        }
        let denom = w.modulus_squared();
        Ok(ComplexNumber::from_parts(
            (self.x * w.x + self.y * w.y) / denom,
            (self.y * w.x - self.x * w.y) / denom,
        ))
    }

    /// Alias of [`ComplexNumber::divide`]
    pub fn over<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        self.divide(z)
    }

    /// Alias of [`ComplexNumber::divide`]
    pub fn divided_by<T: IntoComplex>(&self, z: T) -> ComplexResult<ComplexNumber> {
        self.divide(z)
    }
}

// ========== Operator implementations ==========

impl Add for ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::from_parts(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::from_parts(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::from_parts(
            self.x * rhs.x - self.y * rhs.y,
            self.x * rhs.y + self.y * rhs.x,
        )
    }
}

impl Neg for ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        ComplexNumber::from_parts(-self.x, -self.y)
    }
}

// No Div operator: division is fallible and stays a method.

impl Zero for ComplexNumber {
    fn zero() -> ComplexNumber {
        ComplexNumber::ZERO
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl One for ComplexNumber {
    fn one() -> ComplexNumber {
        ComplexNumber::ONE
    }
}

// ========== Display implementation ==========

/// Format one component the way a float literal reads: integral values
/// keep a trailing `.0`.
fn write_component(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        write!(f, "{}.0", v)
    } else {
        write!(f, "{}", v)
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Normalize -0.0 so conjugates of real values read as `+ 0.0i`.
        let x = if self.x == 0.0 { 0.0 } else { self.x };
        let y = if self.y == 0.0 { 0.0 } else { self.y };
        write_component(f, x)?;
        if y < 0.0 {
            write!(f, " - ")?;
            write_component(f, -y)?;
        } else {
            write!(f, " + ")?;
            write_component(f, y)?;
        }
        write!(f, "i")
    }
}
