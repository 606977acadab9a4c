//! Complex-number arithmetic over the field ℂ.
//!
//! This crate provides the [`ComplexNumber`] value type together with
//! the standard operation set:
//!
//! - Construction in rectangular or polar form, with input validation
//! - Accessors: real/imaginary components, modulus, argument, conjugate
//! - Arithmetic: add, subtract, multiply, divide (plus operator
//!   overloads for the complex-by-complex case)
//! - Transcendental functions: sqrt, exp, log, pow, all single-valued
//!   on the principal branch
//!
//! Values are immutable once constructed and every operation returns a
//! fresh value, so instances can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use complex_number::prelude::*;
//!
//! let z = ComplexNumber::new(3, 4)?;
//! assert_eq!(z.modulus(), 5.0);
//!
//! let sum = z.add(ComplexNumber::I)?;
//! assert_eq!(sum.imaginary(), 5.0);
//! # Ok::<(), ComplexError>(())
//! ```

pub mod complex;
pub mod convert;
pub mod error;
pub mod functions;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use complex_number::prelude::*;
/// ```
pub mod prelude {
    pub use super::complex::ComplexNumber;
    pub use super::convert::IntoComplex;
    pub use super::error::{ComplexError, ComplexResult};
    pub use super::functions::{abs, arg, exp, im, log, log_base, pow, re, sqrt};
}

pub use prelude::*;
