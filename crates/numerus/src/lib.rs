//! # Numerus
//!
//! Arbitrary precision arithmetic for Rust.
//!
//! ## Crates
//!
//! - **numerus-digits**: unsigned magnitudes (`Nat`) with schoolbook and
//!   Karatsuba multiplication, long division, radix conversion and the
//!   shared literal scanner
//! - **numerus-integer**: signed integers with Euclidean division, bitwise
//!   operations, number theory and primality testing
//! - **numerus-rational**: exact fractions in lowest terms
//! - **numerus-float**: binary floating point with per-value precision and
//!   rounding mode
//!
//! ## Quick Start
//!
//! ```rust
//! use numerus::prelude::*;
//!
//! let big = Integer::from(1u64) << 128;
//! assert_eq!((&big >> 64).to_string(), "18446744073709551616");
//!
//! let half = &Rational::from_i64(1, 3) + &Rational::from_i64(1, 6);
//! assert_eq!(half.to_string(), "1/2");
//!
//! let sum = &Float::from_f64(0.1).unwrap() + &Float::from_f64(0.2).unwrap();
//! assert_eq!(sum.to_text('g', Some(17)), "0.30000000000000004");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numerus_digits as digits;
pub use numerus_float as float;
pub use numerus_integer as integer;
pub use numerus_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numerus_digits::{Nat, ParseErrorKind, ParseNumberError};
    pub use numerus_float::{Accuracy, ErrNaN, Float, RoundingMode};
    pub use numerus_integer::{Integer, PrimalityConfig};
    pub use numerus_rational::Rational;
}

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
