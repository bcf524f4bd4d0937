//! # numerus-float
//!
//! Arbitrary precision binary floating point numbers for numerus.
//!
//! A [`Float`] carries its own precision in bits and a [`RoundingMode`].
//! Operations write into a destination, round to the destination's
//! precision and mode, and return an [`Accuracy`] telling whether the stored
//! value is below, equal to or above the exact result.
//!
//! - Arithmetic: `set_add`, `set_sub`, `set_mul`, `set_quo`, `set_sqrt`,
//!   plus the standard operators
//! - Conversions to and from native numbers, `Integer` and `Rational`
//! - Text: `'e'`, `'f'`, `'g'`, `'b'` and `'p'` formats with shortest
//!   round-trip output, and parsing in bases 2, 8, 10 and 16
//!
//! There is no NaN. Operations IEEE-754 would answer with NaN return
//! [`ErrNaN`] instead; the operators panic with its message.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

mod arith;
mod conv;
mod decimal;
pub mod error;
pub mod float;
mod format;
pub mod mode;
mod ops;
mod parse;
mod round;

#[cfg(test)]
mod proptests;

pub use error::ErrNaN;
pub use float::{Float, MAX_EXP, MAX_PREC, MIN_EXP};
pub use format::MAX_ZERO_PAD;
pub use mode::{Accuracy, RoundingMode};
