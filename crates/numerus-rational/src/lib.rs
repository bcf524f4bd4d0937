//! # numerus-rational
//!
//! Exact rational arithmetic for numerus.
//!
//! A [`Rational`] is a pair of `numerus-integer` integers kept in lowest
//! terms with a positive denominator after every operation. Conversions to
//! native floats report exactness; `float_string` renders fixed-point
//! decimal approximations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod conv;
mod ops;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::Rational;
