//! # numerus-digits
//!
//! The unsigned multi-word arithmetic engine underneath numerus.
//!
//! This crate provides:
//! - Word-level kernels with carry/borrow propagation (`arith`)
//! - The normalized little-endian digit vector [`Nat`]
//! - Schoolbook and Karatsuba multiplication, Knuth long division
//! - Radix text conversion and big-endian byte interchange
//! - The literal scanner shared by every numerus text parser
//! - Correctly rounded assembly of native `f32`/`f64` values
//!
//! All operations are sign-free. Signed semantics live in `numerus-integer`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]

mod arith;
mod bits;
pub mod conv;
mod div;
pub mod error;
mod modular;
mod mul;
pub mod nat;
pub mod native;
mod ops;
pub mod scan;
pub mod word;

#[cfg(test)]
mod proptests;

pub use error::{ParseErrorKind, ParseNumberError};
pub use mul::KARATSUBA_THRESHOLD;
pub use nat::Nat;
pub use scan::{scan_literal, Literal, Prefix};
pub use word::{Word, WORD_BITS};
