//! # numerus-integer
//!
//! Arbitrary precision signed integers for numerus.
//!
//! This crate builds on the `numerus-digits` engine to provide:
//! - Sign-magnitude integers (`Integer`) with truncating and Euclidean division
//! - Bitwise operations with infinite two's-complement semantics
//! - Number theory: GCD with Bézout coefficients, modular inverse,
//!   Jacobi symbol, modular square root, modular exponentiation
//! - Baillie-PSW style primality testing (`PrimalityConfig`)
//!
//! ## Panics
//!
//! Division by zero and other precondition violations panic; domain-empty
//! results such as a missing modular inverse are `None`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod bits;
pub mod conv;
pub mod integer;
pub mod number_theory;
mod ops;
pub mod prime;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use prime::PrimalityConfig;
