//! The invalid-operation failure raised by floating-point arithmetic.

use thiserror::Error;

/// An operation that would produce a NaN under IEEE-754 rules.
///
/// There is no NaN value in [`crate::Float`]; instead the operation reports
/// this error and leaves its destination unspecified.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{msg}")]
pub struct ErrNaN {
    /// What went wrong.
    pub msg: &'static str,
}

impl ErrNaN {
    pub(crate) fn new(msg: &'static str) -> Self {
        tracing::debug!(msg, "invalid floating-point operation");
        Self { msg }
    }
}
