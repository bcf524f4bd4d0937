//! Recoverable text conversion errors shared by every numerus parser.

use thiserror::Error;

/// What went wrong while scanning a numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The input (or the part after a sign or prefix) was empty.
    #[error("empty input")]
    Empty,

    /// A character is not a digit in the active base, or is out of place.
    #[error("invalid digit")]
    InvalidDigit,

    /// The requested base is not supported by this parser.
    #[error("unsupported base")]
    InvalidBase,

    /// The exponent is malformed or does not fit in 64 bits.
    #[error("invalid exponent")]
    InvalidExponent,

    /// A rational literal has a zero denominator.
    #[error("zero denominator")]
    ZeroDenominator,

    /// A digit separator or prefix is not followed by digits.
    #[error("missing digits")]
    MissingDigits,
}

/// A malformed numeric literal.
///
/// Carries the byte offset of the first offending character and the base
/// that was in effect when scanning stopped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset} (base {base})")]
pub struct ParseNumberError {
    /// Byte offset of the offending character.
    pub offset: usize,
    /// Base in effect at the failure point.
    pub base: u32,
    /// Failure category.
    pub kind: ParseErrorKind,
}

impl ParseNumberError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, offset: usize, base: u32) -> Self {
        Self { offset, base, kind }
    }

    /// Returns the same error shifted by `delta` bytes, for errors raised on
    /// a sub-slice of a larger input.
    #[must_use]
    pub fn offset_by(mut self, delta: usize) -> Self {
        self.offset += delta;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseNumberError::new(ParseErrorKind::InvalidDigit, 3, 16);
        assert_eq!(err.to_string(), "invalid digit at byte 3 (base 16)");
        assert_eq!(err.offset_by(2).offset, 5);
    }
}
