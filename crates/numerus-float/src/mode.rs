//! Rounding modes and the accuracy of a rounded result.

use std::fmt;

/// How a result that does not fit the destination precision is rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Nearest value, ties to the even neighbor.
    #[default]
    ToNearestEven,
    /// Nearest value, ties away from zero.
    ToNearestAway,
    /// Toward zero (truncation).
    ToZero,
    /// Away from zero.
    AwayFromZero,
    /// Toward negative infinity.
    ToNegativeInf,
    /// Toward positive infinity.
    ToPositiveInf,
}

impl RoundingMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::ToNearestEven,
        Self::ToNearestAway,
        Self::ToZero,
        Self::AwayFromZero,
        Self::ToNegativeInf,
        Self::ToPositiveInf,
    ];

    /// Decides whether a magnitude truncated to `kept` must be incremented.
    ///
    /// `round_bit` is the first dropped bit and `sticky` is true if any
    /// later dropped bit is set. `neg` is the sign of the exact result.
    pub(crate) fn rounds_up(self, neg: bool, kept_odd: bool, round_bit: bool, sticky: bool) -> bool {
        let inexact = round_bit || sticky;
        match self {
            Self::ToNearestEven => round_bit && (sticky || kept_odd),
            Self::ToNearestAway => round_bit,
            Self::ToZero => false,
            Self::AwayFromZero => inexact,
            Self::ToNegativeInf => inexact && neg,
            Self::ToPositiveInf => inexact && !neg,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Where a rounded result lies relative to the exact result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Accuracy {
    /// The rounded value is less than the exact value.
    Below,
    /// The rounded value equals the exact value.
    Exact,
    /// The rounded value is greater than the exact value.
    Above,
}

impl Accuracy {
    /// `Above` if `above`, else `Below`.
    pub(crate) fn inexact(above: bool) -> Self {
        if above {
            Self::Above
        } else {
            Self::Below
        }
    }

    /// The accuracy of the negated result.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Below => Self::Above,
            Self::Exact => Self::Exact,
            Self::Above => Self::Below,
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
