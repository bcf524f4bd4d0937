//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic on top of [`Integer`].

use std::cmp::Ordering;

use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};
use numerus_digits::{Nat, ParseNumberError};
use numerus_integer::Integer;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    pub(crate) num: Integer,
    pub(crate) den: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let neg = numerator.is_negative() != denominator.is_negative();
        let (_, num) = numerator.into_parts();
        let (_, den) = denominator.into_parts();
        Self::from_nats(neg, num, den)
    }

    /// Creates a rational from a sign and magnitudes, reducing to lowest
    /// terms. The denominator must be non-zero.
    pub(crate) fn from_nats(neg: bool, num: Nat, den: Nat) -> Self {
        debug_assert!(!den.is_zero());
        if num.is_zero() {
            return Self::zero();
        }
        let g = num.gcd(&den);
        let (num, den) = if g.is_one() {
            (num, den)
        } else {
            (&num / &g, &den / &g)
        };
        Self {
            num: Integer::from_parts(neg, num),
            den: Integer::from_nat(den),
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            num: n,
            den: Integer::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator. Its sign is the sign of the rational.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.num
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.den
    }

    /// Consumes the rational, returning numerator and denominator.
    #[must_use]
    pub fn into_parts(self) -> (Integer, Integer) {
        (self.num, self.den)
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.num.clone())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        let neg = self.num.is_negative();
        Self {
            num: Integer::from_parts(neg, self.den.magnitude().clone()),
            den: self.num.abs(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn sign(&self) -> i32 {
        self.num.sign()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Returns true if greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.num.is_positive()
    }

    /// Computes self^exp. Negative exponents raise the reciprocal.
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero and `exp` is negative.
    #[must_use]
    pub fn pow(&self, exp: i32) -> Self {
        let base = if exp < 0 { self.recip() } else { self.clone() };
        let e = exp.unsigned_abs();
        // Powers of coprime values stay coprime.
        Self {
            num: base.num.pow(e),
            den: base.den.pow(e),
        }
    }

    /// Truncates toward zero.
    #[must_use]
    pub fn trunc(&self) -> Integer {
        &self.num / &self.den
    }

    /// Largest integer not greater than the value.
    #[must_use]
    pub fn floor(&self) -> Integer {
        self.num.div_euclid(&self.den)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        if self.den == other.den {
            return self.num.cmp(&other.num);
        }
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl Num for Rational {
    type FromStrRadixErr = ParseNumberError;

    /// Parses `a` or `a/b` with both parts in the given radix.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseNumberError> {
        Self::from_str_radix(s, radix)
    }
}

impl Signed for Rational {
    fn abs(&self) -> Self {
        Rational::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Self::from(i64::from(self.sign()))
    }

    fn is_positive(&self) -> bool {
        Rational::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        Rational::is_negative(self)
    }
}

impl ToPrimitive for Rational {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }

    /// Truncates toward zero.
    fn to_u64(&self) -> Option<u64> {
        self.trunc().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self).0)
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from_integer(Integer::from(n)))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Rational::from_f64(n)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
