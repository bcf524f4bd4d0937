//! Arbitrary precision integers.
//!
//! An [`Integer`] is a sign flag and a [`Nat`] magnitude. Zero is always
//! non-negative, so derived equality and hashing agree with numeric value.

use std::cmp::Ordering;

use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};
use numerus_digits::{Nat, ParseNumberError};

/// An arbitrary precision signed integer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    pub(crate) neg: bool,
    pub(crate) mag: Nat,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from_parts(value < 0, Nat::from_word(value.unsigned_abs()))
    }

    /// Creates an integer from a sign and a magnitude. A zero magnitude is
    /// always non-negative.
    #[must_use]
    pub fn from_parts(neg: bool, mag: Nat) -> Self {
        let neg = neg && !mag.is_zero();
        Self { neg, mag }
    }

    /// Creates a non-negative integer from a magnitude.
    #[must_use]
    pub fn from_nat(mag: Nat) -> Self {
        Self { neg: false, mag }
    }

    /// Returns the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> &Nat {
        &self.mag
    }

    /// Consumes the integer, returning sign and magnitude.
    #[must_use]
    pub fn into_parts(self) -> (bool, Nat) {
        (self.neg, self.mag)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_nat(self.mag.clone())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn sign(&self) -> i32 {
        if self.mag.is_zero() {
            0
        } else if self.neg {
            -1
        } else {
            1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    /// Returns true if this integer is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.neg && !self.mag.is_zero()
    }

    /// Returns true if the integer is even.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.mag.is_even()
    }

    /// Returns true if the integer is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        !self.mag.is_even()
    }

    /// Returns the number of bits of the absolute value; 0 for zero.
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        self.mag.bit_len()
    }

    /// Number of consecutive least significant zero bits of the absolute
    /// value; 0 for zero.
    #[must_use]
    pub fn trailing_zeros(&self) -> u64 {
        self.mag.trailing_zeros()
    }

    /// Compares absolute values.
    #[must_use]
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        self.mag.cmp(&other.mag)
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let m = self.mag.to_u64()?;
        if self.neg {
            0i64.checked_sub_unsigned(m)
        } else {
            i64::try_from(m).ok()
        }
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` if the value is negative or too large.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.neg {
            None
        } else {
            self.mag.to_u64()
        }
    }

    /// Attempts to convert to an i128.
    #[must_use]
    pub fn to_i128(&self) -> Option<i128> {
        let m = self.mag.to_u128()?;
        if self.neg {
            0i128.checked_sub_unsigned(m)
        } else {
            i128::try_from(m).ok()
        }
    }

    /// Attempts to convert to a u128.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.neg {
            None
        } else {
            self.mag.to_u128()
        }
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self::from_parts(self.neg && exp & 1 == 1, self.mag.pow(exp))
    }

    /// Returns `floor(sqrt(self))`.
    ///
    /// # Panics
    ///
    /// Panics if the integer is negative.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        assert!(!self.neg, "square root of negative number");
        Self::from_nat(self.mag.sqrt())
    }

    /// Computes the least common multiple, always non-negative.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.mag.gcd(&other.mag);
        Self::from_nat(&(&self.mag / &g) * &other.mag)
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.neg, other.neg) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.mag.cmp(&other.mag),
            (true, true) => other.mag.cmp(&self.mag),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::from_nat(Nat::one())
    }

    fn is_one(&self) -> bool {
        !self.neg && self.mag.is_one()
    }
}

impl Num for Integer {
    type FromStrRadixErr = ParseNumberError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseNumberError> {
        Integer::from_str_radix(s, radix)
    }
}

impl Signed for Integer {
    fn abs(&self) -> Self {
        Integer::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Self::new(i64::from(self.sign()))
    }

    fn is_positive(&self) -> bool {
        Integer::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        self.neg
    }
}

impl ToPrimitive for Integer {
    fn to_i64(&self) -> Option<i64> {
        Integer::to_i64(self)
    }

    fn to_u64(&self) -> Option<u64> {
        Integer::to_u64(self)
    }

    fn to_i128(&self) -> Option<i128> {
        Integer::to_i128(self)
    }

    fn to_u128(&self) -> Option<u128> {
        Integer::to_u128(self)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.as_f64().0)
    }
}

impl FromPrimitive for Integer {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::new(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_f64_trunc(n)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                Self::new(i64::from(value))
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                Self::from_nat(Nat::from_word(u64::from(value)))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<i128> for Integer {
    fn from(value: i128) -> Self {
        Self::from_parts(value < 0, Nat::from_u128(value.unsigned_abs()))
    }
}

impl From<u128> for Integer {
    fn from(value: u128) -> Self {
        Self::from_nat(Nat::from_u128(value))
    }
}

impl From<isize> for Integer {
    fn from(value: isize) -> Self {
        Self::from(value as i64)
    }
}

impl From<usize> for Integer {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<Nat> for Integer {
    fn from(value: Nat) -> Self {
        Self::from_nat(value)
    }
}
