//! Bitwise operations on [`Integer`].
//!
//! Negative values behave as if stored in infinite two's complement. With
//! `x < 0` written as `-(m + 1)`, the bits of `x` are the complement of the
//! bits of `m = |x| - 1`, which keeps every operation on magnitudes.

use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use numerus_digits::Nat;

use crate::Integer;

impl Integer {
    /// `|self| - 1` for a negative value.
    fn complement_mag(&self) -> Nat {
        debug_assert!(self.neg);
        self.mag.sub_word(1)
    }

    /// `-(m + 1)`.
    fn from_complement(m: &Nat) -> Self {
        Self::from_parts(true, m.add_word(1))
    }

    /// Returns bit `i` of the two's-complement representation.
    #[must_use]
    pub fn bit(&self, i: u64) -> bool {
        if self.neg {
            !self.complement_mag().bit(i)
        } else {
            self.mag.bit(i)
        }
    }

    /// Sets bit `i` of the two's-complement representation.
    pub fn set_bit(&mut self, i: u64, value: bool) {
        if self.neg {
            let mut m = self.complement_mag();
            m.set_bit(i, !value);
            *self = Self::from_complement(&m);
        } else {
            self.mag.set_bit(i, value);
        }
    }

    /// Returns `self & !other`.
    #[must_use]
    pub fn and_not(&self, other: &Self) -> Self {
        match (self.neg, other.neg) {
            (false, false) => Self::from_nat(self.mag.and_not(&other.mag)),
            (true, true) => {
                // (-x) &^ (-y) == ^(x-1) & (y-1) == (y-1) &^ (x-1)
                Self::from_nat(other.complement_mag().and_not(&self.complement_mag()))
            }
            (true, false) => {
                // (-x) &^ y == ^(x-1) &^ y == ^((x-1) | y) == -(((x-1) | y) + 1)
                Self::from_complement(&self.complement_mag().or(&other.mag))
            }
            (false, true) => {
                // x &^ (-y) == x & (y-1)
                Self::from_nat(self.mag.and(&other.complement_mag()))
            }
        }
    }
}

impl BitAnd for &Integer {
    type Output = Integer;

    fn bitand(self, rhs: Self) -> Integer {
        match (self.neg, rhs.neg) {
            (false, false) => Integer::from_nat(self.mag.and(&rhs.mag)),
            (true, true) => {
                // (-x) & (-y) == ^(x-1) & ^(y-1) == -(((x-1) | (y-1)) + 1)
                Integer::from_complement(&self.complement_mag().or(&rhs.complement_mag()))
            }
            (false, true) => Integer::from_nat(self.mag.and_not(&rhs.complement_mag())),
            (true, false) => Integer::from_nat(rhs.mag.and_not(&self.complement_mag())),
        }
    }
}

impl BitOr for &Integer {
    type Output = Integer;

    fn bitor(self, rhs: Self) -> Integer {
        match (self.neg, rhs.neg) {
            (false, false) => Integer::from_nat(self.mag.or(&rhs.mag)),
            (true, true) => {
                // (-x) | (-y) == -(((x-1) & (y-1)) + 1)
                Integer::from_complement(&self.complement_mag().and(&rhs.complement_mag()))
            }
            (false, true) => {
                // x | (-y) == -(((y-1) &^ x) + 1)
                Integer::from_complement(&rhs.complement_mag().and_not(&self.mag))
            }
            (true, false) => Integer::from_complement(&self.complement_mag().and_not(&rhs.mag)),
        }
    }
}

impl BitXor for &Integer {
    type Output = Integer;

    fn bitxor(self, rhs: Self) -> Integer {
        match (self.neg, rhs.neg) {
            (false, false) => Integer::from_nat(self.mag.xor(&rhs.mag)),
            (true, true) => Integer::from_nat(self.complement_mag().xor(&rhs.complement_mag())),
            (false, true) => {
                // x ^ (-y) == -((x ^ (y-1)) + 1)
                Integer::from_complement(&self.mag.xor(&rhs.complement_mag()))
            }
            (true, false) => Integer::from_complement(&self.complement_mag().xor(&rhs.mag)),
        }
    }
}

macro_rules! forward_bitop {
    ($($imp:ident $method:ident),* $(,)?) => {$(
        impl $imp for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Integer> for Integer {
            type Output = Self;

            fn $method(self, rhs: &Integer) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    )*};
}

forward_bitop!(BitAnd bitand, BitOr bitor, BitXor bitxor);

impl Not for &Integer {
    type Output = Integer;

    /// `!x == -x - 1`.
    fn not(self) -> Integer {
        if self.neg {
            Integer::from_nat(self.complement_mag())
        } else {
            Integer::from_complement(&self.mag)
        }
    }
}

impl Not for Integer {
    type Output = Self;

    fn not(self) -> Self {
        !&self
    }
}

impl Shl<u64> for &Integer {
    type Output = Integer;

    fn shl(self, n: u64) -> Integer {
        Integer::from_parts(self.neg, self.mag.shl_bits(n))
    }
}

impl Shl<u64> for Integer {
    type Output = Self;

    fn shl(self, n: u64) -> Self {
        &self << n
    }
}

impl Shr<u64> for &Integer {
    type Output = Integer;

    /// Arithmetic shift: rounds toward negative infinity.
    fn shr(self, n: u64) -> Integer {
        if self.neg {
            // (-x) >> s == ^(x-1) >> s == ^((x-1) >> s) == -(((x-1) >> s) + 1)
            Integer::from_complement(&self.complement_mag().shr_bits(n))
        } else {
            Integer::from_nat(self.mag.shr_bits(n))
        }
    }
}

impl Shr<u64> for Integer {
    type Output = Self;

    fn shr(self, n: u64) -> Self {
        &self >> n
    }
}
