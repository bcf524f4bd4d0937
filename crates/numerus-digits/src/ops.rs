//! Operator trait impls for [`Nat`].
//!
//! The borrowed forms do the work; owned forms forward to them. Every result
//! is computed into fresh storage before it is stored, so `x = &x * &x` and
//! friends are always safe.

use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Rem, Shl, Shr, Sub, SubAssign,
};

use crate::arith;
use crate::div;
use crate::mul::mul_slices;
use crate::nat::Nat;

impl Add for &Nat {
    type Output = Nat;

    fn add(self, rhs: Self) -> Nat {
        let (long, short) = if self.len() >= rhs.len() { (self, rhs) } else { (rhs, self) };
        let mut z = long.digits.clone();
        let carry = arith::add_assign(&mut z, &short.digits);
        if carry != 0 {
            z.push(carry);
        }
        Nat::from_digits(z)
    }
}

impl Sub for &Nat {
    type Output = Nat;

    /// # Panics
    ///
    /// Panics if `rhs > self`.
    fn sub(self, rhs: Self) -> Nat {
        self.checked_sub(rhs)
            .expect("natural number subtraction underflow")
    }
}

impl Mul for &Nat {
    type Output = Nat;

    fn mul(self, rhs: Self) -> Nat {
        Nat::from_digits(mul_slices(&self.digits, &rhs.digits))
    }
}

impl Div for &Nat {
    type Output = Nat;

    fn div(self, rhs: Self) -> Nat {
        self.div_rem(rhs).0
    }
}

impl Rem for &Nat {
    type Output = Nat;

    fn rem(self, rhs: Self) -> Nat {
        self.div_rem(rhs).1
    }
}

impl BitAnd for &Nat {
    type Output = Nat;

    fn bitand(self, rhs: Self) -> Nat {
        self.and(rhs)
    }
}

impl BitOr for &Nat {
    type Output = Nat;

    fn bitor(self, rhs: Self) -> Nat {
        self.or(rhs)
    }
}

impl BitXor for &Nat {
    type Output = Nat;

    fn bitxor(self, rhs: Self) -> Nat {
        self.xor(rhs)
    }
}

macro_rules! forward_binop {
    ($($imp:ident $method:ident),* $(,)?) => {$(
        impl $imp for Nat {
            type Output = Nat;

            fn $method(self, rhs: Nat) -> Nat {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Nat> for Nat {
            type Output = Nat;

            fn $method(self, rhs: &Nat) -> Nat {
                (&self).$method(rhs)
            }
        }

        impl $imp<Nat> for &Nat {
            type Output = Nat;

            fn $method(self, rhs: Nat) -> Nat {
                self.$method(&rhs)
            }
        }
    )*};
}

forward_binop!(
    Add add,
    Sub sub,
    Mul mul,
    Div div,
    Rem rem,
    BitAnd bitand,
    BitOr bitor,
    BitXor bitxor,
);

impl Shl<u64> for &Nat {
    type Output = Nat;

    fn shl(self, n: u64) -> Nat {
        self.shl_bits(n)
    }
}

impl Shl<u64> for Nat {
    type Output = Nat;

    fn shl(self, n: u64) -> Nat {
        self.shl_bits(n)
    }
}

impl Shr<u64> for &Nat {
    type Output = Nat;

    fn shr(self, n: u64) -> Nat {
        self.shr_bits(n)
    }
}

impl Shr<u64> for Nat {
    type Output = Nat;

    fn shr(self, n: u64) -> Nat {
        self.shr_bits(n)
    }
}

impl AddAssign<&Nat> for Nat {
    fn add_assign(&mut self, rhs: &Nat) {
        if self.len() < rhs.len() {
            self.digits.resize(rhs.len(), 0);
        }
        let carry = arith::add_assign(&mut self.digits, &rhs.digits);
        if carry != 0 {
            self.digits.push(carry);
        }
    }
}

impl SubAssign<&Nat> for Nat {
    fn sub_assign(&mut self, rhs: &Nat) {
        assert!(*self >= *rhs, "natural number subtraction underflow");
        let borrow = arith::sub_assign(&mut self.digits, &rhs.digits);
        debug_assert_eq!(borrow, 0);
        self.normalize();
    }
}

impl MulAssign<&Nat> for Nat {
    fn mul_assign(&mut self, rhs: &Nat) {
        *self = &*self * rhs;
    }
}

impl Nat {
    /// Returns `(self / d, self % d)`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[must_use]
    pub fn div_rem(&self, d: &Self) -> (Self, Self) {
        assert!(!d.is_empty(), "division by zero");
        let (q, r) = div::div_rem(&self.digits, &d.digits);
        (Self::from_digits(q), Self::from_digits(r))
    }

    /// Returns `(self / d, self % d)` for a single-word divisor.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[must_use]
    pub fn div_rem_word(&self, d: u64) -> (Self, u64) {
        assert!(d != 0, "division by zero");
        let (q, r) = div::div_rem_word(&self.digits, d);
        (Self::from_digits(q), r)
    }

    /// Returns `self % d` for a single-word divisor.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[must_use]
    pub fn rem_word(&self, d: u64) -> u64 {
        assert!(d != 0, "division by zero");
        div::rem_word(&self.digits, d)
    }
}
