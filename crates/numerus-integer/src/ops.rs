//! Arithmetic operators and division for [`Integer`].
//!
//! `/` and `%` truncate toward zero, like Rust's primitive integers.
//! [`Integer::div_mod`] is the Euclidean pair with a non-negative remainder.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use crate::Integer;

impl Integer {
    fn add_signed(&self, rhs: &Self, rhs_neg: bool) -> Self {
        if self.neg == rhs_neg {
            return Self::from_parts(self.neg, &self.mag + &rhs.mag);
        }
        let (mag, flipped) = self.mag.abs_diff(&rhs.mag);
        Self::from_parts(if flipped { rhs_neg } else { self.neg }, mag)
    }

    /// Returns the truncated quotient and remainder: `q = trunc(self / d)`
    /// and `r = self - q*d`, so the remainder takes the sign of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[must_use]
    pub fn quo_rem(&self, d: &Self) -> (Self, Self) {
        let (q, r) = self.mag.div_rem(&d.mag);
        (
            Self::from_parts(self.neg != d.neg, q),
            Self::from_parts(self.neg, r),
        )
    }

    /// Returns the Euclidean quotient and modulus: `0 <= m < |d|` and
    /// `q*d + m = self`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[must_use]
    pub fn div_mod(&self, d: &Self) -> (Self, Self) {
        let (mut q, mut r) = self.quo_rem(d);
        if r.neg {
            if d.neg {
                q = &q + &Self::new(1);
            } else {
                q = &q - &Self::new(1);
            }
            r = Self::from_nat(&d.mag - &r.mag);
        }
        (q, r)
    }

    /// Euclidean quotient.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[must_use]
    pub fn div_euclid(&self, d: &Self) -> Self {
        self.div_mod(d).0
    }

    /// Euclidean modulus, in `[0, |d|)`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[must_use]
    pub fn rem_euclid(&self, d: &Self) -> Self {
        self.div_mod(d).1
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Integer {
        self.add_signed(rhs, rhs.neg)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Integer {
        self.add_signed(rhs, !rhs.neg)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Integer {
        Integer::from_parts(self.neg != rhs.neg, &self.mag * &rhs.mag)
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: Self) -> Integer {
        self.quo_rem(rhs).0
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, rhs: Self) -> Integer {
        self.quo_rem(rhs).1
    }
}

macro_rules! forward_binop {
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

        impl $imp<Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Self::Output {
                self.$method(&rhs)
            }
        }
    )*};
}

forward_binop!(Add add, Sub sub, Mul mul, Div div, Rem rem);

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, rhs: Integer) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Integer {
    fn sub_assign(&mut self, rhs: Integer) {
        *self = &*self - &rhs;
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Integer {
    fn mul_assign(&mut self, rhs: Integer) {
        *self = &*self * &rhs;
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let neg = !self.neg;
        Self::from_parts(neg, self.mag)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer::from_parts(!self.neg, self.mag.clone())
    }
}
