//! Arithmetic operators for [`Rational`].
//!
//! Every result is reduced before it is returned.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use num_traits::Zero;
use numerus_integer::Integer;

use crate::Rational;

impl Rational {
    fn add_signed(&self, rhs: &Self, negate_rhs: bool) -> Self {
        if self.den == rhs.den {
            let num = if negate_rhs { &self.num - &rhs.num } else { &self.num + &rhs.num };
            return Self::new(num, self.den.clone());
        }
        let ad = &self.num * &rhs.den;
        let cb = &rhs.num * &self.den;
        let num = if negate_rhs { &ad - &cb } else { &ad + &cb };
        Self::new(num, &self.den * &rhs.den)
    }

    /// Returns `self / rhs`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn quo(&self, rhs: &Self) -> Self {
        assert!(!rhs.is_zero(), "division by zero");
        Self::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        self.add_signed(rhs, false)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        self.add_signed(rhs, true)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        Rational::new(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Rational {
        self.quo(rhs)
    }
}

impl Rem for &Rational {
    type Output = Rational;

    /// Remainder of truncated division: `self - trunc(self / rhs) * rhs`.
    fn rem(self, rhs: Self) -> Rational {
        let q = Rational::from_integer(self.quo(rhs).trunc());
        self - &(&q * rhs)
    }
}

macro_rules! forward_binop {
    ($($imp:ident $method:ident $assign_imp:ident $assign:ident),* $(,)?) => {$(
        impl $imp for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Rational) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl $assign_imp<&Rational> for Rational {
            fn $assign(&mut self, rhs: &Rational) {
                *self = (&*self).$method(rhs);
            }
        }

        impl $assign_imp for Rational {
            fn $assign(&mut self, rhs: Rational) {
                *self = (&*self).$method(&rhs);
            }
        }
    )*};
}

forward_binop!(
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign,
);

impl Rem for Rational {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl Add<&Integer> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Integer) -> Rational {
        Rational::new(&self.num + &(rhs * &self.den), self.den.clone())
    }
}

impl Mul<&Integer> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Integer) -> Rational {
        Rational::new(&self.num * rhs, self.den.clone())
    }
}
