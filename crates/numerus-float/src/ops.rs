//! Arithmetic operators for [`Float`].
//!
//! Binary operators return a fresh value whose precision is the larger of
//! the operand precisions and whose rounding mode is the left operand's.
//! Compound assignment keeps the left operand's precision and mode. Every
//! operator panics where the corresponding `set_*` method returns
//! [`ErrNaN`](crate::ErrNaN).

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::float::Float;

macro_rules! float_binop {
    ($($imp:ident $method:ident $assign_imp:ident $assign:ident => $set:ident),* $(,)?) => {$(
        impl $imp for &Float {
            type Output = Float;

            fn $method(self, rhs: Self) -> Float {
                let mut z = Float::with_prec_and_mode(0, self.mode);
                if let Err(err) = Float::$set(&mut z, self, rhs) {
                    panic!("{err}");
                }
                z
            }
        }

        impl $imp for Float {
            type Output = Float;

            fn $method(self, rhs: Self) -> Float {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Float> for Float {
            type Output = Float;

            fn $method(self, rhs: &Float) -> Float {
                (&self).$method(rhs)
            }
        }

        impl $imp<Float> for &Float {
            type Output = Float;

            fn $method(self, rhs: Float) -> Float {
                self.$method(&rhs)
            }
        }

        impl $assign_imp<&Float> for Float {
            fn $assign(&mut self, rhs: &Float) {
                let lhs = self.clone();
                if let Err(err) = Float::$set(self, &lhs, rhs) {
                    panic!("{err}");
                }
            }
        }

        impl $assign_imp for Float {
            fn $assign(&mut self, rhs: Float) {
                self.$assign(&rhs);
            }
        }
    )*};
}

float_binop!(
    Add add AddAssign add_assign => set_add,
    Sub sub SubAssign sub_assign => set_sub,
    Mul mul MulAssign mul_assign => set_mul,
    Div div DivAssign div_assign => set_quo,
);

impl Neg for &Float {
    type Output = Float;

    /// Flips the sign, including the sign of zeros and infinities.
    fn neg(self) -> Float {
        let mut z = self.clone();
        z.neg = !z.neg;
        z
    }
}

impl Neg for Float {
    type Output = Float;

    fn neg(mut self) -> Float {
        self.neg = !self.neg;
        self
    }
}
