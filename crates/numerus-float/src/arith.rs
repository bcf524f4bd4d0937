//! Correctly rounded arithmetic on [`Float`].
//!
//! Each operation writes the destination `self`, adopting the larger operand
//! precision when the destination precision is 0, and returns the accuracy
//! of the rounded result. Invalid operations return [`ErrNaN`] and leave the
//! destination unspecified.

use crate::error::ErrNaN;
use crate::float::{Float, Form};
use crate::mode::{Accuracy, RoundingMode};

impl Float {
    fn adopt_prec(&mut self, x: &Float, y: &Float) {
        if self.prec == 0 {
            self.prec = x.prec.max(y.prec);
        }
    }

    /// Sets `self = x + y`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrNaN`] for infinities of opposite sign.
    pub fn set_add(&mut self, x: &Float, y: &Float) -> Result<Accuracy, ErrNaN> {
        self.add_signed(x, y, y.neg, "addition of infinities with opposite signs")
    }

    /// Sets `self = x - y`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrNaN`] for infinities of equal sign.
    pub fn set_sub(&mut self, x: &Float, y: &Float) -> Result<Accuracy, ErrNaN> {
        self.add_signed(x, y, !y.neg, "subtraction of infinities with equal signs")
    }

    fn add_signed(
        &mut self,
        x: &Float,
        y: &Float,
        y_neg: bool,
        nan: &'static str,
    ) -> Result<Accuracy, ErrNaN> {
        self.adopt_prec(x, y);
        let acc = match (x.form, y.form) {
            (Form::Inf, Form::Inf) if x.neg != y_neg => return Err(ErrNaN::new(nan)),
            (Form::Inf, _) => {
                self.set_inf(x.neg);
                Accuracy::Exact
            }
            (_, Form::Inf) => {
                self.set_inf(y_neg);
                Accuracy::Exact
            }
            (Form::Zero, Form::Zero) => {
                let neg = if self.mode == RoundingMode::ToNegativeInf {
                    x.neg || y_neg
                } else {
                    x.neg && y_neg
                };
                self.set_zero(neg);
                Accuracy::Exact
            }
            (Form::Zero, Form::Finite) => self.round(y_neg, y.mant.clone(), y.lsb_exp(&y.mant), false),
            (Form::Finite, Form::Zero) => self.round(x.neg, x.mant.clone(), x.lsb_exp(&x.mant), false),
            (Form::Finite, Form::Finite) => {
                if x.exp >= y.exp {
                    self.add_finite(x, x.neg, y, y_neg)
                } else {
                    self.add_finite(y, y_neg, x, x.neg)
                }
            }
        };
        Ok(acc)
    }

    /// Adds two finite non-zero values where `big.exp >= small.exp`.
    fn add_finite(&mut self, big: &Float, big_neg: bool, small: &Float, small_neg: bool) -> Accuracy {
        let lb = big.lsb_exp(&big.mant);
        let ls = small.lsb_exp(&small.mant);

        // When all of `small` lies below one unit of `big` widened past the
        // rounding position, it only contributes a sticky bit.
        let widen = (u64::from(self.prec) + 3).saturating_sub(big.mant.bit_len());
        let unit = lb - widen as i64;
        if i64::from(small.exp) <= unit {
            let m = big.mant.shl_bits(widen);
            return if big_neg == small_neg {
                self.round(big_neg, m, unit, true)
            } else {
                self.round(big_neg, m.sub_word(1), unit, true)
            };
        }

        let lsb = lb.min(ls);
        let a = big.mant.shl_bits((lb - lsb) as u64);
        let b = small.mant.shl_bits((ls - lsb) as u64);
        if big_neg == small_neg {
            return self.round(big_neg, &a + &b, lsb, false);
        }
        let (diff, flipped) = a.abs_diff(&b);
        if diff.is_empty() {
            self.set_zero(self.mode == RoundingMode::ToNegativeInf);
            return Accuracy::Exact;
        }
        let neg = if flipped { small_neg } else { big_neg };
        self.round(neg, diff, lsb, false)
    }

    /// Sets `self = x × y`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrNaN`] for zero times infinity.
    pub fn set_mul(&mut self, x: &Float, y: &Float) -> Result<Accuracy, ErrNaN> {
        self.adopt_prec(x, y);
        let neg = x.neg != y.neg;
        let acc = match (x.form, y.form) {
            (Form::Zero, Form::Inf) | (Form::Inf, Form::Zero) => {
                return Err(ErrNaN::new("multiplication of zero with infinity"))
            }
            (Form::Inf, _) | (_, Form::Inf) => {
                self.set_inf(neg);
                Accuracy::Exact
            }
            (Form::Zero, _) | (_, Form::Zero) => {
                self.set_zero(neg);
                Accuracy::Exact
            }
            (Form::Finite, Form::Finite) => {
                let lsb = x.lsb_exp(&x.mant) + y.lsb_exp(&y.mant);
                self.round(neg, &x.mant * &y.mant, lsb, false)
            }
        };
        Ok(acc)
    }

    /// Sets `self = x / y`. A finite value divided by zero is an infinity.
    ///
    /// # Errors
    ///
    /// Returns [`ErrNaN`] for `0 / 0` and `Inf / Inf`.
    pub fn set_quo(&mut self, x: &Float, y: &Float) -> Result<Accuracy, ErrNaN> {
        self.adopt_prec(x, y);
        let neg = x.neg != y.neg;
        let acc = match (x.form, y.form) {
            (Form::Zero, Form::Zero) | (Form::Inf, Form::Inf) => {
                return Err(ErrNaN::new("division of zero by zero or infinity by infinity"))
            }
            (Form::Zero, _) | (_, Form::Inf) => {
                self.set_zero(neg);
                Accuracy::Exact
            }
            (Form::Inf, _) | (_, Form::Zero) => {
                self.set_inf(neg);
                Accuracy::Exact
            }
            (Form::Finite, Form::Finite) => {
                let exp2 = x.lsb_exp(&x.mant) - y.lsb_exp(&y.mant);
                self.round_ratio(neg, &x.mant, &y.mant, exp2)
            }
        };
        Ok(acc)
    }

    /// Sets `self` to the correctly rounded square root of `x`, adopting the
    /// precision of `x` when the destination precision is 0.
    /// `sqrt(-0)` is `-0`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrNaN`] for a negative operand.
    pub fn set_sqrt(&mut self, x: &Float) -> Result<Accuracy, ErrNaN> {
        if self.prec == 0 {
            self.prec = x.prec;
        }
        match x.form {
            Form::Zero => {
                self.set_zero(x.neg);
                Ok(Accuracy::Exact)
            }
            _ if x.neg => Err(ErrNaN::new("square root of negative operand")),
            Form::Inf => {
                self.set_inf(false);
                Ok(Accuracy::Exact)
            }
            Form::Finite => {
                let lsb = x.lsb_exp(&x.mant);
                // Twice the result bits, plus guard bits, at an even exponent.
                let mut shift = (2 * u64::from(self.prec) + 6).saturating_sub(x.mant.bit_len());
                if (lsb - shift as i64).rem_euclid(2) != 0 {
                    shift += 1;
                }
                let m = x.mant.shl_bits(shift);
                let root = m.sqrt();
                let sticky = root.sqr() != m;
                Ok(self.round(false, root, (lsb - shift as i64) / 2, sticky))
            }
        }
    }
}
