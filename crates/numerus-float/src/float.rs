//! Arbitrary precision binary floating point values.
//!
//! A finite non-zero [`Float`] is `±0.m × 2^exp` where `0.m` is a binary
//! fraction in `[0.5, 1)`. The fraction is held as an odd [`Nat`] `m`
//! (trailing zero bits are stripped) so that its value is
//! `m / 2^bit_len(m)`, and `bit_len(m)` never exceeds the precision.
//!
//! Precision and rounding mode belong to the destination of an operation.
//! Accuracy is not stored; every producing operation returns it.

use std::cmp::Ordering;

use numerus_digits::Nat;

use crate::mode::{Accuracy, RoundingMode};

/// Smallest exponent of a finite non-zero value.
pub const MIN_EXP: i32 = i32::MIN;
/// Largest exponent of a finite non-zero value.
pub const MAX_EXP: i32 = i32::MAX;
/// Largest supported precision in bits.
pub const MAX_PREC: u32 = u32::MAX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Form {
    #[default]
    Zero,
    Finite,
    Inf,
}

/// An arbitrary precision binary floating point number.
///
/// The default value is `+0` with precision 0 and [`RoundingMode::ToNearestEven`].
/// A precision-0 destination adopts a precision from its operands when it
/// is first written.
#[derive(Clone, Default)]
pub struct Float {
    pub(crate) prec: u32,
    pub(crate) mode: RoundingMode,
    pub(crate) form: Form,
    pub(crate) neg: bool,
    pub(crate) mant: Nat,
    pub(crate) exp: i32,
}

impl Float {
    /// Returns `+0` with precision 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `+0` with the given precision.
    #[must_use]
    pub fn with_prec(prec: u32) -> Self {
        Self {
            prec,
            ..Self::default()
        }
    }

    /// Returns `+0` with the given precision and rounding mode.
    #[must_use]
    pub fn with_prec_and_mode(prec: u32, mode: RoundingMode) -> Self {
        Self {
            prec,
            mode,
            ..Self::default()
        }
    }

    /// Precision in bits.
    #[must_use]
    pub fn prec(&self) -> u32 {
        self.prec
    }

    /// Smallest precision that represents the value exactly; 0 for zero and
    /// infinities.
    #[must_use]
    pub fn min_prec(&self) -> u64 {
        match self.form {
            Form::Finite => self.mant.bit_len(),
            Form::Zero | Form::Inf => 0,
        }
    }

    /// Rounding mode applied when this value is a destination.
    #[must_use]
    pub fn mode(&self) -> RoundingMode {
        self.mode
    }

    /// Sets the rounding mode without changing the value.
    pub fn set_mode(&mut self, mode: RoundingMode) {
        self.mode = mode;
    }

    /// Sets the precision and re-rounds the value to it.
    ///
    /// Precision 0 turns a finite value into a zero of the same sign;
    /// infinities are kept.
    pub fn set_prec(&mut self, prec: u32) -> Accuracy {
        self.prec = prec;
        if self.form != Form::Finite {
            return Accuracy::Exact;
        }
        if prec == 0 {
            self.form = Form::Zero;
            self.mant = Nat::new();
            self.exp = 0;
            return Accuracy::inexact(self.neg);
        }
        if self.mant.bit_len() <= u64::from(prec) {
            return Accuracy::Exact;
        }
        let mant = std::mem::take(&mut self.mant);
        let lsb = self.lsb_exp(&mant);
        self.round(self.neg, mant, lsb, false)
    }

    /// Returns -1, 0 or 1. Both zeros give 0.
    #[must_use]
    pub fn sign(&self) -> i32 {
        match (self.form, self.neg) {
            (Form::Zero, _) => 0,
            (_, true) => -1,
            (_, false) => 1,
        }
    }

    /// True if the sign bit is set, including `-0`.
    #[must_use]
    pub fn is_sign_negative(&self) -> bool {
        self.neg
    }

    /// True for `±0`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.form == Form::Zero
    }

    /// True for `±Inf`.
    #[must_use]
    pub fn is_inf(&self) -> bool {
        self.form == Form::Inf
    }

    /// True if the value is an integer. Infinities are not.
    #[must_use]
    pub fn is_int(&self) -> bool {
        match self.form {
            Form::Zero => true,
            Form::Inf => false,
            Form::Finite => i64::from(self.exp) >= self.mant.bit_len() as i64,
        }
    }

    /// Sets the value to `±Inf`, adopting no precision.
    pub fn set_inf(&mut self, neg: bool) -> &mut Self {
        self.form = Form::Inf;
        self.neg = neg;
        self.mant = Nat::new();
        self.exp = 0;
        self
    }

    /// Sets the value to `±0`.
    pub(crate) fn set_zero(&mut self, neg: bool) -> &mut Self {
        self.form = Form::Zero;
        self.neg = neg;
        self.mant = Nat::new();
        self.exp = 0;
        self
    }

    /// Copies the value of `x`, rounded to this destination's precision.
    /// A precision-0 destination takes the precision of `x`.
    pub fn assign(&mut self, x: &Float) -> Accuracy {
        if self.prec == 0 {
            self.prec = x.prec;
        }
        match x.form {
            Form::Zero => {
                self.set_zero(x.neg);
                Accuracy::Exact
            }
            Form::Inf => {
                self.set_inf(x.neg);
                Accuracy::Exact
            }
            Form::Finite => self.round(x.neg, x.mant.clone(), x.lsb_exp(&x.mant), false),
        }
    }

    /// Returns a copy with the sign cleared.
    #[must_use]
    pub fn abs(&self) -> Float {
        let mut z = self.clone();
        z.neg = false;
        z
    }

    /// Splits a value into a mantissa with `0.5 <= |mant| < 1` and an
    /// exponent with `self = mant × 2^exp`.
    ///
    /// Zeros and infinities give themselves and exponent 0.
    #[must_use]
    pub fn mant_exp(&self) -> (Float, i32) {
        let mut mant = self.clone();
        if self.form != Form::Finite {
            return (mant, 0);
        }
        mant.exp = 0;
        (mant, self.exp)
    }

    /// Sets the value to `mant × 2^exp`, rounded to this destination's
    /// precision. A precision-0 destination takes the precision of `mant`.
    pub fn set_mant_exp(&mut self, mant: &Float, exp: i32) -> Accuracy {
        if self.prec == 0 {
            self.prec = mant.prec;
        }
        match mant.form {
            Form::Zero => {
                self.set_zero(mant.neg);
                Accuracy::Exact
            }
            Form::Inf => {
                self.set_inf(mant.neg);
                Accuracy::Exact
            }
            Form::Finite => {
                let lsb = mant.lsb_exp(&mant.mant) + i64::from(exp);
                self.round(mant.neg, mant.mant.clone(), lsb, false)
            }
        }
    }

    /// Exponent of the least significant bit of `mant` for this value.
    pub(crate) fn lsb_exp(&self, mant: &Nat) -> i64 {
        i64::from(self.exp) - mant.bit_len() as i64
    }

    /// Compares magnitudes of two finite non-zero values.
    fn cmp_finite_abs(&self, other: &Self) -> Ordering {
        match self.exp.cmp(&other.exp) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        let (a, b) = (self.mant.bit_len(), other.mant.bit_len());
        match a.cmp(&b) {
            Ordering::Less => self.mant.shl_bits(b - a).cmp(&other.mant),
            Ordering::Greater => self.mant.cmp(&other.mant.shl_bits(a - b)),
            Ordering::Equal => self.mant.cmp(&other.mant),
        }
    }

    /// Compares magnitudes; infinities are larger than every finite value.
    #[must_use]
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        let rank = |f: &Float| match f.form {
            Form::Zero => 0,
            Form::Finite => 1,
            Form::Inf => 2,
        };
        match (self.form, other.form) {
            (Form::Finite, Form::Finite) => self.cmp_finite_abs(other),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl PartialEq for Float {
    /// Value equality: `+0 == -0` and precision is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Float {}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        let ord = self.cmp_abs(other);
        if self.neg && self.form != Form::Zero {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
