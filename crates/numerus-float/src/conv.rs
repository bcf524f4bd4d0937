//! Conversions between [`Float`] and native numbers, [`Integer`] and
//! [`Rational`].
//!
//! Setters round to the destination precision; a precision-0 destination
//! first adopts the natural precision of the source. Getters report the
//! accuracy of the returned value relative to `self`.

use numerus_digits::native::{split_f64, NativeFormat};
use numerus_digits::Nat;
use numerus_integer::Integer;
use numerus_rational::Rational;

use crate::error::ErrNaN;
use crate::float::{Float, Form};
use crate::mode::{Accuracy, RoundingMode};

/// Precision adopted from 64-bit integer and text sources.
pub(crate) const DEFAULT_PREC: u32 = 64;

impl Float {
    /// Returns `x` at precision 53.
    ///
    /// # Errors
    ///
    /// Returns [`ErrNaN`] if `x` is NaN.
    pub fn from_f64(x: f64) -> Result<Self, ErrNaN> {
        let mut z = Self::with_prec(53);
        z.set_f64(x)?;
        Ok(z)
    }

    /// Returns `x` at precision 64.
    #[must_use]
    pub fn from_i64(x: i64) -> Self {
        let mut z = Self::with_prec(DEFAULT_PREC);
        z.set_i64(x);
        z
    }

    /// Sets `self = x`. A precision-0 destination adopts 64.
    pub fn set_i64(&mut self, x: i64) -> Accuracy {
        if self.prec == 0 {
            self.prec = DEFAULT_PREC;
        }
        self.round(x < 0, Nat::from_word(x.unsigned_abs()), 0, false)
    }

    /// Sets `self = x`. A precision-0 destination adopts 64.
    pub fn set_u64(&mut self, x: u64) -> Accuracy {
        if self.prec == 0 {
            self.prec = DEFAULT_PREC;
        }
        self.round(false, Nat::from_word(x), 0, false)
    }

    /// Sets `self = x`, keeping the sign of zeros and infinities. A
    /// precision-0 destination adopts 53.
    ///
    /// # Errors
    ///
    /// Returns [`ErrNaN`] if `x` is NaN.
    pub fn set_f64(&mut self, x: f64) -> Result<Accuracy, ErrNaN> {
        self.set_native(x, NativeFormat::F64.precision())
    }

    /// Sets `self = x`, keeping the sign of zeros and infinities. A
    /// precision-0 destination adopts 24.
    ///
    /// # Errors
    ///
    /// Returns [`ErrNaN`] if `x` is NaN.
    pub fn set_f32(&mut self, x: f32) -> Result<Accuracy, ErrNaN> {
        self.set_native(f64::from(x), NativeFormat::F32.precision())
    }

    fn set_native(&mut self, x: f64, natural_prec: u32) -> Result<Accuracy, ErrNaN> {
        if x.is_nan() {
            return Err(ErrNaN::new("conversion of a NaN to Float"));
        }
        if self.prec == 0 {
            self.prec = natural_prec;
        }
        if x.is_infinite() {
            self.set_inf(x < 0.0);
            return Ok(Accuracy::Exact);
        }
        match split_f64(x) {
            Some((neg, mant, exp)) => Ok(self.round(neg, Nat::from_word(mant), i64::from(exp), false)),
            None => Err(ErrNaN::new("conversion of a NaN to Float")),
        }
    }

    /// Sets `self = x`. A precision-0 destination adopts the bit length of
    /// `x`, at least 64.
    pub fn set_int(&mut self, x: &Integer) -> Accuracy {
        let bits = x.bit_len();
        if self.prec == 0 {
            self.prec = u32::try_from(bits).unwrap_or(u32::MAX).max(DEFAULT_PREC);
        }
        self.round(x.is_negative(), x.magnitude().clone(), 0, false)
    }

    /// Sets `self = x`. A precision-0 destination adopts the larger bit
    /// length of numerator and denominator, at least 64.
    pub fn set_rat(&mut self, x: &Rational) -> Accuracy {
        if x.is_integer() {
            return self.set_int(x.numerator());
        }
        let (num, den) = (x.numerator(), x.denominator());
        if self.prec == 0 {
            let bits = num.bit_len().max(den.bit_len());
            self.prec = u32::try_from(bits).unwrap_or(u32::MAX).max(DEFAULT_PREC);
        }
        self.round_ratio(x.is_negative(), num.magnitude(), den.magnitude(), 0)
    }

    /// Returns the nearest `f64` (ties to even) and its accuracy.
    ///
    /// Values beyond the `f64` range give `±Inf`; tiny values round into the
    /// subnormal range or to `±0`.
    #[must_use]
    pub fn to_f64(&self) -> (f64, Accuracy) {
        let (bits, acc) = self.to_native(NativeFormat::F64);
        (f64::from_bits(bits), acc)
    }

    /// Returns the nearest `f32` (ties to even) and its accuracy.
    #[must_use]
    pub fn to_f32(&self) -> (f32, Accuracy) {
        let (bits, acc) = self.to_native(NativeFormat::F32);
        (f32::from_bits(bits as u32), acc)
    }

    /// Assembles the IEEE bit pattern nearest to `self` in `fmt`.
    fn to_native(&self, fmt: NativeFormat) -> (u64, Accuracy) {
        let sign_bit = 1u64 << (fmt.mant_bits + fmt.exp_bits);
        let sign = if self.neg { sign_bit } else { 0 };
        match self.form {
            Form::Zero => return (sign, Accuracy::Exact),
            Form::Inf => return (sign | fmt.inf_bits(), Accuracy::Exact),
            Form::Finite => {}
        }

        let bias = (1i64 << (fmt.exp_bits - 1)) - 1;
        let (emin, emax) = (1 - bias, bias);
        let mbits = i64::from(fmt.mant_bits);

        // Exponent for a mantissa in [1, 2).
        let e = i64::from(self.exp) - 1;
        let mut p = mbits + 1;
        if e < emin {
            // Subnormal: fewer mantissa bits remain.
            p = mbits + 1 - emin + e;
            if p < 0 || (p == 0 && self.mant.bit_len() == 1) {
                return (sign, Accuracy::inexact(self.neg));
            }
            if p == 0 {
                // Above half the smallest subnormal.
                return (sign | 1, Accuracy::inexact(!self.neg));
            }
        }

        let mut r = Float::with_prec_and_mode(p as u32, RoundingMode::ToNearestEven);
        let acc = r.assign(self);
        let e = i64::from(r.exp) - 1;
        if r.form == Form::Inf || e > emax {
            return (sign | fmt.inf_bits(), Accuracy::inexact(!self.neg));
        }

        let (biased, p) = if e < emin {
            (0, mbits + 1 - emin + e)
        } else {
            (e + bias, mbits + 1)
        };
        // The p-bit integer mantissa, leading one included.
        let m = r.mant.shl_bits(p as u64 - r.mant.bit_len());
        let field = m.low_word() & ((1u64 << fmt.mant_bits) - 1);
        (sign | (biased as u64) << fmt.mant_bits | field, acc)
    }

    /// Returns the magnitude truncated toward zero.
    fn trunc_mag(&self) -> Nat {
        let lsb = self.lsb_exp(&self.mant);
        if lsb >= 0 {
            self.mant.shl_bits(lsb as u64)
        } else {
            self.mant.shr_bits(lsb.unsigned_abs())
        }
    }

    /// Returns the value truncated toward zero and saturated to the `i64`
    /// range, with its accuracy.
    #[must_use]
    pub fn to_i64(&self) -> (i64, Accuracy) {
        match self.form {
            Form::Zero => (0, Accuracy::Exact),
            Form::Inf if self.neg => (i64::MIN, Accuracy::Above),
            Form::Inf => (i64::MAX, Accuracy::Below),
            Form::Finite => {
                let acc = if self.is_int() {
                    Accuracy::Exact
                } else {
                    Accuracy::inexact(self.neg)
                };
                if self.exp <= 63 {
                    let mag = self.trunc_mag().to_u64().unwrap_or(0) as i64;
                    return (if self.neg { -mag } else { mag }, acc);
                }
                if self.neg {
                    // -2^63 is the one value with exponent 64 that fits.
                    if self.exp == 64 && self.mant.bit_len() == 1 {
                        return (i64::MIN, Accuracy::Exact);
                    }
                    return (i64::MIN, Accuracy::Above);
                }
                (i64::MAX, Accuracy::Below)
            }
        }
    }

    /// Returns the value truncated toward zero and saturated to the `u64`
    /// range, with its accuracy. Negative values give 0.
    #[must_use]
    pub fn to_u64(&self) -> (u64, Accuracy) {
        match self.form {
            Form::Zero => (0, Accuracy::Exact),
            _ if self.neg => (0, Accuracy::Above),
            Form::Inf => (u64::MAX, Accuracy::Below),
            Form::Finite if self.exp <= 64 => {
                let acc = if self.is_int() { Accuracy::Exact } else { Accuracy::Below };
                (self.trunc_mag().to_u64().unwrap_or(0), acc)
            }
            Form::Finite => (u64::MAX, Accuracy::Below),
        }
    }

    /// Returns the value truncated toward zero with its accuracy, or `None`
    /// for infinities.
    #[must_use]
    pub fn to_integer(&self) -> Option<(Integer, Accuracy)> {
        match self.form {
            Form::Zero => Some((Integer::default(), Accuracy::Exact)),
            Form::Inf => None,
            Form::Finite => {
                let acc = if self.is_int() {
                    Accuracy::Exact
                } else {
                    Accuracy::inexact(self.neg)
                };
                Some((Integer::from_parts(self.neg, self.trunc_mag()), acc))
            }
        }
    }

    /// Returns the exact value as a rational, or `None` for infinities.
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        match self.form {
            Form::Zero => Some(Rational::default()),
            Form::Inf => None,
            Form::Finite => {
                let lsb = self.lsb_exp(&self.mant);
                let num = Integer::from_parts(self.neg, self.mant.clone());
                Some(if lsb >= 0 {
                    Rational::from_integer(&num << lsb as u64)
                } else {
                    let den = Integer::from_nat(Nat::power_of_two(lsb.unsigned_abs()));
                    Rational::new(num, den)
                })
            }
        }
    }
}

impl From<i64> for Float {
    fn from(x: i64) -> Self {
        Self::from_i64(x)
    }
}

impl From<u64> for Float {
    fn from(x: u64) -> Self {
        let mut z = Self::with_prec(DEFAULT_PREC);
        z.set_u64(x);
        z
    }
}

impl From<&Integer> for Float {
    fn from(x: &Integer) -> Self {
        let mut z = Self::new();
        z.set_int(x);
        z
    }
}

impl From<&Rational> for Float {
    fn from(x: &Rational) -> Self {
        let mut z = Self::new();
        z.set_rat(x);
        z
    }
}

impl TryFrom<f64> for Float {
    type Error = ErrNaN;

    fn try_from(x: f64) -> Result<Self, ErrNaN> {
        Self::from_f64(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(x: f64) -> Float {
        Float::from_f64(x).unwrap()
    }

    #[test]
    fn test_f64_roundtrip_specials() {
        for x in [0.0, -0.0, 1.0, -2.5, f64::MAX, f64::MIN_POSITIVE, 5e-324, f64::INFINITY] {
            let (back, acc) = f(x).to_f64();
            assert_eq!(back.to_bits(), x.to_bits());
            assert_eq!(acc, Accuracy::Exact);
        }
        assert!(Float::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_f64_overflow_and_underflow() {
        let mut big = Float::with_prec(53);
        big.set_mant_exp(&f(0.5), 1025);
        assert_eq!(big.to_f64(), (f64::INFINITY, Accuracy::Above));
        assert_eq!((-&big).to_f64(), (f64::NEG_INFINITY, Accuracy::Below));

        let mut tiny = Float::with_prec(53);
        tiny.set_mant_exp(&f(0.5), -1074);
        // Exactly half the smallest subnormal rounds to even, which is zero.
        assert_eq!(tiny.to_f64(), (0.0, Accuracy::Below));
        tiny.set_mant_exp(&f(0.75), -1074);
        assert_eq!(tiny.to_f64(), (5e-324, Accuracy::Above));
    }

    #[test]
    fn test_subnormal_rounding() {
        // 3 × 2^-1076 lies between 0 and 2^-1074, nearer 2^-1074.
        let mut x = Float::with_prec(10);
        x.set_mant_exp(&f(0.75), -1074);
        let y = f(2f64.powi(-1060));
        let mut z = Float::with_prec(60);
        z.set_add(&x, &y).unwrap();
        let (v, acc) = z.to_f64();
        assert_eq!(v, 2f64.powi(-1060) + 5e-324);
        assert_eq!(acc, Accuracy::Above);
    }

    #[test]
    fn test_f32() {
        let mut x = Float::new();
        x.set_f32(0.1).unwrap();
        assert_eq!(x.prec(), 24);
        assert_eq!(x.to_f32(), (0.1f32, Accuracy::Exact));
        assert_eq!(f(0.1).to_f32(), (0.1f32, Accuracy::Above));
        assert_eq!(f(1e39).to_f32(), (f32::INFINITY, Accuracy::Above));
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(f(-7.9).to_i64(), (-7, Accuracy::Above));
        assert_eq!(f(7.9).to_i64(), (7, Accuracy::Below));
        assert_eq!(f(0.5).to_i64(), (0, Accuracy::Below));
        assert_eq!(f(-9.3e18).to_i64(), (i64::MIN, Accuracy::Above));
        assert_eq!(Float::from_i64(i64::MIN).to_i64(), (i64::MIN, Accuracy::Exact));
        assert_eq!(f(1e19).to_i64(), (i64::MAX, Accuracy::Below));
        assert_eq!(f(1e19).to_u64(), (10_000_000_000_000_000_000, Accuracy::Exact));
        assert_eq!(f(-1.0).to_u64(), (0, Accuracy::Above));
        assert_eq!(f(2e19).to_u64(), (u64::MAX, Accuracy::Below));
    }

    #[test]
    fn test_set_int_adopts_bit_length() {
        let big = Integer::from(1u128 << 100) + Integer::from(1);
        let mut z = Float::new();
        assert_eq!(z.set_int(&big), Accuracy::Exact);
        assert_eq!(z.prec(), 101);
        assert_eq!(z.to_integer(), Some((big, Accuracy::Exact)));

        let mut small = Float::new();
        small.set_int(&Integer::from(5));
        assert_eq!(small.prec(), 64);
    }

    #[test]
    fn test_rational_roundtrip() {
        let third = Rational::from_i64(-1, 3);
        let mut z = Float::with_prec(53);
        assert_eq!(z.set_rat(&third), Accuracy::Above);
        assert_eq!(z.to_f64().0, -1.0 / 3.0);
        let exact = z.to_rational().unwrap();
        assert_eq!(exact, Rational::from_f64(-1.0 / 3.0).unwrap());
        assert_eq!(f(12.5).to_rational(), Some(Rational::from_i64(25, 2)));
        assert_eq!(f(-0.0).to_rational(), Some(Rational::default()));
        let mut inf = Float::new();
        inf.set_inf(true);
        assert_eq!(inf.to_rational(), None);
        assert_eq!(inf.to_integer(), None);
    }

    #[test]
    fn test_to_integer_truncates() {
        assert_eq!(f(-2.75).to_integer(), Some((Integer::from(-2), Accuracy::Above)));
        assert_eq!(f(2.0e30).to_integer().unwrap().0, "2000000000000000039769249677312".parse::<Integer>().unwrap());
    }
}
