//! Text and native float conversions for [`Rational`].

use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};
use numerus_digits::native::{ratio_to_f32, ratio_to_f64, split_f64};
use numerus_digits::scan::{scan_all, ScanOptions};
use numerus_digits::{Nat, ParseErrorKind, ParseNumberError};
use numerus_integer::Integer;
use tracing::trace;

use crate::Rational;

/// Largest decimal or binary exponent accepted when parsing; beyond it the
/// exact value would not fit in memory anyway.
const MAX_PARSE_EXP: i64 = 10_000_000;

impl Rational {
    /// Parses `a/b` with both parts in `base` (0 for prefix detection), or
    /// a plain integer.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseNumberError`] for malformed parts or a zero
    /// denominator.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, ParseNumberError> {
        if let Some(sep) = s.find('/') {
            let num = Integer::from_str_radix(&s[..sep], base)?;
            let mut opts = ScanOptions::integer(base);
            opts.allow_sign = false;
            let den = scan_all(&s[sep + 1..], &opts)
                .map_err(|err| err.offset_by(sep + 1))?
                .mantissa;
            if den.is_zero() {
                let base = if base == 0 { 10 } else { base };
                return Err(ParseNumberError::new(ParseErrorKind::ZeroDenominator, sep + 1, base));
            }
            let (neg, num) = num.into_parts();
            return Ok(Self::from_nats(neg, num, den));
        }
        Integer::from_str_radix(s, base).map(Self::from_integer)
    }

    fn parse_literal(s: &str) -> Result<Self, ParseNumberError> {
        if s.contains('/') {
            return Self::from_str_radix(s, 0);
        }
        let lit = scan_all(s, &ScanOptions::float(0))?;
        let (exp10, exp2) = lit.scale();
        if exp10.abs() > MAX_PARSE_EXP || exp2.abs() > MAX_PARSE_EXP {
            return Err(ParseNumberError::new(ParseErrorKind::InvalidExponent, 0, lit.base));
        }
        let (mut num, mut den, exp2) = lit
            .to_ratio()
            .ok_or_else(|| ParseNumberError::new(ParseErrorKind::InvalidExponent, 0, lit.base))?;
        if exp2 >= 0 {
            num = num.shl_bits(exp2.unsigned_abs());
        } else {
            den = den.shl_bits(exp2.unsigned_abs());
        }
        Ok(Self::from_nats(lit.neg, num, den))
    }

    /// Formats as `a/b`, always including the denominator.
    #[must_use]
    pub fn rat_string(&self) -> String {
        format!("{}/{}", self.num, self.den)
    }

    /// Formats as a decimal with `prec` digits after the point, rounding the
    /// last digit half away from zero.
    #[must_use]
    pub fn float_string(&self, prec: usize) -> String {
        let mut out = String::new();
        if self.is_integer() {
            out.push_str(&self.num.to_string());
            if prec > 0 {
                out.push('.');
                out.extend(std::iter::repeat('0').take(prec));
            }
            return out;
        }

        let den = self.den.magnitude();
        let (mut q, r) = self.num.magnitude().div_rem(den);
        let p = Nat::from_word(10).pow(u32::try_from(prec).unwrap_or(u32::MAX));
        let (mut r, r2) = (&r * &p).div_rem(den);
        if *den <= r2.shl_bits(1) {
            r = r.add_word(1);
            if r >= p {
                q = q.add_word(1);
                r = &r - &p;
            }
        }

        if self.num.is_negative() {
            out.push('-');
        }
        out.push_str(&q.to_str_radix(10));
        if prec > 0 {
            out.push('.');
            let rs = r.to_str_radix(10);
            out.extend(std::iter::repeat('0').take(prec.saturating_sub(rs.len())));
            out.push_str(&rs);
        }
        out
    }

    /// Returns the nearest `f64` (ties to even) and whether it is exact.
    #[must_use]
    pub fn to_f64(&self) -> (f64, bool) {
        let (f, exact) = ratio_to_f64(self.num.magnitude(), self.den.magnitude());
        (if self.num.is_negative() { -f } else { f }, exact)
    }

    /// Returns the nearest `f32` (ties to even) and whether it is exact.
    #[must_use]
    pub fn to_f32(&self) -> (f32, bool) {
        let (f, exact) = ratio_to_f32(self.num.magnitude(), self.den.magnitude());
        (if self.num.is_negative() { -f } else { f }, exact)
    }

    /// Returns the exact value of a finite `f64`, or `None` for NaN and
    /// infinities.
    #[must_use]
    pub fn from_f64(x: f64) -> Option<Self> {
        let (neg, mant, exp) = split_f64(x)?;
        let mant = Nat::from_word(mant);
        let shift = u64::from(exp.unsigned_abs());
        Some(if exp >= 0 {
            Self::from_nats(neg, mant.shl_bits(shift), Nat::one())
        } else {
            Self::from_nats(neg, mant, Nat::power_of_two(shift))
        })
    }

    /// Returns the exact value of a finite `f32`, or `None` for NaN and
    /// infinities.
    #[must_use]
    pub fn from_f32(x: f32) -> Option<Self> {
        Self::from_f64(f64::from(x))
    }
}

impl FromStr for Rational {
    type Err = ParseNumberError;

    /// Accepts `a/b`, integers with base prefixes, and decimal or binary
    /// exponent literals such as `1.25`, `-3e-2` or `0x1p-3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s).map_err(|err| {
            trace!(%err, "rational parse failed");
            err
        })
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.rat_string())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(s: &str) -> Rational {
        s.parse().unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(2, 3).to_string(), "2/3");
        assert_eq!(Rational::from_i64(-2, 3).rat_string(), "-2/3");
        assert_eq!(Rational::from_i64(3, 1).rat_string(), "3/1");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(rat("6/4"), Rational::from_i64(3, 2));
        assert_eq!(rat("-6/4"), Rational::from_i64(-3, 2));
        assert_eq!(rat("0x10/0b11"), Rational::from_i64(16, 3));
        assert_eq!(rat("1.25"), Rational::from_i64(5, 4));
        assert_eq!(rat("-3e-2"), Rational::from_i64(-3, 100));
        assert_eq!(rat("0x1p-3"), Rational::from_i64(1, 8));
        assert_eq!(rat("1.5e3"), Rational::from(1500));
        assert_eq!(rat(".5"), Rational::from_i64(1, 2));
    }

    #[test]
    fn test_parse_errors() {
        let err = "1/0".parse::<Rational>().unwrap_err();
        assert_eq!((err.kind, err.offset), (ParseErrorKind::ZeroDenominator, 2));
        let err = "1/2x".parse::<Rational>().unwrap_err();
        assert_eq!((err.kind, err.offset), (ParseErrorKind::InvalidDigit, 3));
        let err = "1/-2".parse::<Rational>().unwrap_err();
        assert_eq!(err.offset, 2);
        let err = "1e99999999".parse::<Rational>().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidExponent);
        assert!("".parse::<Rational>().is_err());
    }

    #[test]
    fn test_float_string() {
        assert_eq!(Rational::from_i64(1, 3).float_string(5), "0.33333");
        assert_eq!(Rational::from_i64(2, 3).float_string(5), "0.66667");
        assert_eq!(Rational::from_i64(-1, 8).float_string(2), "-0.13");
        assert_eq!(Rational::from_i64(-1, 3).float_string(0), "-0");
        assert_eq!(Rational::from_i64(19, 2).float_string(0), "10");
        assert_eq!(Rational::from_i64(999, 1000).float_string(2), "1.00");
        assert_eq!(Rational::from_i64(1, 100).float_string(3), "0.010");
        assert_eq!(Rational::from(7).float_string(2), "7.00");
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(Rational::from_i64(1, 2).to_f64(), (0.5, true));
        assert_eq!(Rational::from_i64(-1, 3).to_f64(), (-1.0 / 3.0, false));
        assert_eq!(Rational::from_i64(1, 10).to_f32(), (0.1f32, false));
        let tenth = Rational::from_f64(0.1).unwrap();
        assert_eq!(tenth.denominator().magnitude(), &Nat::power_of_two(55));
        assert_eq!(tenth.to_f64(), (0.1, true));
        assert_eq!(Rational::from_f64(-2.5), Some(Rational::from_i64(-5, 2)));
        assert_eq!(Rational::from_f64(f64::INFINITY), None);
        assert_eq!(Rational::from_f32(0.75), Some(Rational::from_i64(3, 4)));
    }
}
