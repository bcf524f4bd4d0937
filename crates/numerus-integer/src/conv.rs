//! Text, byte and native float conversions for [`Integer`].

use std::fmt;
use std::str::FromStr;

use numerus_digits::native::{ratio_to_f64, split_f64};
use numerus_digits::scan::{scan_all, ScanOptions};
use numerus_digits::{Nat, ParseNumberError};
use num_traits::One;
use tracing::trace;

use crate::Integer;

impl Integer {
    /// Parses an integer in the given base.
    ///
    /// Base 0 detects the base from a `0x`, `0b`, `0o` or legacy `0` prefix
    /// (defaulting to 10) and allows `_` between digits. Otherwise the base
    /// must be in `2..=36` and the text is an optional sign followed by
    /// digits, letters of either case standing for 10 to 35.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseNumberError`] locating the first malformed byte.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, ParseNumberError> {
        let lit = scan_all(s, &ScanOptions::integer(base)).map_err(|err| {
            trace!(%err, "integer parse failed");
            err
        })?;
        Ok(Self::from_parts(lit.neg, lit.mantissa))
    }

    /// Formats the integer in `base` (2 to 36) with lowercase letters and a
    /// leading `-` for negative values.
    ///
    /// # Panics
    ///
    /// Panics if the base is out of range.
    #[must_use]
    pub fn to_str_radix(&self, base: u32) -> String {
        let digits = self.mag.to_str_radix(base);
        if self.neg {
            format!("-{digits}")
        } else {
            digits
        }
    }

    /// Big-endian bytes of the absolute value. The sign is not encoded.
    #[must_use]
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.mag.to_bytes_be()
    }

    /// Interprets big-endian bytes as a non-negative integer.
    #[must_use]
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self::from_nat(Nat::from_bytes_be(bytes))
    }

    /// Returns the `f64` nearest to the integer (ties to even) and whether
    /// it is exact. Values beyond the `f64` range become infinities.
    #[must_use]
    pub fn as_f64(&self) -> (f64, bool) {
        let (f, exact) = ratio_to_f64(&self.mag, &Nat::one());
        (if self.neg { -f } else { f }, exact)
    }

    /// Truncates a finite `f64` toward zero. Returns `None` for NaN and
    /// infinities.
    #[must_use]
    pub fn from_f64_trunc(x: f64) -> Option<Self> {
        let (neg, mant, exp) = split_f64(x)?;
        let mag = Nat::from_word(mant);
        let mag = if exp >= 0 {
            mag.shl_bits(u64::from(exp.unsigned_abs()))
        } else {
            mag.shr_bits(u64::from(exp.unsigned_abs()))
        };
        Some(Self::from_parts(neg, mag))
    }
}

impl FromStr for Integer {
    type Err = ParseNumberError;

    /// Parses with base detection, as `from_str_radix(s, 0)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 0)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.to_str_radix(10))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "", &self.mag.to_str_radix(10))
    }
}

impl fmt::Binary for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "0b", &self.mag.to_str_radix(2))
    }
}

impl fmt::Octal for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "0o", &self.mag.to_str_radix(8))
    }
}

impl fmt::LowerHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "0x", &self.mag.to_str_radix(16))
    }
}

impl fmt::UpperHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.neg, "0x", &self.mag.to_str_radix_case(16, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerus_digits::ParseErrorKind;

    #[test]
    fn test_parse_bases() {
        assert_eq!("-0x1F".parse::<Integer>().unwrap(), Integer::new(-31));
        assert_eq!("0b_1010".parse::<Integer>().unwrap(), Integer::new(10));
        assert_eq!("017".parse::<Integer>().unwrap(), Integer::new(15));
        assert_eq!("1_000_000".parse::<Integer>().unwrap(), Integer::new(1_000_000));
        assert_eq!(Integer::from_str_radix("+zz", 36).unwrap(), Integer::new(1295));
        assert_eq!(Integer::from_str_radix("-0", 10).unwrap(), Integer::new(0));
    }

    #[test]
    fn test_parse_errors() {
        let err = Integer::from_str_radix("12x", 10).unwrap_err();
        assert_eq!((err.kind, err.offset), (ParseErrorKind::InvalidDigit, 2));
        let err = Integer::from_str_radix("", 10).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Empty);
        let err = Integer::from_str_radix("1", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidBase);
        let err = Integer::from_str_radix("1.5", 10).unwrap_err();
        assert_eq!(err.offset, 1);
    }

    #[test]
    fn test_formatting() {
        let x = Integer::new(-255);
        assert_eq!(x.to_string(), "-255");
        assert_eq!(format!("{x:x}"), "-ff");
        assert_eq!(format!("{x:#X}"), "-0xFF");
        assert_eq!(format!("{:#b}", Integer::new(5)), "0b101");
        assert_eq!(format!("{:o}", Integer::new(8)), "10");
        assert_eq!(format!("{:>6}", Integer::new(42)), "    42");
        assert_eq!(format!("{:+}", Integer::new(42)), "+42");
        assert_eq!(x.to_str_radix(36), "-73");
        assert_eq!(format!("{x:?}"), "Integer(-255)");
    }

    #[test]
    fn test_bytes() {
        let x = Integer::new(-0x0102_0304);
        assert_eq!(x.to_bytes_be(), vec![1, 2, 3, 4]);
        assert_eq!(Integer::from_bytes_be(&[1, 2, 3, 4]), -x);
        assert_eq!(Integer::from_bytes_be(&[]), Integer::new(0));
    }

    #[test]
    fn test_f64_conversions() {
        assert_eq!(Integer::new(-3).as_f64(), (-3.0, true));
        let big = Integer::from(u64::MAX);
        assert_eq!(big.as_f64(), (18_446_744_073_709_551_616.0, false));
        assert_eq!(Integer::from_f64_trunc(-2.9), Some(Integer::new(-2)));
        assert_eq!(Integer::from_f64_trunc(1e20).unwrap().to_string(), "100000000000000000000");
        assert_eq!(Integer::from_f64_trunc(f64::NAN), None);
    }
}
