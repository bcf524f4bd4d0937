//! The literal scanner shared by every numerus text parser.
//!
//! A literal is `[sign] [prefix] digits ["." digits] [exponent]`, where the
//! prefix (`0x`, `0b`, `0o`, or a legacy leading `0`) is only recognized when
//! the caller asks for automatic base detection, and so are `_` digit
//! separators. Exponents are `e`/`E` followed by a decimal power of ten, or
//! `p`/`P` followed by a decimal power of two.
//!
//! Scanning stops at the first byte that cannot continue the literal; the
//! caller decides whether trailing input is an error.

use num_traits::One;

use crate::conv::{digit_value, DigitAccumulator};
use crate::error::{ParseErrorKind, ParseNumberError};
use crate::nat::Nat;

/// The base prefix found in a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Prefix {
    /// No prefix.
    #[default]
    None,
    /// `0x` or `0X`.
    Hex,
    /// `0b` or `0B`.
    Binary,
    /// `0o` or `0O`.
    Octal,
    /// A bare leading `0` selecting octal.
    LegacyOctal,
}

/// What the scanner accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Digit base in `2..=36`, or 0 to detect it from a prefix (defaulting
    /// to 10) and allow `_` separators.
    pub base: u32,
    /// Accept a leading `+` or `-`.
    pub allow_sign: bool,
    /// Accept a fraction point (bases 2, 8, 10 and 16 only).
    pub allow_fraction: bool,
    /// Accept an `e` or `p` exponent (bases 2, 8, 10 and 16 only).
    pub allow_exponent: bool,
    /// Treat a leading `0` as an octal prefix when the base is 0.
    pub legacy_octal: bool,
}

impl ScanOptions {
    /// Options for integer literals: sign, prefixes and legacy octal.
    #[must_use]
    pub fn integer(base: u32) -> Self {
        Self {
            base,
            allow_sign: true,
            allow_fraction: false,
            allow_exponent: false,
            legacy_octal: true,
        }
    }

    /// Options for floating-point literals: sign, fraction and exponent.
    #[must_use]
    pub fn float(base: u32) -> Self {
        Self {
            base,
            allow_sign: true,
            allow_fraction: true,
            allow_exponent: true,
            legacy_octal: false,
        }
    }
}

/// A scanned numeric literal.
///
/// Its value is `mantissa * base^-frac_digits * 10^exponent` for a decimal
/// exponent or `mantissa * base^-frac_digits * 2^exponent` for a binary one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    /// A `-` sign was present.
    pub neg: bool,
    /// All digits, with the fraction point removed.
    pub mantissa: Nat,
    /// The digit base in effect.
    pub base: u32,
    /// The base prefix, if any.
    pub prefix: Prefix,
    /// Number of digits after the fraction point, if one was present.
    pub frac_digits: Option<u64>,
    /// The exponent value, 0 if absent.
    pub exponent: i64,
    /// The exponent was a `p` (power of two) exponent.
    pub binary_exponent: bool,
}

impl Literal {
    /// Returns the literal's magnitude as `(num, den, exp2)` with value
    /// `num / den * 2^exp2`.
    ///
    /// Powers of two, including the factor 2^k hidden in 10^k, stay in
    /// `exp2` so binary exponents never allocate. Returns `None` when the
    /// decimal scale does not fit in 32 bits.
    #[must_use]
    pub fn to_ratio(&self) -> Option<(Nat, Nat, i64)> {
        let (exp10, exp2) = self.scale();
        let pow5 = Nat::from_word(5).pow(u32::try_from(exp10.unsigned_abs()).ok()?);
        let exp2 = exp2.saturating_add(exp10);
        if exp10 >= 0 {
            Some((&self.mantissa * &pow5, Nat::one(), exp2))
        } else {
            Some((self.mantissa.clone(), pow5, exp2))
        }
    }

    /// Splits the literal's scale into `(exp10, exp2)` with value
    /// `mantissa * 10^exp10 * 2^exp2`.
    #[must_use]
    pub fn scale(&self) -> (i64, i64) {
        let frac = i64::try_from(self.frac_digits.unwrap_or(0)).unwrap_or(i64::MAX);
        let (mut exp10, mut exp2) = (0i64, 0i64);
        match self.base {
            10 => exp10 = exp10.saturating_sub(frac),
            b => exp2 = exp2.saturating_sub(frac.saturating_mul(i64::from(b.trailing_zeros()))),
        }
        if self.binary_exponent {
            exp2 = exp2.saturating_add(self.exponent);
        } else {
            exp10 = exp10.saturating_add(self.exponent);
        }
        (exp10, exp2)
    }
}

/// Scans a literal at the start of `s`, returning it and the byte offset
/// where scanning stopped.
///
/// # Errors
///
/// Returns a [`ParseNumberError`] for an unsupported base, missing digits, a
/// misplaced separator, or a malformed exponent.
pub fn scan_literal(s: &str, opts: &ScanOptions) -> Result<(Literal, usize), ParseNumberError> {
    let bytes = s.as_bytes();
    if opts.base != 0 && !(2..=36).contains(&opts.base) {
        return Err(ParseNumberError::new(ParseErrorKind::InvalidBase, 0, opts.base));
    }
    let mut pos = 0;
    let mut neg = false;
    if opts.allow_sign {
        match bytes.first() {
            Some(b'-') => {
                neg = true;
                pos = 1;
            }
            Some(b'+') => pos = 1,
            _ => {}
        }
    }
    if pos == bytes.len() {
        let base = if opts.base == 0 { 10 } else { opts.base };
        return Err(ParseNumberError::new(ParseErrorKind::Empty, pos, base));
    }

    let separators = opts.base == 0;
    let (base, prefix) = detect_prefix(&bytes[pos..], opts);
    pos += match prefix {
        Prefix::None | Prefix::LegacyOctal => 0,
        _ => 2,
    };

    let point_ok = opts.allow_fraction && matches!(base, 2 | 8 | 10 | 16);
    let exp_ok = opts.allow_exponent && matches!(base, 2 | 8 | 10 | 16);
    let mut acc = DigitAccumulator::new(base);
    let mut frac_digits: Option<u64> = None;
    // A separator may follow a prefix or a digit.
    let mut prev_digit = prefix != Prefix::None;

    while let Some(&c) = bytes.get(pos) {
        match digit_value(c) {
            Some(d) if d < base => {
                acc.push(d);
                if let Some(f) = frac_digits.as_mut() {
                    *f += 1;
                }
                prev_digit = true;
            }
            _ if c == b'_' && separators => {
                let next_is_digit = bytes
                    .get(pos + 1)
                    .and_then(|&n| digit_value(n))
                    .is_some_and(|d| d < base);
                if !prev_digit {
                    return Err(ParseNumberError::new(ParseErrorKind::InvalidDigit, pos, base));
                }
                if !next_is_digit {
                    return Err(ParseNumberError::new(ParseErrorKind::MissingDigits, pos + 1, base));
                }
                prev_digit = false;
            }
            _ if c == b'.' && point_ok && frac_digits.is_none() => {
                frac_digits = Some(0);
                prev_digit = false;
            }
            _ => break,
        }
        pos += 1;
    }

    if acc.count() == 0 && prefix != Prefix::LegacyOctal {
        let kind = if prefix == Prefix::None {
            ParseErrorKind::InvalidDigit
        } else {
            ParseErrorKind::MissingDigits
        };
        return Err(ParseNumberError::new(kind, pos, base));
    }

    let mut exponent = 0;
    let mut binary_exponent = false;
    if exp_ok {
        match bytes.get(pos) {
            Some(b'e' | b'E') if base == 10 => {
                let (e, end) = scan_exponent(bytes, pos + 1, base)?;
                exponent = e;
                pos = end;
            }
            Some(b'p' | b'P') => {
                let (e, end) = scan_exponent(bytes, pos + 1, base)?;
                exponent = e;
                binary_exponent = true;
                pos = end;
            }
            _ => {}
        }
    }

    let lit = Literal {
        neg,
        mantissa: acc.finish(),
        base,
        prefix,
        frac_digits,
        exponent,
        binary_exponent,
    };
    Ok((lit, pos))
}

/// Scans a complete literal, rejecting trailing input.
///
/// # Errors
///
/// As [`scan_literal`], plus [`ParseErrorKind::InvalidDigit`] at the first
/// unconsumed byte.
pub fn scan_all(s: &str, opts: &ScanOptions) -> Result<Literal, ParseNumberError> {
    let (lit, end) = scan_literal(s, opts)?;
    if end != s.len() {
        return Err(ParseNumberError::new(ParseErrorKind::InvalidDigit, end, lit.base));
    }
    Ok(lit)
}

fn detect_prefix(bytes: &[u8], opts: &ScanOptions) -> (u32, Prefix) {
    if opts.base != 0 {
        return (opts.base, Prefix::None);
    }
    match bytes {
        [b'0', b'x' | b'X', ..] => (16, Prefix::Hex),
        [b'0', b'b' | b'B', ..] => (2, Prefix::Binary),
        [b'0', b'o' | b'O', ..] => (8, Prefix::Octal),
        [b'0', next, ..] if opts.legacy_octal && (next.is_ascii_digit() || *next == b'_') => {
            (8, Prefix::LegacyOctal)
        }
        _ => (10, Prefix::None),
    }
}

fn scan_exponent(bytes: &[u8], mut pos: usize, base: u32) -> Result<(i64, usize), ParseNumberError> {
    let start = pos;
    let mut neg = false;
    match bytes.get(pos) {
        Some(b'-') => {
            neg = true;
            pos += 1;
        }
        Some(b'+') => pos += 1,
        _ => {}
    }
    let digits_start = pos;
    let mut value: i64 = 0;
    while let Some(&c) = bytes.get(pos) {
        if !c.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(c - b'0')))
            .ok_or_else(|| ParseNumberError::new(ParseErrorKind::InvalidExponent, start, base))?;
        pos += 1;
    }
    if pos == digits_start {
        return Err(ParseNumberError::new(ParseErrorKind::InvalidExponent, pos, base));
    }
    Ok((if neg { -value } else { value }, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(s: &str, opts: ScanOptions) -> Literal {
        scan_all(s, &opts).unwrap()
    }

    #[test]
    fn test_integer_prefixes() {
        let lit = scan("-0x_ff", ScanOptions::integer(0));
        assert!(lit.neg);
        assert_eq!(lit.base, 16);
        assert_eq!(lit.prefix, Prefix::Hex);
        assert_eq!(lit.mantissa, Nat::from_word(255));

        assert_eq!(scan("0b1_01", ScanOptions::integer(0)).mantissa, Nat::from_word(5));
        assert_eq!(scan("0o17", ScanOptions::integer(0)).mantissa, Nat::from_word(15));
        let legacy = scan("017", ScanOptions::integer(0));
        assert_eq!(legacy.prefix, Prefix::LegacyOctal);
        assert_eq!(legacy.mantissa, Nat::from_word(15));
        assert_eq!(scan("0", ScanOptions::integer(0)).mantissa, Nat::new());
        assert_eq!(scan("1_000", ScanOptions::integer(0)).mantissa, Nat::from_word(1000));
    }

    #[test]
    fn test_explicit_base_disables_prefix_and_separators() {
        let err = scan_all("0x10", &ScanOptions::integer(10)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidDigit);
        assert_eq!(err.offset, 1);
        let err = scan_all("1_0", &ScanOptions::integer(10)).unwrap_err();
        assert_eq!(err.offset, 1);
        assert_eq!(scan("zz", ScanOptions::integer(36)).mantissa, Nat::from_word(35 * 36 + 35));
    }

    #[test]
    fn test_separator_errors() {
        let err = scan_all("_1", &ScanOptions::integer(0)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidDigit);
        let err = scan_all("1__2", &ScanOptions::integer(0)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingDigits);
        let err = scan_all("0x", &ScanOptions::integer(0)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingDigits);
        let err = scan_all("-", &ScanOptions::integer(0)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Empty);
    }

    #[test]
    fn test_float_literals() {
        let lit = scan("12.50e-3", ScanOptions::float(0));
        assert_eq!(lit.mantissa, Nat::from_word(1250));
        assert_eq!(lit.frac_digits, Some(2));
        assert_eq!(lit.exponent, -3);
        assert_eq!(lit.scale(), (-5, 0));

        let hex = scan("0x1.8p3", ScanOptions::float(0));
        assert_eq!(hex.mantissa, Nat::from_word(0x18));
        assert!(hex.binary_exponent);
        assert_eq!(hex.scale(), (0, 3 - 4));

        // In base 16 'e' is a digit.
        assert_eq!(scan("0x1e", ScanOptions::float(0)).mantissa, Nat::from_word(0x1e));
    }

    #[test]
    fn test_to_ratio() {
        let lit = scan("1.25", ScanOptions::float(10));
        let (num, den, exp2) = lit.to_ratio().unwrap();
        // 125 / 5^2 * 2^-2 = 1.25
        assert_eq!((num, den, exp2), (Nat::from_word(125), Nat::from_word(25), -2));

        let lit = scan("3e2", ScanOptions::float(10));
        let (num, den, exp2) = lit.to_ratio().unwrap();
        assert_eq!((num, den, exp2), (Nat::from_word(75), Nat::one(), 2));
    }

    #[test]
    fn test_exponent_errors() {
        let err = scan_all("1e", &ScanOptions::float(10)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidExponent);
        let err = scan_all("1e99999999999999999999", &ScanOptions::float(10)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidExponent);
    }
}
