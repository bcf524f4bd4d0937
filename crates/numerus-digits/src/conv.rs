//! Radix text conversion and big-endian byte interchange for [`Nat`].

use crate::arith;
use crate::div::div_word_assign;
use crate::error::{ParseErrorKind, ParseNumberError};
use crate::nat::{Digits, Nat};
use crate::word::{mul_add, Word, WORD_BITS};

const DIGITS_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DIGITS_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest power of `base` that fits in a word, and its exponent.
pub(crate) fn max_base_power(base: u32) -> (Word, u32) {
    let b = Word::from(base);
    let mut p = b;
    let mut n = 1;
    while let Some(next) = p.checked_mul(b) {
        p = next;
        n += 1;
    }
    (p, n)
}

/// Value of an ASCII digit in bases up to 36, or `None`.
#[must_use]
pub fn digit_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'a'..=b'z' => Some(u32::from(c - b'a') + 10),
        b'A'..=b'Z' => Some(u32::from(c - b'A') + 10),
        _ => None,
    }
}

/// Accumulates digits one at a time, flushing into the big number once per
/// word-sized group.
#[derive(Debug)]
pub struct DigitAccumulator {
    base: Word,
    group_size: u32,
    digits: Digits,
    pending: Word,
    pending_count: u32,
    pending_scale: Word,
    count: u64,
}

impl DigitAccumulator {
    /// Creates an accumulator for `base` in `2..=36`.
    ///
    /// # Panics
    ///
    /// Panics if the base is out of range.
    #[must_use]
    pub fn new(base: u32) -> Self {
        assert!((2..=36).contains(&base), "invalid base {base}");
        let (_, group_size) = max_base_power(base);
        Self {
            base: Word::from(base),
            group_size,
            digits: Digits::new(),
            pending: 0,
            pending_count: 0,
            pending_scale: 1,
            count: 0,
        }
    }

    /// Appends one digit, which must be less than the base.
    pub fn push(&mut self, d: u32) {
        debug_assert!(Word::from(d) < self.base);
        self.pending = self.pending * self.base + Word::from(d);
        self.pending_scale *= self.base;
        self.pending_count += 1;
        self.count += 1;
        if self.pending_count == self.group_size {
            self.flush();
        }
    }

    /// Number of digits pushed so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    fn flush(&mut self) {
        if self.pending_count == 0 {
            return;
        }
        // digits = digits * scale + pending
        let mut carry = self.pending;
        for w in &mut self.digits {
            let (lo, hi) = mul_add(*w, self.pending_scale, carry, 0);
            *w = lo;
            carry = hi;
        }
        if carry != 0 {
            self.digits.push(carry);
        }
        self.pending = 0;
        self.pending_count = 0;
        self.pending_scale = 1;
    }

    /// Returns the accumulated value.
    #[must_use]
    pub fn finish(mut self) -> Nat {
        self.flush();
        Nat::from_digits(self.digits)
    }
}

impl Nat {
    /// Formats the number in `base` (2 to 36) with lowercase letters.
    ///
    /// # Panics
    ///
    /// Panics if the base is out of range.
    #[must_use]
    pub fn to_str_radix(&self, base: u32) -> String {
        self.to_str_radix_case(base, false)
    }

    /// Formats the number in `base` (2 to 36), choosing the letter case.
    ///
    /// # Panics
    ///
    /// Panics if the base is out of range.
    #[must_use]
    pub fn to_str_radix_case(&self, base: u32, upper: bool) -> String {
        assert!((2..=36).contains(&base), "invalid base {base}");
        if self.is_empty() {
            return "0".to_string();
        }
        let table = if upper { DIGITS_UPPER } else { DIGITS_LOWER };

        let mut out = Vec::new();
        if base.is_power_of_two() {
            let shift = base.trailing_zeros();
            let mask = Word::from(base - 1);
            let bits = self.bit_len();
            let mut i = 0;
            while i < bits {
                let mut d = 0;
                for b in (0..u64::from(shift)).rev() {
                    d = (d << 1) | Word::from(self.bit(i + b));
                }
                out.push(table[(d & mask) as usize]);
                i += u64::from(shift);
            }
        } else {
            let (big, group) = max_base_power(base);
            let mut q = self.digits.clone();
            let b = Word::from(base);
            while !q.is_empty() {
                let mut r = div_word_assign(&mut q, big);
                q.truncate(arith::normalized_len(&q));
                let mut emitted = 0;
                while (r != 0 || !q.is_empty()) && emitted < group {
                    out.push(table[(r % b) as usize]);
                    r /= b;
                    emitted += 1;
                }
            }
        }
        while out.len() > 1 && out.last() == Some(&b'0') {
            out.pop();
        }
        out.reverse();
        String::from_utf8(out).unwrap_or_default()
    }

    /// Parses a string of digits in `base` (2 to 36) with no sign, prefix or
    /// separators.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseNumberError`] for empty input, an unsupported base,
    /// or a character that is not a digit in the base.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, ParseNumberError> {
        if !(2..=36).contains(&base) {
            return Err(ParseNumberError::new(ParseErrorKind::InvalidBase, 0, base));
        }
        if s.is_empty() {
            return Err(ParseNumberError::new(ParseErrorKind::Empty, 0, base));
        }
        let mut acc = DigitAccumulator::new(base);
        for (i, c) in s.bytes().enumerate() {
            match digit_value(c) {
                Some(d) if d < base => acc.push(d),
                _ => return Err(ParseNumberError::new(ParseErrorKind::InvalidDigit, i, base)),
            }
        }
        Ok(acc.finish())
    }

    /// Big-endian bytes of the magnitude, without leading zero bytes. Zero
    /// is the empty vector.
    #[must_use]
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self
            .digits
            .iter()
            .rev()
            .flat_map(|w| w.to_be_bytes())
            .collect();
        let lead = out.iter().take_while(|&&b| b == 0).count();
        out.drain(..lead);
        out
    }

    /// Interprets big-endian bytes as an unsigned magnitude.
    #[must_use]
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let word_bytes = (WORD_BITS / 8) as usize;
        let digits: Digits = bytes
            .rchunks(word_bytes)
            .map(|chunk| chunk.iter().fold(0, |w: Word, &b| (w << 8) | Word::from(b)))
            .collect();
        Self::from_digits(digits)
    }
}
