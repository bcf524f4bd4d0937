//! Exact decimal expansions of binary values, used for formatting.
//!
//! A [`Decimal`] holds the significant decimal digits `d1 d2 ... dn` and an
//! exponent `exp` with value `0.d1d2...dn × 10^exp`. Trailing zero digits
//! are never stored; zero has no digits.

use num_traits::Zero;
use numerus_digits::Nat;

use crate::float::Float;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Decimal {
    pub(crate) digits: Vec<u8>,
    pub(crate) exp: i64,
}

impl Decimal {
    /// Expands `m × 2^shift` exactly.
    pub(crate) fn from_scaled(m: &Nat, shift: i64) -> Self {
        if m.is_zero() {
            return Self::default();
        }
        let mut m = m.clone();
        let mut shift = shift;
        if shift < 0 {
            // Drop binary zeros first; each one saves a factor of five.
            let tz = m.trailing_zeros().min(shift.unsigned_abs());
            m = m.shr_bits(tz);
            shift += tz as i64;
        }
        let text = if shift >= 0 {
            m.shl_bits(shift as u64).to_str_radix(10)
        } else {
            // m / 2^k = m × 5^k / 10^k
            let k = shift.unsigned_abs();
            let five_k = Nat::from_word(5).pow(u32::try_from(k).unwrap_or(u32::MAX));
            (&m * &five_k).to_str_radix(10)
        };
        let mut d = Self {
            digits: text.into_bytes(),
            exp: 0,
        };
        d.exp = d.digits.len() as i64 + shift.min(0);
        d.trim();
        d
    }

    /// Expands a finite or zero value of `x`, ignoring its sign.
    pub(crate) fn from_float(x: &Float) -> Self {
        if x.is_zero() || x.is_inf() {
            return Self::default();
        }
        Self::from_scaled(&x.mant, x.lsb_exp(&x.mant))
    }

    /// Digit `i` counting from the most significant, `b'0'` out of range.
    pub(crate) fn at(&self, i: i64) -> u8 {
        usize::try_from(i)
            .ok()
            .and_then(|i| self.digits.get(i).copied())
            .unwrap_or(b'0')
    }

    fn trim(&mut self) {
        while self.digits.last() == Some(&b'0') {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.exp = 0;
        }
    }

    /// True if keeping `n` digits must round up, with ties to even.
    fn should_round_up(&self, n: usize) -> bool {
        if self.digits[n] == b'5' && n + 1 == self.digits.len() {
            return n > 0 && (self.digits[n - 1] - b'0') % 2 == 1;
        }
        self.digits[n] >= b'5'
    }

    /// Rounds to `n` significant digits, ties to even. No-op if `n` is
    /// negative or not below the digit count.
    pub(crate) fn round(&mut self, n: i64) {
        let Ok(n) = usize::try_from(n) else { return };
        if n >= self.digits.len() {
            return;
        }
        if self.should_round_up(n) {
            self.round_up(n);
        } else {
            self.round_down(n);
        }
    }

    pub(crate) fn round_up(&mut self, mut n: usize) {
        if n >= self.digits.len() {
            return;
        }
        while n > 0 && self.digits[n - 1] >= b'9' {
            n -= 1;
        }
        if n == 0 {
            // All nines: carry into a new leading digit.
            self.digits.clear();
            self.digits.push(b'1');
            self.exp += 1;
            return;
        }
        self.digits[n - 1] += 1;
        self.digits.truncate(n);
    }

    pub(crate) fn round_down(&mut self, n: usize) {
        if n >= self.digits.len() {
            return;
        }
        self.digits.truncate(n);
        self.trim();
    }

    /// Rounds to the fewest digits that still read back as `x` at its
    /// precision under ties-to-even.
    pub(crate) fn round_shortest(&mut self, x: &Float) {
        if self.digits.is_empty() {
            return;
        }
        // Rescale so the lsb of `mant` is half an ulp at x's precision.
        let bits = x.mant.bit_len() as i64;
        let s = bits - (i64::from(x.prec) + 1);
        let mant = if s < 0 {
            x.mant.shl_bits(s.unsigned_abs())
        } else {
            x.mant.shr_bits(s as u64)
        };
        let exp = x.lsb_exp(&x.mant) + s;

        let lower = Self::from_scaled(&mant.sub_word(1), exp);
        let upper = Self::from_scaled(&mant.add_word(1), exp);
        // The bounds themselves round to x only if its mantissa is even.
        let inclusive = !mant.bit(1);

        let mut decision = None;
        for (i, &m) in self.digits.iter().enumerate() {
            let l = lower.at(i as i64);
            let u = upper.at(i as i64);
            let ok_down = l != m || (inclusive && i + 1 == lower.digits.len());
            let ok_up = m != u && (inclusive || m + 1 < u || i + 1 < upper.digits.len());
            if ok_down || ok_up {
                decision = Some((i + 1, ok_down, ok_up));
                break;
            }
        }
        match decision {
            Some((n, true, true)) => self.round(n as i64),
            Some((n, true, false)) => self.round_down(n),
            Some((n, false, true)) => self.round_up(n),
            _ => {}
        }
    }
}
