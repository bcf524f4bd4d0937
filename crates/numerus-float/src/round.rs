//! Rounding of exact intermediate results into a destination [`Float`].
//!
//! Every producing operation computes its result exactly, or as an exact
//! truncation plus a sticky bit, and funnels it through [`Float::round`].
//! Directed modes see the sign of the exact result.

use numerus_digits::Nat;

use crate::float::{Float, Form, MAX_EXP, MIN_EXP};
use crate::mode::Accuracy;

impl Float {
    /// Stores `±(m + ε) × 2^lsb` rounded to `self.prec` bits with
    /// `self.mode`, where `0 < ε < 1` if `sticky` and `ε = 0` otherwise.
    ///
    /// With `sticky` set, `m` must carry at least two bits beyond the
    /// precision so the rounding bit is known.
    pub(crate) fn round(&mut self, neg: bool, m: Nat, lsb: i64, sticky: bool) -> Accuracy {
        let bits = m.bit_len();
        if bits == 0 {
            debug_assert!(!sticky);
            self.set_zero(neg);
            return Accuracy::Exact;
        }
        if self.prec == 0 {
            self.set_zero(neg);
            return Accuracy::inexact(neg);
        }
        debug_assert!(!sticky || bits >= u64::from(self.prec) + 2);

        let shift = bits.saturating_sub(u64::from(self.prec));
        let round_bit = shift > 0 && m.bit(shift - 1);
        let sticky = sticky || (shift > 1 && m.sticky(shift - 1));
        let mut kept = m.shr_bits(shift);
        let mut acc = Accuracy::Exact;
        if round_bit || sticky {
            let up = self.mode.rounds_up(neg, !kept.is_even(), round_bit, sticky);
            if up {
                kept = kept.add_word(1);
            }
            acc = Accuracy::inexact(up != neg);
        }

        let exp = lsb + shift as i64 + kept.bit_len() as i64;
        if exp > i64::from(MAX_EXP) {
            self.set_inf(neg);
            return Accuracy::inexact(!neg);
        }
        if exp < i64::from(MIN_EXP) {
            self.set_zero(neg);
            return Accuracy::inexact(neg);
        }
        let tz = kept.trailing_zeros();
        self.form = Form::Finite;
        self.neg = neg;
        self.mant = kept.shr_bits(tz);
        self.exp = exp as i32;
        acc
    }

    /// Stores `±a / b × 2^exp2` correctly rounded. `b` must be non-zero.
    pub(crate) fn round_ratio(&mut self, neg: bool, a: &Nat, b: &Nat, exp2: i64) -> Accuracy {
        debug_assert!(!b.is_empty());
        if a.is_empty() {
            self.set_zero(neg);
            return Accuracy::Exact;
        }
        let bb = b.bit_len();
        if b.trailing_zeros() == bb - 1 {
            return self.round(neg, a.clone(), exp2 - (bb as i64 - 1), false);
        }
        // Enough quotient bits for the precision plus rounding and guard bits.
        let need = u64::from(self.prec) + 3;
        let s = (need + bb).saturating_sub(a.bit_len());
        let (q, r) = a.shl_bits(s).div_rem(b);
        self.round(neg, q, exp2 - s as i64, !r.is_empty())
    }
}
