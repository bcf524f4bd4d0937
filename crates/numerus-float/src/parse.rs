//! Text parsing for [`Float`].

use std::str::FromStr;

use numerus_digits::scan::{scan_all, ScanOptions};
use numerus_digits::{Nat, ParseErrorKind, ParseNumberError};
use tracing::trace;

use crate::conv::DEFAULT_PREC;
use crate::float::{Float, Form, MAX_EXP, MIN_EXP};
use crate::mode::{Accuracy, RoundingMode};

/// Binary magnitudes this far past the exponent range are settled without
/// computing the exact value.
const EXP_SLACK: f64 = 64.0;

/// Decimal exponents this far past the precision are rounded from bounds
/// instead of an exact power of five.
const BOUND_MIN_EXP10: u64 = 64;

/// Extra working bits for the first pair of bounds.
const BOUND_GUARD_BITS: u32 = 64;

/// Working precision doublings tried before falling back to exact evaluation.
const BOUND_ROUNDS: u32 = 4;

impl Float {
    /// Sets `self` to the value of `s` in `base`, rounded to this
    /// destination's precision. A precision-0 destination adopts 64.
    ///
    /// `base` is 0, 2, 8, 10 or 16. Base 0 reads a `0x`, `0b` or `0o`
    /// prefix and allows `_` separators. Decimal literals take an `e`
    /// exponent (power of ten); every base takes a `p` exponent (power of
    /// two). `Inf` and `inf` with an optional sign are accepted. Values
    /// beyond the exponent range become `±Inf` or `±0`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseNumberError`] for an unsupported base or a malformed
    /// literal. `self` is unchanged on error.
    pub fn parse_radix(&mut self, s: &str, base: u32) -> Result<Accuracy, ParseNumberError> {
        self.parse_inner(s, base).map_err(|err| {
            trace!(%err, input = s, "float parse failed");
            err
        })
    }

    /// Like [`Float::parse_radix`] with base 0.
    ///
    /// # Errors
    ///
    /// As [`Float::parse_radix`].
    pub fn set_str(&mut self, s: &str) -> Result<Accuracy, ParseNumberError> {
        self.parse_radix(s, 0)
    }

    /// Parses `s` into a new value with the given precision and mode.
    ///
    /// # Errors
    ///
    /// As [`Float::parse_radix`].
    pub fn parse(
        s: &str,
        base: u32,
        prec: u32,
        mode: RoundingMode,
    ) -> Result<(Float, Accuracy), ParseNumberError> {
        let mut z = Float::with_prec_and_mode(prec, mode);
        let acc = z.parse_radix(s, base)?;
        Ok((z, acc))
    }

    fn parse_inner(&mut self, s: &str, base: u32) -> Result<Accuracy, ParseNumberError> {
        if !matches!(base, 0 | 2 | 8 | 10 | 16) {
            return Err(ParseNumberError::new(ParseErrorKind::InvalidBase, 0, base));
        }

        let (neg, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if unsigned == "Inf" || unsigned == "inf" {
            if self.prec == 0 {
                self.prec = DEFAULT_PREC;
            }
            self.set_inf(neg);
            return Ok(Accuracy::Exact);
        }

        let lit = scan_all(s, &ScanOptions::float(base))?;
        let prec = if self.prec == 0 { DEFAULT_PREC } else { self.prec };
        let (exp10, exp2) = lit.scale();
        let estimate = lit.mantissa.bit_len() as f64
            + exp10 as f64 * std::f64::consts::LOG2_10
            + exp2 as f64;
        let acc = if lit.mantissa.bit_len() == 0 {
            self.prec = prec;
            self.set_zero(lit.neg);
            Accuracy::Exact
        } else if estimate > f64::from(MAX_EXP) + EXP_SLACK {
            self.prec = prec;
            self.round(lit.neg, Nat::from_word(1), i64::from(MAX_EXP), false)
        } else if estimate < f64::from(MIN_EXP) - EXP_SLACK {
            self.prec = prec;
            self.round(lit.neg, Nat::from_word(1), i64::from(MIN_EXP) - 2, false)
        } else if let Some(acc) = self.round_decimal_bounds(prec, lit.neg, &lit.mantissa, exp10, exp2) {
            acc
        } else {
            // Every check that can fail is done before `self` is written.
            let (num, den, exp2) = lit
                .to_ratio()
                .ok_or_else(|| ParseNumberError::new(ParseErrorKind::InvalidExponent, 0, lit.base))?;
            self.prec = prec;
            self.round_ratio(lit.neg, &num, &den, exp2)
        };
        Ok(acc)
    }

    /// Rounds `±mant × 10^exp10 × 2^exp2` to `prec` bits from lower and
    /// upper bounds on `mant × 5^|exp10|` instead of the exact power of five.
    ///
    /// Returns `None` when the exponent is small enough for exact evaluation,
    /// or when the bounds still straddle a rounding boundary after
    /// `BOUND_ROUNDS` widenings.
    fn round_decimal_bounds(
        &mut self,
        prec: u32,
        neg: bool,
        mant: &Nat,
        exp10: i64,
        exp2: i64,
    ) -> Option<Accuracy> {
        let k = exp10.unsigned_abs();
        if k <= u64::from(prec) + BOUND_MIN_EXP10 {
            return None;
        }
        let shift = exp10.checked_add(exp2)?;
        let mut m = Float::with_prec(u32::try_from(mant.bit_len()).ok()?);
        m.round(false, mant.clone(), 0, false);

        let mut work = prec.checked_add(BOUND_GUARD_BITS)?;
        for _ in 0..BOUND_ROUNDS {
            let lo = scaled_by_pow5(&m, k, exp10 < 0, work, RoundingMode::ToZero)?;
            let hi = scaled_by_pow5(&m, k, exp10 < 0, work, RoundingMode::AwayFromZero)?;
            let mut z_lo = Float::with_prec_and_mode(prec, self.mode);
            let acc_lo = z_lo.round(neg, lo.mant.clone(), lo.lsb_exp(&lo.mant) + shift, false);
            let mut z_hi = Float::with_prec_and_mode(prec, self.mode);
            let acc_hi = z_hi.round(neg, hi.mant.clone(), hi.lsb_exp(&hi.mant) + shift, false);
            // Both bounds rounding to one value on the same side settles the
            // exact value: it lies between them.
            if acc_lo == acc_hi && acc_lo != Accuracy::Exact && z_lo == z_hi {
                *self = z_lo;
                return Some(acc_lo);
            }
            trace!(work, "decimal bounds straddle a rounding boundary");
            work = work.checked_mul(2)?;
        }
        None
    }
}

/// Returns `m × 5^k` (or `m / 5^k` if `divide`) for positive `m`, rounded
/// at `prec` bits toward zero or away from zero in every step, so the result
/// bounds the exact value from below or above. `None` if it leaves the
/// exponent range.
fn scaled_by_pow5(m: &Float, k: u64, divide: bool, prec: u32, mode: RoundingMode) -> Option<Float> {
    // A quotient bound needs the opposite bound on its divisor.
    let pow_mode = match (divide, mode) {
        (true, RoundingMode::ToZero) => RoundingMode::AwayFromZero,
        (true, _) => RoundingMode::ToZero,
        (false, mode) => mode,
    };
    let mut pow = Float::with_prec_and_mode(prec, pow_mode);
    pow.set_u64(1);
    let mut base = Float::with_prec_and_mode(prec, pow_mode);
    base.set_u64(5);
    let mut k = k;
    loop {
        if k & 1 == 1 {
            let mut next = Float::with_prec_and_mode(prec, pow_mode);
            next.set_mul(&pow, &base).ok()?;
            pow = next;
        }
        k >>= 1;
        if k == 0 {
            break;
        }
        let mut sq = Float::with_prec_and_mode(prec, pow_mode);
        sq.set_mul(&base, &base).ok()?;
        base = sq;
    }

    let mut z = Float::with_prec_and_mode(prec, mode);
    if divide {
        z.set_quo(m, &pow).ok()?;
    } else {
        z.set_mul(m, &pow).ok()?;
    }
    (z.form == Form::Finite).then_some(z)
}

impl FromStr for Float {
    type Err = ParseNumberError;

    /// Parses at precision 64 with [`RoundingMode::ToNearestEven`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut z = Float::with_prec(DEFAULT_PREC);
        z.parse_radix(s, 0)?;
        Ok(z)
    }
}
