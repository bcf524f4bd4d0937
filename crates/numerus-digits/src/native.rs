//! Correctly rounded assembly of native IEEE-754 values.
//!
//! [`ratio_to_bits`] turns a non-negative ratio of two naturals into the bit
//! pattern of the nearest `f64` or `f32` (ties to even), including
//! subnormals, and reports whether the conversion was exact.

use crate::nat::Nat;

/// Layout of a binary IEEE-754 interchange format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeFormat {
    /// Stored mantissa bits, excluding the implicit leading one.
    pub mant_bits: u32,
    /// Exponent field width.
    pub exp_bits: u32,
}

impl NativeFormat {
    /// binary64
    pub const F64: Self = Self {
        mant_bits: 52,
        exp_bits: 11,
    };

    /// binary32
    pub const F32: Self = Self {
        mant_bits: 23,
        exp_bits: 8,
    };

    fn bias(self) -> i64 {
        (1 << (self.exp_bits - 1)) - 1
    }

    /// Significand precision including the implicit bit.
    #[must_use]
    pub fn precision(self) -> u32 {
        self.mant_bits + 1
    }

    /// Bit pattern of positive infinity.
    #[must_use]
    pub fn inf_bits(self) -> u64 {
        ((1 << self.exp_bits) - 1) << self.mant_bits
    }
}

/// Returns the bits of the value nearest to `a / b` in `fmt`, and whether it
/// is exact. Overflow gives infinity, which is never exact.
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn ratio_to_bits(a: &Nat, b: &Nat, fmt: NativeFormat) -> (u64, bool) {
    assert!(!b.is_empty(), "division by zero");
    if a.is_empty() {
        return (0, true);
    }
    let msize = i64::from(fmt.mant_bits);
    let msize1 = msize + 1;
    let msize2 = msize1 + 1;
    let emin = 1 - fmt.bias();
    let emax = fmt.bias();

    // a/b lies in [2^(exp-1), 2^(exp+1)).
    let mut exp = a.bit_len() as i64 - b.bit_len() as i64;
    if exp < emin - msize - 1 {
        return (0, false);
    }
    if exp - 1 > emax {
        return (fmt.inf_bits(), false);
    }

    // Scale so the quotient has msize2 or msize2 + 1 bits.
    let shift = msize2 - exp;
    let (q, r) = if shift >= 0 {
        a.shl_bits(shift as u64).div_rem(b)
    } else {
        a.div_rem(&b.shl_bits(shift.unsigned_abs()))
    };
    let mut mantissa = q.low_word();
    let mut have_rem = !r.is_empty();

    if mantissa >> msize2 == 1 {
        have_rem |= mantissa & 1 == 1;
        mantissa >>= 1;
        exp += 1;
    }
    debug_assert_eq!(mantissa >> msize1, 1);

    if emin - msize <= exp && exp <= emin {
        // Subnormal: drop the bits below the smallest subnormal unit.
        let lost = (emin - (exp - 1)) as u32;
        have_rem |= mantissa & ((1 << lost) - 1) != 0;
        mantissa >>= lost;
        exp = emin + 1;
    } else if exp < emin - msize {
        return (0, false);
    }

    // Round half to even on the extra low bit.
    let mut exact = !have_rem;
    if mantissa & 1 != 0 {
        exact = false;
        if have_rem || mantissa & 2 != 0 {
            mantissa += 1;
            if mantissa >= 1 << msize2 {
                mantissa >>= 1;
                exp += 1;
            }
        }
    }
    mantissa >>= 1;

    // Value is mantissa * 2^(exp - msize1).
    if mantissa < 1 << msize {
        return (mantissa, exact);
    }
    let biased = exp - 1 + fmt.bias();
    if biased >= (1 << fmt.exp_bits) - 1 {
        return (fmt.inf_bits(), false);
    }
    let frac = mantissa & ((1 << msize) - 1);
    ((biased as u64) << msize | frac, exact)
}

/// The `f64` nearest to `a / b`, and whether it is exact.
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn ratio_to_f64(a: &Nat, b: &Nat) -> (f64, bool) {
    let (bits, exact) = ratio_to_bits(a, b, NativeFormat::F64);
    (f64::from_bits(bits), exact)
}

/// The `f32` nearest to `a / b`, and whether it is exact.
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn ratio_to_f32(a: &Nat, b: &Nat) -> (f32, bool) {
    let (bits, exact) = ratio_to_bits(a, b, NativeFormat::F32);
    (f32::from_bits(bits as u32), exact)
}

/// Decomposes a finite `f64` into `(negative, mantissa, exponent)` with
/// `|x| = mantissa * 2^exponent`. Returns `None` for NaN and infinities.
#[must_use]
pub fn split_f64(x: f64) -> Option<(bool, u64, i32)> {
    if !x.is_finite() {
        return None;
    }
    let bits = x.to_bits();
    let neg = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let frac = bits & ((1 << 52) - 1);
    if biased == 0 {
        Some((neg, frac, -1074))
    } else {
        Some((neg, frac | 1 << 52, biased - 1075))
    }
}
