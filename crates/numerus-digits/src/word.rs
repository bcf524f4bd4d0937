//! Single-word primitives.
//!
//! A digit is a full machine word. Double-word intermediates use `u128`,
//! so every primitive here is exact and branch-light.

/// One digit of a [`Nat`](crate::Nat).
pub type Word = u64;

/// Twice the width of a [`Word`].
pub(crate) type DoubleWord = u128;

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

/// Returns `(a + b + carry) mod 2^W` and the outgoing carry.
#[inline]
pub(crate) fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let sum = DoubleWord::from(a) + DoubleWord::from(b) + DoubleWord::from(carry);
    (sum as Word, (sum >> WORD_BITS) as Word)
}

/// Returns `(a - b - borrow) mod 2^W` and the outgoing borrow.
#[inline]
pub(crate) fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let (d1, b1) = a.overflowing_sub(b);
    let (d2, b2) = d1.overflowing_sub(borrow);
    (d2, Word::from(b1 || b2))
}

/// Returns the low and high words of `x * y + a + b`.
///
/// Cannot overflow: `(2^W - 1)^2 + 2(2^W - 1) = 2^(2W) - 1`.
#[inline]
pub(crate) fn mul_add(x: Word, y: Word, a: Word, b: Word) -> (Word, Word) {
    let t = DoubleWord::from(x) * DoubleWord::from(y) + DoubleWord::from(a) + DoubleWord::from(b);
    (t as Word, (t >> WORD_BITS) as Word)
}

/// Divides the double word `hi:lo` by `d`, returning quotient and remainder.
///
/// Requires `hi < d` so the quotient fits in one word.
#[inline]
pub(crate) fn div_wide(hi: Word, lo: Word, d: Word) -> (Word, Word) {
    debug_assert!(hi < d);
    let n = (DoubleWord::from(hi) << WORD_BITS) | DoubleWord::from(lo);
    let d = DoubleWord::from(d);
    ((n / d) as Word, (n % d) as Word)
}

/// Bit length of a single word; 0 for 0.
#[inline]
pub(crate) fn word_bit_len(w: Word) -> u32 {
    WORD_BITS - w.leading_zeros()
}
