//! Vector kernels over little-endian word slices.
//!
//! These operate on raw, possibly unnormalized slices and report carries or
//! borrows to the caller. Normalization is the job of [`Nat`](crate::Nat).

use std::cmp::Ordering;

use crate::word::{adc, mul_add, sbb, Word, WORD_BITS};

/// `acc += x`, with `acc.len() >= x.len()`. Returns the carry out of `acc`.
pub(crate) fn add_assign(acc: &mut [Word], x: &[Word]) -> Word {
    debug_assert!(acc.len() >= x.len());
    let mut carry = 0;
    for (a, &b) in acc.iter_mut().zip(x) {
        let (s, c) = adc(*a, b, carry);
        *a = s;
        carry = c;
    }
    if carry != 0 {
        carry = add_word_assign(&mut acc[x.len()..], carry);
    }
    carry
}

/// `acc += w`. Returns the carry out of `acc`.
pub(crate) fn add_word_assign(acc: &mut [Word], w: Word) -> Word {
    let mut carry = w;
    for a in acc.iter_mut() {
        if carry == 0 {
            break;
        }
        let (s, c) = a.overflowing_add(carry);
        *a = s;
        carry = Word::from(c);
    }
    carry
}

/// `acc -= x`, with `acc.len() >= x.len()`. Returns the borrow out of `acc`.
pub(crate) fn sub_assign(acc: &mut [Word], x: &[Word]) -> Word {
    debug_assert!(acc.len() >= x.len());
    let mut borrow = 0;
    for (a, &b) in acc.iter_mut().zip(x) {
        let (d, br) = sbb(*a, b, borrow);
        *a = d;
        borrow = br;
    }
    if borrow != 0 {
        borrow = sub_word_assign(&mut acc[x.len()..], borrow);
    }
    borrow
}

/// `acc -= w`. Returns the borrow out of `acc`.
pub(crate) fn sub_word_assign(acc: &mut [Word], w: Word) -> Word {
    let mut borrow = w;
    for a in acc.iter_mut() {
        if borrow == 0 {
            break;
        }
        let (d, b) = a.overflowing_sub(borrow);
        *a = d;
        borrow = Word::from(b);
    }
    borrow
}

/// `acc[..x.len()] += x * y`. Returns the final carry word, which belongs at
/// `acc[x.len()]`.
pub(crate) fn mul_add_word(acc: &mut [Word], x: &[Word], y: Word) -> Word {
    debug_assert!(acc.len() >= x.len());
    let mut carry = 0;
    for (a, &xi) in acc.iter_mut().zip(x) {
        let (lo, hi) = mul_add(xi, y, *a, carry);
        *a = lo;
        carry = hi;
    }
    carry
}

/// `acc[..x.len()] -= x * y`. Returns the borrow word owed by `acc[x.len()]`.
pub(crate) fn mul_sub_word(acc: &mut [Word], x: &[Word], y: Word) -> Word {
    debug_assert!(acc.len() >= x.len());
    let mut carry = 0;
    for (a, &xi) in acc.iter_mut().zip(x) {
        let (lo, hi) = mul_add(xi, y, carry, 0);
        let (d, b) = a.overflowing_sub(lo);
        *a = d;
        carry = hi + Word::from(b);
    }
    carry
}

/// Shifts `x` left by `s < WORD_BITS` bits in place, returning the bits
/// shifted out of the top word.
pub(crate) fn shl_bits_assign(x: &mut [Word], s: u32) -> Word {
    debug_assert!(s < WORD_BITS);
    if s == 0 {
        return 0;
    }
    let mut carry = 0;
    for w in x.iter_mut() {
        let next = *w >> (WORD_BITS - s);
        *w = (*w << s) | carry;
        carry = next;
    }
    carry
}

/// Shifts `x` right by `s < WORD_BITS` bits in place, returning the bits
/// shifted out of the bottom word, left-aligned.
pub(crate) fn shr_bits_assign(x: &mut [Word], s: u32) -> Word {
    debug_assert!(s < WORD_BITS);
    if s == 0 {
        return 0;
    }
    let mut carry = 0;
    for w in x.iter_mut().rev() {
        let next = *w << (WORD_BITS - s);
        *w = (*w >> s) | carry;
        carry = next;
    }
    carry
}

/// Compares two normalized slices: shorter is smaller, then by magnitude
/// from the most significant word down.
pub(crate) fn cmp_slices(a: &[Word], b: &[Word]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Length of `x` with the most-significant zero words dropped.
#[inline]
pub(crate) fn normalized_len(x: &[Word]) -> usize {
    x.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}
