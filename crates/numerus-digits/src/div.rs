//! Division kernels.
//!
//! Single-word divisors take a fast path. Multi-word divisors use Knuth's
//! Algorithm D (TAOCP Vol. 2, 4.3.1): normalize so the divisor's top bit is
//! set, estimate each quotient word from the leading two dividend words,
//! refine with the second divisor word, multiply-subtract, and add back on
//! the rare over-estimate.

use smallvec::smallvec;

use crate::arith::{self, cmp_slices};
use crate::nat::Digits;
use crate::word::{div_wide, DoubleWord, Word, WORD_BITS};

/// Divides `x` by a non-zero word, returning quotient words and remainder.
pub(crate) fn div_rem_word(x: &[Word], d: Word) -> (Digits, Word) {
    debug_assert!(d != 0);
    let mut q: Digits = smallvec![0; x.len()];
    let mut r = 0;
    for (qi, &xi) in q.iter_mut().zip(x).rev() {
        let (qw, rw) = div_wide(r, xi, d);
        *qi = qw;
        r = rw;
    }
    (q, r)
}

/// Divides `x` in place by a non-zero word, returning the remainder.
pub(crate) fn div_word_assign(x: &mut [Word], d: Word) -> Word {
    debug_assert!(d != 0);
    let mut r = 0;
    for xi in x.iter_mut().rev() {
        let (qw, rw) = div_wide(r, *xi, d);
        *xi = qw;
        r = rw;
    }
    r
}

/// Remainder of `x` divided by a non-zero word.
pub(crate) fn rem_word(x: &[Word], d: Word) -> Word {
    debug_assert!(d != 0);
    x.iter().rev().fold(0, |r, &xi| div_wide(r, xi, d).1)
}

/// Divides normalized `u` by normalized, non-empty `v`.
pub(crate) fn div_rem(u: &[Word], v: &[Word]) -> (Digits, Digits) {
    debug_assert!(!v.is_empty());
    if cmp_slices(u, v).is_lt() {
        return (Digits::new(), Digits::from_slice(u));
    }
    if v.len() == 1 {
        let (q, r) = div_rem_word(u, v[0]);
        let mut rem = Digits::new();
        if r != 0 {
            rem.push(r);
        }
        return (q, rem);
    }
    div_rem_knuth(u, v)
}

fn div_rem_knuth(u: &[Word], v: &[Word]) -> (Digits, Digits) {
    let n = v.len();
    let m = u.len() - n;
    let shift = v[n - 1].leading_zeros();

    let mut vn = Digits::from_slice(v);
    arith::shl_bits_assign(&mut vn, shift);
    let mut un: Digits = smallvec![0; u.len() + 1];
    un[..u.len()].copy_from_slice(u);
    un[u.len()] = arith::shl_bits_assign(&mut un[..u.len()], shift);

    let v_top = DoubleWord::from(vn[n - 1]);
    let v_next = DoubleWord::from(vn[n - 2]);
    let base: DoubleWord = 1 << WORD_BITS;

    let mut q: Digits = smallvec![0; m + 1];
    for j in (0..=m).rev() {
        let u_top = un[j + n];
        let num = (DoubleWord::from(u_top) << WORD_BITS) | DoubleWord::from(un[j + n - 1]);
        let mut q_hat = if DoubleWord::from(u_top) >= v_top {
            DoubleWord::from(Word::MAX)
        } else {
            num / v_top
        };
        let mut r_hat = num - q_hat * v_top;
        while r_hat < base && q_hat * v_next > ((r_hat << WORD_BITS) | DoubleWord::from(un[j + n - 2])) {
            q_hat -= 1;
            r_hat += v_top;
        }

        let borrow = arith::mul_sub_word(&mut un[j..j + n], &vn, q_hat as Word);
        let (top, underflow) = un[j + n].overflowing_sub(borrow);
        un[j + n] = top;
        if underflow {
            q_hat -= 1;
            let carry = arith::add_assign(&mut un[j..j + n], &vn);
            un[j + n] = un[j + n].wrapping_add(carry);
        }
        q[j] = q_hat as Word;
    }

    un.truncate(n);
    arith::shr_bits_assign(&mut un, shift);
    (q, un)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::normalized_len;
    use crate::mul::mul_slices;

    fn trimmed(d: &[Word]) -> Vec<Word> {
        d[..normalized_len(d)].to_vec()
    }

    #[test]
    fn test_div_rem_word() {
        let (q, r) = div_rem_word(&[5, 1], 2);
        assert_eq!(trimmed(&q), vec![(1 << 63) + 2]);
        assert_eq!(r, 1);
        assert_eq!(rem_word(&[5, 1], 2), 1);
    }

    #[test]
    fn test_knuth_exact_product() {
        let a = [0x1234_5678_9abc_def0, Word::MAX, 42];
        let b = [Word::MAX, 0x8000_0000_0000_0000];
        let p = mul_slices(&a, &b);
        let (q, r) = div_rem(&trimmed(&p), &b);
        assert_eq!(trimmed(&q), a.to_vec());
        assert!(trimmed(&r).is_empty());
    }

    #[test]
    fn test_knuth_add_back_case() {
        // Classic add-back trigger: divisor with top word just above half.
        let u = [0, 0, 0x8000_0000_0000_0000, 0x7fff_ffff_ffff_ffff];
        let v = [1, 0, 0x8000_0000_0000_0000];
        let (q, r) = div_rem(&u, &v);
        let back = mul_slices(&trimmed(&q), &v);
        let mut sum = Digits::from_slice(&back);
        sum.resize(u.len() + 1, 0);
        let r = trimmed(&r);
        assert_eq!(cmp_slices(&r, &v), std::cmp::Ordering::Less);
        arith::add_assign(&mut sum, &r);
        assert_eq!(trimmed(&sum), u.to_vec());
    }

    #[test]
    fn test_smaller_dividend() {
        let (q, r) = div_rem(&[3], &[1, 1]);
        assert!(q.is_empty());
        assert_eq!(trimmed(&r), vec![3]);
    }
}
