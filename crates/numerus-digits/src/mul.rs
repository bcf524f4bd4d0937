//! Multiplication kernels.
//!
//! Schoolbook multiplication below [`KARATSUBA_THRESHOLD`] words, Karatsuba
//! above it. Very unbalanced operands are cut into chunks of the shorter
//! length so Karatsuba always sees comparable halves.

use smallvec::smallvec;

use crate::arith::{self, normalized_len};
use crate::nat::Digits;
use crate::word::Word;

/// Karatsuba multiplication threshold, in words.
///
/// Below this length (of the shorter operand) schoolbook multiplication is
/// faster.
pub const KARATSUBA_THRESHOLD: usize = 40;

/// Multiplies two word slices. The result may carry most-significant zero
/// words.
pub(crate) fn mul_slices(a: &[Word], b: &[Word]) -> Digits {
    let a = &a[..normalized_len(a)];
    let b = &b[..normalized_len(b)];
    if a.is_empty() || b.is_empty() {
        return Digits::new();
    }
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if b.len() < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }
    if 2 * b.len() <= a.len() {
        return unbalanced_mul(a, b);
    }
    karatsuba_mul(a, b)
}

/// Schoolbook multiplication: O(n*m).
fn schoolbook_mul(a: &[Word], b: &[Word]) -> Digits {
    let mut z: Digits = smallvec![0; a.len() + b.len()];
    for (i, &bi) in b.iter().enumerate() {
        if bi == 0 {
            continue;
        }
        z[i + a.len()] = arith::mul_add_word(&mut z[i..i + a.len()], a, bi);
    }
    z
}

/// Multiplies `a` by a much shorter `b` one `b`-sized chunk of `a` at a time.
fn unbalanced_mul(a: &[Word], b: &[Word]) -> Digits {
    let mut z: Digits = smallvec![0; a.len() + b.len()];
    for (k, chunk) in a.chunks(b.len()).enumerate() {
        let p = mul_slices(chunk, b);
        let p = &p[..normalized_len(&p)];
        let carry = arith::add_assign(&mut z[k * b.len()..], p);
        debug_assert_eq!(carry, 0);
    }
    z
}

/// Karatsuba multiplication for `a.len() >= b.len() > a.len() / 2`.
///
/// With `a = a1*B^m + a0` and `b = b1*B^m + b0`:
/// `a*b = z2*B^(2m) + (z1 - z2 - z0)*B^m + z0` where `z1 = (a0+a1)(b0+b1)`.
fn karatsuba_mul(a: &[Word], b: &[Word]) -> Digits {
    let m = a.len() / 2;
    let (a0, a1) = a.split_at(m);
    let (b0, b1) = b.split_at(m);

    let z0 = mul_slices(a0, b0);
    let z2 = mul_slices(a1, b1);

    let sa = add_slices(a0, a1);
    let sb = add_slices(b0, b1);
    let mut z1 = mul_slices(&sa, &sb);

    let z0 = &z0[..normalized_len(&z0)];
    let z2 = &z2[..normalized_len(&z2)];
    let n1 = normalized_len(&z1);
    z1.truncate(n1);
    let borrow = arith::sub_assign(&mut z1, z0) + arith::sub_assign(&mut z1, z2);
    debug_assert_eq!(borrow, 0);
    let z1 = &z1[..normalized_len(&z1)];

    let mut z: Digits = smallvec![0; a.len() + b.len()];
    z[..z0.len()].copy_from_slice(z0);
    let c2 = arith::add_assign(&mut z[2 * m..], z2);
    let c1 = arith::add_assign(&mut z[m..], z1);
    debug_assert_eq!(c1 + c2, 0);
    z
}

/// Adds two slices of any lengths.
fn add_slices(x: &[Word], y: &[Word]) -> Digits {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut z = Digits::from_slice(long);
    let carry = arith::add_assign(&mut z, short);
    if carry != 0 {
        z.push(carry);
    }
    z
}
