//! Shifts and unsigned bitwise logic.

use smallvec::smallvec;

use crate::arith;
use crate::nat::{Digits, Nat};
use crate::word::{Word, WORD_BITS};

impl Nat {
    /// Returns `self << n`.
    #[must_use]
    pub fn shl_bits(&self, n: u64) -> Self {
        if self.is_empty() {
            return Self::new();
        }
        let words = (n / u64::from(WORD_BITS)) as usize;
        let bits = (n % u64::from(WORD_BITS)) as u32;
        let len = self.digits.len();
        let mut z: Digits = smallvec![0; words + len + 1];
        z[words..words + len].copy_from_slice(&self.digits);
        z[words + len] = arith::shl_bits_assign(&mut z[words..words + len], bits);
        Self::from_digits(z)
    }

    /// Returns `self >> n`, discarding shifted-out bits.
    #[must_use]
    pub fn shr_bits(&self, n: u64) -> Self {
        let words = n / u64::from(WORD_BITS);
        if words >= self.digits.len() as u64 {
            return Self::new();
        }
        let bits = (n % u64::from(WORD_BITS)) as u32;
        let mut z = Digits::from_slice(&self.digits[words as usize..]);
        arith::shr_bits_assign(&mut z, bits);
        Self::from_digits(z)
    }

    /// Bitwise and.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        let z: Digits = self
            .digits
            .iter()
            .zip(other.digits.iter())
            .map(|(a, b)| a & b)
            .collect();
        Self::from_digits(z)
    }

    /// Bitwise or.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        zip_longest(self, other, |a, b| a | b)
    }

    /// Bitwise exclusive or.
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        zip_longest(self, other, |a, b| a ^ b)
    }

    /// Bits of `self` that are clear in `other`.
    #[must_use]
    pub fn and_not(&self, other: &Self) -> Self {
        let z: Digits = self
            .digits
            .iter()
            .enumerate()
            .map(|(i, &a)| a & !other.digits.get(i).copied().unwrap_or(0))
            .collect();
        Self::from_digits(z)
    }
}

fn zip_longest(x: &Nat, y: &Nat, f: impl Fn(Word, Word) -> Word) -> Nat {
    let n = x.digits.len().max(y.digits.len());
    let z: Digits = (0..n)
        .map(|i| {
            f(
                x.digits.get(i).copied().unwrap_or(0),
                y.digits.get(i).copied().unwrap_or(0),
            )
        })
        .collect();
    Nat::from_digits(z)
}
