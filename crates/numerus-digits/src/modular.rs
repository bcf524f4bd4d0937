//! Modular arithmetic on natural numbers.

use num_traits::{One, Zero};

use crate::nat::Nat;

/// Width of the exponent window used by [`Nat::exp_mod`].
const WINDOW_BITS: u64 = 4;

impl Nat {
    /// Returns `(self * other) mod m`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    #[must_use]
    pub fn mul_mod(&self, other: &Self, m: &Self) -> Self {
        &(self * other) % m
    }

    /// Returns `self^e mod m` using a fixed 4-bit window over the exponent.
    ///
    /// `x^0 mod 1` is 0.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    #[must_use]
    pub fn exp_mod(&self, e: &Self, m: &Self) -> Self {
        assert!(!m.is_zero(), "division by zero");
        if m.is_one() {
            return Self::new();
        }
        if e.is_zero() {
            return Self::one();
        }
        let base = self % m;
        if base.is_zero() {
            return Self::new();
        }

        // table[i] = base^i mod m
        let mut table = Vec::with_capacity(1 << WINDOW_BITS);
        table.push(Self::one());
        for i in 1..1 << WINDOW_BITS {
            let next = table[i - 1].mul_mod(&base, m);
            table.push(next);
        }

        let bits = e.bit_len();
        let windows = bits.div_ceil(WINDOW_BITS);
        let mut z = Self::one();
        for w in (0..windows).rev() {
            if w + 1 != windows {
                for _ in 0..WINDOW_BITS {
                    z = z.mul_mod(&z, m);
                }
            }
            let mut idx = 0usize;
            for b in (0..WINDOW_BITS).rev() {
                idx = (idx << 1) | usize::from(e.bit(w * WINDOW_BITS + b));
            }
            if idx != 0 {
                z = z.mul_mod(&table[idx], m);
            }
        }
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_exp_mod(b: u64, e: u64, m: u64) -> u64 {
        let mut r = 1u128 % u128::from(m);
        for _ in 0..e {
            r = r * u128::from(b) % u128::from(m);
        }
        r as u64
    }

    #[test]
    fn test_small_exp_mod() {
        for (b, e, m) in [(2, 10, 1000), (3, 0, 7), (5, 117, 19), (0, 5, 13), (7, 1, 1)] {
            let got = Nat::from_word(b).exp_mod(&Nat::from_word(e), &Nat::from_word(m));
            assert_eq!(got, Nat::from_word(naive_exp_mod(b, e, m)), "{b}^{e} mod {m}");
        }
    }

    #[test]
    fn test_fermat_little_theorem() {
        // 2^127 - 1 is a Mersenne prime.
        let p = Nat::power_of_two(127).sub_word(1);
        let a = Nat::from_word(0x1234_5678_9abc_def0);
        let e = p.sub_word(1);
        assert_eq!(a.exp_mod(&e, &p), Nat::one());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_zero_modulus_panics() {
        let _ = Nat::from_word(2).exp_mod(&Nat::from_word(3), &Nat::new());
    }
}
