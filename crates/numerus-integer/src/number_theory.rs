//! Number-theoretic functions on [`Integer`].
//!
//! GCD with Bézout coefficients, modular inverse, modular exponentiation,
//! the Jacobi symbol, modular square roots, and products of ranges.

use num_traits::{One, Zero};
use numerus_digits::Nat;
use tracing::trace;

use crate::Integer;

impl Integer {
    /// Computes the greatest common divisor of two positive integers.
    ///
    /// Returns zero if either operand is zero or negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if !self.is_positive() || !other.is_positive() {
            return Self::zero();
        }
        Self::from_nat(self.mag.gcd(&other.mag))
    }

    /// Computes `(g, x, y)` with `g = gcd(self, other) = self*x + other*y`.
    ///
    /// Returns `None` unless both operands are positive.
    #[must_use]
    pub fn extended_gcd(&self, other: &Self) -> Option<(Self, Self, Self)> {
        if !self.is_positive() || !other.is_positive() {
            return None;
        }
        let (mut old_r, mut r) = (self.clone(), other.clone());
        let (mut old_s, mut s) = (Self::one(), Self::zero());
        let (mut old_t, mut t) = (Self::zero(), Self::one());

        while !r.is_zero() {
            let (q, rem) = old_r.quo_rem(&r);
            old_r = std::mem::replace(&mut r, rem);
            let next_s = &old_s - &(&q * &s);
            old_s = std::mem::replace(&mut s, next_s);
            let next_t = &old_t - &(&q * &t);
            old_t = std::mem::replace(&mut t, next_t);
        }
        Some((old_r, old_s, old_t))
    }

    /// Returns the inverse of `self` modulo `|n|`, in `[0, |n|)`.
    ///
    /// Returns `None` when `self` and `n` are not coprime.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn mod_inverse(&self, n: &Self) -> Option<Self> {
        let n = n.abs();
        let g = self.rem_euclid(&n);
        if g.is_zero() {
            return n.is_one().then(Self::zero);
        }
        let (d, x, _) = g.extended_gcd(&n)?;
        if !d.is_one() {
            return None;
        }
        Some(x.rem_euclid(&n))
    }

    /// Computes `self^exp mod |m|`, or plain `self^exp` when `m` is `None` or
    /// zero.
    ///
    /// A non-positive exponent gives `1 mod |m|` (1 without a modulus). With
    /// a modulus the result is in `[0, |m|)`.
    #[must_use]
    pub fn pow_mod(&self, exp: &Self, m: Option<&Self>) -> Self {
        let m = m.filter(|m| !m.is_zero());
        if !exp.is_positive() {
            return match m {
                Some(m) if m.mag.is_one() => Self::zero(),
                _ => Self::one(),
            };
        }
        let odd = !exp.mag.is_even();
        match m {
            Some(m) => {
                let z = self.mag.exp_mod(&exp.mag, &m.mag);
                if self.neg && odd && !z.is_zero() {
                    Self::from_nat(&m.mag - &z)
                } else {
                    Self::from_nat(z)
                }
            }
            None => Self::from_parts(self.neg && odd, pow_nat(&self.mag, &exp.mag)),
        }
    }

    /// Returns the Jacobi symbol `(self / y)`: -1, 0 or 1.
    ///
    /// # Panics
    ///
    /// Panics if `y` is even.
    #[must_use]
    pub fn jacobi(&self, y: &Self) -> i32 {
        assert!(y.is_odd(), "jacobi: need odd second argument, got {y}");
        let mut j = 1;
        if y.neg && self.neg {
            j = -1;
        }
        let mut b = y.mag.clone();
        let mut a = self.rem_euclid(&y.abs()).mag;
        loop {
            if b.is_one() {
                return j;
            }
            if a.is_zero() {
                return 0;
            }
            a = &a % &b;
            if a.is_zero() {
                return 0;
            }
            let s = a.trailing_zeros();
            if s & 1 == 1 {
                let bmod8 = b.low_word() & 7;
                if bmod8 == 3 || bmod8 == 5 {
                    j = -j;
                }
            }
            let c = a.shr_bits(s);
            if b.low_word() & 3 == 3 && c.low_word() & 3 == 3 {
                j = -j;
            }
            a = b;
            b = c;
        }
    }

    /// Returns a square root of `self` modulo the odd prime `p`, or `None`
    /// if `self` is not a quadratic residue.
    ///
    /// Uses `x^((p+1)/4)` for `p = 3 mod 4`, Atkin's formula for
    /// `p = 5 mod 8`, and Tonelli-Shanks otherwise. The result is
    /// unspecified if `p` is odd but not prime.
    ///
    /// # Panics
    ///
    /// Panics if `p` is even.
    #[must_use]
    pub fn mod_sqrt(&self, p: &Self) -> Option<Self> {
        match self.jacobi(p) {
            -1 => return None,
            0 => return Some(Self::zero()),
            _ => {}
        }
        let p = &p.mag;
        let x = self.rem_euclid(&Self::from_nat(p.clone())).mag;
        let root = match p.low_word() {
            w if w & 3 == 3 => sqrt_3_mod_4(&x, p),
            w if w & 7 == 5 => sqrt_5_mod_8(&x, p),
            _ => tonelli_shanks(&x, p)?,
        };
        Some(Self::from_nat(root))
    }

    /// Returns the product of all integers in `[a, b]`; 1 for an empty range.
    #[must_use]
    pub fn mul_range(a: i64, b: i64) -> Self {
        if a > b {
            return Self::one();
        }
        if a <= 0 && b >= 0 {
            return Self::zero();
        }
        if a < 0 {
            let neg = (b.abs_diff(a)) & 1 == 0;
            let mag = mul_range_nat(b.unsigned_abs(), a.unsigned_abs());
            return Self::from_parts(neg, mag);
        }
        Self::from_nat(mul_range_nat(a.unsigned_abs(), b.unsigned_abs()))
    }

    /// Returns the binomial coefficient `C(n, k)`.
    #[must_use]
    pub fn binomial(n: u64, k: u64) -> Self {
        if k > n {
            return Self::zero();
        }
        let k = k.min(n - k);
        if k == 0 {
            return Self::one();
        }
        let num = mul_range_nat(n - k + 1, n);
        let den = mul_range_nat(1, k);
        Self::from_nat(&num / &den)
    }
}

fn pow_nat(base: &Nat, exp: &Nat) -> Nat {
    if base.bit_len() <= 1 {
        return base.clone();
    }
    let mut z = Nat::one();
    for i in (0..exp.bit_len()).rev() {
        z = z.sqr();
        if exp.bit(i) {
            z = &z * base;
        }
    }
    z
}

fn mul_range_nat(a: u64, b: u64) -> Nat {
    debug_assert!(a <= b);
    match b - a {
        0 => Nat::from_word(a),
        1 => Nat::from_word(a).mul_word(b),
        _ => {
            let m = a + (b - a) / 2;
            &mul_range_nat(a, m) * &mul_range_nat(m + 1, b)
        }
    }
}

fn sqrt_3_mod_4(x: &Nat, p: &Nat) -> Nat {
    let e = p.add_word(1).shr_bits(2);
    x.exp_mod(&e, p)
}

fn sqrt_5_mod_8(x: &Nat, p: &Nat) -> Nat {
    // Atkin: alpha = (2x)^((p-5)/8), beta = 2x*alpha^2, root = x*alpha*(beta-1)
    let e = p.shr_bits(3);
    let tx = x.shl_bits(1);
    let alpha = tx.exp_mod(&e, p);
    let beta = alpha.mul_mod(&alpha, p).mul_mod(&tx, p);
    let beta_minus_one = (&beta + &p.sub_word(1)) % p;
    beta_minus_one.mul_mod(x, p).mul_mod(&alpha, p)
}

fn tonelli_shanks(x: &Nat, p: &Nat) -> Option<Nat> {
    let pm1 = p.sub_word(1);
    let e = pm1.trailing_zeros();
    let s = pm1.shr_bits(e);

    let p_int = Integer::from_nat(p.clone());
    let mut n = Nat::from_word(2);
    while Integer::from_nat(n.clone()).jacobi(&p_int) != -1 {
        n = n.add_word(1);
    }
    trace!(non_residue = %n, "tonelli-shanks");

    let mut y = x.exp_mod(&s.add_word(1).shr_bits(1), p);
    let mut b = x.exp_mod(&s, p);
    let mut g = n.exp_mod(&s, p);
    let mut r = e;
    loop {
        let mut m = 0;
        let mut t = b.clone();
        while !t.is_one() {
            t = t.mul_mod(&t, p);
            m += 1;
            if m >= r {
                // Only reachable when p is not prime.
                return None;
            }
        }
        if m == 0 {
            return Some(y);
        }
        let t = g.exp_mod(&Nat::power_of_two(r - m - 1), p);
        g = t.mul_mod(&t, p);
        y = y.mul_mod(&t, p);
        b = b.mul_mod(&g, p);
        r = m;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Integer {
        Integer::new(v)
    }

    #[test]
    fn test_gcd() {
        assert_eq!(int(48).gcd(&int(18)), int(6));
        assert_eq!(int(-48).gcd(&int(18)), int(0));
        assert_eq!(int(0).gcd(&int(18)), int(0));
    }

    #[test]
    fn test_extended_gcd_bezout() {
        let (a, b) = (int(240), int(46));
        let (g, x, y) = a.extended_gcd(&b).unwrap();
        assert_eq!(g, int(2));
        assert_eq!(&(&a * &x) + &(&b * &y), g);
        assert!(int(0).extended_gcd(&b).is_none());
        assert!(int(5).extended_gcd(&int(-3)).is_none());
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(int(3).mod_inverse(&int(11)), Some(int(4)));
        assert_eq!(int(-3).mod_inverse(&int(11)), Some(int(7)));
        assert_eq!(int(3).mod_inverse(&int(-11)), Some(int(4)));
        assert_eq!(int(6).mod_inverse(&int(9)), None);
        assert_eq!(int(5).mod_inverse(&int(1)), Some(int(0)));
    }

    #[test]
    fn test_pow_mod() {
        assert_eq!(int(4).pow_mod(&int(13), Some(&int(497))), int(445));
        assert_eq!(int(-2).pow_mod(&int(3), Some(&int(5))), int(2));
        assert_eq!(int(-2).pow_mod(&int(3), None), int(-8));
        assert_eq!(int(7).pow_mod(&int(0), Some(&int(5))), int(1));
        assert_eq!(int(7).pow_mod(&int(-3), Some(&int(1))), int(0));
        assert_eq!(int(7).pow_mod(&int(-1), None), int(1));
        assert_eq!(int(3).pow_mod(&int(4), Some(&int(0))), int(81));
    }

    #[test]
    fn test_jacobi_table() {
        // (a/15) for a in 0..15
        let expected = [0, 1, 1, 0, 1, 0, 0, -1, 1, 0, 0, -1, 0, -1, -1];
        for (a, &j) in expected.iter().enumerate() {
            assert_eq!(int(a as i64).jacobi(&int(15)), j, "({a}/15)");
        }
        assert_eq!(int(-1).jacobi(&int(7)), -1);
    }

    #[test]
    #[should_panic(expected = "odd")]
    fn test_jacobi_even_panics() {
        let _ = int(3).jacobi(&int(8));
    }

    #[test]
    fn test_mod_sqrt_each_branch() {
        // 7 = 3 mod 4, 13 = 5 mod 8, 17 and 41 use Tonelli-Shanks.
        for p in [7, 13, 17, 41, 65537] {
            let p_int = int(p);
            for x in 0..p.min(200) {
                let x_int = int(x);
                match x_int.mod_sqrt(&p_int) {
                    Some(r) => assert_eq!(r.pow_mod(&int(2), Some(&p_int)), x_int),
                    None => assert_eq!(x_int.jacobi(&p_int), -1),
                }
            }
        }
    }

    #[test]
    fn test_mod_sqrt_scenario() {
        let r = int(4).mod_sqrt(&int(7)).unwrap();
        assert!(r == int(2) || r == int(5));
        assert_eq!(int(3).mod_sqrt(&int(7)), None);
    }

    #[test]
    fn test_mul_range_and_binomial() {
        assert_eq!(Integer::mul_range(1, 10), int(3_628_800));
        assert_eq!(Integer::mul_range(-3, -1), int(-6));
        assert_eq!(Integer::mul_range(-4, -1), int(24));
        assert_eq!(Integer::mul_range(-2, 5), int(0));
        assert_eq!(Integer::mul_range(5, 2), int(1));
        assert_eq!(Integer::binomial(10, 3), int(120));
        assert_eq!(Integer::binomial(3, 10), int(0));
        assert_eq!(
            Integer::binomial(100, 50).to_string(),
            "100891344545564193334812497256"
        );
    }
}
