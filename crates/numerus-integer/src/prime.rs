//! Probabilistic primality testing.
//!
//! Trial division by small primes, then Miller-Rabin with base 2 and
//! pseudo-random bases, then an almost-extra-strong Lucas test. Together the
//! last two form a Baillie-PSW test, which has no known counterexample and is
//! exact below 2^64.
//!
//! The test is not meant for adversarially chosen inputs: the random bases
//! are derived deterministically from the configuration seed.

use num_traits::{One, Zero};
use numerus_digits::{Nat, Word};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::Integer;

/// Configuration for [`Integer::probably_prime_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimalityConfig {
    /// Number of Miller-Rabin rounds with random bases, in addition to the
    /// fixed base 2 round.
    pub rounds: u32,
    /// Seed mixed into the base generator.
    pub seed: u64,
    /// Run the Lucas test after Miller-Rabin.
    pub lucas: bool,
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        Self {
            rounds: 20,
            seed: 42,
            lucas: true,
        }
    }
}

const PRIME_BIT_MASK: u64 = 1 << 2
    | 1 << 3
    | 1 << 5
    | 1 << 7
    | 1 << 11
    | 1 << 13
    | 1 << 17
    | 1 << 19
    | 1 << 23
    | 1 << 29
    | 1 << 31
    | 1 << 37
    | 1 << 41
    | 1 << 43
    | 1 << 47
    | 1 << 53
    | 1 << 59
    | 1 << 61;

const PRIMES_A: Word = 3 * 5 * 7 * 11 * 13 * 17 * 19 * 23 * 37;
const PRIMES_B: Word = 29 * 31 * 41 * 43 * 47 * 53;

impl Integer {
    /// Reports whether the integer is probably prime, running `rounds`
    /// random Miller-Rabin rounds plus the fixed base-2 round and a Lucas
    /// test.
    ///
    /// A prime is never reported composite. A composite is reported prime
    /// with probability at most 4^-rounds for random inputs, and never below
    /// 2^64. Not suitable for adversarially constructed inputs.
    #[must_use]
    pub fn probably_prime(&self, rounds: u32) -> bool {
        self.probably_prime_with(&PrimalityConfig {
            rounds,
            ..PrimalityConfig::default()
        })
    }

    /// Primality test with explicit configuration.
    #[must_use]
    pub fn probably_prime_with(&self, config: &PrimalityConfig) -> bool {
        if self.neg || self.mag.is_zero() {
            return false;
        }
        let n = &self.mag;
        let w = n.low_word();
        if n.len() == 1 && w < 64 {
            return PRIME_BIT_MASK & (1 << w) != 0;
        }
        if w & 1 == 0 {
            return false;
        }
        let ra = n.rem_word(PRIMES_A);
        let rb = n.rem_word(PRIMES_B);
        if [3, 5, 7, 11, 13, 17, 19, 23, 37].iter().any(|p| ra % p == 0)
            || [29, 31, 41, 43, 47, 53].iter().any(|p| rb % p == 0)
        {
            trace!(bits = n.bit_len(), "composite by trial division");
            return false;
        }

        let verdict = miller_rabin(n, config) && (!config.lucas || lucas(n));
        debug!(bits = n.bit_len(), rounds = config.rounds, verdict, "primality test");
        verdict
    }
}

/// Uniform random natural below `bound`, which must be non-zero.
fn random_below(rng: &mut ChaCha8Rng, bound: &Nat) -> Nat {
    let bits = bound.bit_len();
    let words = bound.len();
    let top_bits = bits % 64;
    loop {
        let mut v: Vec<Word> = (0..words).map(|_| rng.gen::<u64>()).collect();
        if top_bits != 0 {
            if let Some(top) = v.last_mut() {
                *top &= (1 << top_bits) - 1;
            }
        }
        let candidate = Nat::from_words(&v);
        if candidate < *bound {
            return candidate;
        }
    }
}

fn miller_rabin(n: &Nat, config: &PrimalityConfig) -> bool {
    let nm1 = n.sub_word(1);
    let k = nm1.trailing_zeros();
    let q = nm1.shr_bits(k);
    let nm3 = nm1.sub_word(2);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed ^ n.low_word());

    'rounds: for round in 0..=config.rounds {
        let x = if round == 0 {
            Nat::from_word(2)
        } else {
            random_below(&mut rng, &nm3).add_word(2)
        };
        let mut y = x.exp_mod(&q, n);
        if y.is_one() || y == nm1 {
            continue;
        }
        for _ in 1..k {
            y = y.mul_mod(&y, n);
            if y == nm1 {
                continue 'rounds;
            }
            if y.is_one() {
                break;
            }
        }
        trace!(round, witness = %x, "miller-rabin witness found");
        return false;
    }
    true
}

fn lucas(n: &Nat) -> bool {
    if n.is_zero() || n.is_one() {
        return false;
    }
    if n.is_even() {
        return *n == Nat::from_word(2);
    }

    // Baillie-OEIS method C: smallest P >= 3 with Jacobi(P^2 - 4, n) = -1.
    let n_int = Integer::from_nat(n.clone());
    let mut p: Word = 3;
    loop {
        let d = Integer::from(p * p - 4);
        match d.jacobi(&n_int) {
            -1 => break,
            0 => return n.len() == 1 && n.low_word() == p + 2,
            _ => {}
        }
        if p == 40 {
            // No such P exists when n is a perfect square.
            let r = n.sqrt();
            if r.sqr() == *n {
                return false;
            }
        }
        p += 1;
        if p > 10_000 {
            debug!(n = %n, "lucas parameter search exhausted");
            return false;
        }
    }
    trace!(p, "lucas parameter");

    // n + 1 = s * 2^r with s odd.
    let s_full = n.add_word(1);
    let r = s_full.trailing_zeros();
    let s = s_full.shr_bits(r);
    let nm2 = n.sub_word(2);
    let nat_p = Nat::from_word(p);

    // V(0) = 2, V(1) = P, V(2k) = V(k)^2 - 2, V(2k+1) = V(k)V(k+1) - P.
    let mut vk = Nat::from_word(2);
    let mut vk1 = nat_p.clone();
    for i in (0..s.bit_len()).rev() {
        let cross = &(&(&vk * &vk1) + n) - &nat_p;
        if s.bit(i) {
            vk = &cross % n;
            vk1 = &(&vk1.sqr() + &nm2) % n;
        } else {
            vk1 = &cross % n;
            vk = &(&vk.sqr() + &nm2) % n;
        }
    }

    if vk == Nat::from_word(2) || vk == nm2 {
        // U(s) == 0 iff P*V(s) == 2*V(s+1) mod n.
        let t1 = &vk * &nat_p;
        let t2 = vk1.shl_bits(1);
        let (diff, _) = t1.abs_diff(&t2);
        if (&diff % n).is_zero() {
            return true;
        }
    }

    for _ in 0..r.saturating_sub(1) {
        if vk.is_zero() {
            return true;
        }
        if vk == Nat::from_word(2) {
            return false;
        }
        vk = &(&vk.sqr() + &nm2) % n;
    }
    false
}
