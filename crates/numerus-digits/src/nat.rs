//! Arbitrary precision natural numbers.
//!
//! A [`Nat`] is a little-endian vector of [`Word`]s with no most-significant
//! zero words. The empty vector is the only representation of zero.

use std::cmp::Ordering;
use std::fmt;

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::arith::{self, cmp_slices, normalized_len};
use crate::word::{word_bit_len, Word, WORD_BITS};

/// Inline storage for up to four words (256 bits) before spilling to the heap.
pub(crate) type Digits = SmallVec<[Word; 4]>;

/// An unsigned integer of unbounded magnitude.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Nat {
    pub(crate) digits: Digits,
}

impl Nat {
    /// Returns zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a natural number from a single word.
    #[must_use]
    pub fn from_word(w: Word) -> Self {
        let mut digits = Digits::new();
        if w != 0 {
            digits.push(w);
        }
        Self { digits }
    }

    /// Creates a natural number from a `u128`.
    #[must_use]
    pub fn from_u128(v: u128) -> Self {
        Self::from_words(&[v as Word, (v >> WORD_BITS) as Word])
    }

    /// Creates a natural number from little-endian words, dropping
    /// most-significant zero words.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let n = normalized_len(words);
        Self {
            digits: Digits::from_slice(&words[..n]),
        }
    }

    pub(crate) fn from_digits(mut digits: Digits) -> Self {
        let n = normalized_len(&digits);
        digits.truncate(n);
        Self { digits }
    }

    /// Returns `2^n`.
    #[must_use]
    pub fn power_of_two(n: u64) -> Self {
        let mut z = Self::new();
        z.set_bit(n, true);
        z
    }

    /// Little-endian words, most significant word non-zero.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.digits
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if this is zero. Same as [`Zero::is_zero`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns true if the least significant bit is clear.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.digits.first().map_or(true, |w| w & 1 == 0)
    }

    /// The least significant word, or 0.
    #[must_use]
    pub fn low_word(&self) -> Word {
        self.digits.first().copied().unwrap_or(0)
    }

    /// Returns the value if it fits in a `u64`.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        match self.digits.len() {
            0 => Some(0),
            1 => Some(self.digits[0]),
            _ => None,
        }
    }

    /// Returns the value if it fits in a `u128`.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        match self.digits.len() {
            0 => Some(0),
            1 => Some(u128::from(self.digits[0])),
            2 => Some(u128::from(self.digits[0]) | (u128::from(self.digits[1]) << WORD_BITS)),
            _ => None,
        }
    }

    /// Number of bits needed to represent the value; 0 for zero.
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        match self.digits.last() {
            None => 0,
            Some(&top) => {
                (self.digits.len() as u64 - 1) * u64::from(WORD_BITS) + u64::from(word_bit_len(top))
            }
        }
    }

    /// Number of consecutive zero bits from the least significant end;
    /// 0 for zero.
    #[must_use]
    pub fn trailing_zeros(&self) -> u64 {
        for (i, &w) in self.digits.iter().enumerate() {
            if w != 0 {
                return i as u64 * u64::from(WORD_BITS) + u64::from(w.trailing_zeros());
            }
        }
        0
    }

    /// Returns the bit at position `i`.
    #[must_use]
    pub fn bit(&self, i: u64) -> bool {
        let (w, b) = split_bit_index(i);
        self.digits.get(w).map_or(false, |&d| (d >> b) & 1 == 1)
    }

    /// Sets or clears the bit at position `i`.
    pub fn set_bit(&mut self, i: u64, value: bool) {
        let (w, b) = split_bit_index(i);
        if value {
            if w >= self.digits.len() {
                self.digits.resize(w + 1, 0);
            }
            self.digits[w] |= 1 << b;
        } else if w < self.digits.len() {
            self.digits[w] &= !(1 << b);
            self.normalize();
        }
    }

    /// Returns true if any of the `n` least significant bits is set.
    #[must_use]
    pub fn sticky(&self, n: u64) -> bool {
        let (w, b) = split_bit_index(n);
        let full = w.min(self.digits.len());
        if self.digits[..full].iter().any(|&d| d != 0) {
            return true;
        }
        b != 0 && w < self.digits.len() && self.digits[w] & ((1 << b) - 1) != 0
    }

    /// Returns `self - other`, or `None` if `other > self`.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if cmp_slices(&self.digits, &other.digits) == Ordering::Less {
            return None;
        }
        let mut z = self.digits.clone();
        let borrow = arith::sub_assign(&mut z, &other.digits);
        debug_assert_eq!(borrow, 0);
        Some(Self::from_digits(z))
    }

    /// Returns `|self - other|` and whether `self < other`.
    #[must_use]
    pub fn abs_diff(&self, other: &Self) -> (Self, bool) {
        match cmp_slices(&self.digits, &other.digits) {
            Ordering::Less => (other - self, true),
            _ => (self - other, false),
        }
    }

    /// Returns `self + w`.
    #[must_use]
    pub fn add_word(&self, w: Word) -> Self {
        let mut z = self.digits.clone();
        let carry = arith::add_word_assign(&mut z, w);
        if carry != 0 {
            z.push(carry);
        }
        Self::from_digits(z)
    }

    /// Returns `self - w`.
    ///
    /// # Panics
    ///
    /// Panics if `w > self`.
    #[must_use]
    pub fn sub_word(&self, w: Word) -> Self {
        let mut z = self.digits.clone();
        let borrow = arith::sub_word_assign(&mut z, w);
        assert!(borrow == 0, "natural number subtraction underflow");
        Self::from_digits(z)
    }

    /// Returns `self * w`.
    #[must_use]
    pub fn mul_word(&self, w: Word) -> Self {
        if w == 0 || self.is_empty() {
            return Self::new();
        }
        let mut z: Digits = smallvec::smallvec![0; self.digits.len() + 1];
        let n = self.digits.len();
        z[n] = arith::mul_add_word(&mut z[..n], &self.digits, w);
        Self::from_digits(z)
    }

    /// Returns `self^e`.
    #[must_use]
    pub fn pow(&self, mut e: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = base.sqr();
            }
        }
        result
    }

    /// Returns `self^2`.
    #[must_use]
    pub fn sqr(&self) -> Self {
        self * self
    }

    /// Returns `floor(sqrt(self))`, computed by Newton iteration from an
    /// overestimate.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        if self.bit_len() <= 1 {
            return self.clone();
        }
        // 2^ceil(bits/2) > sqrt(self); Newton decreases monotonically from above.
        let mut x = Self::power_of_two(self.bit_len().div_ceil(2));
        loop {
            let y = (&(self / &x) + &x) >> 1;
            if y >= x {
                return x;
            }
            x = y;
        }
    }

    /// Greatest common divisor by the Euclidean algorithm. `gcd(0, 0) = 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        if a < b {
            std::mem::swap(&mut a, &mut b);
        }
        while !b.is_empty() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    pub(crate) fn normalize(&mut self) {
        let n = normalized_len(&self.digits);
        self.digits.truncate(n);
    }
}

#[inline]
fn split_bit_index(i: u64) -> (usize, u32) {
    let bits = u64::from(WORD_BITS);
    ((i / bits) as usize, (i % bits) as u32)
}

impl Zero for Nat {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for Nat {
    fn one() -> Self {
        Self::from_word(1)
    }

    fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 1
    }
}

impl Ord for Nat {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_slices(&self.digits, &other.digits)
    }
}

impl PartialOrd for Nat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nat({})", self.to_str_radix(10))
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_str_radix(10))
    }
}

impl From<u64> for Nat {
    fn from(value: u64) -> Self {
        Self::from_word(value)
    }
}

impl From<u32> for Nat {
    fn from(value: u32) -> Self {
        Self::from_word(Word::from(value))
    }
}

impl From<u128> for Nat {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}
