//! Property-based tests for the digit vector engine.
//!
//! Large-operand results are checked against `dashu` as an independent
//! reference implementation.

#[cfg(test)]
mod tests {
    use dashu::integer::UBig;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Nat;

    // Strategy for generating naturals of up to `max_words` words
    fn nat(max_words: usize) -> impl Strategy<Value = Nat> {
        prop::collection::vec(any::<u64>(), 0..=max_words).prop_map(|w| Nat::from_words(&w))
    }

    // Strategy for generating non-zero naturals
    fn non_zero_nat(max_words: usize) -> impl Strategy<Value = Nat> {
        nat(max_words).prop_filter("non-zero", |n| !n.is_zero())
    }

    fn reference(n: &Nat) -> UBig {
        UBig::from_be_bytes(&n.to_bytes_be())
    }

    proptest! {
        // Ring laws

        #[test]
        fn nat_add_commutative(a in nat(6), b in nat(6)) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn nat_add_sub_inverse(a in nat(6), b in nat(6)) {
            let sum = &a + &b;
            prop_assert_eq!(&sum - &b, a);
        }

        #[test]
        fn nat_distributive(a in nat(4), b in nat(4), c in nat(4)) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn nat_division_law(a in nat(8), b in non_zero_nat(4)) {
            let (q, r) = a.div_rem(&b);
            prop_assert!(r < b);
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn nat_shift_is_power_of_two_product(a in nat(4), s in 0u64..300) {
            let shifted = a.shl_bits(s);
            prop_assert_eq!(&shifted, &(&a * &Nat::power_of_two(s)));
            prop_assert_eq!(shifted.shr_bits(s), a);
        }

        #[test]
        fn nat_sqrt_brackets(a in nat(5)) {
            let s = a.sqrt();
            prop_assert!(s.sqr() <= a);
            prop_assert!(s.add_word(1).sqr() > a);
        }

        #[test]
        fn nat_radix_roundtrip(a in nat(5), base in 2u32..=36) {
            let text = a.to_str_radix(base);
            prop_assert_eq!(Nat::from_str_radix(&text, base).unwrap(), a);
        }

        #[test]
        fn nat_bytes_roundtrip(a in nat(5)) {
            prop_assert_eq!(Nat::from_bytes_be(&a.to_bytes_be()), a);
        }

        // Differential checks against dashu

        #[test]
        fn nat_mul_matches_reference(a in nat(100), b in nat(100)) {
            let ours = &a * &b;
            let theirs = &reference(&a) * &reference(&b);
            prop_assert_eq!(ours.to_str_radix(10), theirs.to_string());
        }

        #[test]
        fn nat_div_matches_reference(a in nat(60), b in non_zero_nat(30)) {
            let (q, r) = a.div_rem(&b);
            let (ra, rb) = (reference(&a), reference(&b));
            prop_assert_eq!(q.to_str_radix(10), (&ra / &rb).to_string());
            prop_assert_eq!(r.to_str_radix(10), (&ra % &rb).to_string());
        }

        #[test]
        fn nat_decimal_matches_reference(a in nat(20)) {
            prop_assert_eq!(a.to_str_radix(10), reference(&a).to_string());
        }

        #[test]
        fn nat_exp_mod_matches_reference(b in nat(3), e in nat(2), m in non_zero_nat(3)) {
            let ours = b.exp_mod(&e, &m);
            let rm = reference(&m);
            let mut expected = UBig::ONE % &rm;
            let mut base = reference(&b) % &rm;
            let mut e = e;
            while !e.is_zero() {
                if !e.is_even() {
                    expected = (&expected * &base) % &rm;
                }
                base = (&base * &base) % &rm;
                e = e.shr_bits(1);
            }
            prop_assert_eq!(ours.to_str_radix(10), expected.to_string());
        }
    }
}
