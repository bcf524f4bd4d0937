//! Property-based tests for arbitrary precision integers.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Integer;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for generating multi-word integers of either sign
    fn big_int() -> impl Strategy<Value = Integer> {
        (any::<bool>(), prop::collection::vec(any::<u8>(), 0..64))
            .prop_map(|(neg, bytes)| {
                let mag = Integer::from_bytes_be(&bytes);
                if neg { -mag } else { mag }
            })
    }

    fn reference(x: &Integer) -> IBig {
        x.to_string().parse().unwrap()
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a.clone() * (b.clone() * c.clone())
            );
        }

        #[test]
        fn integer_distributive(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn integer_additive_inverse(a in big_int()) {
            let neg_a = -a.clone();
            prop_assert!((a + neg_a).is_zero());
        }

        // Division laws

        #[test]
        fn integer_euclidean_law(x in big_int(), y in big_int()) {
            prop_assume!(!y.is_zero());
            let (q, m) = x.div_mod(&y);
            prop_assert_eq!(&(&q * &y) + &m, x);
            prop_assert!(!m.is_negative());
            prop_assert!(m.cmp_abs(&y).is_lt());
        }

        #[test]
        fn integer_truncated_law(x in big_int(), y in big_int()) {
            prop_assume!(!y.is_zero());
            let (q, r) = x.quo_rem(&y);
            prop_assert_eq!(&(&q * &y) + &r, x.clone());
            prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());
        }

        #[test]
        fn integer_div_matches_reference(x in big_int(), y in big_int()) {
            prop_assume!(!y.is_zero());
            let (q, r) = x.quo_rem(&y);
            let (rx, ry) = (reference(&x), reference(&y));
            prop_assert_eq!(q.to_string(), (&rx / &ry).to_string());
            prop_assert_eq!(r.to_string(), (&rx % &ry).to_string());
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a).abs();
            let b = Integer::new(b).abs();
            let g = a.gcd(&b);

            // g should divide both a and b
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn gcd_bezout_identity(a in big_int(), b in big_int()) {
            let (a, b) = (a.abs(), b.abs());
            prop_assume!(!a.is_zero() && !b.is_zero());
            let (g, x, y) = a.extended_gcd(&b).unwrap();
            prop_assert_eq!(&g, &a.gcd(&b));
            prop_assert_eq!(&(&a * &x) + &(&b * &y), g);
        }

        #[test]
        fn mod_inverse_is_inverse(a in big_int(), n in big_int()) {
            prop_assume!(n.bit_len() > 1);
            if let Some(inv) = a.mod_inverse(&n) {
                prop_assert!((&a * &inv).rem_euclid(&n).is_one());
            }
        }

        // Bitwise identities

        #[test]
        fn bitwise_de_morgan(a in big_int(), b in big_int()) {
            prop_assert_eq!(!&(&a & &b), &!&a | &!&b);
            prop_assert_eq!(a.and_not(&b), &a & &!&b);
        }

        #[test]
        fn shift_right_is_floor_division(a in big_int(), s in 0u64..200) {
            let pow = Integer::one() << s;
            prop_assert_eq!(&a >> s, a.div_euclid(&pow));
        }

        // Text round trips

        #[test]
        fn radix_roundtrip(a in big_int(), base in 2u32..=36) {
            let text = a.to_str_radix(base);
            prop_assert_eq!(Integer::from_str_radix(&text, base).unwrap(), a);
        }

        #[test]
        fn pow_mod_matches_repeated_multiplication(b in small_int(), e in 0u32..40, m in non_zero_int()) {
            let (b, m) = (Integer::new(b), Integer::new(m));
            let expected = b.pow(e).rem_euclid(&m);
            prop_assert_eq!(b.pow_mod(&Integer::from(e), Some(&m)), expected);
        }
    }
}
