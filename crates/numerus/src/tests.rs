//! Cross-crate tests for numerus.

#[cfg(test)]
mod integration_tests {
    use num_traits::{One, Zero};

    use crate::prelude::*;

    fn int(s: &str) -> Integer {
        s.parse().unwrap()
    }

    #[test]
    fn test_shift_across_words() {
        let big = Integer::from(1u64) << 128;
        assert_eq!(&big >> 64, Integer::from(1u128 << 64));
        assert_eq!(big.bit_len(), 129);
        assert_eq!(big.to_string(), "340282366920938463463374607431768211456");
    }

    #[test]
    fn test_rational_sum_is_reduced() {
        let sum = &Rational::from_i64(1, 3) + &Rational::from_i64(1, 6);
        assert_eq!(sum, Rational::from_i64(1, 2));
        assert_eq!(sum.numerator(), &Integer::new(1));
        assert_eq!(sum.denominator(), &Integer::new(2));
    }

    #[test]
    fn test_float_sum_prints_binary_error() {
        let x = Float::from_f64(0.1).unwrap();
        let y = Float::from_f64(0.2).unwrap();
        let mut z = Float::with_prec(53);
        assert_eq!(z.set_add(&x, &y), Ok(Accuracy::Above));
        assert_eq!(z.to_text('g', Some(17)), "0.30000000000000004");
    }

    #[test]
    fn test_mod_sqrt() {
        let p = Integer::new(7);
        let r = Integer::new(4).mod_sqrt(&p).unwrap();
        assert_eq!((&r * &r).rem_euclid(&p), Integer::new(4));
        assert!(Integer::new(3).mod_sqrt(&p).is_none());
    }

    #[test]
    fn test_euclidean_division_law() {
        for (a, b) in [(7, 3), (-7, 3), (7, -3), (-7, -3), (0, 5), (6, -3)] {
            let (a, b) = (Integer::new(a), Integer::new(b));
            let q = a.div_euclid(&b);
            let r = a.rem_euclid(&b);
            assert_eq!(&(&q * &b) + &r, a);
            assert!(!r.is_negative() && r < b.abs());
        }
    }

    #[test]
    fn test_bezout_identity() {
        let (a, b) = (Integer::new(240), Integer::new(46));
        let (g, x, y) = a.extended_gcd(&b).unwrap();
        assert_eq!(g, Integer::new(2));
        assert_eq!(&(&a * &x) + &(&b * &y), g);
        let inv = Integer::new(3).mod_inverse(&Integer::new(11)).unwrap();
        assert_eq!(inv, Integer::new(4));
    }

    #[test]
    fn test_primality_tables() {
        let mersenne_89 = &Integer::new(2).pow(89) - &Integer::one();
        for p in [int("2"), int("3"), int("2305843009213693951"), mersenne_89] {
            assert!(p.probably_prime(20), "{p}");
        }
        for c in [int("0"), int("1"), int("561"), int("3215031751"), int("-7")] {
            assert!(!c.probably_prime(20), "{c}");
        }
    }

    #[test]
    fn test_radix_round_trip() {
        let x = int("-123456789012345678901234567890");
        for base in [2, 8, 10, 16, 36] {
            let text = x.to_str_radix(base);
            assert_eq!(Integer::from_str_radix(&text, base).unwrap(), x, "base {base}");
        }
        assert_eq!(int("0x_ff"), Integer::new(255));
    }

    #[test]
    fn test_float_from_exact_types() {
        let third = Rational::from_i64(1, 3);
        let mut z = Float::with_prec(10);
        assert_eq!(z.set_rat(&third), Accuracy::Above);
        let back = z.to_rational().unwrap();
        assert!(back > third);

        let big = Integer::new(10).pow(30);
        let x = Float::from(&big);
        assert!(x.prec() >= 100);
        assert_eq!(x.to_integer(), Some((big, Accuracy::Exact)));

        let neg_zero = Float::from_f64(-0.0).unwrap();
        assert!(neg_zero.to_integer().unwrap().0.is_zero());
    }

    #[test]
    fn test_parse_errors_share_one_type() {
        let err: ParseNumberError = "12x".parse::<Integer>().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidDigit);
        let err: ParseNumberError = "1/0".parse::<Rational>().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ZeroDenominator);
        let err: ParseNumberError = "1.5q".parse::<Float>().unwrap_err();
        assert_eq!(err.offset, 3);
    }
}
