//! Property-based tests for rational numbers.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    // Strategy for generating rationals with small parts
    fn small_rational() -> impl Strategy<Value = Rational> {
        (-1000i64..1000i64, 1i64..1000i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    // Strategy for generating non-zero rationals
    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        small_rational().prop_filter("non-zero", |r| !r.is_zero())
    }

    fn is_reduced(r: &Rational) -> bool {
        if r.is_zero() {
            return r.denominator().is_one();
        }
        r.denominator().is_positive() && r.numerator().abs().gcd(r.denominator()).is_one()
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_reduced(n in any::<i64>(), d in any::<i64>()) {
            prop_assume!(d != 0);
            prop_assert!(is_reduced(&Rational::from_i64(n, d)));
        }

        #[test]
        fn results_are_reduced(a in small_rational(), b in non_zero_rational()) {
            prop_assert!(is_reduced(&(&a + &b)));
            prop_assert!(is_reduced(&(&a - &b)));
            prop_assert!(is_reduced(&(&a * &b)));
            prop_assert!(is_reduced(&(&a / &b)));
        }

        // Field axioms

        #[test]
        fn rational_add_commutative(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_distributive(a in small_rational(), b in small_rational(), c in small_rational()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn rational_multiplicative_inverse(a in non_zero_rational()) {
            prop_assert!((&a * &a.recip()).is_one());
            prop_assert_eq!(&(&a / &a.recip()), &(&a * &a));
        }

        #[test]
        fn rational_sub_then_add(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(&(&a - &b) + &b, a);
        }

        // Ordering

        #[test]
        fn cmp_matches_difference_sign(a in small_rational(), b in small_rational()) {
            let diff = &a - &b;
            prop_assert_eq!(a.cmp(&b), diff.sign().cmp(&0));
        }

        #[test]
        fn floor_bounds(a in small_rational()) {
            let floor = Rational::from_integer(a.floor());
            prop_assert!(floor <= a);
            prop_assert!(a < &floor + &Rational::one());
        }

        // Conversions

        #[test]
        fn f64_roundtrip(x in any::<f64>()) {
            prop_assume!(x.is_finite());
            let r = Rational::from_f64(x).unwrap();
            let (back, exact) = r.to_f64();
            prop_assert!(exact);
            prop_assert_eq!(back, x);
        }

        #[test]
        fn text_roundtrip(a in small_rational()) {
            prop_assert_eq!(a.rat_string().parse::<Rational>().unwrap(), a.clone());
            prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
        }
    }
}
