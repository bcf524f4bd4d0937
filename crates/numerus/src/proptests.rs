//! Property-based tests across the integer, rational and float types.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::prelude::*;

    fn wide_int() -> impl Strategy<Value = Integer> {
        (any::<i128>(), 0u64..200).prop_map(|(x, shift)| &Integer::from(x) << shift)
    }

    proptest! {
        #[test]
        fn integer_survives_rational_and_float(x in wide_int()) {
            let r = Rational::from_integer(x.clone());
            prop_assert_eq!(r.to_integer(), Some(x.clone()));
            let f = Float::from(&r);
            prop_assert_eq!(f.to_integer(), Some((x.clone(), Accuracy::Exact)));
            prop_assert_eq!(f.to_rational(), Some(r));
        }

        #[test]
        fn native_float_agrees_across_types(a in any::<f64>()) {
            prop_assume!(a.is_finite());
            let r = Rational::from_f64(a).unwrap();
            let f = Float::from_f64(a).unwrap();
            prop_assert_eq!(f.to_rational(), Some(r.clone()));
            prop_assert_eq!(Float::from(&r), f);
            prop_assert_eq!(r.to_f64(), (a, true));
        }

        #[test]
        fn float_rounding_brackets_rational(n in -10_000i64..10_000, d in 1i64..10_000, prec in 2u32..40) {
            let r = Rational::from_i64(n, d);
            let mut down = Float::with_prec_and_mode(prec, RoundingMode::ToNegativeInf);
            let acc_down = down.set_rat(&r);
            let mut up = Float::with_prec_and_mode(prec, RoundingMode::ToPositiveInf);
            let acc_up = up.set_rat(&r);
            let (lo, hi) = (down.to_rational().unwrap(), up.to_rational().unwrap());
            prop_assert!(lo <= r && r <= hi);
            prop_assert_eq!(acc_down == Accuracy::Exact, lo == r);
            prop_assert_eq!(acc_up == Accuracy::Exact, hi == r);
        }
    }
}
