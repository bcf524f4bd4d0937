//! Property-based tests for floating point numbers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Accuracy, Float, RoundingMode};

    // Normal doubles of moderate magnitude, either sign
    fn normal_f64() -> impl Strategy<Value = f64> {
        (any::<bool>(), 1u64..(1 << 52), -200i32..200).prop_map(|(neg, frac, exp)| {
            let x = (1.0 + frac as f64 / (1u64 << 52) as f64) * 2f64.powi(exp);
            if neg {
                -x
            } else {
                x
            }
        })
    }

    fn normal_f32() -> impl Strategy<Value = f32> {
        (any::<bool>(), 1u32..(1 << 23), -40i32..40).prop_map(|(neg, frac, exp)| {
            let x = (1.0 + frac as f32 / (1u32 << 23) as f32) * 2f32.powi(exp);
            if neg {
                -x
            } else {
                x
            }
        })
    }

    type SetOp = fn(&mut Float, &Float, &Float) -> Result<Accuracy, crate::ErrNaN>;

    fn apply(prec: u32, mode: RoundingMode, x: &Float, y: &Float, op: SetOp) -> (Float, Accuracy) {
        let mut z = Float::with_prec_and_mode(prec, mode);
        let acc = op(&mut z, x, y).unwrap();
        (z, acc)
    }

    fn f(x: f64) -> Float {
        Float::from_f64(x).unwrap()
    }

    proptest! {
        // Agreement with hardware arithmetic at matching precision

        #[test]
        fn add_sub_match_f64(a in normal_f64(), b in normal_f64()) {
            let (x, y) = (f(a), f(b));
            let (sum, _) = apply(53, RoundingMode::ToNearestEven, &x, &y, Float::set_add);
            prop_assert_eq!(sum.to_f64().0, a + b);
            let (diff, _) = apply(53, RoundingMode::ToNearestEven, &x, &y, Float::set_sub);
            prop_assert_eq!(diff.to_f64().0, a - b);
        }

        #[test]
        fn mul_quo_match_f64(a in normal_f64(), b in normal_f64()) {
            let (x, y) = (f(a), f(b));
            let (prod, _) = apply(53, RoundingMode::ToNearestEven, &x, &y, Float::set_mul);
            prop_assert_eq!(prod.to_f64().0, a * b);
            let (quo, _) = apply(53, RoundingMode::ToNearestEven, &x, &y, Float::set_quo);
            prop_assert_eq!(quo.to_f64().0, a / b);
        }

        #[test]
        fn sqrt_matches_f64(a in normal_f64()) {
            let a = a.abs();
            let mut z = Float::with_prec(53);
            z.set_sqrt(&f(a)).unwrap();
            prop_assert_eq!(z.to_f64().0, a.sqrt());
        }

        #[test]
        fn arith_matches_f32(a in normal_f32(), b in normal_f32()) {
            let mut x = Float::with_prec(24);
            x.set_f32(a).unwrap();
            let mut y = Float::with_prec(24);
            y.set_f32(b).unwrap();
            let (sum, _) = apply(24, RoundingMode::ToNearestEven, &x, &y, Float::set_add);
            prop_assert_eq!(sum.to_f32().0, a + b);
            let (prod, _) = apply(24, RoundingMode::ToNearestEven, &x, &y, Float::set_mul);
            prop_assert_eq!(prod.to_f32().0, a * b);
            let (quo, _) = apply(24, RoundingMode::ToNearestEven, &x, &y, Float::set_quo);
            prop_assert_eq!(quo.to_f32().0, a / b);
        }

        // Rounding

        #[test]
        fn accuracy_reflects_exact_result(a in normal_f64(), b in normal_f64(), prec in 2u32..60) {
            let (x, y) = (f(a), f(b));
            let (exact, acc) = apply(128, RoundingMode::ToNearestEven, &x, &y, Float::set_mul);
            prop_assert_eq!(acc, Accuracy::Exact);
            for mode in RoundingMode::ALL {
                let (z, acc) = apply(prec, mode, &x, &y, Float::set_mul);
                prop_assert_eq!(acc, match z.cmp(&exact) {
                    std::cmp::Ordering::Less => Accuracy::Below,
                    std::cmp::Ordering::Equal => Accuracy::Exact,
                    std::cmp::Ordering::Greater => Accuracy::Above,
                });
            }
        }

        #[test]
        fn rounding_is_monotonic(
            a in normal_f64(), b in normal_f64(), c in normal_f64(), d in normal_f64(),
            prec in 1u32..60,
        ) {
            // Products are exact at 128 bits.
            let (x, _) = apply(128, RoundingMode::ToNearestEven, &f(a), &f(b), Float::set_mul);
            let (y, _) = apply(128, RoundingMode::ToNearestEven, &f(c), &f(d), Float::set_mul);
            let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
            for mode in RoundingMode::ALL {
                let mut lo_r = Float::with_prec_and_mode(prec, mode);
                lo_r.assign(&lo);
                let mut hi_r = Float::with_prec_and_mode(prec, mode);
                hi_r.assign(&hi);
                prop_assert!(lo_r <= hi_r, "{:?} {:?} {}", lo, hi, mode);
            }
        }

        #[test]
        fn directed_modes_bracket(a in normal_f64(), b in normal_f64(), prec in 2u32..60) {
            let (x, y) = (f(a), f(b));
            let (down, _) = apply(prec, RoundingMode::ToNegativeInf, &x, &y, Float::set_quo);
            let (up, _) = apply(prec, RoundingMode::ToPositiveInf, &x, &y, Float::set_quo);
            let (near, _) = apply(prec, RoundingMode::ToNearestEven, &x, &y, Float::set_quo);
            let (zero, _) = apply(prec, RoundingMode::ToZero, &x, &y, Float::set_quo);
            prop_assert!(down <= near && near <= up);
            prop_assert!(zero.cmp_abs(&near).is_le());
            prop_assert!(near.min_prec() <= u64::from(prec));
        }

        // Text

        #[test]
        fn shortest_text_round_trips(a in normal_f64()) {
            let x = f(a);
            let text = x.to_string();
            let (back, _) = Float::parse(&text, 0, 53, RoundingMode::ToNearestEven).unwrap();
            prop_assert_eq!(back, x);
            prop_assert_eq!(text.parse::<f64>().unwrap(), a);
        }

        #[test]
        fn hex_text_is_exact(a in normal_f64()) {
            let x = f(a);
            let (back, acc) = Float::parse(&x.to_text('p', None), 0, 53, RoundingMode::ToNearestEven).unwrap();
            prop_assert_eq!(acc, Accuracy::Exact);
            prop_assert_eq!(back, x);
        }
    }
}
