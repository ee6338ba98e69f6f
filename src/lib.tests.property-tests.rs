// Property tests to be included by lib.rs


mod roots {
    use super::*;

    proptest! {
        #[test]
        fn sqrt_squares_back(m in 0u64..u64::MAX, e in -20i64..20) {
            let n = BigDecimal::new(m.into(), e);
            let scale = 20 + e.max(0);
            let root = sqrt(&n, scale);

            // |root^2 - n| <= 2 * root * 10^-scale, plus the square of that
            let tolerance = (&root * BigDecimal::from(3) + BigDecimal::from(1)) * BigDecimal::new(1.into(), scale);
            let diff = (&root * &root - &n).abs();
            prop_assert!(diff <= tolerance, "sqrt({}) = {}", n, root);
        }

        #[test]
        fn cbrt_is_odd(m in any::<i64>(), e in -12i64..12) {
            let n = BigDecimal::new(m.into(), e);
            prop_assert_eq!(cbrt(&-n.clone(), 10), -cbrt(&n, 10));
        }

        #[test]
        fn cbrt_cubes_back(m in 1u32..u32::MAX, e in -6i64..6) {
            let n = BigDecimal::new(m.into(), e);
            let root = cbrt(&n, 24);
            let cubed = &root * &root * &root;
            let relative = div_round(&(cubed - &n).abs(), &n, 30, RoundingMode::HalfUp);
            prop_assert!(relative < BigDecimal::new(1.into(), 18), "cbrt({}) = {}", n, root);
        }
    }
}

mod logarithms {
    use super::*;

    proptest! {
        #[test]
        fn ln_undoes_exp(m in -30_000i64..50_000) {
            // -30 <= n < 50, where exp(n) keeps enough digits at scale 30
            let n = BigDecimal::new(m.into(), 3);
            let back = ln(&exp(&n, 30), 20).unwrap();
            let diff = (back - &n).abs();
            prop_assert!(diff <= BigDecimal::new(1.into(), 15), "ln(exp({})) off by {}", n, diff);
        }

        #[test]
        fn ln_rejects_non_positive(m in i64::MIN..=0, e in -10i64..10) {
            let n = BigDecimal::new(m.into(), e);
            let is_non_positive_error = matches!(ln(&n, 10), Err(MathError::NonPositiveLogarithm { .. }));
            prop_assert!(is_non_positive_error);
        }

        #[test]
        fn log10_of_powers_of_ten(p in -40i64..40) {
            let n = BigDecimal::new(1.into(), -p);
            prop_assert_eq!(log10(&n, 8).unwrap(), BigDecimal::from(p));
        }
    }
}

mod powers {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< modulo_matches_ $t _remainder >](a in any::<$t>(), b in any::<$t>()) {
                    prop_assume!(b != 0);
                    let r = modulo(&BigDecimal::from(a), &BigDecimal::from(b));
                    prop_assert_eq!(r, BigDecimal::from(a.wrapping_rem(b)));
                }
            } }
        };
    }

    impl_test!(i8);
    impl_test!(i32);
    impl_test!(i64);

    proptest! {
        #[test]
        fn anything_to_the_zero_is_one(m in any::<i64>(), e in -30i64..30) {
            prop_assume!(m != 0);
            let x = BigDecimal::new(m.into(), e);
            prop_assert_eq!(pow(&x, &BigDecimal::zero(), 10).unwrap(), BigDecimal::from(1));
        }

        #[test]
        fn zero_to_positive_is_zero(m in 1i64..i64::MAX, e in -5i64..5) {
            let y = BigDecimal::new(m.into(), e);
            prop_assert_eq!(pow(&BigDecimal::zero(), &y, 10).unwrap(), BigDecimal::zero());
        }

        #[test]
        fn negative_base_fraction_exponent_fails(m in i64::MIN..0, f in 1i64..10) {
            let x = BigDecimal::from(m);
            let y = BigDecimal::new(f.into(), 1);
            let is_complex_error = matches!(pow(&x, &y, 5), Err(MathError::NegativeToNonIntegerPower { .. }));
            prop_assert!(is_complex_error);
        }

        #[test]
        fn integer_pow_matches_integer_power(b in -30i64..30, p in 0i64..8) {
            prop_assume!(b != 0);
            let x = BigDecimal::from(b);
            let expected = integer_power(&x, p, 0);
            prop_assert_eq!(pow(&x, &BigDecimal::from(p), 0).unwrap(), expected);
        }
    }
}
