use num_traits::One;
use paste::paste;

mod integer_power_known {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $x:literal ^ $y:literal, $scale:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let x: BigDecimal = $x.parse().unwrap();
                    let value = integer_power(&x, $y, $scale);
                    let expected: BigDecimal = $expected.parse().unwrap();
                    assert_eq!(value, expected);
                    assert_eq!(value.as_bigint_and_exponent().1, $scale);
                }
            }
        };
    }

    impl_case!(b2_10: "2" ^ 10, 0 => "1024");
    impl_case!(b2_n2: "2" ^ -2, 4 => "0.2500");
    impl_case!(b1d5_3: "1.5" ^ 3, 3 => "3.375");
    impl_case!(bn3_3: "-3" ^ 3, 1 => "-27.0");
    impl_case!(bn3_4: "-3" ^ 4, 0 => "81");
    impl_case!(b7_0: "7" ^ 0, 2 => "1.00");
    impl_case!(b0_5: "0" ^ 5, 2 => "0.00");
    impl_case!(b4_n1: "4" ^ -1, 3 => "0.250");
    impl_case!(b3_n1: "3" ^ -1, 6 => "0.333333");

    #[test]
    fn euler_constant_squared() {
        let value = integer_power(constants::e(), 2, 20);
        let expected: BigDecimal = "7.38905609893065022723".parse().unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    #[should_panic(expected = "zero raised to a negative power")]
    fn zero_to_negative_panics() {
        integer_power(&BigDecimal::zero(), -1, 4);
    }
}

mod pow_known {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $x:literal ^ $y:literal, $scale:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let x: BigDecimal = $x.parse().unwrap();
                    let y: BigDecimal = $y.parse().unwrap();
                    let value = pow(&x, &y, $scale).unwrap();
                    let expected: BigDecimal = $expected.parse().unwrap();
                    assert_eq!(value, expected);
                }
            }
        };
    }

    impl_case!(b2_10: "2" ^ "10", 0 => "1024");
    impl_case!(b2_0d5: "2" ^ "0.5", 10 => "1.4142135624");
    impl_case!(b4_n0d5: "4" ^ "-0.5", 10 => "0.5000000000");
    impl_case!(bn2_3: "-2" ^ "3", 4 => "-8.0000");
    impl_case!(b1d5_2: "1.5" ^ "2", 4 => "2.2500");
    impl_case!(b10_n2: "10" ^ "-2", 5 => "0.01000");
    impl_case!(bn3_n3: "-3" ^ "-3", 6 => "-0.037037");
    impl_case!(b0d5_100: "0.5" ^ "100", 40 => "0.0000000000000000000000000000007888609052");
    impl_case!(b2_0d333: "2" ^ "0.333", 8 => "1.25962998");
    impl_case!(b7d25_3d5: "7.25" ^ "3.5", 6 => "1026.084254");
    impl_case!(bn1d1_2: "-1.1" ^ "2", 3 => "1.210");
    impl_case!(bn2_2d00: "-2" ^ "2.00", 2 => "4.00");
}

mod pow_special {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn zero_to_zero_is_one() {
        assert_eq!(pow(&dec("0"), &dec("0"), 3).unwrap(), BigDecimal::one());
    }

    #[test]
    fn zero_to_positive_is_zero() {
        assert_eq!(pow(&dec("0"), &dec("2.5"), 3).unwrap(), BigDecimal::zero());
    }

    #[test]
    fn zero_to_negative_is_error() {
        assert_eq!(
            pow(&dec("0"), &dec("-1"), 3),
            Err(MathError::ZeroToNegativePower { exponent: dec("-1") })
        );
    }

    #[test]
    fn anything_to_zero_is_one() {
        for x in &["3", "-3", "0.001", "123456.789"] {
            assert_eq!(pow(&dec(x), &dec("0"), 6).unwrap(), BigDecimal::one(), "{}^0", x);
        }
    }

    #[test]
    fn negative_to_fraction_is_error() {
        assert_eq!(
            pow(&dec("-2"), &dec("0.5"), 3),
            Err(MathError::NegativeToNonIntegerPower { base: dec("-2"), exponent: dec("0.5") })
        );
    }

    #[test]
    fn huge_result_is_error() {
        match pow(&dec("10"), &dec("1000"), 2) {
            Err(MathError::ArgumentTooLarge { operation, max, .. }) => {
                assert_eq!(operation, "pow");
                assert_eq!(max, MAX_PRECISION);
            }
            other => panic!("expected ArgumentTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn tiny_base_huge_exponent_is_error() {
        match pow(&dec("0.5"), &dec("1e20"), 10) {
            Err(MathError::ArgumentTooLarge { operation, .. }) => assert_eq!(operation, "pow"),
            other => panic!("expected ArgumentTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn large_base_huge_negative_exponent_is_error() {
        match pow(&dec("10"), &dec("-1e20"), 10) {
            Err(MathError::ArgumentTooLarge { operation, .. }) => assert_eq!(operation, "pow"),
            other => panic!("expected ArgumentTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn near_one_base_huge_exponent_is_error() {
        // 0.999 has no integer digits but 0.999^1e9 is around 10^-434000
        assert!(matches!(
            pow(&dec("0.999"), &dec("1e9"), 10),
            Err(MathError::ArgumentTooLarge { .. })
        ));
    }

    #[test]
    fn tiny_result_rounds_to_zero() {
        // 0.5^1000 is about 9.3e-302
        assert_eq!(pow(&dec("0.5"), &dec("1000"), 10).unwrap(), BigDecimal::zero());
        assert_eq!(pow(&dec("0.9"), &dec("100"), 6).unwrap(), dec("0.000027"));
    }

    #[test]
    fn same_operand_twice() {
        let x = dec("3");
        assert_eq!(pow(&x, &x, 4).unwrap(), dec("27.0000"));
    }
}
