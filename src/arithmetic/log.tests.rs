// Test ln, log10 and log_n
// included by log.rs

use num_traits::One;

mod ln_known {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $scale:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigDecimal = $input.parse().unwrap();
                let value = ln(&n, $scale).unwrap();
                let expected: BigDecimal = $expected.parse().unwrap();
                assert_eq!(value, expected);
                assert_eq!(value.as_bigint_and_exponent().1, $scale);
            }
        };
    }

    impl_case!(case_2: "2", 10 => "0.6931471806");
    impl_case!(case_0d5: "0.5", 10 => "-0.6931471806");
    impl_case!(case_1: "1", 5 => "0.00000");
    impl_case!(case_10: "10", 20 => "2.30258509299404568402");
    impl_case!(case_1en50: "1e-50", 10 => "-115.1292546497");
    impl_case!(case_1e50: "1e50", 10 => "115.1292546497");
    impl_case!(case_e: "2.718281828459045", 15 => "1.000000000000000");
    impl_case!(case_123456d789: "123456.789", 15 => "11.723646487185881");
    impl_case!(case_0d9: "0.9", 20 => "-0.10536051565782630123");
    impl_case!(case_1d1: "1.1", 20 => "0.09531017980432486004");
    impl_case!(case_1en300: "1e-300", 10 => "-690.7755278982");
    impl_case!(case_1e300: "1e300", 5 => "690.77553");
    impl_case!(case_0d000001234: "0.000001234", 12 => "-13.605249632481");

    #[test]
    fn zero_is_an_error() {
        match ln(&BigDecimal::zero(), 10) {
            Err(MathError::NonPositiveLogarithm { value }) => assert!(value.is_zero()),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn negative_is_an_error() {
        let n = BigDecimal::from(-4);
        assert_eq!(ln(&n, 10), Err(MathError::NonPositiveLogarithm { value: n.clone() }));
    }

    #[test]
    fn inverse_of_e_constant() {
        let value = ln(constants::e(), 50).unwrap();
        assert_eq!(value, BigDecimal::one().with_scale(50));
    }
}

mod log10_known {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $scale:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigDecimal = $input.parse().unwrap();
                let value = log10(&n, $scale).unwrap();
                let expected: BigDecimal = $expected.parse().unwrap();
                assert_eq!(value, expected);
                assert_eq!(value.as_bigint_and_exponent().1, $scale);
            }
        };
    }

    impl_case!(case_1000: "1000", 5 => "3.00000");
    impl_case!(case_2: "2", 10 => "0.3010299957");
    impl_case!(case_0d001: "0.001", 3 => "-3.000");
    impl_case!(case_1en7: "1e-7", 8 => "-7.00000000");
    impl_case!(case_12345d6789: "12345.6789", 8 => "4.09151498");

    #[test]
    fn negative_is_an_error() {
        assert!(log10(&BigDecimal::from(-10), 4).is_err());
    }
}

mod log_n_known {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, base=$base:literal, $scale:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigDecimal = $input.parse().unwrap();
                let base: BigDecimal = $base.parse().unwrap();
                let value = log_n(&n, &base, $scale).unwrap();
                let expected: BigDecimal = $expected.parse().unwrap();
                assert_eq!(value, expected);
                assert_eq!(value.as_bigint_and_exponent().1, $scale);
            }
        };
    }

    impl_case!(case_8_base2: "8", base="2", 10 => "3.0000000000");
    impl_case!(case_81_base3: "81", base="3", 6 => "4.000000");
    impl_case!(case_2_base8: "2", base="8", 10 => "0.3333333333");
    impl_case!(case_100_base0d5: "100", base="0.5", 8 => "-6.64385619");
    impl_case!(case_2_base1d0000000001: "2", base="1.0000000001", 4 => "6931471805.9460");
    impl_case!(case_0d5_base0d999999: "0.5", base="0.999999", 8 => "693146.83398630");
    impl_case!(case_1en20_base1d001: "1e-20", base="1.001", 6 => "-46074.723875");

    #[test]
    fn same_value_for_both_arguments() {
        let n: BigDecimal = "7.5".parse().unwrap();
        assert_eq!(log_n(&n, &n, 4).unwrap(), "1.0000".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn base_one_is_an_error() {
        let base = BigDecimal::one();
        match log_n(&BigDecimal::from(10), &base, 5) {
            Err(MathError::UnitLogarithmBase { base: b }) => assert_eq!(b, base),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn base_one_with_trailing_zeros_is_an_error() {
        let base: BigDecimal = "1.000".parse().unwrap();
        assert_eq!(
            log_n(&BigDecimal::from(2), &base, 4),
            Err(MathError::UnitLogarithmBase { base: base.clone() })
        );
    }

    #[test]
    fn leading_zeros_of_base_offset() {
        let dec = |s: &str| s.parse::<BigDecimal>().unwrap();
        assert_eq!(base_zeros(&dec("1.0000000001")), 9);
        assert_eq!(base_zeros(&dec("0.999999")), 5);
        assert_eq!(base_zeros(&dec("1.10")), 0);
        assert_eq!(base_zeros(&dec("8")), 0);
        assert_eq!(base_zeros(&dec("1")), 0);
    }

    #[test]
    fn non_positive_base_is_an_error() {
        let base = BigDecimal::from(-2);
        assert_eq!(
            log_n(&BigDecimal::from(10), &base, 5),
            Err(MathError::NonPositiveLogarithm { value: base.clone() })
        );
    }

    #[test]
    fn non_positive_argument_is_an_error() {
        assert!(log_n(&BigDecimal::zero(), &BigDecimal::from(2), 5).is_err());
    }
}
