// Test decimal_from_float / try_decimal_from_float
// included by parsing.rs

macro_rules! impl_case {
    ($name:ident: $input:expr => $expected:literal, scale=$scale:literal) => {
        #[test]
        fn $name() {
            let f: f64 = $input;
            let d = decimal_from_float(f);
            let expected: BigDecimal = $expected.parse().unwrap();
            assert_eq!(d, expected);
            assert_eq!(d.as_bigint_and_exponent().1, $scale);

            // round trip to identical bits
            let back = float_from_decimal(&d).unwrap();
            assert_eq!(back.to_bits(), f.to_bits());
        }
    };
}

impl_case!(case_0: 0.0 => "0", scale=0);
impl_case!(case_1: 1.0 => "1", scale=0);
impl_case!(case_0d1: 0.1 => "0.1", scale=1);
impl_case!(case_n1d5: -1.5 => "-1.5", scale=1);
impl_case!(case_45En1: 4.5 => "4.5", scale=1);
impl_case!(case_123d456: 123.456 => "123.456", scale=3);
impl_case!(case_n1d2345En7: -1.2345e-7 => "-0.00000012345", scale=11);
impl_case!(case_1e20: 1e20 => "100000000000000000000", scale=-20);
impl_case!(case_1d5e300: 1.5e300 => "1.5e300", scale=-299);
impl_case!(case_5en324: 5e-324 => "5e-324", scale=324);
impl_case!(case_max: f64::MAX => "1.7976931348623157e308", scale=-292);
impl_case!(case_0d30000000000000004: 0.1 + 0.2 => "0.30000000000000004", scale=17);

#[test]
fn case_negative_zero() {
    let d = decimal_from_float(-0.0);
    assert_eq!(d, BigDecimal::from(0));
}

#[test]
#[should_panic(expected = "NaN")]
fn case_nan_panics() {
    decimal_from_float(f64::NAN);
}

#[test]
#[should_panic(expected = "infinite")]
fn case_infinity_panics() {
    decimal_from_float(f64::INFINITY);
}

#[test]
#[should_panic(expected = "infinite")]
fn case_neg_infinity_panics() {
    decimal_from_float(f64::NEG_INFINITY);
}

#[test]
fn case_try_from_nan() {
    assert!(try_decimal_from_float(f64::NAN).is_err());
}

#[test]
fn case_try_from_infinity() {
    match try_decimal_from_float(f64::INFINITY) {
        Err(MathError::NonFiniteFloat { value }) => assert!(value.is_infinite()),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn case_try_from_finite() {
    let d = try_decimal_from_float(2.25).unwrap();
    assert_eq!(d, "2.25".parse::<BigDecimal>().unwrap());
}
