//! Truncating remainder

use crate::*;


/// Remainder of `x` divided by `y`: `x - y * trunc(x / y)`
///
/// The quotient is truncated toward zero, so the remainder carries the
/// sign of `x` (`-7 % 3 == -1`), matching `%` on the primitive integers.
/// The result has the larger of the two operand scales.
///
/// `x` and `y` may be the same value.
///
/// Panics if `y` is zero.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::modulo;
///
/// let r = modulo(&BigDecimal::from(-7), &BigDecimal::from(3));
/// assert_eq!(r, BigDecimal::from(-1));
/// ```
pub fn modulo(x: &BigDecimal, y: &BigDecimal) -> BigDecimal {
    if y.is_zero() {
        panic!("modulo by zero: {} % {}", x, y);
    }

    let quotient = div_round(x, y, 0, RoundingMode::Down);
    x - quotient * y
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $x:literal % $y:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let x: BigDecimal = $x.parse().unwrap();
                let y: BigDecimal = $y.parse().unwrap();
                let expected: BigDecimal = $expected.parse().unwrap();
                assert_eq!(modulo(&x, &y), expected);
            }
        };
    }

    impl_case!(case_7_3: "7" % "3" => "1");
    impl_case!(case_n7_3: "-7" % "3" => "-1");
    impl_case!(case_7_n3: "7" % "-3" => "1");
    impl_case!(case_n7_n3: "-7" % "-3" => "-1");
    impl_case!(case_6_3: "6" % "3" => "0");
    impl_case!(case_2_5: "2" % "5" => "2");
    impl_case!(case_5d5_2: "5.5" % "2" => "1.5");
    impl_case!(case_n5d5_2: "-5.5" % "2" => "-1.5");
    impl_case!(case_10_0d3: "10" % "0.3" => "0.1");
    impl_case!(case_1e20_7: "1e20" % "7" => "2");
    impl_case!(case_0d0001_1: "0.0001" % "1" => "0.0001");

    #[test]
    fn result_takes_larger_scale() {
        let x: BigDecimal = "7.00".parse().unwrap();
        let y: BigDecimal = "3".parse().unwrap();
        assert_eq!(modulo(&x, &y).as_bigint_and_exponent().1, 2);
    }

    #[test]
    fn same_operand_twice() {
        let x: BigDecimal = "12.34".parse().unwrap();
        assert_eq!(modulo(&x, &x), BigDecimal::zero());
    }

    #[test]
    fn matches_primitive_remainder() {
        for a in -25i64..=25 {
            for b in [-7i64, -3, -1, 1, 2, 5, 9].iter() {
                let r = modulo(&BigDecimal::from(a), &BigDecimal::from(*b));
                assert_eq!(r, BigDecimal::from(a % b), "{} % {}", a, b);
            }
        }
    }

    #[test]
    #[should_panic(expected = "modulo by zero")]
    fn zero_divisor_panics() {
        modulo(&BigDecimal::from(1), &BigDecimal::zero());
    }
}
