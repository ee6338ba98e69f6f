//! Scale-rounding routines
//!
//! `BigDecimal` supplies exact addition, subtraction and multiplication,
//! and rescaling with a rounding mode. The elementary functions also need
//! a division that stops at a fixed number of fractional digits; that is
//! built here on the unscaled integers.

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// Return 10^pow
pub(crate) fn ten_to_the(pow: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), pow as usize)
}

/// Return `x` with exactly `scale` digits after the decimal point
///
/// Digits are dropped using the rounding mode, or zeros appended if the
/// new scale is larger. Rounding a value that is already at `scale` is
/// a no-op.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::{round_to_scale, RoundingMode};
///
/// let n: BigDecimal = "-0.05".parse().unwrap();
/// assert_eq!(round_to_scale(&n, 1, RoundingMode::HalfUp).to_string(), "-0.1");
/// assert_eq!(round_to_scale(&n, 1, RoundingMode::HalfEven).to_string(), "0.0");
/// assert_eq!(round_to_scale(&n, 3, RoundingMode::Down).to_string(), "-0.050");
/// ```
pub fn round_to_scale(x: &BigDecimal, scale: i64, mode: RoundingMode) -> BigDecimal {
    x.with_scale_round(scale, mode)
}

/// Divide `x` by `y`, producing a quotient with exactly `scale` digits
/// after the decimal point
///
/// Panics if `y` is zero.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::{div_round, RoundingMode};
///
/// let q = div_round(&BigDecimal::from(2), &BigDecimal::from(3), 4, RoundingMode::HalfUp);
/// assert_eq!(q, "0.6667".parse::<BigDecimal>().unwrap());
/// ```
pub fn div_round(x: &BigDecimal, y: &BigDecimal, scale: i64, mode: RoundingMode) -> BigDecimal {
    let (num, x_scale) = x.as_bigint_and_exponent();
    let (den, y_scale) = y.as_bigint_and_exponent();
    assert!(!den.is_zero(), "division by zero: {} / {}", x, y);

    // x / y = (num / den) * 10^(y_scale - x_scale); shift so the truncated
    // integer quotient carries one digit past the requested scale
    let shift = scale as i128 + 1 + y_scale as i128 - x_scale as i128;
    let (num, den) = if shift >= 0 {
        (num * ten_to_the(shift as u64), den)
    } else {
        (num, den * ten_to_the(shift.unsigned_abs() as u64))
    };

    let (quotient, remainder) = num.div_rem(&den);

    // append a sticky digit: 1 (with the quotient's sign) if anything was
    // discarded, so ties and "just past a tie" stay distinguishable
    let mut quotient = quotient * 10u8;
    if !remainder.is_zero() {
        if num.sign() == den.sign() {
            quotient += 1u8;
        } else {
            quotient -= 1u8;
        }
    }

    BigDecimal::new(quotient, scale + 2).with_scale_round(scale, mode)
}




#[cfg(test)]
mod test_div_round {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $x:literal / $y:literal @ $scale:literal, $mode:ident => $expected:literal) => {
            #[test]
            fn $name() {
                let x: BigDecimal = $x.parse().unwrap();
                let y: BigDecimal = $y.parse().unwrap();
                let q = div_round(&x, &y, $scale, RoundingMode::$mode);
                let expected: BigDecimal = $expected.parse().unwrap();
                assert_eq!(q, expected);
                assert_eq!(q.as_bigint_and_exponent().1, $scale);
            }
        };
    }

    impl_case!(case_2_over_3: "2" / "3" @ 4, HalfUp => "0.6667");
    impl_case!(case_2_over_3_down: "2" / "3" @ 4, Down => "0.6666");
    impl_case!(case_n2_over_3: "-2" / "3" @ 4, HalfUp => "-0.6667");
    impl_case!(case_n7_over_3_trunc: "-7" / "3" @ 0, Down => "-2");
    impl_case!(case_7_over_n3_trunc: "7" / "-3" @ 0, Down => "-2");
    impl_case!(case_1_over_8: "1" / "8" @ 2, HalfUp => "0.13");
    impl_case!(case_1_over_8_even: "1" / "8" @ 2, HalfEven => "0.12");
    impl_case!(case_scaled_operands: "0.0144" / "1.2" @ 3, HalfUp => "0.012");
    impl_case!(case_large_divisor_scale: "5" / "0.00025" @ 1, HalfUp => "20000.0");
    impl_case!(case_negative_scale: "12345" / "1" @ -2, HalfUp => "12300");
    impl_case!(case_below_tie_even: "0.1249" / "1" @ 2, HalfEven => "0.12");
    impl_case!(case_below_tie_half_up: "1.2499999" / "1" @ 1, HalfUp => "1.2");
    impl_case!(case_past_tie_even: "1.25000001" / "1" @ 1, HalfEven => "1.3");
    impl_case!(case_past_tie_down: "1.25000001" / "1" @ 1, HalfDown => "1.3");
    impl_case!(case_exact_tie_down: "1" / "8" @ 2, HalfDown => "0.12");
    impl_case!(case_third_up: "1" / "3" @ 2, Up => "0.34");
    impl_case!(case_tiny_negative_ceiling: "-1" / "3000" @ 1, Ceiling => "0.0");
    impl_case!(case_tiny_negative_floor: "-1" / "3000" @ 1, Floor => "-0.1");
    impl_case!(case_tiny_positive_up: "1" / "3000" @ 1, Up => "0.1");
    impl_case!(case_negative_sticky_half_up: "-1" / "-3" @ 0, HalfUp => "0");

    #[test]
    #[should_panic(expected = "division by zero")]
    fn divide_by_zero_panics() {
        div_round(&BigDecimal::from(1), &BigDecimal::from(0), 2, RoundingMode::HalfUp);
    }

    #[test]
    fn ten_to_the_matches_repeated_multiplication() {
        let mut n = BigInt::from(1);
        for pow in 0..700u64 {
            assert_eq!(ten_to_the(pow), n);
            n *= 10u8;
        }
    }
}
