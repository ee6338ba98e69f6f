//! Implementation of cube-root algorithm

use crate::*;


/// Cube root of `x`, rounded half-up to `scale` fractional digits
///
/// Negative values return `-cbrt(-x)`.
///
/// The estimate is refined with the Newton-Raphson recurrence
///
/// ```math
/// x_{n+1} = 1/3 * ( 2 * x_n + (d / x_n / x_n) )
/// ```
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::cbrt;
///
/// let n = BigDecimal::from(-27);
/// assert_eq!(cbrt(&n, 3), "-3.000".parse::<BigDecimal>().unwrap());
/// ```
pub fn cbrt(x: &BigDecimal, scale: i64) -> BigDecimal {
    match x.sign() {
        Sign::Minus => return -cbrt(&x.abs(), scale),
        Sign::NoSign => return BigDecimal::zero(),
        Sign::Plus => {}
    }

    let working_scale = scale + 2;

    let mut z0 = make_cbrt_guess(x);

    let mut convergence = Convergence::new("cbrt", &z0, scale, 1);
    loop {
        // z = (2 * z0 + x / (z0 * z0)) / 3
        let squared = &z0 * &z0;
        let z = div_round(x, &squared, working_scale, RoundingMode::HalfUp) + &z0 + &z0;
        let z = div_round(&z, &THREE, working_scale, RoundingMode::HalfUp);

        if convergence.converged(&z) {
            return round_to_scale(&z, scale, RoundingMode::HalfUp);
        }
        z0 = z;
    }
}

/// Initial estimate of the cube root of positive `x`
///
/// Following Ken Turkowski's "Computing the Cube Root", x is reduced to
/// z * 8^exp8 with 0.125 <= z <= 1, the cube root of z approximated by
/// a quadratic, and the result scaled back by 2^exp8. The accuracy of
/// the guess only affects how many iterations are needed.
///
fn make_cbrt_guess(x: &BigDecimal) -> BigDecimal {
    let mut z = x.clone();
    let mut exp8 = 0i64;

    while z < *ONE_EIGHTH {
        exp8 -= 1;
        z = z * &*EIGHT;
    }
    while z > *ONE {
        exp8 += 1;
        z = z * &*ONE_EIGHTH;
    }
    tracing::debug!(exp8, "cbrt range reduction");

    // (-0.46946116 * z + 1.072302) * z + 0.3812513
    let mut guess = (&z * &*CBRT_C1 + &*CBRT_C2) * &z + &*CBRT_C3;

    for _ in exp8..0 {
        guess = guess * &*HALF;
    }
    for _ in 0..exp8 {
        guess = guess * &*TWO;
    }
    guess
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $scale:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigDecimal = $input.parse().unwrap();
                let value = cbrt(&n, $scale);
                let expected: BigDecimal = $expected.parse().unwrap();
                assert_eq!(value, expected);
                assert_eq!(value.as_bigint_and_exponent().1, $scale);
            }
        };
    }

    impl_case!(case_27: "27", 5 => "3.00000");
    impl_case!(case_n8: "-8", 2 => "-2.00");
    impl_case!(case_2: "2", 10 => "1.2599210499");
    impl_case!(case_n2: "-2", 10 => "-1.2599210499");
    impl_case!(case_0d001: "0.001", 4 => "0.1000");
    impl_case!(case_1e30: "1e30", 1 => "10000000000.0");
    impl_case!(case_1en30: "1e-30", 12 => "0.000000000100");
    impl_case!(case_0d5: "0.5", 15 => "0.793700525984100");
    impl_case!(case_1: "1", 3 => "1.000");
    impl_case!(case_0d125: "0.125", 3 => "0.500");
    impl_case!(case_12345d678: "12345.678", 8 => "23.11204185");

    #[test]
    fn zero_is_zero() {
        assert_eq!(cbrt(&BigDecimal::zero(), 4), BigDecimal::zero());
    }

    #[test]
    fn guess_lands_near_root() {
        for input in &["0.2", "1", "7", "1000", "0.0000314"] {
            let n: BigDecimal = input.parse().unwrap();
            let guess = make_cbrt_guess(&n);
            let cubed = &guess * &guess * &guess;
            let ratio = div_round(&cubed, &n, 4, RoundingMode::HalfUp);
            let low: BigDecimal = "0.9".parse().unwrap();
            let high: BigDecimal = "1.1".parse().unwrap();
            assert!(low < ratio && ratio < high, "guess for {} is {}", input, guess);
        }
    }

    #[test]
    fn odd_symmetry() {
        for input in &["0.3", "5", "64.5", "123456789"] {
            let n: BigDecimal = input.parse().unwrap();
            assert_eq!(cbrt(&-n.clone(), 12), -cbrt(&n, 12));
        }
    }
}
