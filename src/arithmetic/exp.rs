//! Natural exponential

use crate::*;


/// Evaluate e<sup>n</sup>, rounded half-up to `scale` fractional digits
///
/// n is split into its integer part x (truncated toward zero) and the
/// remainder y = n - x, so |y| < 1 and
///
/// ```math
/// e^n = e^x * e^y
/// ```
///
/// e^x comes from raising the constant e to an integer power by
/// squaring, carried to enough extra digits to cover the integer digits
/// of the result; e^y from its Taylor series, seeded with e^x so the
/// terms are computed at the magnitude of the result.
///
/// Panics if the integer part of `n` does not fit in an i64.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::exp;
///
/// let one = BigDecimal::from(1);
/// assert_eq!(exp(&one, 10), "2.7182818285".parse::<BigDecimal>().unwrap());
/// ```
pub fn exp(n: &BigDecimal, scale: i64) -> BigDecimal {
    let working_scale = scale + 2;

    // split n into x, its integer part, and y = n - x with |y| < 1
    let x = round_to_scale(n, 0, RoundingMode::Down);
    let y = n - &x;

    let power = x.as_bigint_and_exponent().0
                 .to_i64()
                 .unwrap_or_else(|| panic!("exponent out of range: {}", n));

    // e^x has about x * log10(e) integer digits, all of which must be
    // correct before the fractional digits can be
    let integer_digits = if power > 0 {
        (power as f64 * std::f64::consts::LOG10_E).ceil() as i64
    } else {
        0
    };

    let ex = integer_power(constants::e(), power, working_scale + 2 + integer_digits);
    small_exp(ex, &y, scale)
}

/// Compute seed * e^x with the Taylor series ∑ x^i / i!
///
/// Only fast for small |x|; the result is rounded to `scale`.
fn small_exp(seed: BigDecimal, x: &BigDecimal, scale: i64) -> BigDecimal {
    let working_scale = scale + 2;

    let mut z = seed.clone();
    let mut term = seed;
    let mut i = BigDecimal::zero();

    let mut convergence = Convergence::new("exp", &z, working_scale, 1);
    loop {
        i += &*ONE;
        // term_i = term_{i-1} * x / i
        term = div_round(&(term * x), &i, working_scale, RoundingMode::HalfUp);
        z += &term;

        if convergence.converged(&z) {
            break;
        }
    }

    round_to_scale(&z, scale, RoundingMode::HalfUp)
}
