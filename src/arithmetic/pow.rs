//! pow implementation

use std::f64::consts::{LOG10_2, LOG2_10};

use crate::*;


/// Compute x**y for integer y using exponentiation by squaring,
/// rounded half-up to `scale` fractional digits
///
/// The squared base is rounded to `2 * scale` fractional digits after
/// every step (the number of digits would otherwise explode when x is a
/// high-precision constant). Negative exponents invert the product at the
/// end, two digits past `scale`.
///
/// Panics if `x` is zero and `y` is negative.
///
/// Algorithm comes from https://en.wikipedia.org/wiki/Exponentiation_by_squaring
pub fn integer_power(x: &BigDecimal, y: i64, scale: i64) -> BigDecimal {
    if y < 0 && x.is_zero() {
        panic!("zero raised to a negative power is undefined: 0 ^ {}", y);
    }

    let mut n = y.unsigned_abs();
    let mut base = x.clone();
    let mut z = ONE.clone();

    while n > 0 {
        if n % 2 == 1 {
            z = z * &base;
        }
        n >>= 1;
        if n > 0 {
            base = round_to_scale(&(&base * &base), scale * 2, RoundingMode::HalfUp);
        }
    }

    if y < 0 {
        if z.is_zero() {
            panic!("{} ^ {} is too large to represent at scale {}", x, y, scale);
        }
        z = div_round(&ONE, &z, scale + 2, RoundingMode::HalfUp);
    }

    round_to_scale(&z, scale, RoundingMode::HalfUp)
}

/// Compute x**y as e<sup>y·ln(x)</sup>, rounded half-up to `scale`
/// fractional digits
///
/// Zero to a positive power is zero, and zero to the zero is one. Errors
/// are returned for zero to a negative power, a negative base with a
/// non-integer exponent, and when the working precision needed for the
/// result exceeds [`MAX_PRECISION`](crate::MAX_PRECISION). A result
/// smaller than 10<sup>-MAX_PRECISION</sup> is rejected the same way.
///
/// The logarithm is taken at a working scale of
///
/// ```math
/// scale + 2 + digits(x) * y
/// ```
///
/// An error of 10<sup>-k</sup> in ln(x) becomes a relative error of
/// about y·10<sup>-k</sup> in the result, so every integer digit of x**y
/// needs one more digit in the logarithm.
///
/// `x` and `y` may be the same value.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::pow;
///
/// let x = BigDecimal::from(2);
/// let y = BigDecimal::from(10);
/// assert_eq!(pow(&x, &y, 0).unwrap(), BigDecimal::from(1024));
/// ```
pub fn pow(x: &BigDecimal, y: &BigDecimal, scale: i64) -> Result<BigDecimal> {
    let working_scale = scale + 2;

    match (x.sign(), y.sign()) {
        (Sign::NoSign, Sign::NoSign) => return Ok(ONE.clone()),
        (Sign::NoSign, Sign::Plus) => return Ok(BigDecimal::zero()),
        (Sign::NoSign, Sign::Minus) => {
            return Err(MathError::ZeroToNegativePower { exponent: y.clone() });
        }
        _ => {}
    }

    let negative = x.sign() == Sign::Minus;
    if negative && !y.is_integer() {
        return Err(MathError::NegativeToNonIntegerPower {
            base: x.clone(),
            exponent: y.clone(),
        });
    }

    // approximate number of digits before the decimal point in x; the
    // true log10(x) lies in [num_digits - log10(2), num_digits]
    let (mantissa, x_scale) = x.as_bigint_and_exponent();
    let num_digits = mantissa.bits() as f64 / LOG2_10 - x_scale as f64;

    // y rounded away from zero
    let y_magnitude = round_to_scale(y, 0, RoundingMode::Up)
                        .to_f64()
                        .unwrap_or(f64::INFINITY);

    // digits of x**y before (or zeros after) the decimal point, and an
    // upper bound on |log10(x**y)| that caps the size of y·ln(x) handed to
    // the exponential, whichever way the result leaves the range
    let result_digits = (num_digits * y_magnitude).trunc();
    let log_bound = num_digits.abs().max((num_digits - LOG10_2).abs());
    let magnitude = (log_bound * y_magnitude.abs()).trunc();

    // tiny results need no fewer fractional digits than requested
    let required = working_scale as f64 + result_digits.max(0.0);
    if !(magnitude <= MAX_PRECISION as f64) || required > MAX_PRECISION as f64 {
        return Err(MathError::ArgumentTooLarge {
            operation: "pow",
            required: working_scale as f64 + magnitude,
            max: MAX_PRECISION,
        });
    }
    let exponent_scale = required as i64;
    tracing::debug!(exponent_scale, "pow working scale");

    let log = ln(&x.abs(), exponent_scale)?;
    let mut z = exp(&(log * y), exponent_scale);

    if negative && is_odd_integer(y) {
        z = -z;
    }

    Ok(round_to_scale(&z, scale, RoundingMode::HalfUp))
}

/// True if the integer part of `y` is odd
fn is_odd_integer(y: &BigDecimal) -> bool {
    let truncated = round_to_scale(y, 0, RoundingMode::Down);
    truncated.as_bigint_and_exponent().0.is_odd()
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;

    include!("pow.tests.rs");
}
