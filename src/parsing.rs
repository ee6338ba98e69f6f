//! Conversions between native floats and decimals

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::error::{MathError, Result};


/// Create a decimal holding the shortest decimal form of `f`
///
/// The result is the value Rust prints for `f` (the shortest digit string
/// that parses back to the same bits), not the exact binary expansion.
/// Parsing the decimal back into an f64 reproduces `f` bit for bit.
///
/// Panics if `f` is NaN or infinite.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::decimal_from_float;
///
/// let d = decimal_from_float(0.1);
/// assert_eq!(d, "0.1".parse::<BigDecimal>().unwrap());
/// ```
pub fn decimal_from_float(f: f64) -> BigDecimal {
    if f.is_nan() {
        panic!("cannot create a decimal from a NaN float");
    }
    if f.is_infinite() {
        panic!("cannot create a decimal from an infinite float");
    }
    parse_shortest_repr(f)
}

/// Create a decimal from `f`, returning an error for NaN or infinite values
pub fn try_decimal_from_float(f: f64) -> Result<BigDecimal> {
    if f.is_finite() {
        Ok(parse_shortest_repr(f))
    } else {
        Err(MathError::NonFiniteFloat { value: f })
    }
}

/// Convert a decimal to the nearest f64
///
/// Values too large for an f64 are an error; values too small to be
/// represented round to (signed) zero.
pub fn float_from_decimal(d: &BigDecimal) -> Result<f64> {
    let (int_val, scale) = d.as_bigint_and_exponent();
    let text = format!("{}e{}", int_val, -(scale as i128));

    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f),
        _ => Err(MathError::FloatOutOfRange { value: d.clone() }),
    }
}

/// Split the scientific form of `f` ("-1.2345e-7") into digits and exponent
fn parse_shortest_repr(f: f64) -> BigDecimal {
    debug_assert!(f.is_finite());

    let repr = format!("{:e}", f);
    let (mantissa, exponent) = repr.split_once('e')
                                   .expect("float formatted without an exponent");
    let exponent: i64 = exponent.parse()
                                .expect("float formatted with a malformed exponent");

    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };

    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits: BigInt = format!("{}{}", int_digits, frac_digits)
                                .parse()
                                .expect("float formatted with non-digit mantissa");
    if negative {
        digits = -digits;
    }

    // d.ddd * 10^exponent == dddd * 10^(exponent - fraction length)
    let scale = frac_digits.len() as i64 - exponent;
    BigDecimal::new(digits, scale)
}
