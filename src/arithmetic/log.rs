//! Logarithms: natural, base ten and arbitrary base

use crate::*;

/// Digits carried past the requested scale through the square-root
/// reduction and the series
const LN_GUARD_DIGITS: i64 = 20;

/// Minimum number of series terms summed by [`ln`]
const LN_MIN_TERMS: u32 = 40;

/// Digits carried past the requested scale by both logarithms in [`log_n`]
const LOG_N_GUARD_DIGITS: i64 = 3;


/// Natural logarithm of `x`, rounded half-up to `scale` fractional digits
///
/// Returns an error if `x` is zero or negative.
///
/// Uses the series
///
/// ```math
/// r = (x - 1) / (x + 1)
/// ln(x) = 2 * [ r + r^3 / 3 + r^5 / 5 + ... ]
/// ```
///
/// which converges quickly for 0.9 < x < 1.1. Other values are brought
/// into that range with ln(sqrt(x)) = ln(x) / 2, repeatedly taking square
/// roots and scaling the sum back up at the end. Values below 0.9 are
/// first inverted (ln(x) = -ln(1/x)) so the reduction works on numbers
/// greater than one, where a square root never rounds away to zero.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::ln;
///
/// let two = BigDecimal::from(2);
/// assert_eq!(ln(&two, 10).unwrap(), "0.6931471806".parse::<BigDecimal>().unwrap());
/// assert!(ln(&BigDecimal::from(0), 10).is_err());
/// ```
pub fn ln(x: &BigDecimal, scale: i64) -> Result<BigDecimal> {
    if x.sign() != Sign::Plus {
        return Err(MathError::NonPositiveLogarithm { value: x.clone() });
    }

    let working_scale = scale + LN_GUARD_DIGITS;

    let inverted = *x < *ZERO_POINT_NINE;
    let mut x = if inverted {
        div_round(&ONE, x, working_scale, RoundingMode::HalfUp)
    } else {
        x.clone()
    };

    // the series is multiplied by 2, and by another 2 for every square root
    let mut factor = TWO.clone();
    let mut reductions = 0u32;
    while x > *ONE_POINT_ONE {
        x = sqrt(&x, working_scale);
        factor = factor * &*TWO;
        reductions += 1;
    }
    tracing::debug!(reductions, inverted, "ln range reduction");

    // r = (x - 1) / (x + 1)
    let ratio = div_round(&(&x - &*ONE), &(&x + &*ONE), working_scale, RoundingMode::HalfUp);

    // only odd powers appear, step by r^2
    let ratio_squared = round_to_scale(&(&ratio * &ratio), working_scale, RoundingMode::HalfUp);

    let mut numerator = ratio.clone();
    let mut z = ratio;

    let mut convergence = Convergence::new("ln", &z, working_scale, LN_MIN_TERMS);
    loop {
        // 3, 5, 7, 9, ...
        let n = BigDecimal::from(2 * convergence.iterations() as u64 + 3);

        numerator = round_to_scale(&(numerator * &ratio_squared), working_scale, RoundingMode::HalfUp);
        z += div_round(&numerator, &n, working_scale, RoundingMode::HalfUp);

        if convergence.converged(&z) {
            break;
        }
    }

    // undo the range reduction
    let mut z = z * factor;
    if inverted {
        z = -z;
    }

    Ok(round_to_scale(&z, scale, RoundingMode::HalfUp))
}

/// Base ten logarithm of `x`, rounded half-up to `scale` fractional digits
///
/// Computed as ln(x) / ln(10), with the natural log taken one digit past
/// `scale`.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::log10;
///
/// let n = BigDecimal::from(1000);
/// assert_eq!(log10(&n, 5).unwrap(), "3.00000".parse::<BigDecimal>().unwrap());
/// ```
pub fn log10(x: &BigDecimal, scale: i64) -> Result<BigDecimal> {
    let z = ln(x, scale + 1)?;
    Ok(div_round(&z, constants::ln_10(), scale, RoundingMode::HalfUp))
}

/// Logarithm of `x` in base `base`, rounded half-up to `scale` fractional digits
///
/// Computed as ln(x) / ln(base). Returns an error if either argument is
/// not positive, or if the base is exactly one.
///
/// A base close to one has a tiny logarithm which magnifies any error in
/// the numerator, so both logs carry extra digits: one per leading zero
/// of |base - 1| for ln(x), and twice that plus the integer digits of
/// ln(x) for ln(base).
///
/// `x` and `base` may be the same value.
pub fn log_n(x: &BigDecimal, base: &BigDecimal, scale: i64) -> Result<BigDecimal> {
    let zeros = base_zeros(base);
    let z = ln(x, scale + LOG_N_GUARD_DIGITS + zeros)?;
    if *base == *ONE {
        return Err(MathError::UnitLogarithmBase { base: base.clone() });
    }

    let int_digits = round_to_scale(&z.abs(), 0, RoundingMode::Down).digits() as i64;
    let base_scale = scale + LOG_N_GUARD_DIGITS + 2 * zeros + int_digits;
    tracing::trace!(base_scale, "log_n base precision");

    let ln_base = ln(base, base_scale)?;
    if ln_base.is_zero() {
        return Err(MathError::UnitLogarithmBase { base: base.clone() });
    }
    Ok(div_round(&z, &ln_base, scale, RoundingMode::HalfUp))
}

/// Number of zeros between the decimal point and the first significant
/// digit of |base - 1|, zero when that difference is at least 0.1
fn base_zeros(base: &BigDecimal) -> i64 {
    let diff = (base - &*ONE).abs();
    if diff.is_zero() {
        return 0;
    }
    let (_, diff_scale) = diff.as_bigint_and_exponent();
    (diff_scale - diff.digits() as i64).max(0)
}
