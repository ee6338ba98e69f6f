//! Constant table used by the algorithms
//!
//! Everything here is built once, on first access, and only ever read
//! afterwards. Euler's number and ln(10) are computed from exact integer
//! series to `CONSTANT_SCALE` digits instead of being pasted in as
//! literals, so the table tracks the configured precision cap.

use bigdecimal::{BigDecimal, RoundingMode};
use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::rounding::{round_to_scale, ten_to_the};
use crate::MAX_PRECISION;

/// Number of fractional digits carried by the computed constants
pub(crate) const CONSTANT_SCALE: i64 = MAX_PRECISION + 100;

/// Extra digits used while summing the constant series
const GUARD_DIGITS: i64 = 10;

lazy_static! {
    pub(crate) static ref ONE: BigDecimal = BigDecimal::from(1);
    pub(crate) static ref TWO: BigDecimal = BigDecimal::from(2);
    pub(crate) static ref THREE: BigDecimal = BigDecimal::from(3);
    pub(crate) static ref EIGHT: BigDecimal = BigDecimal::from(8);
    pub(crate) static ref HALF: BigDecimal = BigDecimal::new(BigInt::from(5), 1);
    pub(crate) static ref ONE_EIGHTH: BigDecimal = BigDecimal::new(BigInt::from(125), 3);

    // bounds of the logarithm range reduction
    pub(crate) static ref ZERO_POINT_NINE: BigDecimal = BigDecimal::new(BigInt::from(9), 1);
    pub(crate) static ref ONE_POINT_ONE: BigDecimal = BigDecimal::new(BigInt::from(11), 1);

    // cbrt(z) ~ (-0.46946116 * z + 1.072302) * z + 0.3812513, for 0.125 <= z <= 1
    pub(crate) static ref CBRT_C1: BigDecimal = BigDecimal::new(BigInt::from(-46946116), 8);
    pub(crate) static ref CBRT_C2: BigDecimal = BigDecimal::new(BigInt::from(1072302), 6);
    pub(crate) static ref CBRT_C3: BigDecimal = BigDecimal::new(BigInt::from(3812513), 7);

    static ref E: BigDecimal = compute_e(CONSTANT_SCALE);
    static ref LN_10: BigDecimal = compute_ln_10(CONSTANT_SCALE);
}

/// Euler's number, to `MAX_PRECISION + 100` fractional digits
pub fn e() -> &'static BigDecimal {
    &E
}

/// Natural logarithm of ten, to `MAX_PRECISION + 100` fractional digits
pub fn ln_10() -> &'static BigDecimal {
    &LN_10
}

/// e = ∑ 1/k!, summed in fixed point
fn compute_e(scale: i64) -> BigDecimal {
    let working_scale = scale + GUARD_DIGITS;
    let unit = ten_to_the(working_scale as u64);

    let mut sum = unit.clone();
    let mut term = unit;
    let mut k = 1u32;
    loop {
        term /= k;
        if term.is_zero() {
            break;
        }
        sum += &term;
        k += 1;
    }

    round_to_scale(&BigDecimal::new(sum, working_scale), scale, RoundingMode::HalfUp)
}

/// ln(10) = 3 ln(2) + ln(5/4) = 2 * (3 atanh(1/3) + atanh(1/9))
fn compute_ln_10(scale: i64) -> BigDecimal {
    let working_scale = scale + GUARD_DIGITS;
    let unit = ten_to_the(working_scale as u64);

    let sum = atanh_inverse(3, &unit) * 3u8 + atanh_inverse(9, &unit);
    let sum = sum * 2u8;

    round_to_scale(&BigDecimal::new(sum, working_scale), scale, RoundingMode::HalfUp)
}

/// atanh(1/k) scaled by `unit`: ∑ unit / ((2n+1) k^(2n+1))
fn atanh_inverse(k: u32, unit: &BigInt) -> BigInt {
    let k_squared = k * k;

    let mut sum = BigInt::zero();
    let mut power = unit / k;
    let mut n = 0u32;
    loop {
        let term = &power / (2 * n + 1);
        if term.is_zero() {
            break;
        }
        sum += term;
        power /= k_squared;
        n += 1;
    }
    sum
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn euler_leading_digits() {
        let expected: BigDecimal = "2.7182818284590452353602874713526624977572470936999595749669676277240766303535475945713821785251664274".parse().unwrap();
        assert_eq!(round_to_scale(e(), 100, RoundingMode::HalfUp), expected);
    }

    #[test]
    fn ln_10_leading_digits() {
        let expected: BigDecimal = "2.30258509299404568401799145468436420760110148862877297603332790096757".parse().unwrap();
        assert_eq!(round_to_scale(ln_10(), 68, RoundingMode::HalfUp), expected);
    }

    #[test]
    fn constants_carry_full_scale() {
        assert_eq!(e().as_bigint_and_exponent().1, CONSTANT_SCALE);
        assert_eq!(ln_10().as_bigint_and_exponent().1, CONSTANT_SCALE);
    }

    #[test]
    fn cbrt_seed_coefficients() {
        assert_eq!(*CBRT_C1, "-0.46946116".parse::<BigDecimal>().unwrap());
        assert_eq!(*CBRT_C2, "1.072302".parse::<BigDecimal>().unwrap());
        assert_eq!(*CBRT_C3, "0.3812513".parse::<BigDecimal>().unwrap());
        assert_eq!(*ONE_EIGHTH, "0.125".parse::<BigDecimal>().unwrap());
    }
}
