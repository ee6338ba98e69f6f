//! square root implementation

use crate::*;


/// Square root of `x`, rounded half-up to `scale` fractional digits
///
/// Uses Newton's method, starting from x/2 and iterating
///
/// ```math
/// x_{n+1} = 1/2 * ( x_n + (d / x_n) )
/// ```
///
/// with the division carried two digits past `scale`.
///
/// Panics if `x` is negative.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::sqrt;
///
/// let two = BigDecimal::from(2);
/// assert_eq!(sqrt(&two, 10), "1.4142135624".parse::<BigDecimal>().unwrap());
/// ```
pub fn sqrt(x: &BigDecimal, scale: i64) -> BigDecimal {
    match x.sign() {
        Sign::Minus => panic!("square root of negative number: {}", x),
        Sign::NoSign => return BigDecimal::zero(),
        Sign::Plus => {}
    }

    let working_scale = scale + 2;

    // half of x as the initial estimate
    let mut z = x * &*HALF;

    // compared at the working scale, so results far below 10^-scale
    // settle before the final rounding
    let mut convergence = Convergence::new("sqrt", &z, working_scale, 1);
    loop {
        // t = x_n + (d / x_n)
        let t = div_round(x, &z, working_scale, RoundingMode::HalfUp) + &z;
        // x_{n+1} = 0.5 * t
        z = t * &*HALF;

        if convergence.converged(&z) {
            break;
        }
    }

    round_to_scale(&z, scale, RoundingMode::HalfUp)
}
