//! Method forms of the elementary functions

use crate::*;

/// Elementary functions as methods on [`BigDecimal`]
///
/// The `*_with_scale` methods return a new value. The `*_assign` methods
/// overwrite `self` with the result; the fallible ones leave `self`
/// untouched when they return an error.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use bigdecimal_math::BigDecimalMath;
///
/// let mut n = BigDecimal::from(100);
/// n.log10_assign(3).unwrap();
/// assert_eq!(n.to_string(), "2.000");
///
/// n.sqrt_assign(4);
/// assert_eq!(n.to_string(), "1.4142");
/// ```
pub trait BigDecimalMath: Sized {
    /// Square root, see [`sqrt`](crate::sqrt)
    fn sqrt_with_scale(&self, scale: i64) -> Self;

    /// Cube root, see [`cbrt`](crate::cbrt)
    fn cbrt_with_scale(&self, scale: i64) -> Self;

    /// Natural logarithm, see [`ln`](crate::ln)
    fn ln_with_scale(&self, scale: i64) -> Result<Self>;

    /// Base ten logarithm, see [`log10`](crate::log10)
    fn log10_with_scale(&self, scale: i64) -> Result<Self>;

    /// Logarithm in `base`, see [`log_n`](crate::log_n)
    fn log_with_base(&self, base: &Self, scale: i64) -> Result<Self>;

    /// e raised to self, see [`exp`](crate::exp)
    fn exp_with_scale(&self, scale: i64) -> Self;

    /// self raised to a decimal power, see [`pow`](crate::pow)
    fn pow_with_scale(&self, exponent: &Self, scale: i64) -> Result<Self>;

    /// self raised to an integer power, see [`integer_power`](crate::integer_power)
    fn powi_with_scale(&self, exponent: i64, scale: i64) -> Self;

    /// Truncating remainder, see [`modulo`](crate::modulo)
    fn trunc_rem(&self, divisor: &Self) -> Self;

    /// Nearest f64, or an error if the value is beyond the float range
    fn to_f64_checked(&self) -> Result<f64>;

    /// Replace self with its square root
    fn sqrt_assign(&mut self, scale: i64) {
        *self = self.sqrt_with_scale(scale);
    }

    /// Replace self with its cube root
    fn cbrt_assign(&mut self, scale: i64) {
        *self = self.cbrt_with_scale(scale);
    }

    /// Replace self with its natural logarithm; self is unchanged on error
    fn ln_assign(&mut self, scale: i64) -> Result<()> {
        *self = self.ln_with_scale(scale)?;
        Ok(())
    }

    /// Replace self with its base ten logarithm; self is unchanged on error
    fn log10_assign(&mut self, scale: i64) -> Result<()> {
        *self = self.log10_with_scale(scale)?;
        Ok(())
    }

    /// Replace self with its logarithm in `base`; self is unchanged on error
    fn log_base_assign(&mut self, base: &Self, scale: i64) -> Result<()> {
        *self = self.log_with_base(base, scale)?;
        Ok(())
    }

    /// Replace self with e raised to self
    fn exp_assign(&mut self, scale: i64) {
        *self = self.exp_with_scale(scale);
    }

    /// Raise self to `exponent` in place; self is unchanged on error
    fn pow_assign(&mut self, exponent: &Self, scale: i64) -> Result<()> {
        *self = self.pow_with_scale(exponent, scale)?;
        Ok(())
    }

    /// Replace self with the truncating remainder of self / `divisor`
    fn trunc_rem_assign(&mut self, divisor: &Self) {
        *self = self.trunc_rem(divisor);
    }
}

impl BigDecimalMath for BigDecimal {
    fn sqrt_with_scale(&self, scale: i64) -> Self {
        sqrt(self, scale)
    }

    fn cbrt_with_scale(&self, scale: i64) -> Self {
        cbrt(self, scale)
    }

    fn ln_with_scale(&self, scale: i64) -> Result<Self> {
        ln(self, scale)
    }

    fn log10_with_scale(&self, scale: i64) -> Result<Self> {
        log10(self, scale)
    }

    fn log_with_base(&self, base: &Self, scale: i64) -> Result<Self> {
        log_n(self, base, scale)
    }

    fn exp_with_scale(&self, scale: i64) -> Self {
        exp(self, scale)
    }

    fn pow_with_scale(&self, exponent: &Self, scale: i64) -> Result<Self> {
        pow(self, exponent, scale)
    }

    fn powi_with_scale(&self, exponent: i64, scale: i64) -> Self {
        integer_power(self, exponent, scale)
    }

    fn trunc_rem(&self, divisor: &Self) -> Self {
        modulo(self, divisor)
    }

    fn to_f64_checked(&self) -> Result<f64> {
        float_from_decimal(self)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn assign_forms_match_value_forms() {
        let x = dec("12.5");

        let mut y = x.clone();
        y.sqrt_assign(8);
        assert_eq!(y, x.sqrt_with_scale(8));

        let mut y = x.clone();
        y.cbrt_assign(8);
        assert_eq!(y, x.cbrt_with_scale(8));

        let mut y = x.clone();
        y.exp_assign(8);
        assert_eq!(y, x.exp_with_scale(8));

        let mut y = x.clone();
        y.ln_assign(8).unwrap();
        assert_eq!(y, x.ln_with_scale(8).unwrap());

        let mut y = x.clone();
        y.trunc_rem_assign(&dec("4"));
        assert_eq!(y, dec("0.5"));
    }

    #[test]
    fn failed_assign_leaves_value_untouched() {
        let mut y = dec("-4");
        assert!(y.ln_assign(10).is_err());
        assert_eq!(y, dec("-4"));

        assert!(y.log10_assign(10).is_err());
        assert_eq!(y, dec("-4"));

        assert!(y.pow_assign(&dec("0.5"), 10).is_err());
        assert_eq!(y, dec("-4"));

        let mut one = dec("1");
        assert!(dec("8").log_with_base(&one, 4).is_err());
        assert!(one.log_base_assign(&dec("1"), 4).is_err());
        assert_eq!(one, dec("1"));
    }

    #[test]
    fn value_as_its_own_argument() {
        let mut x = dec("2");
        let exponent = x.clone();
        x.pow_assign(&exponent, 2).unwrap();
        assert_eq!(x, dec("4.00"));

        let x = dec("9.75");
        assert_eq!(x.trunc_rem(&x), dec("0"));
        assert_eq!(x.log_with_base(&x, 3).unwrap(), dec("1.000"));
    }

    #[test]
    fn powi_and_float() {
        let x = dec("1.5");
        assert_eq!(x.powi_with_scale(2, 2), dec("2.25"));
        assert_eq!(x.to_f64_checked().unwrap(), 1.5);
        assert!(dec("1e400").to_f64_checked().is_err());
    }
}
