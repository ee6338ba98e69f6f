//! Errors returned by the data-dependent operations

use bigdecimal::BigDecimal;
use thiserror::Error;

/// Recoverable failures of the elementary functions
///
/// These come from inputs the caller cannot always check up front
/// (a logarithm of a value produced by an earlier division, a power
/// whose exponent arrived from user data). Programming errors such as
/// the square root of a negative number panic instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("natural log of non-positive value: {value}")]
    NonPositiveLogarithm { value: BigDecimal },

    #[error("logarithm base {base} has a natural log of zero")]
    UnitLogarithmBase { base: BigDecimal },

    #[error("zero raised to a negative power is undefined (exponent {exponent})")]
    ZeroToNegativePower { exponent: BigDecimal },

    #[error("a negative number raised to a non-integer power yields a complex result ({base} ^ {exponent})")]
    NegativeToNonIntegerPower {
        base: BigDecimal,
        exponent: BigDecimal,
    },

    #[error("argument too large: {operation} needs {required} digits of working precision, limit is {max}")]
    ArgumentTooLarge {
        operation: &'static str,
        required: f64,
        max: i64,
    },

    #[error("{value} is out of range for a float")]
    FloatOutOfRange { value: BigDecimal },

    #[error("cannot create a decimal from a non-finite float: {value}")]
    NonFiniteFloat { value: f64 },
}

/// Result alias used by every fallible operation in this crate
pub type Result<T> = std::result::Result<T, MathError>;
