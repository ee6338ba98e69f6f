// Copyright 2016 Adam Sunderland
//           2016-2023 Andrew Kubera
//           2017 Ruben De Smet
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementary functions for arbitrary precision decimals
//!
//! Square and cube roots, logarithms, the exponential and real powers of
//! [`BigDecimal`] values, each computed to a caller-chosen number of
//! fractional digits (the *scale*) and rounded half-up, without ever
//! going through floating point hardware.
//!
//! Every function takes its inputs by reference and returns a fresh
//! value, so a result may be computed from the same value passed twice
//! (`pow(&x, &x, 10)`). The [`BigDecimalMath`] extension trait adds
//! in-place `*_assign` forms that overwrite the receiver only on
//! success.
//!
//! Errors come in two tiers. Inputs that can only come from a
//! programming mistake (a negative square root, a zero divisor, a NaN
//! float) panic. Inputs that may come from data (the log of a value that
//! turned out non-positive, a power whose result would need more than
//! [`MAX_PRECISION`] digits) return a [`MathError`].
//!
//! # Example
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use bigdecimal_math::{sqrt, exp, log10};
//!
//! let two = BigDecimal::from(2);
//! assert_eq!(sqrt(&two, 10).to_string(), "1.4142135624");
//!
//! let one = BigDecimal::from(1);
//! assert_eq!(exp(&one, 10).to_string(), "2.7182818285");
//!
//! let thousand = BigDecimal::from(1000);
//! assert_eq!(log10(&thousand, 5).unwrap().to_string(), "3.00000");
//! ```
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate bigdecimal;

use bigdecimal::BigDecimal;
use num_bigint::Sign;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

// pub const MAX_PRECISION: i64 = ${RUST_BIGDECIMAL_MATH_MAX_PRECISION} or 500;
include!(concat!(env!("OUT_DIR"), "/max_precision.rs"));

// pub const MAX_ITERATIONS: u32 = ${RUST_BIGDECIMAL_MATH_MAX_ITERATIONS} or 10000;
include!(concat!(env!("OUT_DIR"), "/max_iterations.rs"));

#[cfg(test)]
extern crate paste;

mod error;
pub use error::{MathError, Result};

pub mod rounding;
pub use rounding::{div_round, round_to_scale};
pub use bigdecimal::RoundingMode;

mod convergence;
pub use convergence::Convergence;

pub mod constants;
use constants::{
    CBRT_C1, CBRT_C2, CBRT_C3, EIGHT, HALF, ONE, ONE_EIGHTH, ONE_POINT_ONE, THREE, TWO,
    ZERO_POINT_NINE,
};

mod parsing;
pub use parsing::{decimal_from_float, float_from_decimal, try_decimal_from_float};

mod arithmetic;
pub use arithmetic::{cbrt, exp, integer_power, ln, log10, log_n, modulo, pow, sqrt};

// BigDecimalMath extension trait
mod impl_ext;
pub use impl_ext::BigDecimalMath;


#[cfg(test)]
extern crate proptest;
