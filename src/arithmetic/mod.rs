//! arithmetic routines

pub(crate) mod sqrt;
pub(crate) mod cbrt;
pub(crate) mod modulo;
pub(crate) mod log;
pub(crate) mod exp;
pub(crate) mod pow;

pub use self::sqrt::sqrt;
pub use self::cbrt::cbrt;
pub use self::modulo::modulo;
pub use self::log::{ln, log10, log_n};
pub use self::exp::exp;
pub use self::pow::{integer_power, pow};
