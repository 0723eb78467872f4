//! Numeric building blocks: unit conversion, the degree-day formula, and
//! least squares.

pub mod degree_days;
pub mod ols;
pub mod units;

pub use degree_days::*;
pub use ols::*;
pub use units::*;
