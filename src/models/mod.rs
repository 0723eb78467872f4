//! Regression models relating degree days to energy use.
//!
//! The algebra is delegated to `math::ols`; this module owns the model value
//! (slope/intercept + fit quality) and its predictions.

pub mod linear;

pub use linear::*;
