//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - validated coordinates (`Coordinate`)
//! - per-day temperature and degree-day records (`DailyTemperatureRecord`, `DegreeDaysResult`)
//! - energy records and source/field selectors
//! - run and provider configuration

pub mod config;
pub mod coordinate;
pub mod types;

pub use config::*;
pub use coordinate::*;
pub use types::*;
