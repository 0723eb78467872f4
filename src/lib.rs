//! `hdd-cdd` library crate.
//!
//! Heating/Cooling Degree Days from forecast or historical temperatures, and
//! their regression against energy consumption.
//!
//! The binary (`hdd`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes or touching the network
//! - providers can be swapped behind the `ForecastProvider`/`HistoricalProvider` traits

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod report;
pub mod series;
