//! Weather data acquisition and reduction to degree days.
//!
//! - provider seams (`provider`) and their HTTP implementations (`nws`, `open_meteo`)
//! - day/night aggregation (`aggregate`)
//! - forecast/historical adapters (`source`) and the selecting `router`
//! - synthetic energy series for the demo workflow (`sample`)

pub mod aggregate;
pub mod http;
pub mod nws;
pub mod open_meteo;
pub mod provider;
pub mod router;
pub mod sample;
pub mod source;

pub use aggregate::aggregate_daily;
pub use nws::NwsClient;
pub use open_meteo::OpenMeteoArchiveClient;
pub use provider::*;
pub use router::DataSourceRouter;
pub use sample::generate_energy_sample;
pub use source::*;
