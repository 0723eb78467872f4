//! Input/output helpers.
//!
//! - energy CSV ingest (`ingest`)
//! - degree-day CSV export (`export`)
//! - model JSON read/write (`model_json`)

pub mod export;
pub mod ingest;
pub mod model_json;

pub use export::*;
pub use ingest::*;
pub use model_json::*;
