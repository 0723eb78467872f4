//! Operations over finished degree-day series: date windows and the join with
//! energy consumption.

pub mod align;
pub mod filter;

pub use align::*;
pub use filter::*;
