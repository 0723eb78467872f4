//! Geographic coordinate validation.

use serde::{Deserialize, Serialize};

use crate::error::DegreeDayError;

/// A validated latitude/longitude pair, rounded to 4 decimals (~11 m).
///
/// The only way to obtain one is [`Coordinate::new`], so out-of-range values
/// never reach a provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self, DegreeDayError> {
        let (lat, lon) = validate_coordinates(lat, lon)?;
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Range-check a latitude/longitude and round both to 4 decimal places.
///
/// NaN is rejected along with out-of-range values.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(f64, f64), DegreeDayError> {
    let lat_ok = (-90.0..=90.0).contains(&lat);
    let lon_ok = (-180.0..=180.0).contains(&lon);
    if !(lat_ok && lon_ok) {
        return Err(DegreeDayError::InvalidCoordinates { lat, lon });
    }
    Ok((round4(lat), round4(lon)))
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
