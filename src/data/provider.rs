//! Provider seams.
//!
//! The pipeline never talks HTTP itself. It asks a [`ForecastProvider`] or a
//! [`HistoricalProvider`] for a complete payload and works on that. The
//! concrete network clients live in `data::nws` and `data::open_meteo`; tests
//! plug in in-memory implementations.

use chrono::NaiveDate;

use crate::domain::Coordinate;
use crate::error::DegreeDayError;

/// One forecast period as published by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPeriod {
    /// RFC 3339 timestamp with the location's offset, e.g. `2024-01-02T18:00:00-05:00`.
    pub start_time: String,
    pub temperature: Option<f64>,
    /// Unit code as given by the provider (`"F"`, `"C"`, `"wmoUnit:degC"`); `None` means °F.
    pub temperature_unit: Option<String>,
    pub is_daytime: bool,
}

/// A complete forecast response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastPayload {
    pub periods: Vec<ForecastPeriod>,
}

/// Daily extremes (°C) from a historical archive. Either side may be missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyMinMax {
    pub date: NaiveDate,
    pub tmin_c: Option<f64>,
    pub tmax_c: Option<f64>,
}

pub trait ForecastProvider {
    fn fetch_forecast(&self, coord: Coordinate) -> Result<ForecastPayload, DegreeDayError>;
}

pub trait HistoricalProvider {
    fn fetch_daily_min_max(
        &self,
        coord: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyMinMax>, DegreeDayError>;
}

impl<T: ForecastProvider + ?Sized> ForecastProvider for &T {
    fn fetch_forecast(&self, coord: Coordinate) -> Result<ForecastPayload, DegreeDayError> {
        (**self).fetch_forecast(coord)
    }
}

impl<T: HistoricalProvider + ?Sized> HistoricalProvider for &T {
    fn fetch_daily_min_max(
        &self,
        coord: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyMinMax>, DegreeDayError> {
        (**self).fetch_daily_min_max(coord, start, end)
    }
}
