//! Source adapters: provider payload -> °F degree-day results.
//!
//! Both adapters enforce the Fahrenheit convention at their boundary:
//! - forecast: periods tagged `C` are converted before aggregation
//! - historical: archive extremes arrive in °C and are converted per day
//!
//! After conversion each day goes through the checked formula, so a feed with
//! the wrong unit fails loudly instead of producing plausible-looking numbers.

use chrono::{DateTime, NaiveDate};

use crate::data::aggregate::aggregate_daily;
use crate::data::provider::{ForecastPayload, ForecastProvider, HistoricalProvider};
use crate::domain::{Coordinate, DailyTemperatureRecord, DegreeDaysResult, RawTemperatureReading, TempUnit};
use crate::error::DegreeDayError;
use crate::math::{celsius_to_fahrenheit, check_plausible};
use crate::series::filter_by_period;

/// Anything that can produce °F degree days for a location and window.
pub trait DegreeDaySource {
    fn degree_days(
        &self,
        coord: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
        base_temp: f64,
    ) -> Result<Vec<DegreeDaysResult>, DegreeDayError>;
}

/// Build a result from a °F high/low, rejecting implausible temperatures.
fn checked_result(day: &DailyTemperatureRecord, base_temp: f64) -> Result<DegreeDaysResult, DegreeDayError> {
    check_plausible(day.high(), day.low())?;
    Ok(DegreeDaysResult::from_daily(day, base_temp))
}

/// Forecast-backed adapter.
pub struct ForecastSource<P> {
    provider: P,
}

impl<P: ForecastProvider> ForecastSource<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Daily °F high/low pairs for every complete day in the forecast.
    pub fn daily_temperatures(&self, coord: Coordinate) -> Result<Vec<DailyTemperatureRecord>, DegreeDayError> {
        let payload = self.provider.fetch_forecast(coord)?;
        let readings = readings_from_payload(&payload)?;
        Ok(aggregate_daily(&readings))
    }

    /// Degree days for every complete forecast day (no date window).
    pub fn degree_days_for_location(
        &self,
        coord: Coordinate,
        base_temp: f64,
    ) -> Result<Vec<DegreeDaysResult>, DegreeDayError> {
        self.daily_temperatures(coord)?
            .iter()
            .map(|day| checked_result(day, base_temp))
            .collect()
    }
}

impl<P: ForecastProvider> DegreeDaySource for ForecastSource<P> {
    fn degree_days(
        &self,
        coord: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
        base_temp: f64,
    ) -> Result<Vec<DegreeDaysResult>, DegreeDayError> {
        let all = self.degree_days_for_location(coord, base_temp)?;
        Ok(filter_by_period(&all, start, end))
    }
}

/// Turn forecast periods into °F readings.
///
/// Periods without a temperature are skipped. An unparseable timestamp or an
/// unknown unit code fails the whole payload.
pub fn readings_from_payload(payload: &ForecastPayload) -> Result<Vec<RawTemperatureReading>, DegreeDayError> {
    let mut readings = Vec::with_capacity(payload.periods.len());
    for period in &payload.periods {
        let Some(value) = period.temperature else {
            continue;
        };

        let timestamp = DateTime::parse_from_rfc3339(&period.start_time).map_err(|e| {
            DegreeDayError::data_source_caused_by(
                format!("Invalid forecast period startTime '{}'", period.start_time),
                None,
                e,
            )
        })?;

        let unit = match period.temperature_unit.as_deref() {
            None => TempUnit::Fahrenheit,
            Some(code) => TempUnit::from_code(code).ok_or_else(|| {
                DegreeDayError::data_source(format!("Unsupported forecast temperature unit '{code}'"))
            })?,
        };
        let temperature = match unit {
            TempUnit::Fahrenheit => value,
            TempUnit::Celsius => celsius_to_fahrenheit(value),
        };

        readings.push(RawTemperatureReading {
            timestamp,
            temperature,
            is_daytime: period.is_daytime,
        });
    }
    Ok(readings)
}

/// Archive-backed adapter.
pub struct HistoricalSource<P> {
    provider: P,
}

impl<P: HistoricalProvider> HistoricalSource<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: HistoricalProvider> DegreeDaySource for HistoricalSource<P> {
    fn degree_days(
        &self,
        coord: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
        base_temp: f64,
    ) -> Result<Vec<DegreeDaysResult>, DegreeDayError> {
        let mut rows = self.provider.fetch_daily_min_max(coord, start, end)?;
        rows.sort_by_key(|r| r.date);

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let (Some(tmin), Some(tmax)) = (row.tmin_c, row.tmax_c) else {
                log::debug!("Skipping {} (incomplete archive extremes)", row.date);
                continue;
            };
            let day = DailyTemperatureRecord::new(row.date, celsius_to_fahrenheit(tmax), celsius_to_fahrenheit(tmin));
            out.push(checked_result(&day, base_temp)?);
        }
        Ok(out)
    }
}
