//! Source selection.
//!
//! [`DataSourceRouter`] is the one entry point callers should use when the
//! source is pluggable. It validates coordinates, picks the adapter, and
//! returns °F results either way (the adapters guarantee the unit; nothing is
//! re-converted here).

use chrono::NaiveDate;

use crate::data::nws::NwsClient;
use crate::data::open_meteo::OpenMeteoArchiveClient;
use crate::data::provider::{ForecastProvider, HistoricalProvider};
use crate::data::source::{DegreeDaySource, ForecastSource, HistoricalSource};
use crate::domain::{Coordinate, DegreeDaysResult, ProviderConfig, Source};
use crate::error::DegreeDayError;

pub struct DataSourceRouter<F, H> {
    forecast: ForecastSource<F>,
    historical: HistoricalSource<H>,
}

impl DataSourceRouter<NwsClient, OpenMeteoArchiveClient> {
    /// Router backed by the NWS forecast API and the Open-Meteo archive.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, DegreeDayError> {
        Ok(Self::new(NwsClient::new(config)?, OpenMeteoArchiveClient::new(config)?))
    }
}

impl<F: ForecastProvider, H: HistoricalProvider> DataSourceRouter<F, H> {
    pub fn new(forecast: F, historical: H) -> Self {
        Self {
            forecast: ForecastSource::new(forecast),
            historical: HistoricalSource::new(historical),
        }
    }

    pub fn get_degree_days(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
        source: Source,
        base_temp: f64,
    ) -> Result<Vec<DegreeDaysResult>, DegreeDayError> {
        let coord = Coordinate::new(lat, lon)?;
        let adapter: &dyn DegreeDaySource = match source {
            Source::Forecast => &self.forecast,
            Source::Historical => &self.historical,
        };

        let results = adapter.degree_days(coord, start, end, base_temp)?;
        log::info!(
            "{} degree days from {} for ({}, {}) {start}..{end}",
            results.len(),
            source,
            coord.lat(),
            coord.lon()
        );
        Ok(results)
    }

    /// Same as [`get_degree_days`](Self::get_degree_days) with a textual source
    /// selector (`forecast`/`nws`, `historical`/`meteostat`/`archive`).
    pub fn get_degree_days_by_name(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
        source: &str,
        base_temp: f64,
    ) -> Result<Vec<DegreeDaysResult>, DegreeDayError> {
        let source: Source = source.parse()?;
        self.get_degree_days(lat, lon, start, end, source, base_temp)
    }

    /// Every complete forecast day, no window.
    pub fn get_degree_days_for_location(
        &self,
        lat: f64,
        lon: f64,
        base_temp: f64,
    ) -> Result<Vec<DegreeDaysResult>, DegreeDayError> {
        let coord = Coordinate::new(lat, lon)?;
        self.forecast.degree_days_for_location(coord, base_temp)
    }

    /// Forecast days within `[start, end]`.
    pub fn get_degree_days_for_period(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
        base_temp: f64,
    ) -> Result<Vec<DegreeDaysResult>, DegreeDayError> {
        self.get_degree_days(lat, lon, start, end, Source::Forecast, base_temp)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::data::provider::{DailyMinMax, ForecastPayload, ForecastPeriod};

    #[derive(Default)]
    struct CountingForecast {
        calls: Cell<usize>,
    }

    impl ForecastProvider for CountingForecast {
        fn fetch_forecast(&self, _coord: Coordinate) -> Result<ForecastPayload, DegreeDayError> {
            self.calls.set(self.calls.get() + 1);
            Ok(ForecastPayload {
                periods: vec![
                    ForecastPeriod {
                        start_time: "2024-01-02T06:00:00-05:00".to_string(),
                        temperature: Some(40.0),
                        temperature_unit: Some("F".to_string()),
                        is_daytime: true,
                    },
                    ForecastPeriod {
                        start_time: "2024-01-02T18:00:00-05:00".to_string(),
                        temperature: Some(30.0),
                        temperature_unit: Some("F".to_string()),
                        is_daytime: false,
                    },
                    ForecastPeriod {
                        start_time: "2024-01-05T06:00:00-05:00".to_string(),
                        temperature: Some(60.0),
                        temperature_unit: Some("F".to_string()),
                        is_daytime: true,
                    },
                    ForecastPeriod {
                        start_time: "2024-01-05T18:00:00-05:00".to_string(),
                        temperature: Some(50.0),
                        temperature_unit: Some("F".to_string()),
                        is_daytime: false,
                    },
                ],
            })
        }
    }

    struct FailingArchive;

    impl HistoricalProvider for FailingArchive {
        fn fetch_daily_min_max(
            &self,
            _coord: Coordinate,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<DailyMinMax>, DegreeDayError> {
            Err(DegreeDayError::http_status(
                "Failed to get historical data",
                500,
                "https://archive.test/v1/archive",
            ))
        }
    }

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn routes_forecast() {
        let router = DataSourceRouter::new(CountingForecast::default(), FailingArchive);
        let days = router
            .get_degree_days(40.7128, -74.006, jan(1), jan(4), Source::Forecast, 65.0)
            .unwrap();
        assert_eq!(days.len(), 1);
        assert!((days[0].hdd() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn for_location_returns_every_forecast_day() {
        let router = DataSourceRouter::new(CountingForecast::default(), FailingArchive);
        let days = router.get_degree_days_for_location(40.7128, -74.006, 65.0).unwrap();
        let dates: Vec<_> = days.iter().map(|d| d.date()).collect();
        assert_eq!(dates, vec![jan(2), jan(5)]);
        assert!((days[1].hdd() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn for_location_validates_coordinates() {
        let forecast = CountingForecast::default();
        let router = DataSourceRouter::new(&forecast, FailingArchive);
        let err = router.get_degree_days_for_location(0.0, 181.0, 65.0).unwrap_err();
        assert!(matches!(err, DegreeDayError::InvalidCoordinates { .. }));
        assert_eq!(forecast.calls.get(), 0);
    }

    #[test]
    fn for_period_windows_forecast_days() {
        let router = DataSourceRouter::new(CountingForecast::default(), FailingArchive);

        let days = router.get_degree_days_for_period(40.7128, -74.006, jan(5), jan(5), 65.0).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date(), jan(5));

        let none = router.get_degree_days_for_period(40.7128, -74.006, jan(6), jan(9), 65.0).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn provider_errors_surface_unchanged() {
        let router = DataSourceRouter::new(CountingForecast::default(), FailingArchive);
        let err = router
            .get_degree_days(40.7128, -74.006, jan(1), jan(7), Source::Historical, 65.0)
            .unwrap_err();
        assert!(matches!(err, DegreeDayError::DataSource { status: Some(500), .. }));
    }

    #[test]
    fn invalid_coordinates_never_reach_provider() {
        let forecast = CountingForecast::default();
        let router = DataSourceRouter::new(&forecast, FailingArchive);
        let err = router
            .get_degree_days(91.0, 0.0, jan(1), jan(7), Source::Forecast, 65.0)
            .unwrap_err();
        assert!(matches!(err, DegreeDayError::InvalidCoordinates { .. }));
        assert_eq!(forecast.calls.get(), 0);
    }

    #[test]
    fn unknown_source_name_fails() {
        let router = DataSourceRouter::new(CountingForecast::default(), FailingArchive);
        let err = router
            .get_degree_days_by_name(40.0, -74.0, jan(1), jan(7), "almanac", 65.0)
            .unwrap_err();
        assert!(matches!(err, DegreeDayError::UnknownSource(_)));
    }
}
