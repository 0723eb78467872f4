//! U.S. National Weather Service forecast API.
//!
//! Two requests per location:
//! 1. `GET {base}/points/{lat},{lon}` resolves the gridpoint and yields the forecast URL.
//! 2. `GET <forecast URL>` returns twelve-hour day/night periods (~7 days).

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::data::http::{build_client, execute_json};
use crate::data::provider::{ForecastPayload, ForecastPeriod, ForecastProvider};
use crate::domain::{Coordinate, ProviderConfig};
use crate::error::DegreeDayError;

pub struct NwsClient {
    client: Client,
    base_url: String,
}

impl NwsClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, DegreeDayError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.forecast_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn points_url(&self, coord: Coordinate) -> String {
        format!("{}/points/{:.4},{:.4}", self.base_url, coord.lat(), coord.lon())
    }

    fn get<T: for<'de> Deserialize<'de>>(&self, url: &str, what: &str) -> Result<T, DegreeDayError> {
        let request = self
            .client
            .get(url)
            .header("Accept", "application/geo+json")
            .build()
            .map_err(|e| DegreeDayError::data_source_caused_by(format!("Invalid {what} request"), Some(url), e))?;
        execute_json(&self.client, request, what)
    }

    fn forecast_url(&self, coord: Coordinate) -> Result<String, DegreeDayError> {
        let url = self.points_url(coord);
        let points: PointsResponse = self.get(&url, "forecast URL")?;
        points.properties.forecast.ok_or_else(|| DegreeDayError::DataSource {
            message: "NWS has no forecast office for this location".to_string(),
            status: None,
            url: Some(url),
            source: None,
        })
    }
}

impl ForecastProvider for NwsClient {
    fn fetch_forecast(&self, coord: Coordinate) -> Result<ForecastPayload, DegreeDayError> {
        let forecast_url = self.forecast_url(coord)?;
        let forecast: ForecastResponse = self.get(&forecast_url, "forecast data")?;
        log::debug!(
            "NWS returned {} forecast periods for ({}, {})",
            forecast.properties.periods.len(),
            coord.lat(),
            coord.lon()
        );

        Ok(ForecastPayload {
            periods: forecast.properties.periods.into_iter().map(NwsPeriod::into_period).collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    #[serde(default)]
    forecast: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    #[serde(default)]
    periods: Vec<NwsPeriod>,
}

#[derive(Debug, Deserialize)]
struct NwsPeriod {
    #[serde(rename = "startTime")]
    start_time: String,
    #[serde(rename = "isDaytime")]
    is_daytime: bool,
    /// A bare number, or a `{ "value": .., "unitCode": .. }` object on newer feeds.
    #[serde(default)]
    temperature: serde_json::Value,
    #[serde(rename = "temperatureUnit", default)]
    temperature_unit: Option<String>,
}

impl NwsPeriod {
    fn into_period(self) -> ForecastPeriod {
        let (temperature, unit) = match &self.temperature {
            serde_json::Value::Number(n) => (n.as_f64(), self.temperature_unit),
            serde_json::Value::Object(obj) => (
                obj.get("value").and_then(serde_json::Value::as_f64),
                obj.get("unitCode")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
                    .or(self.temperature_unit),
            ),
            _ => (None, self.temperature_unit),
        };

        ForecastPeriod {
            start_time: self.start_time,
            temperature,
            temperature_unit: unit,
            is_daytime: self.is_daytime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_url_uses_four_decimals() {
        let client = NwsClient::new(&ProviderConfig::default()).unwrap();
        let coord = Coordinate::new(40.712776, -74.005974).unwrap();
        assert_eq!(client.points_url(coord), "https://api.weather.gov/points/40.7128,-74.0060");
    }

    #[test]
    fn parses_forecast_periods() {
        let body = r#"{
            "properties": {
                "periods": [
                    {"number": 1, "startTime": "2024-01-02T06:00:00-05:00", "isDaytime": true,
                     "temperature": 41, "temperatureUnit": "F"},
                    {"number": 2, "startTime": "2024-01-02T18:00:00-05:00", "isDaytime": false,
                     "temperature": {"unitCode": "wmoUnit:degC", "value": -1.5}}
                ]
            }
        }"#;
        let resp: ForecastResponse = serde_json::from_str(body).unwrap();
        let periods: Vec<_> = resp.properties.periods.into_iter().map(NwsPeriod::into_period).collect();

        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].temperature, Some(41.0));
        assert_eq!(periods[0].temperature_unit.as_deref(), Some("F"));
        assert!(periods[0].is_daytime);
        assert_eq!(periods[1].temperature, Some(-1.5));
        assert_eq!(periods[1].temperature_unit.as_deref(), Some("wmoUnit:degC"));
    }

    #[test]
    fn missing_forecast_link_deserializes_as_none() {
        let resp: PointsResponse = serde_json::from_str(r#"{"properties": {"forecast": null}}"#).unwrap();
        assert!(resp.properties.forecast.is_none());
    }
}
