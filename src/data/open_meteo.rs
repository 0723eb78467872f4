//! Open-Meteo historical weather archive.
//!
//! `GET {base}/v1/archive` with `daily=temperature_2m_max,temperature_2m_min`
//! returns parallel arrays of dates and daily extremes in °C. Missing values
//! come back as `null`.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::data::http::{build_client, execute_json};
use crate::data::provider::{DailyMinMax, HistoricalProvider};
use crate::domain::{Coordinate, ProviderConfig};
use crate::error::DegreeDayError;

const ARCHIVE_PATH: &str = "/v1/archive";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min";

pub struct OpenMeteoArchiveClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoArchiveClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, DegreeDayError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.historical_base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl HistoricalProvider for OpenMeteoArchiveClient {
    fn fetch_daily_min_max(
        &self,
        coord: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyMinMax>, DegreeDayError> {
        let endpoint = format!("{}{ARCHIVE_PATH}", self.base_url);
        let request = self
            .client
            .get(&endpoint)
            .query(&[
                ("latitude", format!("{:.4}", coord.lat())),
                ("longitude", format!("{:.4}", coord.lon())),
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .build()
            .map_err(|e| {
                DegreeDayError::data_source_caused_by("Invalid archive request", Some(&endpoint), e)
            })?;
        let url = request.url().to_string();

        let body: ArchiveResponse = execute_json(&self.client, request, "historical data")?;
        let rows = body.into_rows().map_err(|message| DegreeDayError::DataSource {
            message,
            status: None,
            url: Some(url),
            source: None,
        })?;
        log::debug!("Archive returned {} daily rows for {start}..{end}", rows.len());
        Ok(rows)
    }
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    #[serde(default)]
    daily: Option<ArchiveDaily>,
}

#[derive(Debug, Deserialize)]
struct ArchiveDaily {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
}

impl ArchiveResponse {
    fn into_rows(self) -> Result<Vec<DailyMinMax>, String> {
        let Some(daily) = self.daily else {
            return Err("Archive response has no daily block".to_string());
        };

        let n = daily.time.len();
        if daily.temperature_2m_max.len() != n || daily.temperature_2m_min.len() != n {
            return Err(format!(
                "Archive daily arrays disagree in length (time={n}, max={}, min={})",
                daily.temperature_2m_max.len(),
                daily.temperature_2m_min.len()
            ));
        }

        let mut rows = Vec::with_capacity(n);
        for (i, raw_date) in daily.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
                .map_err(|e| format!("Invalid archive date '{raw_date}': {e}"))?;
            rows.push(DailyMinMax {
                date,
                tmin_c: daily.temperature_2m_min[i],
                tmax_c: daily.temperature_2m_max[i],
            });
        }
        Ok(rows)
    }
}
