//! Run and provider configuration.
//!
//! Command configs are plain structs built from CLI arguments (see
//! `app::*_config_from_args`). Provider settings come from the environment so
//! the outbound identification string and endpoints never live in core code.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::{DegreeDayField, Source};

pub const DEFAULT_USER_AGENT: &str = "hdd-cdd/0.1 (degree-day calculator)";
pub const DEFAULT_NWS_BASE_URL: &str = "https://api.weather.gov";
pub const DEFAULT_ARCHIVE_BASE_URL: &str = "https://archive-api.open-meteo.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings handed to the HTTP provider clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub user_agent: String,
    pub forecast_base_url: String,
    pub historical_base_url: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            forecast_base_url: DEFAULT_NWS_BASE_URL.to_string(),
            historical_base_url: DEFAULT_ARCHIVE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    /// Load `.env` (if present) and read `HDD_*` overrides.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let timeout_secs = match get("HDD_HTTP_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => secs,
            Some(_) => {
                log::warn!("Ignoring invalid HDD_HTTP_TIMEOUT_SECS; using {DEFAULT_TIMEOUT_SECS}s.");
                defaults.timeout_secs
            }
            None => defaults.timeout_secs,
        };

        Self {
            user_agent: get("HDD_USER_AGENT").unwrap_or(defaults.user_agent),
            forecast_base_url: get("HDD_NWS_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.forecast_base_url),
            historical_base_url: get("HDD_ARCHIVE_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.historical_base_url),
            timeout_secs,
        }
    }
}

/// Location + window + source selection shared by every command.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub lat: f64,
    pub lon: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub source: Source,
    pub base_temp: f64,
}

/// `hdd days`
#[derive(Debug, Clone, PartialEq)]
pub struct DaysConfig {
    pub query: QueryConfig,
    pub export: Option<PathBuf>,
}

/// `hdd regress`
#[derive(Debug, Clone, PartialEq)]
pub struct RegressConfig {
    pub query: QueryConfig,
    pub energy_csv: PathBuf,
    pub column: String,
    pub field: DegreeDayField,
    pub export_model: Option<PathBuf>,
}

/// Parameters of the synthetic energy series used by `hdd demo`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    pub seed: u64,
    /// Consumption independent of weather (per day).
    pub base_load: f64,
    /// Consumption per degree day.
    pub sensitivity: f64,
    /// Standard deviation of the additive noise.
    pub noise_sd: f64,
}

/// `hdd demo`
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub query: QueryConfig,
    pub field: DegreeDayField,
    pub sample: SampleConfig,
}
