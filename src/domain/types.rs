//! Shared domain types.
//!
//! Every temperature carried by these types is in **°F**. Adapters convert at
//! their boundary; nothing downstream re-converts.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::DegreeDayError;
use crate::math::{degree_days, mean_temperature};

/// Default base temperature (°F).
pub const DEFAULT_BASE_TEMP_F: f64 = 65.0;

/// Temperature unit flag for the strict degree-day variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempUnit {
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "C")]
    Celsius,
}

impl TempUnit {
    /// Parse a provider unit code (`"F"`, `"C"`, `"wmoUnit:degC"`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        match code.as_str() {
            "f" | "degf" | "wmounit:degf" | "fahrenheit" => Some(TempUnit::Fahrenheit),
            "c" | "degc" | "wmounit:degc" | "celsius" => Some(TempUnit::Celsius),
            _ => None,
        }
    }
}

/// A single time-tagged forecast temperature.
///
/// Only lives while a forecast payload is being reduced to daily records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTemperatureReading {
    /// Period start in the provider's local offset.
    pub timestamp: DateTime<FixedOffset>,
    /// Temperature in °F.
    pub temperature: f64,
    pub is_daytime: bool,
}

impl RawTemperatureReading {
    /// Calendar date of the reading (date part of the local timestamp).
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// One calendar day's high/low pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTemperatureRecord {
    date: NaiveDate,
    high: f64,
    low: f64,
}

impl DailyTemperatureRecord {
    pub fn new(date: NaiveDate, high: f64, low: f64) -> Self {
        Self { date, high, low }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }
}

/// Degree days for a single calendar day.
///
/// Built once through [`DegreeDaysResult::compute`]; the derived fields
/// (`mean_temp`, `hdd`, `cdd`) always agree with `high_temp`/`low_temp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DegreeDaysResult {
    date: NaiveDate,
    high_temp: f64,
    low_temp: f64,
    mean_temp: f64,
    hdd: f64,
    cdd: f64,
}

impl DegreeDaysResult {
    /// Derive mean/HDD/CDD from a °F high/low pair.
    pub fn compute(date: NaiveDate, high_temp: f64, low_temp: f64, base_temp: f64) -> Self {
        let (hdd, cdd) = degree_days(high_temp, low_temp, base_temp);
        Self {
            date,
            high_temp,
            low_temp,
            mean_temp: mean_temperature(high_temp, low_temp),
            hdd,
            cdd,
        }
    }

    pub fn from_daily(record: &DailyTemperatureRecord, base_temp: f64) -> Self {
        Self::compute(record.date(), record.high(), record.low(), base_temp)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn high_temp(&self) -> f64 {
        self.high_temp
    }

    pub fn low_temp(&self) -> f64 {
        self.low_temp
    }

    pub fn mean_temp(&self) -> f64 {
        self.mean_temp
    }

    pub fn hdd(&self) -> f64 {
        self.hdd
    }

    pub fn cdd(&self) -> f64 {
        self.cdd
    }

    pub fn value(&self, field: DegreeDayField) -> f64 {
        match field {
            DegreeDayField::Hdd => self.hdd,
            DegreeDayField::Cdd => self.cdd,
        }
    }
}

/// A dated energy-consumption value loaded from caller-supplied data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    pub date: NaiveDate,
    pub value: f64,
}

/// Which degree-day series to regress against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DegreeDayField {
    Hdd,
    Cdd,
}

impl DegreeDayField {
    pub fn label(self) -> &'static str {
        match self {
            DegreeDayField::Hdd => "HDD",
            DegreeDayField::Cdd => "CDD",
        }
    }
}

/// Where daily temperatures come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Live NWS forecast (roughly the next seven days).
    Forecast,
    /// Historical daily min/max archive.
    Historical,
}

impl Source {
    pub fn display_name(self) -> &'static str {
        match self {
            Source::Forecast => "forecast (NWS)",
            Source::Historical => "historical (archive)",
        }
    }
}

impl FromStr for Source {
    type Err = DegreeDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forecast" | "nws" => Ok(Source::Forecast),
            "historical" | "meteostat" | "archive" => Ok(Source::Historical),
            _ => Err(DegreeDayError::UnknownSource(s.to_string())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
