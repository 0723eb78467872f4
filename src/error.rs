//! Error types.
//!
//! Two layers:
//!
//! - [`DegreeDayError`]: the typed failures raised by the library (coordinates,
//!   providers, unit sanity checks, alignment, regression).
//! - [`AppError`]: what the `hdd` binary reports, a message plus a process exit code.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised by the degree-day pipeline.
#[derive(Debug, Error)]
pub enum DegreeDayError {
    #[error("Invalid coordinates: ({lat}, {lon})")]
    InvalidCoordinates { lat: f64, lon: f64 },

    /// Transport or payload failure from a weather provider.
    #[error("{}", format_source_message(.message, .status, .url))]
    DataSource {
        message: String,
        status: Option<u16>,
        url: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Unknown source '{0}'. Choose 'forecast' (nws) or 'historical' (meteostat/archive).")]
    UnknownSource(String),

    #[error("Temperature values look suspicious after conversion: high={high}, low={low}")]
    SuspiciousTemperature { high: f64, low: f64 },

    #[error("No overlapping dates between degree days and energy data.")]
    NoOverlap,

    #[error("Energy data is missing required '{column}' column. Available columns: {available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Regression failed: {0}")]
    Regression(String),

    #[error("{0}")]
    Io(String),
}

impl DegreeDayError {
    /// Provider failure without an underlying cause.
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource {
            message: message.into(),
            status: None,
            url: None,
            source: None,
        }
    }

    /// Provider failure wrapping the error that caused it.
    pub fn data_source_caused_by(
        message: impl Into<String>,
        url: Option<&str>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::DataSource {
            message: message.into(),
            status: None,
            url: url.map(str::to_string),
            source: Some(source.into()),
        }
    }

    /// Provider answered with a non-success HTTP status.
    pub fn http_status(message: impl Into<String>, status: u16, url: &str) -> Self {
        Self::DataSource {
            message: message.into(),
            status: Some(status),
            url: Some(url.to_string()),
            source: None,
        }
    }
}

fn format_source_message(message: &str, status: &Option<u16>, url: &Option<String>) -> String {
    let mut details = message.to_string();
    if let Some(status) = status {
        details.push_str(&format!(" (HTTP {status})"));
    }
    if let Some(url) = url {
        details.push_str(&format!(" | URL: {url}"));
    }
    details
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<DegreeDayError> for AppError {
    fn from(err: DegreeDayError) -> Self {
        let exit_code = match &err {
            DegreeDayError::InvalidCoordinates { .. }
            | DegreeDayError::UnknownSource(_)
            | DegreeDayError::MissingColumn { .. }
            | DegreeDayError::Io(_) => 2,
            DegreeDayError::NoOverlap
            | DegreeDayError::SuspiciousTemperature { .. }
            | DegreeDayError::Regression(_) => 3,
            DegreeDayError::DataSource { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
