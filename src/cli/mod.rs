//! Command-line parsing for the degree-day calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! computation code; `app` turns these structs into run configs.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::DegreeDayField;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hdd", version, about = "Heating/Cooling Degree Day calculator with energy regression")]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace). Falls back to HDD_LOG, then `warn`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute daily HDD/CDD for a location and print (or export) them.
    Days(DaysArgs),
    /// Regress energy consumption from a CSV against HDD or CDD.
    Regress(RegressArgs),
    /// Run the regression workflow on a synthetic energy series.
    Demo(DemoArgs),
    /// Apply a saved model JSON to degree-day values.
    Predict(PredictArgs),
}

/// Location, window and source shared by the data-fetching commands.
#[derive(Debug, Args, Clone)]
pub struct QueryArgs {
    /// Latitude in decimal degrees (-90..90).
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees (-180..180).
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// First day (YYYY-MM-DD). Optional for the forecast source (defaults to today).
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day, inclusive (YYYY-MM-DD). Optional for the forecast source.
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Data source: `forecast` (alias `nws`) or `historical` (aliases `meteostat`, `archive`).
    #[arg(long, default_value = "forecast")]
    pub source: String,

    /// Base temperature in °F.
    #[arg(long = "base", default_value_t = 65.0, allow_negative_numbers = true)]
    pub base_temp: f64,
}

#[derive(Debug, Args, Clone)]
pub struct DaysArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Export per-day results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct RegressArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Energy CSV with a `date` column and one or more usage columns.
    #[arg(long, value_name = "CSV")]
    pub energy: PathBuf,

    /// Usage column to regress (e.g. kwh, mmbtu, gal).
    #[arg(long, default_value = "kwh")]
    pub column: String,

    /// Degree-day series used as the regressor.
    #[arg(long, value_enum, default_value_t = DegreeDayField::Hdd)]
    pub field: DegreeDayField,

    /// Export the fitted model to JSON.
    #[arg(long = "export-model", value_name = "JSON")]
    pub export_model: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 40.7128, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, default_value_t = -74.0060, allow_negative_numbers = true)]
    pub lon: f64,

    #[arg(long, default_value = "2023-01-01")]
    pub start: NaiveDate,

    #[arg(long, default_value = "2023-03-31")]
    pub end: NaiveDate,

    #[arg(long, default_value = "historical")]
    pub source: String,

    #[arg(long = "base", default_value_t = 65.0, allow_negative_numbers = true)]
    pub base_temp: f64,

    #[arg(long, value_enum, default_value_t = DegreeDayField::Hdd)]
    pub field: DegreeDayField,

    /// Random seed for the synthetic series.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Weather-independent daily consumption.
    #[arg(long, default_value_t = 300.0)]
    pub base_load: f64,

    /// Consumption per degree day.
    #[arg(long, default_value_t = 12.0, allow_negative_numbers = true)]
    pub sensitivity: f64,

    /// Noise standard deviation.
    #[arg(long, default_value_t = 25.0)]
    pub noise: f64,
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    /// Model JSON produced by `hdd regress --export-model`.
    #[arg(long, value_name = "JSON")]
    pub model: PathBuf,

    /// Degree-day values to predict consumption for.
    #[arg(long = "x", required = true, num_args = 1.., allow_negative_numbers = true)]
    pub x: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_days_with_negative_longitude() {
        let cli = Cli::try_parse_from([
            "hdd", "days", "--lat", "40.7128", "--lon", "-74.0060", "--start", "2024-01-01", "--end", "2024-01-07",
            "--source", "historical",
        ])
        .unwrap();
        let Command::Days(args) = cli.command else {
            panic!("expected days");
        };
        assert_eq!(args.query.lon, -74.006);
        assert_eq!(args.query.start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(args.query.source, "historical");
        assert_eq!(args.query.base_temp, 65.0);
    }

    #[test]
    fn regress_defaults() {
        let cli = Cli::try_parse_from([
            "hdd", "regress", "--lat", "40", "--lon", "-74", "--energy", "usage.csv",
        ])
        .unwrap();
        let Command::Regress(args) = cli.command else {
            panic!("expected regress");
        };
        assert_eq!(args.column, "kwh");
        assert_eq!(args.field, DegreeDayField::Hdd);
        assert!(args.export_model.is_none());
    }

    #[test]
    fn predict_accepts_several_values() {
        let cli = Cli::try_parse_from(["hdd", "--log-level", "debug", "predict", "--model", "m.json", "--x", "0", "12.5"])
            .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.x, vec![0.0, 12.5]);
    }
}
