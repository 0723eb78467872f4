//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs the logger
//! - builds provider clients from the environment
//! - runs the degree-day / regression pipeline
//! - prints reports and writes optional exports

use chrono::{Days, Local, NaiveDate};
use clap::Parser;

use crate::cli::{Command, DaysArgs, DemoArgs, PredictArgs, QueryArgs, RegressArgs};
use crate::data::DataSourceRouter;
use crate::domain::{
    DaysConfig, DegreeDayField, DemoConfig, ProviderConfig, QueryConfig, RegressConfig, SampleConfig, Source,
};
use crate::error::AppError;
use crate::io::{CsvEnergySource, ModelFile};

pub mod pipeline;

/// NWS publishes about seven days; the default forecast window covers all of them.
const FORECAST_WINDOW_DAYS: u64 = 14;

/// Entry point for the `hdd` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    let env_level = std::env::var(crate::logging::LOG_ENV).ok();
    crate::logging::init(crate::logging::resolve_level(cli.log_level.as_deref(), env_level.as_deref()));

    match cli.command {
        Command::Days(args) => handle_days(args),
        Command::Regress(args) => handle_regress(args),
        Command::Demo(args) => handle_demo(args),
        Command::Predict(args) => handle_predict(args),
    }
}

fn handle_days(args: DaysArgs) -> Result<(), AppError> {
    let config = days_config_from_args(&args, today())?;
    let router = DataSourceRouter::from_config(&ProviderConfig::from_env())?;

    let results = pipeline::fetch_degree_days(&router, &config.query)?;

    println!("{}", crate::report::format_query_header(&config.query));
    println!("{}", crate::report::format_degree_days_table(&results));
    println!("{}", crate::report::format_summary(crate::report::summarize(&results).as_ref()));

    if let Some(path) = &config.export {
        crate::io::write_degree_days_csv(path, &results)?;
        log::info!("Wrote {} rows to {}", results.len(), path.display());
    }
    Ok(())
}

fn handle_regress(args: RegressArgs) -> Result<(), AppError> {
    let config = regress_config_from_args(&args, today())?;
    let router = DataSourceRouter::from_config(&ProviderConfig::from_env())?;
    let energy = CsvEnergySource::new(config.energy_csv.clone());

    let run = pipeline::run_regression(&router, &config.query, &energy, &config.column, config.field)?;

    println!("{}", crate::report::format_query_header(&config.query));
    println!("{}", crate::report::format_summary(crate::report::summarize(&run.degree_days).as_ref()));
    println!(
        "{}",
        crate::report::format_regression(&run.model, config.field, &config.column, &run.fitted)
    );

    if let Some(path) = &config.export_model {
        let file = model_file(&config.query, config.field, &config.column, &run);
        crate::io::write_model_json(path, &file)?;
        log::info!("Wrote model to {}", path.display());
    }
    Ok(())
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = demo_config_from_args(&args)?;
    let router = DataSourceRouter::from_config(&ProviderConfig::from_env())?;

    let run = pipeline::run_demo(&router, &config)?;

    println!("{}", crate::report::format_query_header(&config.query));
    println!(
        "Synthetic energy: {:.1} + {:.2} × {} + N(0, {:.1}²), seed {}",
        config.sample.base_load,
        config.sample.sensitivity,
        config.field.label(),
        config.sample.noise_sd,
        config.sample.seed
    );
    println!(
        "{}",
        crate::report::format_regression(&run.model, config.field, "energy", &run.fitted)
    );
    Ok(())
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let file = crate::io::read_model_json(&args.model)?;
    println!(
        "Model: {} ~ {} at ({:.4}, {:.4}), {} .. {} [{}]",
        file.energy_column,
        file.field.label(),
        file.lat,
        file.lon,
        file.start,
        file.end,
        file.source.display_name()
    );
    for (x, y) in args.x.iter().zip(file.model.predict_many(&args.x)) {
        println!("{} {x:>8.2} -> {} {y:>12.2}", file.field.label(), file.energy_column);
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolve the shared query arguments.
///
/// The forecast source may omit the window (today .. today + 14 days); the
/// historical source needs both ends.
pub fn query_config_from_args(args: &QueryArgs, today: NaiveDate) -> Result<QueryConfig, AppError> {
    let source: Source = args.source.parse()?;
    let (start, end) = match (source, args.start, args.end) {
        (_, Some(start), Some(end)) => (start, end),
        (Source::Forecast, start, end) => {
            let start = start.unwrap_or(today);
            let end = match end {
                Some(end) => end,
                None => start
                    .checked_add_days(Days::new(FORECAST_WINDOW_DAYS))
                    .ok_or_else(|| AppError::new(2, format!("--start ({start}) is out of range.")))?,
            };
            (start, end)
        }
        (Source::Historical, _, _) => {
            return Err(AppError::new(2, "The historical source requires both --start and --end."));
        }
    };
    if end < start {
        return Err(AppError::new(2, format!("--end ({end}) is before --start ({start}).")));
    }
    if !args.base_temp.is_finite() {
        return Err(AppError::new(2, "--base must be a finite temperature."));
    }

    Ok(QueryConfig {
        lat: args.lat,
        lon: args.lon,
        start,
        end,
        source,
        base_temp: args.base_temp,
    })
}

pub fn days_config_from_args(args: &DaysArgs, today: NaiveDate) -> Result<DaysConfig, AppError> {
    Ok(DaysConfig {
        query: query_config_from_args(&args.query, today)?,
        export: args.export.clone(),
    })
}

pub fn regress_config_from_args(args: &RegressArgs, today: NaiveDate) -> Result<RegressConfig, AppError> {
    Ok(RegressConfig {
        query: query_config_from_args(&args.query, today)?,
        energy_csv: args.energy.clone(),
        column: args.column.clone(),
        field: args.field,
        export_model: args.export_model.clone(),
    })
}

pub fn demo_config_from_args(args: &DemoArgs) -> Result<DemoConfig, AppError> {
    let query = QueryArgs {
        lat: args.lat,
        lon: args.lon,
        start: Some(args.start),
        end: Some(args.end),
        source: args.source.clone(),
        base_temp: args.base_temp,
    };
    Ok(DemoConfig {
        query: query_config_from_args(&query, args.start)?,
        field: args.field,
        sample: SampleConfig {
            seed: args.seed,
            base_load: args.base_load,
            sensitivity: args.sensitivity,
            noise_sd: args.noise,
        },
    })
}

fn model_file(
    query: &QueryConfig,
    field: DegreeDayField,
    column: &str,
    run: &pipeline::RegressionOutput,
) -> ModelFile {
    ModelFile {
        tool: "hdd".to_string(),
        lat: query.lat,
        lon: query.lon,
        start: query.start,
        end: query.end,
        source: query.source,
        base_temp_f: query.base_temp,
        field,
        energy_column: column.to_string(),
        model: run.model.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(source: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> QueryArgs {
        QueryArgs {
            lat: 40.7128,
            lon: -74.006,
            start,
            end,
            source: source.to_string(),
            base_temp: 65.0,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn forecast_window_defaults_to_next_two_weeks() {
        let today = d(2024, 1, 10);
        let cfg = query_config_from_args(&query("nws", None, None), today).unwrap();
        assert_eq!(cfg.source, Source::Forecast);
        assert_eq!(cfg.start, today);
        assert_eq!(cfg.end, d(2024, 1, 24));
    }

    #[test]
    fn historical_requires_window() {
        let err = query_config_from_args(&query("historical", Some(d(2023, 1, 1)), None), d(2024, 1, 1)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn inverted_window_rejected() {
        let err = query_config_from_args(
            &query("historical", Some(d(2023, 2, 1)), Some(d(2023, 1, 1))),
            d(2024, 1, 1),
        )
        .unwrap_err();
        assert!(err.to_string().contains("before"));
    }

    #[test]
    fn forecast_window_past_max_date_is_usage_error() {
        let err = query_config_from_args(&query("forecast", Some(NaiveDate::MAX), None), d(2024, 1, 1)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn unknown_source_maps_to_usage_error() {
        let err = query_config_from_args(&query("almanac", None, None), d(2024, 1, 1)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("almanac"));
    }
}
