//! Shared pipeline logic used by the CLI commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! router fetch -> (period window) -> energy load -> date alignment -> linear fit
//!
//! Every function is generic over the providers, so the whole flow runs
//! against in-memory providers in tests.

use crate::data::{DataSourceRouter, ForecastProvider, HistoricalProvider, generate_energy_sample};
use crate::domain::{DegreeDayField, DegreeDaysResult, DemoConfig, EnergyRecord, QueryConfig};
use crate::error::{AppError, DegreeDayError};
use crate::io::EnergyDataSource;
use crate::models::{LinearModel, fit_linear};
use crate::report::{FittedDay, fitted_days};
use crate::series::{AlignedSeries, align};

/// All computed outputs of a regression run.
#[derive(Debug, Clone)]
pub struct RegressionOutput {
    pub degree_days: Vec<DegreeDaysResult>,
    pub series: AlignedSeries,
    pub model: LinearModel,
    pub fitted: Vec<FittedDay>,
}

/// Fetch degree days for the configured location, window and source.
pub fn fetch_degree_days<F: ForecastProvider, H: HistoricalProvider>(
    router: &DataSourceRouter<F, H>,
    query: &QueryConfig,
) -> Result<Vec<DegreeDaysResult>, DegreeDayError> {
    router.get_degree_days(query.lat, query.lon, query.start, query.end, query.source, query.base_temp)
}

/// Align degree days with energy records and fit `energy ~ degree days`.
pub fn regress_on_energy(
    degree_days: Vec<DegreeDaysResult>,
    energy: &[EnergyRecord],
    field: DegreeDayField,
) -> Result<RegressionOutput, DegreeDayError> {
    let series = align(&degree_days, energy, field)?;
    let model = fit_linear(series.degree_day_values(), series.energy_values())?;
    let fitted = fitted_days(&series, &model);
    log::info!(
        "Fitted energy ~ {} on {} days: slope={:.4} intercept={:.4} r2={:.4}",
        field.label(),
        model.n,
        model.slope,
        model.intercept,
        model.r_squared
    );

    Ok(RegressionOutput {
        degree_days,
        series,
        model,
        fitted,
    })
}

/// Fetch degree days, load `column` from `energy`, align, and fit.
pub fn run_regression<F, H, S>(
    router: &DataSourceRouter<F, H>,
    query: &QueryConfig,
    energy: &S,
    column: &str,
    field: DegreeDayField,
) -> Result<RegressionOutput, DegreeDayError>
where
    F: ForecastProvider,
    H: HistoricalProvider,
    S: EnergyDataSource + ?Sized,
{
    // Energy column is checked before any provider request.
    let records = energy.load_column(column)?;
    let degree_days = fetch_degree_days(router, query)?;
    regress_on_energy(degree_days, &records, field)
}

/// Fetch degree days and regress a synthetic energy series generated from them.
pub fn run_demo<F: ForecastProvider, H: HistoricalProvider>(
    router: &DataSourceRouter<F, H>,
    config: &DemoConfig,
) -> Result<RegressionOutput, AppError> {
    let degree_days = fetch_degree_days(router, &config.query)?;
    let energy = generate_energy_sample(&degree_days, config.field, &config.sample)?;
    Ok(regress_on_energy(degree_days, &energy, config.field)?)
}
