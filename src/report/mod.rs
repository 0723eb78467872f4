//! Reporting utilities: series summaries, regression residuals, and formatted
//! terminal output.

use chrono::NaiveDate;

use crate::domain::DegreeDaysResult;
use crate::models::LinearModel;
use crate::series::AlignedSeries;

pub mod format;

pub use format::*;

/// Totals over a degree-day series.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeDaySummary {
    pub days: usize,
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub total_hdd: f64,
    pub total_cdd: f64,
    pub mean_temp: f64,
}

/// Summarize a series; `None` when it is empty.
pub fn summarize(results: &[DegreeDaysResult]) -> Option<DegreeDaySummary> {
    let first = results.iter().map(|r| r.date()).min()?;
    let last = results.iter().map(|r| r.date()).max()?;
    let n = results.len() as f64;
    Some(DegreeDaySummary {
        days: results.len(),
        first,
        last,
        total_hdd: results.iter().map(|r| r.hdd()).sum(),
        total_cdd: results.iter().map(|r| r.cdd()).sum(),
        mean_temp: results.iter().map(|r| r.mean_temp()).sum::<f64>() / n,
    })
}

/// One aligned day with its fitted value.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedDay {
    pub date: NaiveDate,
    pub degree_days: f64,
    pub energy: f64,
    pub fitted: f64,
    pub residual: f64,
}

/// Fitted values and residuals for each aligned day.
pub fn fitted_days(series: &AlignedSeries, model: &LinearModel) -> Vec<FittedDay> {
    series
        .dates()
        .iter()
        .zip(series.degree_day_values())
        .zip(series.energy_values())
        .map(|((&date, &x), &y)| {
            let fitted = model.predict(x);
            FittedDay {
                date,
                degree_days: x,
                energy: y,
                fitted,
                residual: y - fitted,
            }
        })
        .collect()
}
