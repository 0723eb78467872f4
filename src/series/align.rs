//! Date alignment between degree days and energy consumption.
//!
//! The join is an inner join on exact calendar date. Energy rows sharing a
//! date are summed (several meter reads on one day count as that day's use).
//! Degree-day results are one-per-date by construction; should a caller pass
//! duplicates, the last one wins.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{DegreeDayField, DegreeDaysResult, EnergyRecord};
use crate::error::DegreeDayError;
use crate::io::EnergyDataSource;

/// Equal-length series matched by date, ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    dates: Vec<NaiveDate>,
    degree_day_values: Vec<f64>,
    energy_values: Vec<f64>,
}

impl AlignedSeries {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn degree_day_values(&self) -> &[f64] {
        &self.degree_day_values
    }

    pub fn energy_values(&self) -> &[f64] {
        &self.energy_values
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// `(energy_values, degree_day_values)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.energy_values, self.degree_day_values)
    }
}

pub fn align(
    degree_days: &[DegreeDaysResult],
    energy: &[EnergyRecord],
    field: DegreeDayField,
) -> Result<AlignedSeries, DegreeDayError> {
    let dd_by_date: BTreeMap<NaiveDate, f64> = degree_days.iter().map(|r| (r.date(), r.value(field))).collect();

    let mut energy_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in energy {
        *energy_by_date.entry(record.date).or_insert(0.0) += record.value;
    }

    let mut dates = Vec::new();
    let mut degree_day_values = Vec::new();
    let mut energy_values = Vec::new();
    for (date, dd) in &dd_by_date {
        if let Some(value) = energy_by_date.get(date) {
            dates.push(*date);
            degree_day_values.push(*dd);
            energy_values.push(*value);
        }
    }

    if dates.is_empty() {
        return Err(DegreeDayError::NoOverlap);
    }

    log::info!(
        "Aligned {} of {} degree-day dates with {} energy dates",
        dates.len(),
        dd_by_date.len(),
        energy_by_date.len()
    );

    Ok(AlignedSeries {
        dates,
        degree_day_values,
        energy_values,
    })
}

/// Load `column` from an energy source and align it with `degree_days`.
pub fn align_from_source<S: EnergyDataSource + ?Sized>(
    degree_days: &[DegreeDaysResult],
    source: &S,
    column: &str,
    field: DegreeDayField,
) -> Result<AlignedSeries, DegreeDayError> {
    let energy = source.load_column(column)?;
    align(degree_days, &energy, field)
}
