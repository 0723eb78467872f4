//! Reduce time-tagged forecast readings to one high/low record per day.
//!
//! Rules:
//! - readings are grouped by the calendar date of their local timestamp
//! - high = max over daytime readings, low = min over nighttime readings
//! - a date needs both a daytime and a nighttime reading to be emitted;
//!   days with only one side are dropped, never interpolated
//! - output is sorted ascending by date

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{DailyTemperatureRecord, RawTemperatureReading};

#[derive(Debug, Default, Clone, Copy)]
struct DayExtremes {
    high: Option<f64>,
    low: Option<f64>,
}

pub fn aggregate_daily(readings: &[RawTemperatureReading]) -> Vec<DailyTemperatureRecord> {
    let mut days: BTreeMap<NaiveDate, DayExtremes> = BTreeMap::new();

    for reading in readings {
        let entry = days.entry(reading.date()).or_default();
        let t = reading.temperature;
        if reading.is_daytime {
            entry.high = Some(entry.high.map_or(t, |h| h.max(t)));
        } else {
            entry.low = Some(entry.low.map_or(t, |l| l.min(t)));
        }
    }

    let mut out = Vec::with_capacity(days.len());
    for (date, extremes) in days {
        match (extremes.high, extremes.low) {
            (Some(high), Some(low)) => out.push(DailyTemperatureRecord::new(date, high, low)),
            _ => log::debug!("Dropping partial day {date} (high={:?}, low={:?})", extremes.high, extremes.low),
        }
    }
    out
}
