//! Energy-consumption CSV ingest.
//!
//! Expected layout: a `date` column plus one or more numeric usage columns
//! (`kwh`, `mmbtu`, `gal`, ...). Only the requested column is read.
//!
//! - header names are normalized (trim, BOM strip, lowercase)
//! - a missing `date` or usage column fails the load with `MissingColumn`
//! - rows with a blank value are skipped, like a `dropna`; non-numeric values
//!   are skipped with a per-line warning
//! - a row with an unreadable date is skipped and reported in the log

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use crate::domain::EnergyRecord;
use crate::error::DegreeDayError;

const DATE_COLUMN: &str = "date";

/// Somewhere a named energy column can be loaded from.
pub trait EnergyDataSource {
    fn load_column(&self, column: &str) -> Result<Vec<EnergyRecord>, DegreeDayError>;
}

/// Energy data stored in a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvEnergySource {
    path: PathBuf,
}

impl CsvEnergySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EnergyDataSource for CsvEnergySource {
    fn load_column(&self, column: &str) -> Result<Vec<EnergyRecord>, DegreeDayError> {
        let file = File::open(&self.path).map_err(|e| {
            DegreeDayError::Io(format!("Failed to open energy CSV '{}': {e}", self.path.display()))
        })?;
        read_energy_records(file, column)
    }
}

/// Read `(date, column)` pairs from CSV text.
pub fn read_energy_records<R: Read>(reader: R, column: &str) -> Result<Vec<EnergyRecord>, DegreeDayError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| DegreeDayError::Io(format!("Failed to read energy CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);
    let wanted = normalize_header_name(column);

    let missing = |name: &str| DegreeDayError::MissingColumn {
        column: name.to_string(),
        available: headers.iter().map(|h| normalize_header_name(h)).collect(),
    };
    let date_idx = *header_map.get(DATE_COLUMN).ok_or_else(|| missing(DATE_COLUMN))?;
    let value_idx = *header_map.get(&wanted).ok_or_else(|| missing(column))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header; CSV lines are 1-based.
        let line = idx + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Energy CSV line {line}: parse error: {e}");
                skipped += 1;
                continue;
            }
        };

        let raw = record.get(value_idx).map(str::trim).unwrap_or("");
        if raw.is_empty() {
            skipped += 1;
            continue;
        }
        let Some(value) = parse_opt_f64(Some(raw)) else {
            log::warn!("Energy CSV line {line}: invalid '{wanted}' value '{raw}'");
            skipped += 1;
            continue;
        };
        match record.get(date_idx).map(parse_date) {
            Some(Ok(date)) => records.push(EnergyRecord { date, value }),
            Some(Err(e)) => {
                log::warn!("Energy CSV line {line}: {e}");
                skipped += 1;
            }
            None => skipped += 1,
        }
    }

    log::info!("Loaded {} '{}' energy rows ({} skipped)", records.len(), wanted, skipped);
    Ok(records)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    // ISO first; then a few common spreadsheet formats; then an ISO datetime,
    // whose date part is used.
    const FMTS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d-%m-%Y"];
    for fmt in FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    Err(format!(
        "Invalid date '{s}'. Expected one of: YYYY-MM-DD, MM/DD/YYYY, YYYY/MM/DD, DD-MM-YYYY."
    ))
}

fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    let s = s?;
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}
