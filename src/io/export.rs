//! Export degree-day results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::DegreeDaysResult;
use crate::error::DegreeDayError;

pub const DEGREE_DAYS_HEADER: &str = "date,high_temp,low_temp,mean_temp,hdd,cdd";

/// Write degree-day results to a CSV file.
pub fn write_degree_days_csv(path: &Path, results: &[DegreeDaysResult]) -> Result<(), DegreeDayError> {
    let file = File::create(path)
        .map_err(|e| DegreeDayError::Io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_degree_days(file, results)
        .map_err(|e| DegreeDayError::Io(format!("Failed to write export CSV '{}': {e}", path.display())))
}

/// Write degree-day rows (with header) to any writer.
pub fn write_degree_days<W: Write>(mut out: W, results: &[DegreeDaysResult]) -> std::io::Result<()> {
    writeln!(out, "{DEGREE_DAYS_HEADER}")?;
    for r in results {
        writeln!(
            out,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            r.date(),
            r.high_temp(),
            r.low_temp(),
            r.mean_temp(),
            r.hdd(),
            r.cdd()
        )?;
    }
    out.flush()
}
