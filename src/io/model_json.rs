//! Read/write fitted model JSON files.
//!
//! Model JSON is the portable representation of a regression run: the fitted
//! line plus enough metadata (location, window, source, series) to know what it
//! was fitted on. `hdd predict` reads it back.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DegreeDayField, Source};
use crate::error::DegreeDayError;
use crate::models::LinearModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub lat: f64,
    pub lon: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub source: Source,
    pub base_temp_f: f64,
    pub field: DegreeDayField,
    pub energy_column: String,
    pub model: LinearModel,
}

/// Write a model JSON file.
pub fn write_model_json(path: &Path, model: &ModelFile) -> Result<(), DegreeDayError> {
    let file = File::create(path)
        .map_err(|e| DegreeDayError::Io(format!("Failed to create model JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, model)
        .map_err(|e| DegreeDayError::Io(format!("Failed to write model JSON: {e}")))
}

/// Read a model JSON file.
pub fn read_model_json(path: &Path) -> Result<ModelFile, DegreeDayError> {
    let file = File::open(path)
        .map_err(|e| DegreeDayError::Io(format!("Failed to open model JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| DegreeDayError::Io(format!("Invalid model JSON: {e}")))
}
