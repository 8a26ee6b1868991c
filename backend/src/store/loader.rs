//! CSV loading for the launch record set.
//!
//! The file is read into a Polars `DataFrame`, checked against the fixed
//! schema, then converted row by row into [`LaunchRecord`]s.

use log::{debug, info, warn};
use polars::prelude::*;
use std::path::Path;

use super::error::LoadError;
use crate::models::{FlightNumber, LaunchRecord, Outcome};

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";
pub const FLIGHT_NUMBER_COLUMN: &str = "Flight Number";
pub const BOOSTER_VERSION_COLUMN: &str = "Booster Version";

/// Columns every source must carry. Anything else is optional or ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    LAUNCH_SITE_COLUMN,
    PAYLOAD_MASS_COLUMN,
    CLASS_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
];

/// Load and validate the launch records at `path`.
pub fn load_records(path: &Path) -> Result<Vec<LaunchRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let df = read_csv(path)?;
    debug!(
        "Read {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    let records = dataframe_to_records(&df)?;
    info!(
        "Loaded {} launch records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse the CSV file into a DataFrame without any schema checks.
pub fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| LoadError::read(path, e))
}

/// Convert a DataFrame with the launch schema into records.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<LaunchRecord>, LoadError> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !column_names.iter().any(|name| name == *required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::SchemaMismatch { missing });
    }

    // Integer-looking columns are inferred as i64; cast everything numeric to f64.
    let sites = string_column(df, LAUNCH_SITE_COLUMN)?;
    let payloads = float_column(df, PAYLOAD_MASS_COLUMN)?;
    let classes = float_column(df, CLASS_COLUMN)?;
    let categories = string_column(df, BOOSTER_CATEGORY_COLUMN)?;

    let flight_numbers = optional_column(&column_names, FLIGHT_NUMBER_COLUMN, || {
        float_column(df, FLIGHT_NUMBER_COLUMN)
    });
    let booster_versions = optional_column(&column_names, BOOSTER_VERSION_COLUMN, || {
        string_column(df, BOOSTER_VERSION_COLUMN)
    });

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let site = sites
            .get(row)
            .ok_or_else(|| LoadError::invalid_value(row, LAUNCH_SITE_COLUMN, "missing value"))?;

        let payload = payloads
            .get(row)
            .ok_or_else(|| LoadError::invalid_value(row, PAYLOAD_MASS_COLUMN, "missing value"))?;
        if !payload.is_finite() || payload < 0.0 {
            return Err(LoadError::invalid_value(
                row,
                PAYLOAD_MASS_COLUMN,
                format!("expected a non-negative mass, got {}", payload),
            ));
        }

        let class = classes
            .get(row)
            .ok_or_else(|| LoadError::invalid_value(row, CLASS_COLUMN, "missing value"))?;
        let outcome = Outcome::from_class(class).ok_or_else(|| {
            LoadError::invalid_value(row, CLASS_COLUMN, format!("expected 0 or 1, got {}", class))
        })?;

        let category = categories.get(row).ok_or_else(|| {
            LoadError::invalid_value(row, BOOSTER_CATEGORY_COLUMN, "missing value")
        })?;

        let mut record = LaunchRecord::new(site, payload, outcome, category);
        if let Some(number) = flight_numbers.as_ref().and_then(|col| col.get(row)) {
            if number.is_finite() && number >= 0.0 && number.fract() == 0.0 {
                record = record.with_flight_number(FlightNumber::new(number as u32));
            }
        }
        if let Some(version) = booster_versions.as_ref().and_then(|col| col.get(row)) {
            record = record.with_booster_version(version);
        }

        records.push(record);
    }

    Ok(records)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked, LoadError> {
    df.column(name)
        .and_then(|column| column.cast(&DataType::Float64))
        .and_then(|column| column.f64().cloned())
        .map_err(|e| LoadError::column_type(name, e))
}

fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked, LoadError> {
    df.column(name)
        .and_then(|column| column.cast(&DataType::String))
        .and_then(|column| column.str().cloned())
        .map_err(|e| LoadError::column_type(name, e))
}

/// Optional columns that fail to convert are dropped with a warning.
fn optional_column<T, F>(column_names: &[String], name: &str, extract: F) -> Option<T>
where
    F: FnOnce() -> Result<T, LoadError>,
{
    if !column_names.iter().any(|n| n == name) {
        return None;
    }
    match extract() {
        Ok(column) => Some(column),
        Err(e) => {
            warn!("Ignoring optional column '{}': {}", name, e);
            None
        }
    }
}
