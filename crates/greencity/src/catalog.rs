//! Catalog ingestion from delimited text.
//!
//! The expected layout is one header line followed by one device per line:
//!
//! ```text
//! DeviceName,Category,CostTRY,EnergySaved_kWh,SustainabilityScore
//! LED Retrofit,Lighting,320.50,85.5,3
//! ```
//!
//! Rows that cannot be turned into a valid [`Device`] are skipped with a
//! warning; they never abort the load.

use std::path::{Path, PathBuf};

use greencity_config::CatalogConfig;
use greencity_core::Device;
use thiserror::Error;
use tracing::{info, warn};

const FIELD_COUNT: usize = 5;

/// Errors that abort loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is empty: {}", .0.display())]
    Empty(PathBuf),
}

/// Why a single row was skipped.
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("expected 5 fields, found {0}")]
    MissingFields(usize),

    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a finite non-negative amount, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Reads and parses a catalog file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read and
/// [`CatalogError::Empty`] if it has no lines at all.
pub fn load_catalog(
    path: impl AsRef<Path>,
    config: &CatalogConfig,
) -> Result<Vec<Device>, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if contents.lines().next().is_none() {
        return Err(CatalogError::Empty(path.to_path_buf()));
    }

    let devices = parse_catalog(&contents, config);
    info!(
        event = "catalog_loaded",
        count = devices.len() as u64,
        path = %path.display(),
    );
    Ok(devices)
}

/// Parses catalog text, skipping the header (if configured) and every row
/// that fails [`parse_row`].
pub fn parse_catalog(text: &str, config: &CatalogConfig) -> Vec<Device> {
    let delimiter = config.delimiter_char();
    let skip = usize::from(config.has_header);

    text.lines()
        .enumerate()
        .skip(skip)
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match parse_row(line, delimiter) {
            Ok(device) => Some(device),
            Err(reason) => {
                warn!(
                    event = "row_skipped",
                    line = (index + 1) as u64,
                    reason = %reason,
                );
                None
            }
        })
        .collect()
}

/// Parses one data row. Fields are trimmed; fields past the fifth are ignored.
pub fn parse_row(line: &str, delimiter: char) -> Result<Device, RowError> {
    let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
    if fields.len() < FIELD_COUNT {
        return Err(RowError::MissingFields(fields.len()));
    }

    let cost = parse_amount("cost", fields[2])?;
    let energy = parse_amount("energy saved", fields[3])?;
    let score = fields[4]
        .parse::<u32>()
        .map_err(|_| RowError::NotANumber {
            field: "sustainability score",
            value: fields[4].to_string(),
        })?;

    Ok(Device::new(fields[0], fields[1], cost, energy, score))
}

fn parse_amount(field: &'static str, raw: &str) -> Result<f64, RowError> {
    let value = raw.parse::<f64>().map_err(|_| RowError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(RowError::OutOfRange { field, value });
    }
    Ok(value)
}
