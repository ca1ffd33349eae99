//! I/O module
//!
//! Handles deposit parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `json_format` - JSON wire shape for deposits and withdrawals
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod json_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, write_deposits_csv, CsvRecord};
pub use json_format::{parse_deposits_json, write_deposits_json, DepositDto};
pub use sync_reader::SyncReader;

use crate::types::{DepositError, TimeDeposit};
use clap::ValueEnum;
use std::io::Write;
use std::path::Path;

/// Serialization format for deposit files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DataFormat {
    #[default]
    Csv,
    Json,
}

impl DataFormat {
    /// Pick a format from the file extension; anything but `.json` is CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DataFormat::Json,
            _ => DataFormat::Csv,
        }
    }
}

/// Write deposits in the requested format, sorted by id
pub fn write_deposits(
    deposits: &[TimeDeposit],
    format: DataFormat,
    output: &mut dyn Write,
) -> Result<(), DepositError> {
    match format {
        DataFormat::Csv => write_deposits_csv(deposits, output),
        DataFormat::Json => write_deposits_json(deposits, output),
    }
}
