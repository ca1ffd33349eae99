//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over deposit records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! Result<TimeDeposit, DepositError> for each CSV row:
//!
//! ```no_run
//! use time_deposit_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("deposits.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(deposit) => println!("Loaded deposit {}", deposit.id),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as `DepositError::ParseError`
//! - Line numbers are physical lines of the file; line 1 is the header, and a
//!   quoted field spanning lines advances the count

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{DepositError, TimeDeposit};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one record at a time, so memory use does not grow with file size.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Use an 8KB buffer
    ///
    /// # Errors
    ///
    /// `DepositError::FileNotFound` if the path does not exist,
    /// `DepositError::IoError` if the file could not be opened, or
    /// `DepositError::ParseError` if the header row is unreadable.
    pub fn new(path: &Path) -> Result<Self, DepositError> {
        let file = File::open(path).map_err(|e| DepositError::file_open(path, e))?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    fn parse_current(&self) -> Result<TimeDeposit, DepositError> {
        let line = self.record.position().map(|pos| pos.line());

        let csv_record: CsvRecord = self
            .record
            .deserialize(Some(&self.headers))
            .map_err(|e| DepositError::from(e).at_line(line))?;

        convert_csv_record(csv_record).map_err(|e| e.at_line(line))
    }
}

impl Iterator for SyncReader {
    type Item = Result<TimeDeposit, DepositError>;

    /// Get the next deposit from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(TimeDeposit))` - Successfully parsed record
    /// * `Some(Err(DepositError::ParseError))` - Bad record, tagged with its line
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.parse_current()),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
