//! Synchronous processing strategy
//!
//! Single-threaded pipeline: records are streamed by `SyncReader` (or parsed
//! from a JSON document), loaded into a `DepositStore`, accrued through
//! `DepositService::update_all_balances`, and written back out.

use crate::core::{AccrualReport, DepositRepository, DepositService, DepositStore};
use crate::io::json_format::parse_deposits_json;
use crate::io::sync_reader::SyncReader;
use crate::io::{write_deposits, DataFormat};
use crate::strategy::{resolve_output_format, ProcessingStrategy};
use crate::types::{DepositError, TimeDeposit};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use time_deposit_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::default();
/// let mut output = io::stdout();
///
/// let report = strategy
///     .process(Path::new("deposits.csv"), &mut output)
///     .expect("Processing failed");
/// println!("credited {} deposits", report.credited);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    output_format: Option<DataFormat>,
}

impl SyncProcessingStrategy {
    pub fn new(output_format: Option<DataFormat>) -> Self {
        Self { output_format }
    }
}

/// Load every valid deposit from `path` into a fresh store
///
/// Invalid records and duplicate ids are logged and skipped; the first
/// occurrence of an id wins.
pub fn load_store(path: &Path) -> Result<DepositStore, DepositError> {
    let mut store = DepositStore::new();
    let mut admit = |deposit: TimeDeposit| {
        if let Err(e) = store.insert(deposit) {
            warn!(error = %e, "skipping deposit");
        }
    };

    match DataFormat::from_path(path) {
        DataFormat::Csv => {
            for result in SyncReader::new(path)? {
                match result {
                    Ok(deposit) => admit(deposit),
                    Err(e) => warn!(error = %e, "skipping invalid deposit record"),
                }
            }
        }
        DataFormat::Json => {
            let bytes = std::fs::read(path).map_err(|e| DepositError::file_open(path, e))?;
            for result in parse_deposits_json(&bytes)? {
                match result {
                    Ok(deposit) => admit(deposit),
                    Err(e) => warn!(error = %e, "skipping invalid deposit record"),
                }
            }
        }
    }

    Ok(store)
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<AccrualReport, DepositError> {
        let store = load_store(input_path)?;
        let mut service = DepositService::new(store);

        let (deposits, report) = service.update_all_balances();

        write_deposits(
            &deposits,
            resolve_output_format(self.output_format, input_path),
            output,
        )?;

        Ok(report)
    }
}
