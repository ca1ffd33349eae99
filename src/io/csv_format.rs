//! CSV format handling for deposit records
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Deposit output serialization
//!
//! Input and output share the columns `id,plan_type,balance,days`, so the
//! output of one pass can be fed straight into the next.

use crate::types::{DepositError, DepositId, TimeDeposit};
use serde::Deserialize;
use std::io::Write;

/// Column headers for deposit CSV files
pub const DEPOSIT_HEADERS: [&str; 4] = ["id", "plan_type", "balance", "days"];

/// CSV record structure for deserialization
///
/// `balance` is read as a string so that it is parsed exactly by the money
/// type rather than by a float-based deserializer.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: DepositId,
    pub plan_type: String,
    pub balance: String,
    pub days: u32,
}

/// Convert a CsvRecord to a TimeDeposit
///
/// The plan identifier is kept verbatim (unknown plans are not an error
/// here); the balance must be a non-negative decimal.
///
/// # Errors
///
/// - `DepositError::InvalidAmount` if the balance is not a decimal
/// - `DepositError::NegativeBalance` if it is below zero
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<TimeDeposit, DepositError> {
    TimeDeposit::parse(
        csv_record.id,
        csv_record.plan_type,
        &csv_record.balance,
        csv_record.days,
    )
}

/// Write deposits in CSV format
///
/// Deposits are sorted by id for deterministic output. Balances are written
/// as exact decimal strings with at least two decimal places.
///
/// # Errors
///
/// `DepositError::IoError` if the output cannot be written.
pub fn write_deposits_csv(
    deposits: &[TimeDeposit],
    output: &mut dyn Write,
) -> Result<(), DepositError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record(DEPOSIT_HEADERS)?;

    let mut sorted: Vec<&TimeDeposit> = deposits.iter().collect();
    sorted.sort_by_key(|deposit| deposit.id);

    for deposit in sorted {
        writer.write_record(&[
            deposit.id.to_string(),
            deposit.plan_type.clone(),
            deposit.balance.to_string(),
            deposit.days.to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
