//! JSON format handling for deposit records
//!
//! Deposits travel as camelCase objects with monetary amounts encoded as
//! strings, so no precision is lost to floating point:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "planType": "basic",
//!     "balance": "5000.00",
//!     "days": 30,
//!     "withdrawals": [
//!       { "id": 1, "timeDepositId": 1, "amount": "1000.00", "date": "2024-01-01T00:00:00Z" }
//!     ]
//!   }
//! ]
//! ```

use crate::types::{DepositError, DepositId, Money, TimeDeposit, Withdrawal};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Wire shape of a deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositDto {
    pub id: DepositId,
    pub plan_type: String,
    pub balance: Money,
    pub days: u32,
    #[serde(default)]
    pub withdrawals: Vec<Withdrawal>,
}

impl From<&TimeDeposit> for DepositDto {
    fn from(deposit: &TimeDeposit) -> Self {
        DepositDto {
            id: deposit.id,
            plan_type: deposit.plan_type.clone(),
            balance: deposit.balance,
            days: deposit.days,
            withdrawals: deposit.withdrawals.clone(),
        }
    }
}

impl TryFrom<DepositDto> for TimeDeposit {
    type Error = DepositError;

    fn try_from(dto: DepositDto) -> Result<Self, Self::Error> {
        Ok(TimeDeposit::new(dto.id, dto.plan_type, dto.balance, dto.days)?
            .with_withdrawals(dto.withdrawals))
    }
}

/// Parse a JSON array of deposits
///
/// The document must be well-formed JSON holding an array. Each element is
/// decoded on its own: a deposit with a missing field, an unparsable amount
/// or a negative balance comes back as an error in its slot, so the caller
/// decides whether to skip it.
pub fn parse_deposits_json(
    bytes: &[u8],
) -> Result<Vec<Result<TimeDeposit, DepositError>>, DepositError> {
    let elements: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    Ok(elements.into_iter().map(parse_deposit_value).collect())
}

fn parse_deposit_value(value: serde_json::Value) -> Result<TimeDeposit, DepositError> {
    let dto: DepositDto = serde_json::from_value(value)?;
    TimeDeposit::try_from(dto)
}

/// Write deposits as a pretty-printed JSON array, sorted by id
pub fn write_deposits_json(
    deposits: &[TimeDeposit],
    output: &mut dyn Write,
) -> Result<(), DepositError> {
    let mut dtos: Vec<DepositDto> = deposits.iter().map(DepositDto::from).collect();
    dtos.sort_by_key(|dto| dto.id);

    serde_json::to_writer_pretty(&mut *output, &dtos)?;
    writeln!(output)?;
    Ok(())
}
