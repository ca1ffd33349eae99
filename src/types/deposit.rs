//! Time deposit records
//!
//! A [`TimeDeposit`] is the unit the accrual engine works on. Identity, plan
//! and elapsed days are fixed for a pass; only the balance changes.

use crate::types::error::DepositError;
use crate::types::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deposit identifier, assigned by the caller and never interpreted
pub type DepositId = u32;

/// Withdrawal identifier
pub type WithdrawalId = u32;

/// Balance-bearing deposit accruing interest under a named plan
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDeposit {
    pub id: DepositId,

    /// Plan identifier as supplied by the caller
    ///
    /// Kept verbatim so that identifiers without a rule (legacy codes,
    /// typos) survive a load/save round trip untouched.
    pub plan_type: String,

    /// Current balance; never negative in a valid record
    pub balance: Money,

    /// Days elapsed since the deposit was opened or last accrued
    pub days: u32,

    /// Withdrawal history, carried for reporting only
    pub withdrawals: Vec<Withdrawal>,
}

impl TimeDeposit {
    /// Create a deposit, rejecting negative balances
    ///
    /// # Errors
    ///
    /// Returns `DepositError::NegativeBalance` if `balance` is below zero.
    pub fn new(
        id: DepositId,
        plan_type: impl Into<String>,
        balance: Money,
        days: u32,
    ) -> Result<Self, DepositError> {
        if balance.is_negative() {
            return Err(DepositError::negative_balance(id, balance.as_decimal()));
        }

        Ok(TimeDeposit {
            id,
            plan_type: plan_type.into(),
            balance,
            days,
            withdrawals: Vec::new(),
        })
    }

    /// Create a deposit from a textual balance
    ///
    /// # Errors
    ///
    /// Returns `DepositError::InvalidAmount` for non-numeric input and
    /// `DepositError::NegativeBalance` for negative amounts.
    pub fn parse(
        id: DepositId,
        plan_type: impl Into<String>,
        balance: &str,
        days: u32,
    ) -> Result<Self, DepositError> {
        let balance: Money = balance.parse()?;
        Self::new(id, plan_type, balance, days)
    }

    pub fn with_withdrawals(mut self, withdrawals: Vec<Withdrawal>) -> Self {
        self.withdrawals = withdrawals;
        self
    }
}

/// Money taken out of a deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: WithdrawalId,

    #[serde(rename = "timeDepositId")]
    pub deposit_id: DepositId,

    pub amount: Money,

    pub date: DateTime<Utc>,
}
