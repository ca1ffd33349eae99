//! Thread-safe deposit storage for parallel accrual
//!
//! This module provides the `AsyncDepositStore` struct, which keeps deposits in
//! a `DashMap` so that many tasks can accrue different deposits at once.
//!
//! # Thread Safety
//!
//! Each deposit is updated under its own entry write guard, which gives a
//! single writer per deposit. Deposits in different shards never contend, and
//! no lock spans more than one deposit.

use crate::core::calculator::{AccrualOutcome, InterestCalculator};
use crate::types::{DepositError, DepositId, TimeDeposit};
use dashmap::DashMap;

/// Concurrent deposit store
///
/// # Performance
///
/// For a single-threaded pass the plain `DepositStore` is cheaper; this type
/// pays for sharded locking so the batch processor can fan out.
#[derive(Debug, Default)]
pub struct AsyncDepositStore {
    /// Deposits by id
    ///
    /// DashMap shards internally, so concurrent access to different ids does
    /// not take a global lock.
    deposits: DashMap<DepositId, TimeDeposit>,
}

impl AsyncDepositStore {
    pub fn new() -> Self {
        Self {
            deposits: DashMap::new(),
        }
    }

    /// Add a new deposit, rejecting ids that are already present
    ///
    /// # Thread Safety
    ///
    /// The presence check and the insert happen under the same entry lock, so
    /// two tasks inserting the same id cannot both succeed.
    pub fn insert(&self, deposit: TimeDeposit) -> Result<(), DepositError> {
        let id = deposit.id;
        let mut inserted = false;
        self.deposits.entry(id).or_insert_with(|| {
            inserted = true;
            deposit
        });

        if inserted {
            Ok(())
        } else {
            Err(DepositError::duplicate_deposit(id))
        }
    }

    /// Snapshot of a single deposit
    pub fn get(&self, id: DepositId) -> Option<TimeDeposit> {
        self.deposits.get(&id).map(|entry| entry.value().clone())
    }

    /// Accrue interest on one stored deposit while holding its write guard
    ///
    /// # Errors
    ///
    /// Returns `DepositError::DepositNotFound` if the id is not stored, or
    /// whatever [`InterestCalculator::accrue`] reports.
    pub fn accrue(
        &self,
        id: DepositId,
        calculator: &InterestCalculator,
    ) -> Result<AccrualOutcome, DepositError> {
        let mut entry = self
            .deposits
            .get_mut(&id)
            .ok_or_else(|| DepositError::deposit_not_found(id))?;
        calculator.accrue(entry.value_mut())
    }

    /// All deposits, sorted by id
    pub fn get_all_deposits(&self) -> Vec<TimeDeposit> {
        let mut deposits: Vec<TimeDeposit> = self
            .deposits
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        deposits.sort_by_key(|deposit| deposit.id);
        deposits
    }

    pub fn len(&self) -> usize {
        self.deposits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }
}
