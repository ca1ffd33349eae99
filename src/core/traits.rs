//! Core traits for deposit storage
//!
//! The accrual engine never loads or saves deposits itself. Storage sits
//! behind [`DepositRepository`] so the service layer can be tested against an
//! in-memory store and pointed at something durable later.

use crate::types::{DepositError, DepositId, TimeDeposit};

/// Trait for loading and saving time deposits
pub trait DepositRepository {
    /// All deposits, sorted by id
    fn find_all(&self) -> Vec<TimeDeposit>;

    /// A single deposit by id
    fn find_by_id(&self, id: DepositId) -> Option<TimeDeposit>;

    /// Add a new deposit, rejecting ids that are already present
    fn insert(&mut self, deposit: TimeDeposit) -> Result<(), DepositError>;

    /// Insert or replace a deposit, returning what was stored
    fn save(&mut self, deposit: TimeDeposit) -> TimeDeposit;

    /// Insert or replace many deposits, returning them sorted by id
    fn save_many(&mut self, deposits: Vec<TimeDeposit>) -> Vec<TimeDeposit>;

    /// Number of stored deposits
    fn count(&self) -> usize;
}
