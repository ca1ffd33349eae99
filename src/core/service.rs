//! Deposit service
//!
//! Wires a [`DepositRepository`] to the [`InterestCalculator`]. This is the
//! layer a scheduler or API handler calls: list deposits, look one up, or run
//! an accrual pass over everything in storage and save the result.

use crate::core::calculator::{AccrualReport, InterestCalculator};
use crate::core::traits::DepositRepository;
use crate::types::{DepositId, TimeDeposit};
use tracing::info;

/// Application service over a deposit repository
///
/// The repository is owned by the service and passed in explicitly; there is
/// no shared global instance.
#[derive(Debug)]
pub struct DepositService<R: DepositRepository> {
    repository: R,
    calculator: InterestCalculator,
}

impl<R: DepositRepository> DepositService<R> {
    pub fn new(repository: R) -> Self {
        DepositService {
            repository,
            calculator: InterestCalculator::new(),
        }
    }

    pub fn find_all(&self) -> Vec<TimeDeposit> {
        self.repository.find_all()
    }

    pub fn find_by_id(&self, id: DepositId) -> Option<TimeDeposit> {
        self.repository.find_by_id(id)
    }

    /// Run one accrual pass over every stored deposit
    ///
    /// Loads all deposits, accrues interest in place, saves them back and
    /// returns the saved deposits (sorted by id) with the pass report.
    pub fn update_all_balances(&mut self) -> (Vec<TimeDeposit>, AccrualReport) {
        let mut deposits = self.repository.find_all();
        let report = self.calculator.update_balance(&mut deposits);
        let saved = self.repository.save_many(deposits);

        info!(
            total = report.total(),
            credited = report.credited,
            unchanged = report.unchanged,
            no_plan = report.no_plan,
            failed = report.failures.len(),
            "accrual pass complete"
        );

        (saved, report)
    }
}
