//! Interest accrual engine
//!
//! This module provides the `InterestCalculator`, which runs one accrual pass
//! over a batch of deposits. For each deposit it:
//! - Resolves the plan strategy (unknown plans are skipped silently)
//! - Computes one month of rounded interest
//! - Credits it to the balance with checked arithmetic
//!
//! Deposits are mutated in place. A failure on one deposit is logged and
//! recorded in the returned [`AccrualReport`]; it never aborts the batch and
//! never leaves a partially updated balance behind.
//!
//! Accrual is not idempotent: every pass credits interest computed on the
//! balance at the time of that pass.

use crate::core::plan_strategy::PlanStrategy;
use crate::types::{DepositError, DepositId, Money, TimeDeposit};
use tracing::{debug, error};

/// What happened to a single deposit during a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccrualOutcome {
    /// Interest was added to the balance
    Credited(Money),

    /// Plan resolved but no interest was due (outside the window, or rounds to zero)
    Unchanged,

    /// Plan identifier has no rule
    NoPlan,
}

/// A deposit whose accrual failed, with the reason
#[derive(Debug, Clone, PartialEq)]
pub struct AccrualFailure {
    pub id: DepositId,
    pub error: DepositError,
}

/// Summary of one accrual pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccrualReport {
    /// Deposits whose balance increased
    pub credited: usize,

    /// Deposits with a known plan that accrued nothing
    pub unchanged: usize,

    /// Deposits skipped because their plan has no rule
    pub no_plan: usize,

    /// Deposits left at their pre-accrual balance because of an error
    pub failures: Vec<AccrualFailure>,
}

impl AccrualReport {
    /// Count one deposit's result
    pub fn record(&mut self, id: DepositId, result: Result<AccrualOutcome, DepositError>) {
        match result {
            Ok(AccrualOutcome::Credited(_)) => self.credited += 1,
            Ok(AccrualOutcome::Unchanged) => self.unchanged += 1,
            Ok(AccrualOutcome::NoPlan) => self.no_plan += 1,
            Err(error) => self.failures.push(AccrualFailure { id, error }),
        }
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: AccrualReport) {
        self.credited += other.credited;
        self.unchanged += other.unchanged;
        self.no_plan += other.no_plan;
        self.failures.extend(other.failures);
    }

    /// Number of deposits seen by the pass
    pub fn total(&self) -> usize {
        self.credited + self.unchanged + self.no_plan + self.failures.len()
    }
}

/// Stateless accrual engine
///
/// Holds no data of its own; the plan rules are process-wide constants. It is
/// `Copy`, `Send` and `Sync`, so parallel runners can share it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestCalculator;

impl InterestCalculator {
    pub fn new() -> Self {
        InterestCalculator
    }

    /// Accrue one month of interest on a single deposit
    ///
    /// The new balance is fully computed before it is assigned, so on error
    /// the deposit keeps its previous balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The balance is negative (corrupt record)
    /// - Computing or crediting the interest would overflow
    pub fn accrue(&self, deposit: &mut TimeDeposit) -> Result<AccrualOutcome, DepositError> {
        let Some(strategy) = PlanStrategy::resolve(&deposit.plan_type) else {
            return Ok(AccrualOutcome::NoPlan);
        };

        if deposit.balance.is_negative() {
            return Err(DepositError::negative_balance(
                deposit.id,
                deposit.balance.as_decimal(),
            ));
        }

        let interest = strategy.compute_interest(deposit)?;
        if interest.is_zero() {
            return Ok(AccrualOutcome::Unchanged);
        }

        let new_balance = deposit
            .balance
            .checked_add(interest)
            .ok_or_else(|| DepositError::arithmetic_overflow("interest credit", deposit.id))?;
        deposit.balance = new_balance;

        Ok(AccrualOutcome::Credited(interest))
    }

    /// Run one accrual pass over a batch of deposits, in place
    ///
    /// Every deposit is visited exactly once. Errors are logged with the
    /// deposit id and collected in the report.
    pub fn update_balance(&self, deposits: &mut [TimeDeposit]) -> AccrualReport {
        let mut report = AccrualReport::default();

        for deposit in deposits.iter_mut() {
            let id = deposit.id;
            let result = self.accrue(deposit);

            match &result {
                Ok(AccrualOutcome::Credited(interest)) => {
                    debug!(deposit_id = id, %interest, balance = %deposit.balance, "interest credited");
                }
                Ok(AccrualOutcome::NoPlan) => {
                    debug!(deposit_id = id, plan_type = %deposit.plan_type, "no rule for plan, skipped");
                }
                Ok(AccrualOutcome::Unchanged) => {}
                Err(e) => {
                    error!(deposit_id = id, error = %e, "error calculating interest for deposit");
                }
            }

            report.record(id, result);
        }

        report
    }
}
