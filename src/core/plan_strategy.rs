//! Per-plan interest strategies
//!
//! A [`PlanStrategy`] is a handle on one row of the static rule table. All
//! plans share the same formula; only the rate and eligibility window differ,
//! so dispatch is a table lookup rather than a trait object per plan.
//!
//! Adding a plan means adding a [`PlanType`] variant and its [`PlanRule`];
//! neither the resolver nor the engine changes.

use crate::types::{DepositError, Money, PlanRule, PlanType, TimeDeposit};

/// Interest rules for a single plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStrategy {
    rule: &'static PlanRule,
}

impl PlanStrategy {
    /// Resolve a plan identifier to its strategy
    ///
    /// Never fails: identifiers without a rule yield `None`, which callers
    /// treat as "not eligible".
    pub fn resolve(plan_type: &str) -> Option<Self> {
        plan_type.parse::<PlanType>().ok().map(Self::for_plan)
    }

    pub fn for_plan(plan: PlanType) -> Self {
        PlanStrategy { rule: plan.rule() }
    }

    pub fn plan(&self) -> PlanType {
        self.rule.plan
    }

    pub fn rule(&self) -> &'static PlanRule {
        self.rule
    }

    /// Whether the deposit's elapsed days fall inside the plan's window
    pub fn is_eligible(&self, deposit: &TimeDeposit) -> bool {
        self.rule.window.contains(deposit.days)
    }

    /// One month of simple interest, rounded half-up to cents
    ///
    /// Returns zero for ineligible deposits. The result is already rounded;
    /// callers add it to the balance as-is.
    ///
    /// # Errors
    ///
    /// Returns `DepositError::ArithmeticOverflow` if `balance * annual_rate / 12`
    /// does not fit in a decimal.
    pub fn compute_interest(&self, deposit: &TimeDeposit) -> Result<Money, DepositError> {
        if !self.is_eligible(deposit) {
            return Ok(Money::ZERO);
        }

        let interest = self
            .rule
            .monthly_interest(deposit.balance)
            .ok_or_else(|| DepositError::arithmetic_overflow("interest calculation", deposit.id))?;

        Ok(interest.round_cents())
    }
}
