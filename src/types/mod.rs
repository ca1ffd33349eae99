//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `money`: Exact decimal money and cent rounding
//! - `plan`: Plan identifiers and the static rule table
//! - `deposit`: Time deposits and withdrawals
//! - `error`: Error types for the engine

pub mod deposit;
pub mod error;
pub mod money;
pub mod plan;

pub use deposit::{DepositId, TimeDeposit, Withdrawal, WithdrawalId};
pub use error::DepositError;
pub use money::Money;
pub use plan::{EligibilityWindow, PlanRule, PlanType, PLAN_RULES};
