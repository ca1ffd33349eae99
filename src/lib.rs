//! Time Deposit Engine Library
//! # Overview
//!
//! This library credits one period of simple monthly interest to a set of
//! time deposits, with a synchronous and an asynchronous sharded strategy
//! that produce identical results.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (TimeDeposit, Money, PlanType, DepositError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::plan_strategy`] - Plan lookup and per-plan interest formulas
//!   - [`core::calculator`] - Accrual over a collection of deposits
//!   - [`core::service`] - Repository-backed accrual passes
//!   - [`core::r#async`] - DashMap store and sharded batch processor
//! - [`io`] - CSV and JSON readers and writers
//! - [`strategy`] - End-to-end pipelines selectable at runtime
//! - [`seed`] - Demo deposits
//!
//! # Plans
//!
//! | Plan    | Annual rate | Earns interest when   |
//! |---------|-------------|-----------------------|
//! | basic   | 1%          | days > 30             |
//! | premium | 5%          | days > 45             |
//! | student | 3%          | 30 < days < 366       |
//!
//! Interest for one period is `balance * annual_rate / 12`, rounded half-up
//! to cents. Unknown plan identifiers (including the legacy codes `A`, `B`
//! and `C`) earn nothing and are left untouched.

pub mod cli;
pub mod core;
pub mod io;
pub mod seed;
pub mod strategy;
pub mod types;

pub use crate::core::{AccrualReport, DepositRepository, DepositService, DepositStore, InterestCalculator};
pub use io::{write_deposits, DataFormat};
pub use types::{DepositError, DepositId, Money, PlanType, TimeDeposit, Withdrawal};
