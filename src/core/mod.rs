//! Core business logic module
//!
//! This module contains the interest accrual components:
//! - `plan_strategy` - Per-plan eligibility and interest, plus the resolver
//! - `calculator` - The accrual engine and its pass report
//! - `traits` - Storage abstraction
//! - `deposit_store` - In-memory storage
//! - `service` - Repository plus engine, as called by the strategies
//! - `async` - Concurrent storage and the parallel batch runner

pub mod r#async;
pub mod calculator;
pub mod deposit_store;
pub mod plan_strategy;
pub mod service;
pub mod traits;

pub use calculator::{AccrualFailure, AccrualOutcome, AccrualReport, InterestCalculator};
pub use deposit_store::DepositStore;
pub use plan_strategy::PlanStrategy;
pub use r#async::{AsyncDepositStore, BatchProcessor};
pub use service::DepositService;
pub use traits::DepositRepository;
