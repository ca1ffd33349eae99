//! Asynchronous implementations of core components
//!
//! This module provides thread-safe storage and a parallel batch runner for
//! the accrual engine, using DashMap for locking.
//!
//! # Architecture
//!
//! - **AsyncDepositStore**: Thread-safe deposit storage using DashMap
//! - **BatchProcessor**: Shards a batch of ids across tokio tasks
//!
//! # Thread Safety
//!
//! - Accruals on different deposits proceed in parallel
//! - Each deposit is written under its own entry guard
//! - No global locks; the plan rules are read-only statics

pub mod batch_processor;
pub mod deposit_store;

pub use batch_processor::BatchProcessor;
pub use deposit_store::AsyncDepositStore;
