//! Sharded batch accrual for the async strategy
//!
//! This module provides the `BatchProcessor` struct, which accrues a batch of
//! deposits in parallel. Deposits are independent, so a batch is split into
//! shards by id and each shard runs in its own tokio task.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     ├── Arc<AsyncDepositStore>  (shared deposit state)
//!     ├── InterestCalculator      (stateless engine)
//!     └── shard_count             (number of concurrent tasks per batch)
//! ```
//!
//! # Guarantees
//!
//! - Every id in the batch is accrued exactly once
//! - A failure on one deposit is recorded and the shard carries on
//! - A panicking task loses only its own shard's report; the other shards
//!   still complete

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error};

use super::AsyncDepositStore;
use crate::core::calculator::{AccrualOutcome, AccrualReport, InterestCalculator};
use crate::types::DepositId;

/// Parallel accrual over an [`AsyncDepositStore`]
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    store: Arc<AsyncDepositStore>,
    calculator: InterestCalculator,
    shard_count: usize,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    ///
    /// A `shard_count` of zero is treated as one.
    pub fn new(store: Arc<AsyncDepositStore>, shard_count: usize) -> Self {
        Self {
            store,
            calculator: InterestCalculator::new(),
            shard_count: shard_count.max(1),
        }
    }

    /// Split ids into at most `shard_count` groups
    ///
    /// Ids are assigned by `id % shard_count`; relative order inside each
    /// shard follows the input order. Empty shards are omitted.
    pub fn partition_by_shard(&self, ids: Vec<DepositId>) -> HashMap<usize, Vec<DepositId>> {
        let mut shards: HashMap<usize, Vec<DepositId>> = HashMap::new();

        for id in ids {
            shards
                .entry(id as usize % self.shard_count)
                .or_default()
                .push(id);
        }

        shards
    }

    /// Accrue every deposit in one shard sequentially
    pub async fn process_shard(&self, ids: Vec<DepositId>) -> AccrualReport {
        let mut report = AccrualReport::default();

        for id in ids {
            let result = self.store.accrue(id, &self.calculator);
            match &result {
                Ok(AccrualOutcome::Credited(interest)) => {
                    debug!(deposit_id = id, %interest, "interest credited");
                }
                Ok(_) => {}
                Err(e) => {
                    error!(deposit_id = id, error = %e, "error calculating interest for deposit");
                }
            }
            report.record(id, result);
        }

        report
    }

    /// Accrue a batch of stored deposits across concurrent tasks
    ///
    /// Waits for every shard before returning, so callers can read the store
    /// once this resolves.
    pub async fn process_batch(&self, ids: Vec<DepositId>) -> AccrualReport {
        let shards = self.partition_by_shard(ids);

        let mut tasks = Vec::with_capacity(shards.len());
        for (_shard, shard_ids) in shards {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.process_shard(shard_ids).await
            }));
        }

        let mut report = AccrualReport::default();
        for task in tasks {
            match task.await {
                Ok(shard_report) => report.merge(shard_report),
                Err(e) => {
                    error!(error = ?e, "accrual task panicked");
                }
            }
        }

        report
    }
}
