//! Asynchronous batch processing strategy
//!
//! This module provides a multi-threaded implementation of the
//! ProcessingStrategy trait. Deposits are read in batches and each batch is
//! accrued in parallel, sharded by deposit id.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (id sharding + spawned tasks)
//!     └── AsyncDepositStore (DashMap-backed deposit state)
//! ```
//!
//! Deposits are independent, so unlike an ordered ledger there is no cross-batch
//! ordering to preserve. Batches are still awaited one at a time to keep memory
//! bounded by `batch_size`.

use crate::core::r#async::{AsyncDepositStore, BatchProcessor};
use crate::core::AccrualReport;
use crate::io::async_reader::AsyncReader;
use crate::io::json_format::parse_deposits_json;
use crate::io::{write_deposits, DataFormat};
use crate::strategy::{resolve_output_format, ProcessingStrategy};
use crate::types::{DepositError, DepositId, TimeDeposit};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Configuration for batch processing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of deposits per batch
    pub batch_size: usize,
    /// Worker threads, and shards per batch
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig; zero values fall back to the defaults
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "invalid max_concurrent_batches, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
    output_format: Option<DataFormat>,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig, output_format: Option<DataFormat>) -> Self {
        Self {
            config,
            output_format,
        }
    }

    /// Store one batch and accrue it across shards
    ///
    /// Ids already present in the store are rejected and logged; the first
    /// occurrence wins.
    async fn accrue_batch(
        store: &AsyncDepositStore,
        processor: &BatchProcessor,
        batch: Vec<TimeDeposit>,
    ) -> AccrualReport {
        let mut ids: Vec<DepositId> = Vec::with_capacity(batch.len());
        for deposit in batch {
            let id = deposit.id;
            match store.insert(deposit) {
                Ok(()) => ids.push(id),
                Err(e) => warn!(error = %e, "skipping deposit"),
            }
        }

        debug!(deposits = ids.len(), "accruing batch");
        processor.process_batch(ids).await
    }

    async fn run(&self, input_path: &Path) -> Result<(Vec<TimeDeposit>, AccrualReport), DepositError> {
        let store = Arc::new(AsyncDepositStore::new());
        let processor = BatchProcessor::new(Arc::clone(&store), self.config.max_concurrent_batches);
        let mut report = AccrualReport::default();

        match DataFormat::from_path(input_path) {
            DataFormat::Csv => {
                let file = tokio::fs::File::open(input_path)
                    .await
                    .map_err(|e| DepositError::file_open(input_path, e))?;

                // csv-async reads through the futures-io traits
                let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
                let mut reader = AsyncReader::new(compat_file);

                loop {
                    let batch = reader.read_batch(self.config.batch_size).await;
                    if batch.is_empty() {
                        break;
                    }
                    report.merge(Self::accrue_batch(&store, &processor, batch).await);
                }
            }
            DataFormat::Json => {
                let bytes = tokio::fs::read(input_path)
                    .await
                    .map_err(|e| DepositError::file_open(input_path, e))?;

                let mut deposits = Vec::new();
                for result in parse_deposits_json(&bytes)? {
                    match result {
                        Ok(deposit) => deposits.push(deposit),
                        Err(e) => warn!(error = %e, "skipping invalid deposit record"),
                    }
                }

                let mut remaining = deposits.into_iter().peekable();
                while remaining.peek().is_some() {
                    let batch: Vec<TimeDeposit> =
                        remaining.by_ref().take(self.config.batch_size).collect();
                    report.merge(Self::accrue_batch(&store, &processor, batch).await);
                }
            }
        }

        Ok((store.get_all_deposits(), report))
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<AccrualReport, DepositError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| DepositError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let (deposits, report) = runtime.block_on(self.run(input_path))?;

        write_deposits(
            &deposits,
            resolve_output_format(self.output_format, input_path),
            output,
        )?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    /// Helper function to create a temporary deposit file for testing
    fn create_temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run(config: BatchConfig, file: &NamedTempFile) -> (String, AccrualReport) {
        let strategy = AsyncProcessingStrategy::new(config, None);
        let mut output = Vec::new();
        let report = strategy.process(file.path(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), report)
    }

    #[rstest]
    #[case::defaults(BatchConfig::new(1000, 4), 1000, 4)]
    #[case::zero_batch_size(BatchConfig::new(0, 4), 1000, 4)]
    #[case::zero_workers(BatchConfig::new(10, 0), 10, num_cpus::get())]
    fn test_batch_config_new(
        #[case] config: BatchConfig,
        #[case] batch_size: usize,
        #[case] workers: usize,
    ) {
        assert_eq!(config.batch_size, batch_size);
        assert_eq!(config.max_concurrent_batches, workers);
    }

    #[rstest]
    #[case::single_batch(1000)]
    #[case::many_batches(2)]
    #[case::one_per_batch(1)]
    fn test_async_strategy_output_independent_of_batch_size(#[case] batch_size: usize) {
        let file = create_temp_file(
            ".csv",
            "id,plan_type,balance,days\n\
             5,student,1000,100\n\
             1,basic,1000,31\n\
             3,premium,1000,45\n\
             2,premium,1000,46\n\
             4,C,1000,90\n",
        );

        let (output, report) = run(BatchConfig::new(batch_size, 3), &file);

        assert_eq!(
            output,
            "id,plan_type,balance,days\n\
             1,basic,1000.83,31\n\
             2,premium,1004.17,46\n\
             3,premium,1000.00,45\n\
             4,C,1000.00,90\n\
             5,student,1002.50,100\n"
        );
        assert_eq!(report.credited, 3);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.no_plan, 1);
    }

    #[test]
    fn test_async_strategy_rejects_duplicates_across_batches() {
        let file = create_temp_file(
            ".csv",
            "id,plan_type,balance,days\n1,basic,1000,31\n1,premium,9,60\n",
        );

        let (output, report) = run(BatchConfig::new(1, 2), &file);

        assert_eq!(output, "id,plan_type,balance,days\n1,basic,1000.83,31\n");
        assert_eq!(report.total(), 1);
    }

    #[test]
    fn test_async_strategy_reads_json() {
        let file = create_temp_file(
            ".json",
            r#"[{"id": 2, "planType": "student", "balance": "15000", "days": 90},
                {"id": 1, "planType": "basic", "balance": "5000", "days": 30}]"#,
        );

        let (output, report) = run(BatchConfig::new(1, 2), &file);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["balance"], "5000");
        assert_eq!(value[1]["balance"], "15037.50");
        assert_eq!(report.credited, 1);
        assert_eq!(report.unchanged, 1);
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy = AsyncProcessingStrategy::new(BatchConfig::default(), None);
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(matches!(result, Err(DepositError::FileNotFound { .. })));
    }
}
