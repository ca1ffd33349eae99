//! Processing strategy module for accrual runs
//!
//! This module defines the Strategy pattern for complete accrual pipelines:
//! loading deposits, crediting one period of interest, and writing the
//! updated deposits. Different implementations (synchronous, asynchronous
//! batch) can be selected at runtime and must produce identical output.

use crate::cli::StrategyType;
use crate::core::AccrualReport;
use crate::io::DataFormat;
use crate::types::DepositError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete accrual pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Accrue interest on every deposit in `input_path` and write the result
    ///
    /// The input format follows the file extension (`.json` or CSV). Output
    /// is sorted by deposit id.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be opened, the document as a
    /// whole is malformed, or output cannot be written. Individual bad
    /// records and per-deposit accrual failures are logged and reported in
    /// the returned [`AccrualReport`] instead.
    fn process(&self, input_path: &Path, output: &mut dyn Write)
        -> Result<AccrualReport, DepositError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
/// * `output_format` - Output format; `None` writes in the input's format
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
    output_format: Option<DataFormat>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(output_format)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, output_format))
        }
    }
}

/// Output format for a run: explicit choice, else the input's format
fn resolve_output_format(output_format: Option<DataFormat>, input_path: &Path) -> DataFormat {
    output_format.unwrap_or_else(|| DataFormat::from_path(input_path))
}
