//! Asynchronous CSV reader with batch interface
//!
//! Reads deposit records in fixed-size batches so the async strategy can
//! accrue one batch while memory stays bounded.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of TimeDeposits
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::TimeDeposit;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read up to `batch_size` deposits
    ///
    /// Invalid records are logged and skipped. Returns an empty vector once
    /// the input is exhausted.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<TimeDeposit> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => match convert_csv_record(csv_record) {
                    Ok(deposit) => batch.push(deposit),
                    Err(e) => warn!(error = %e, "skipping invalid deposit record"),
                },
                Some(Err(e)) => warn!(error = %e, "CSV parse error"),
                None => break,
            }
        }

        batch
    }
}
