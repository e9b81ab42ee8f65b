//! Asynchronous CSV reader with batch interface
//!
//! Reads computation requests from a CSV stream in batches for the async
//! processing strategy.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of BatchRequests
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, row_error, BatchRequest, CsvRecord};
use crate::types::TaxError;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV reader
///
/// Row numbers keep counting across batches, including rows that were
/// rejected, so they match the numbering of the synchronous reader.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    row: u64,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader, row: 0 }
    }

    /// Read up to `batch_size` valid requests
    ///
    /// Invalid rows are logged and skipped. Returns an empty vector at end of
    /// input.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<BatchRequest> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            let Some(next) = records.next().await else {
                break;
            };
            self.row += 1;
            let row = self.row;

            let converted = next
                .map_err(|e| TaxError::ParseError {
                    line: None,
                    message: e.to_string(),
                })
                .and_then(convert_csv_record);
            match converted {
                Ok(request) => batch.push(BatchRequest { row, request }),
                Err(e) => warn!(row, error = %row_error(row, e), "skipping row"),
            }
        }

        batch
    }
}
