//! Asynchronous batch processing strategy
//!
//! Multi-threaded implementation of the ProcessingStrategy trait. Requests
//! are read in batches and each batch is split into partitions computed on
//! separate tokio tasks.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (partitioning + tokio tasks)
//!     └── TaxTotals (DashMap per-type totals shared by the tasks)
//! ```
//!
//! Results are collected from every batch and sorted by row before writing,
//! so the output is identical to the synchronous strategy's.

use crate::core::r#async::{BatchProcessor, TaxTotals};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_results_csv;
use crate::strategy::ProcessingStrategy;
use crate::types::TaxError;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Configuration for batch processing
///
/// Controls how many requests are read per batch and how many worker
/// threads and tasks compute each batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of requests per batch
    pub batch_size: usize,
    /// Maximum number of partitions computing concurrently
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
    /// Create a new BatchConfig with custom values
    ///
    /// A zero for either value falls back to its default with a warning.
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
///
/// Batches are read one after another; the partitions of a batch run in
/// parallel on a multi-threaded tokio runtime with
/// `max_concurrent_batches` workers.
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), TaxError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| TaxError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(async {
            let totals = Arc::new(TaxTotals::new());
            let processor =
                BatchProcessor::new(Arc::clone(&totals), self.config.max_concurrent_batches);

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => TaxError::FileNotFound {
                        path: input_path.display().to_string(),
                    },
                    _ => TaxError::from(e),
                })?;

            // csv-async reads futures::io streams, tokio files need the compat layer
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut results = Vec::new();
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                debug!(requests = batch.len(), "processing batch");
                results.extend(processor.process_batch(batch).await);
            }

            totals.log();

            write_results_csv(&results, output)
        })
    }
}
