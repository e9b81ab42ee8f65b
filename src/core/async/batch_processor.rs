//! Batch processing with partitioned parallel computation
//!
//! This module provides the `BatchProcessor` struct, which splits a batch of
//! requests into contiguous partitions and computes each partition on its own
//! tokio task.
//!
//! # Design
//!
//! Computations are independent of one another, so any partitioning is
//! correct. Partitions are contiguous slices of the batch so that each task
//! produces rows in ascending order; the final output is still re-sorted by
//! row before it is written.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     ├── Arc<TaxTotals>   (shared per-type totals)
//!     └── partitions       (maximum tasks per batch)
//! ```

use std::sync::Arc;

use super::TaxTotals;
use crate::core::engine;
use crate::io::csv_format::{row_error, BatchRequest, BatchResult};
use tracing::{error, warn};

/// Batch processor computing partitions of a batch concurrently
///
/// Cloning is cheap: clones share the same totals.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    totals: Arc<TaxTotals>,
    partitions: usize,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    ///
    /// # Arguments
    ///
    /// * `totals` - Shared totals every computed result is recorded into
    /// * `partitions` - Maximum number of tasks spawned per batch (at least 1)
    pub fn new(totals: Arc<TaxTotals>, partitions: usize) -> Self {
        Self {
            totals,
            partitions: partitions.max(1),
        }
    }

    /// Split a batch into at most `partitions` contiguous, non-empty chunks
    ///
    /// # Guarantees
    ///
    /// - Each request appears in exactly one partition
    /// - Requests keep their original order within a partition
    pub fn partition(&self, batch: Vec<BatchRequest>) -> Vec<Vec<BatchRequest>> {
        if batch.is_empty() {
            return Vec::new();
        }

        let chunk_size = batch.len().div_ceil(self.partitions);
        let mut partitions = Vec::with_capacity(self.partitions);
        let mut remaining = batch.into_iter().peekable();
        while remaining.peek().is_some() {
            partitions.push(remaining.by_ref().take(chunk_size).collect());
        }

        partitions
    }

    /// Compute every request of one partition in order
    ///
    /// Failed computations are logged and left out of the results.
    pub fn process_partition(&self, requests: Vec<BatchRequest>) -> Vec<BatchResult> {
        let mut results = Vec::with_capacity(requests.len());

        for BatchRequest { row, request } in requests {
            match engine::compute(&request) {
                Ok(result) => {
                    self.totals.record(&result);
                    results.push(BatchResult { row, result });
                }
                Err(e) => warn!(row, error = %row_error(row, e), "computation failed"),
            }
        }

        results
    }

    /// Compute a batch with one tokio task per partition
    ///
    /// Results may come back in any order across partitions.
    pub async fn process_batch(&self, batch: Vec<BatchRequest>) -> Vec<BatchResult> {
        let mut tasks = Vec::new();
        for partition in self.partition(batch) {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.process_partition(partition)
            }));
        }

        let mut results = Vec::new();
        for task in tasks {
            match task.await {
                Ok(partition_results) => results.extend(partition_results),
                Err(e) => error!(error = %e, "batch task failed"),
            }
        }

        results
    }
}
