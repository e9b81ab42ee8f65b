//! Concurrent batch computation
//!
//! The tax engine itself is pure, so parallel batch work needs no locking
//! around the computation. The only state shared between tasks is the
//! running per-type totals, held in a DashMap.
//!
//! - **BatchProcessor**: splits a batch into partitions and computes them on
//!   tokio tasks
//! - **TaxTotals**: thread-safe count and tax due per tax type

pub mod batch_processor;
pub mod totals;

pub use batch_processor::BatchProcessor;
pub use totals::{TaxTotals, TypeTotal};
