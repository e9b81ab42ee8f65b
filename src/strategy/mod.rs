//! Processing strategy module for batch tax computation
//!
//! This module defines the Strategy pattern for complete batch pipelines,
//! covering CSV parsing, tax computation and result output. This allows
//! different implementations (synchronous, asynchronous batch) to be selected
//! at runtime.

use crate::cli::StrategyType;
use crate::types::TaxError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete batch pipelines
///
/// Each strategy reads computation requests from a CSV file, computes the
/// tax due for each one and writes the results, ordered by input row, to the
/// output. Strategies must produce identical output for identical input.
pub trait ProcessingStrategy: Send + Sync {
    /// Process requests from input file and write results to output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    ///
    /// Row-level errors (unknown tax type, bad amount, overflow) are logged
    /// and the row is skipped.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), TaxError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy; `None` means defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
