//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. It
//! streams requests from the SyncReader, computes each one with the tax
//! engine and hands the collected results to `csv_format::write_results_csv`.

use crate::core::r#async::TaxTotals;
use crate::core::engine;
use crate::io::csv_format::{row_error, write_results_csv, BatchResult};
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::TaxError;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use naira_tax_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("requests.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), TaxError> {
        let reader = SyncReader::new(input_path)?;
        let totals = TaxTotals::new();
        let mut results = Vec::new();

        for entry in reader {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping row");
                    continue;
                }
            };

            match engine::compute(&entry.request) {
                Ok(result) => {
                    totals.record(&result);
                    results.push(BatchResult {
                        row: entry.row,
                        result,
                    });
                }
                Err(e) => warn!(row = entry.row, error = %row_error(entry.row, e), "computation failed"),
            }
        }

        debug!(rows = results.len(), "sync batch computed");
        totals.log();

        write_results_csv(&results, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run(content: &str) -> String {
        let file = create_temp_csv(content);
        let mut output = Vec::new();
        SyncProcessingStrategy
            .process(file.path(), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_sync_strategy_computes_single_row() {
        let output = run("tax_type,amount\ncit,50000000\n");

        assert_eq!(
            output,
            "row,tax_type,amount,tax_due,net_amount,breakdown\n\
             1,cit,50000000,10000000,,\"Taxable profit: ₦50,000,000 | Classification: medium company (profit below ₦100,000,000) | CIT @ 20%: ₦10,000,000 | Total CIT: ₦10,000,000\"\n"
        );
    }

    #[test]
    fn test_sync_strategy_processes_multiple_rows() {
        let output = run("tax_type,amount\npaye,1000000\nvat,1000\nwht,1000\n");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("1,paye,1000000,82500,,"));
        assert!(lines[2].starts_with("2,vat,1000,75,,"));
        assert!(lines[3].starts_with("3,withholding,1000,50,950,"));
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let mut output = Vec::new();

        let result = SyncProcessingStrategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(matches!(result, Err(TaxError::FileNotFound { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_continues_on_malformed_record() {
        let output = run("tax_type,amount\nvat,100\nvat,invalid\ngst,100\nvat,200\n");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,vat,100,8,"));
        assert!(lines[2].starts_with("4,vat,200,15,"));
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }
}
