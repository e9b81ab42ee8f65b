//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over computation requests from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read and deserialize CSV records
//! sequentially, delegating validation to the csv_format module. Records are
//! processed one at a time without loading the entire file into memory.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<BatchRequest, TaxError>` for each CSV row:
//!
//! ```no_run
//! use naira_tax_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("requests.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(entry) => println!("Row {}: {:?}", entry.row, entry.request),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Row-level errors are yielded as `TaxError::ParseError` carrying the line
//!   number, and the row counter still advances

use crate::io::csv_format::{convert_csv_record, row_error, BatchRequest, CsvRecord};
use crate::types::TaxError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    row: u64,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to trim whitespace from all fields,
    /// allow a missing trailing amount column and use an 8KB buffer.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::FileNotFound` when the path does not exist and
    /// `TaxError::IoError` when it cannot be opened.
    pub fn new(path: &Path) -> Result<Self, TaxError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TaxError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => TaxError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self { reader, row: 0 })
    }
}

impl Iterator for SyncReader {
    type Item = Result<BatchRequest, TaxError>;

    /// Get the next computation request from the CSV file
    ///
    /// Returns `None` at end of file.
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let next = deserializer.next()?;

        self.row += 1;
        let row = self.row;
        Some(
            next.map_err(TaxError::from)
                .and_then(convert_csv_record)
                .map(|request| BatchRequest { row, request })
                .map_err(|e| row_error(row, e)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaxType;
    use rust_decimal::Decimal;
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

    #[test]
    fn test_sync_reader_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(TaxError::FileNotFound { .. })));
    }

    #[test]
    fn test_sync_reader_iterates_records() {
        let csv_content = "tax_type,amount\npaye,1000000\nvat,250.5\n";
        let file = create_temp_csv(csv_content);

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 2);
        let first = records[0].as_ref().unwrap();
        assert_eq!(first.row, 1);
        assert_eq!(first.request.tax_type, TaxType::Paye);
        assert_eq!(first.request.amount, Decimal::from(1_000_000));
        let second = records[1].as_ref().unwrap();
        assert_eq!(second.row, 2);
        assert_eq!(second.request.amount, Decimal::new(2505, 1));
    }

    #[test]
    fn test_sync_reader_includes_line_numbers_in_errors() {
        let csv_content = "tax_type,amount\nvat,100\nvat,invalid\ncit,50000000\n";
        let file = create_temp_csv(csv_content);

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[2].is_ok());
        assert_eq!(records[2].as_ref().unwrap().row, 3);

        let error = records[1].as_ref().unwrap_err();
        assert!(matches!(error, TaxError::ParseError { line: Some(3), .. }));
        assert!(error.to_string().contains("not a number"));
    }

    #[test]
    fn test_sync_reader_handles_whitespace_and_case() {
        let csv_content = "tax_type,amount\n  WHT  ,  2500  \n";
        let file = create_temp_csv(csv_content);

        let records: Vec<_> = SyncReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].request.tax_type, TaxType::Withholding);
        assert_eq!(records[0].request.amount, Decimal::from(2500));
    }

    #[test]
    fn test_sync_reader_missing_amount_column() {
        let csv_content = "tax_type,amount\nvat\n";
        let file = create_temp_csv(csv_content);

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 1);
        assert!(records[0]
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("amount is missing"));
    }

    #[test]
    fn test_sync_reader_handles_empty_file_after_header() {
        let file = create_temp_csv("tax_type,amount\n");
        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();
        assert!(records.is_empty());
    }
}
