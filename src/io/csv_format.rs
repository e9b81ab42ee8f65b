//! CSV format handling for batch computation requests and results
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to validated computation requests
//! - Result output serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{TaxComputationRequest, TaxComputationResult, TaxError};
use serde::Deserialize;
use std::io::Write;

/// Separator placed between breakdown lines in the output `breakdown` column
pub const BREAKDOWN_SEPARATOR: &str = " | ";

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: tax_type, amount.
/// The amount is kept as text so that missing and malformed values can be
/// reported as invalid input rather than as CSV errors.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub tax_type: String,
    pub amount: Option<String>,
}

/// A computation request tagged with its 1-based data row
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    pub row: u64,
    pub request: TaxComputationRequest,
}

/// A computation result tagged with the data row it came from
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub row: u64,
    pub result: TaxComputationResult,
}

/// Convert a CsvRecord to a validated TaxComputationRequest
///
/// # Errors
///
/// - `TaxError::InvalidTaxType` for an unknown tax type
/// - `TaxError::InvalidInput` for a missing, non-numeric or non-positive amount
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<TaxComputationRequest, TaxError> {
    let amount = csv_record.amount.unwrap_or_default();
    TaxComputationRequest::parse(&csv_record.tax_type, &amount)
}

/// Attach a line number to a row-level error
///
/// Data row `n` sits on line `n + 1` because of the header.
pub fn row_error(row: u64, error: TaxError) -> TaxError {
    match error {
        TaxError::ParseError { line: Some(_), .. } => error,
        TaxError::ParseError { line: None, message } => TaxError::ParseError {
            line: Some(row + 1),
            message,
        },
        other => TaxError::ParseError {
            line: Some(row + 1),
            message: other.to_string(),
        },
    }
}

/// Write computation results to CSV format
///
/// Writes results with columns: row, tax_type, amount, tax_due, net_amount,
/// breakdown. Results are sorted by row for deterministic output regardless
/// of the order they were computed in.
pub fn write_results_csv(results: &[BatchResult], output: &mut dyn Write) -> Result<(), TaxError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["row", "tax_type", "amount", "tax_due", "net_amount", "breakdown"])?;

    let mut sorted: Vec<&BatchResult> = results.iter().collect();
    sorted.sort_by_key(|entry| entry.row);

    for entry in sorted {
        let result = &entry.result;
        writer.write_record(&[
            entry.row.to_string(),
            result.tax_type.to_string(),
            result.amount.normalize().to_string(),
            result.tax_due.to_string(),
            result
                .net_amount
                .map(|net| net.normalize().to_string())
                .unwrap_or_default(),
            result.breakdown.join(BREAKDOWN_SEPARATOR),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine;
    use crate::types::TaxType;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn record(tax_type: &str, amount: Option<&str>) -> CsvRecord {
        CsvRecord {
            tax_type: tax_type.to_string(),
            amount: amount.map(|s| s.to_string()),
        }
    }

    #[rstest]
    #[case("paye", "1000000", TaxType::Paye)]
    #[case("VAT", "100.50", TaxType::Vat)]
    #[case("Cit", "50000000", TaxType::Cit)]
    #[case("wht", "2500", TaxType::Withholding)]
    fn test_convert_csv_record_valid(
        #[case] tax_type: &str,
        #[case] amount: &str,
        #[case] expected_type: TaxType,
    ) {
        let request = convert_csv_record(record(tax_type, Some(amount))).unwrap();
        assert_eq!(request.tax_type, expected_type);
        assert_eq!(request.amount, amount.parse::<Decimal>().unwrap());
    }

    #[rstest]
    #[case::invalid_type("gst", Some("100"), "Invalid tax type")]
    #[case::missing_amount("vat", None, "amount is missing")]
    #[case::empty_amount("vat", Some(""), "amount is missing")]
    #[case::zero_amount("vat", Some("0"), "greater than zero")]
    #[case::negative_amount("paye", Some("-5"), "greater than zero")]
    #[case::not_a_number("cit", Some("abc"), "not a number")]
    fn test_convert_csv_record_errors(
        #[case] tax_type: &str,
        #[case] amount: Option<&str>,
        #[case] expected_error: &str,
    ) {
        let error = convert_csv_record(record(tax_type, amount)).unwrap_err();
        assert!(
            error.to_string().contains(expected_error),
            "unexpected error: {}",
            error
        );
    }

    #[test]
    fn test_row_error_adds_line_number() {
        let error = row_error(3, TaxError::invalid_input("amount is missing"));
        assert_eq!(
            error.to_string(),
            "CSV parse error at line 4: Invalid input: amount is missing"
        );
    }

    #[test]
    fn test_write_results_csv_sorted_by_row() {
        let vat = engine::compute_vat(Decimal::from(1000)).unwrap();
        let wht = engine::compute_withholding(Decimal::from(10)).unwrap();
        let results = vec![
            BatchResult { row: 3, result: wht },
            BatchResult { row: 1, result: vat },
        ];

        let mut output = Vec::new();
        write_results_csv(&results, &mut output).unwrap();

        let expected = "row,tax_type,amount,tax_due,net_amount,breakdown\n\
            1,vat,1000,75,,\"Sales amount: ₦1,000 | VAT @ 7.5%: ₦75 | Total VAT: ₦75\"\n\
            3,withholding,10,1,9,Payment amount: ₦10 | WHT @ 5% (contracts/professional services): ₦0.50 | Net to supplier: ₦9 | Total WHT: ₦1\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_results_csv_empty() {
        let mut output = Vec::new();
        write_results_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "row,tax_type,amount,tax_due,net_amount,breakdown\n"
        );
    }
}
