//! Tax computation types for the Naira Tax Engine
//!
//! This module defines the tax type selector, the validated computation
//! request and the computation result returned by the engine.

use super::error::TaxError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tax types supported by the engine
///
/// Wire names are lowercase (`paye`, `vat`, `cit`, `withholding`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxType {
    /// Pay-As-You-Earn, progressive personal income tax
    Paye,

    /// Value Added Tax, flat-rate consumption tax
    Vat,

    /// Company Income Tax, tiered by taxable profit
    Cit,

    /// Withholding Tax on contracts and professional services
    Withholding,
}

impl TaxType {
    /// All tax types in display order
    pub const ALL: [TaxType; 4] = [
        TaxType::Paye,
        TaxType::Vat,
        TaxType::Cit,
        TaxType::Withholding,
    ];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxType::Paye => "paye",
            TaxType::Vat => "vat",
            TaxType::Cit => "cit",
            TaxType::Withholding => "withholding",
        }
    }

    /// Human-readable name used on receipts
    pub fn description(&self) -> &'static str {
        match self {
            TaxType::Paye => "PAYE - Personal Income Tax",
            TaxType::Vat => "VAT - Value Added Tax",
            TaxType::Cit => "CIT - Company Income Tax",
            TaxType::Withholding => "WHT - Withholding Tax",
        }
    }
}

impl fmt::Display for TaxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxType {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paye" => Ok(TaxType::Paye),
            "vat" => Ok(TaxType::Vat),
            "cit" => Ok(TaxType::Cit),
            "withholding" | "wht" => Ok(TaxType::Withholding),
            _ => Err(TaxError::invalid_tax_type(s)),
        }
    }
}

/// Check that an amount is strictly positive
///
/// Decimals are always finite, so positivity is the only remaining rule.
pub fn validate_amount(amount: Decimal) -> Result<Decimal, TaxError> {
    if amount <= Decimal::ZERO {
        return Err(TaxError::invalid_input(format!(
            "amount must be greater than zero, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Parse a textual amount into a positive decimal
///
/// Accepts plain decimal notation (`1000000`, `2500.75`) and scientific
/// notation (`1e6`). Blank input counts as a missing amount.
pub fn parse_amount(raw: &str) -> Result<Decimal, TaxError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaxError::invalid_input("amount is missing"));
    }

    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| TaxError::invalid_input(format!("'{}' is not a number", trimmed)))?;

    validate_amount(amount)
}

/// A validated tax computation request
///
/// The amount is guaranteed to be greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxComputationRequest {
    /// Which tax to compute
    pub tax_type: TaxType,

    /// Base amount in naira (gross income, sales, profit or payment)
    pub amount: Decimal,
}

impl TaxComputationRequest {
    /// Create a request from a decimal amount
    pub fn new(tax_type: TaxType, amount: Decimal) -> Result<Self, TaxError> {
        Ok(Self {
            tax_type,
            amount: validate_amount(amount)?,
        })
    }

    /// Create a request from a floating point amount
    ///
    /// NaN and infinities are rejected before conversion; values Decimal
    /// cannot represent are reported as out of range.
    pub fn from_f64(tax_type: TaxType, amount: f64) -> Result<Self, TaxError> {
        if !amount.is_finite() {
            return Err(TaxError::invalid_input(format!(
                "amount must be a finite number, got {}",
                amount
            )));
        }
        let out_of_range =
            || TaxError::invalid_input(format!("amount {} is out of range", amount));
        let decimal = Decimal::from_f64(amount).ok_or_else(out_of_range)?;
        // positive values below decimal precision collapse to zero
        if amount > 0.0 && decimal.is_zero() {
            return Err(out_of_range());
        }
        Self::new(tax_type, decimal)
    }

    /// Parse a request from its wire representation
    pub fn parse(tax_type: &str, amount: &str) -> Result<Self, TaxError> {
        let tax_type = TaxType::from_str(tax_type)?;
        Self::new(tax_type, parse_amount(amount)?)
    }
}

/// Result of a successful tax computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxComputationResult {
    /// The tax that was computed
    pub tax_type: TaxType,

    /// The base amount the tax was computed on
    pub amount: Decimal,

    /// Tax due in whole naira, rounded half away from zero
    pub tax_due: u64,

    /// Itemized, human-readable explanation of the computation (never empty)
    pub breakdown: Vec<String>,

    /// Amount left for the supplier after withholding (withholding only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("paye", TaxType::Paye)]
    #[case("VAT", TaxType::Vat)]
    #[case(" cit ", TaxType::Cit)]
    #[case("withholding", TaxType::Withholding)]
    #[case("WHT", TaxType::Withholding)]
    fn test_tax_type_parsing(#[case] input: &str, #[case] expected: TaxType) {
        assert_eq!(TaxType::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_tax_type_parsing_rejects_unknown() {
        assert_eq!(
            TaxType::from_str("gst").unwrap_err(),
            TaxError::invalid_tax_type("gst")
        );
    }

    #[test]
    fn test_tax_type_display_round_trips_through_wire_name() {
        for tax_type in TaxType::ALL {
            assert_eq!(TaxType::from_str(&tax_type.to_string()).unwrap(), tax_type);
        }
    }

    #[rstest]
    #[case("1000000", Decimal::new(1_000_000, 0))]
    #[case("  2500.75 ", Decimal::new(250075, 2))]
    #[case("1e6", Decimal::new(1_000_000, 0))]
    fn test_parse_amount_valid(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(raw).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::zero("0")]
    #[case::negative("-5")]
    #[case::not_a_number("NaN")]
    #[case::infinity("inf")]
    #[case::garbage("ten thousand")]
    fn test_parse_amount_invalid(#[case] raw: &str) {
        assert!(matches!(
            parse_amount(raw),
            Err(TaxError::InvalidInput { .. })
        ));
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-5.0)]
    #[case::nan(f64::NAN)]
    #[case::infinity(f64::INFINITY)]
    fn test_request_from_f64_rejects_invalid(#[case] amount: f64) {
        assert!(matches!(
            TaxComputationRequest::from_f64(TaxType::Vat, amount),
            Err(TaxError::InvalidInput { .. })
        ));
    }

    #[rstest]
    #[case::below_precision(1e-30)]
    #[case::too_large(1e30)]
    fn test_request_from_f64_reports_out_of_range(#[case] amount: f64) {
        let error = TaxComputationRequest::from_f64(TaxType::Vat, amount).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("out of range"), "unexpected error: {}", message);
        assert!(!message.contains("greater than zero"));
    }

    #[test]
    fn test_request_parse() {
        let request = TaxComputationRequest::parse("cit", "50000000").unwrap();
        assert_eq!(request.tax_type, TaxType::Cit);
        assert_eq!(request.amount, Decimal::new(50_000_000, 0));
    }
}
