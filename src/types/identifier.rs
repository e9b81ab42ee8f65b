//! Taxpayer identifier types
//!
//! Two identifier formats are accepted:
//! - **TIN**: ten or more consecutive digits (`1234567890`)
//! - **Taxpayer ID**: `N-` followed by eight or more digits (`N-16015654`),
//!   matched case-insensitively
//!
//! Identifiers are normalized to upper case once parsed.

use super::error::TaxError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static TIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,}$").expect("valid TIN pattern"));

static TAXPAYER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)N-[0-9]{8,}$").expect("valid Taxpayer ID pattern"));

/// Which of the two accepted formats an identifier uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxIdKind {
    /// Taxpayer Identification Number (digits only)
    Tin,
    /// State taxpayer ID (`N-` prefix)
    TaxpayerId,
}

/// A format-checked, normalized taxpayer identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxId {
    value: String,
    kind: TaxIdKind,
}

impl TaxId {
    /// Parse and normalize a raw identifier
    ///
    /// Surrounding whitespace is ignored. Blank input yields
    /// `TaxError::MissingTaxId`; anything that matches neither format yields
    /// `TaxError::InvalidTaxId`.
    pub fn parse(raw: &str) -> Result<Self, TaxError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaxError::MissingTaxId);
        }

        let kind = if TIN_PATTERN.is_match(trimmed) {
            TaxIdKind::Tin
        } else if TAXPAYER_ID_PATTERN.is_match(trimmed) {
            TaxIdKind::TaxpayerId
        } else {
            return Err(TaxError::invalid_tax_id(trimmed));
        };

        Ok(Self {
            value: trimmed.to_uppercase(),
            kind,
        })
    }

    /// Normalized identifier text
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Format of the identifier
    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }

    /// Last four characters, used by the offline verifier
    pub fn suffix(&self) -> &str {
        let start = self.value.len().saturating_sub(4);
        &self.value[start..]
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Registration status reported by the verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Confirmed by the verifying authority
    Active,
    /// Format accepted but not confirmed
    Pending,
}

/// Outcome of validating an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    /// The normalized identifier
    pub tax_id: TaxId,

    /// Whether the identifier passed validation (always true once parsed)
    pub valid: bool,

    /// Whether the verifying authority confirmed the identifier
    pub verified: bool,

    /// Registered taxpayer name, when known
    pub taxpayer_name: Option<String>,

    /// Registration status
    pub status: RegistrationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ten_digit_tin("1234567890", "1234567890", TaxIdKind::Tin)]
    #[case::long_tin("123456789012", "123456789012", TaxIdKind::Tin)]
    #[case::taxpayer_id("N-16015654", "N-16015654", TaxIdKind::TaxpayerId)]
    #[case::lowercase_prefix("n-16015654", "N-16015654", TaxIdKind::TaxpayerId)]
    #[case::long_taxpayer_id("N-1601565400", "N-1601565400", TaxIdKind::TaxpayerId)]
    #[case::surrounding_whitespace("  1234567890  ", "1234567890", TaxIdKind::Tin)]
    fn test_parse_accepts_valid_formats(
        #[case] raw: &str,
        #[case] normalized: &str,
        #[case] kind: TaxIdKind,
    ) {
        let tax_id = TaxId::parse(raw).unwrap();
        assert_eq!(tax_id.as_str(), normalized);
        assert_eq!(tax_id.kind(), kind);
    }

    #[rstest]
    #[case::too_short_tin("123456789")]
    #[case::too_short_taxpayer_id("N-1234567")]
    #[case::missing_dash("N16015654")]
    #[case::letters_in_tin("12345abcde")]
    #[case::wrong_prefix("X-16015654")]
    #[case::inner_space("12345 67890")]
    #[case::unicode_digits("١٢٣٤٥٦٧٨٩٠")]
    fn test_parse_rejects_invalid_formats(#[case] raw: &str) {
        assert!(matches!(
            TaxId::parse(raw),
            Err(TaxError::InvalidTaxId { .. })
        ));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_parse_rejects_blank(#[case] raw: &str) {
        assert_eq!(TaxId::parse(raw).unwrap_err(), TaxError::MissingTaxId);
    }

    #[test]
    fn test_suffix() {
        assert_eq!(TaxId::parse("N-16015654").unwrap().suffix(), "5654");
    }
}
