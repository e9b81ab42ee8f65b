//! Error types for the Naira Tax Engine
//!
//! This module defines all error types that can occur while computing a tax
//! liability, validating a taxpayer identifier or settling a payment.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: Non-positive or non-numeric amounts, unknown tax types
//! - **Identifier Errors**: Missing or malformed TIN / Taxpayer ID
//! - **Collaborator Errors**: Wallet rejection, verifier and settlement failures
//! - **File I/O and CSV Errors**: Batch input problems
//! - **Arithmetic Errors**: Results that do not fit the output integer

use thiserror::Error;

/// Main error type for the tax engine
///
/// Each variant includes the context needed to report the failure.
/// Engine failures (`InvalidInput`, `ArithmeticOverflow`) never carry a
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaxError {
    /// The amount is missing, non-numeric, non-finite, zero or negative
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the amount was rejected
        reason: String,
    },

    /// A checked decimal operation overflowed
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Unknown tax type selector
    #[error("Invalid tax type '{value}' (expected paye, vat, cit or withholding)")]
    InvalidTaxType {
        /// The rejected selector
        value: String,
    },

    /// No identifier was supplied
    #[error("Please enter your Payer ID or TIN")]
    MissingTaxId,

    /// The identifier matches neither the TIN nor the Taxpayer ID format
    #[error("Invalid format. Use either TIN (10 digits) or Taxpayer ID (N-XXXXXXXX): '{id}'")]
    InvalidTaxId {
        /// The rejected identifier
        id: String,
    },

    /// The wallet owner declined the connection request
    #[error("Wallet connection rejected by user on {chain}")]
    UserRejected {
        /// Chain the connection was requested for
        chain: String,
    },

    /// No wallet provider is available for the chain
    #[error("No wallet provider available for {chain}")]
    ProviderUnavailable {
        /// Chain the connection was requested for
        chain: String,
    },

    /// The remote identifier verification failed
    ///
    /// Callers of the validator never see this: it degrades to a fallback
    /// verification result.
    #[error("Tax ID verification failed: {message}")]
    VerificationFailed {
        /// Description of the verifier failure
        message: String,
    },

    /// The requested crypto asset has no configured rate
    #[error("Unsupported asset '{symbol}'")]
    UnsupportedAsset {
        /// The requested asset symbol
        symbol: String,
    },

    /// Settlement was requested without a payment signature
    #[error("Payment signature required")]
    MissingSignature,

    /// The computed liability is zero, so there is nothing to settle
    #[error("Nothing to pay: computed {tax_type} liability is zero")]
    NothingToPay {
        /// Tax type of the zero liability
        tax_type: String,
    },

    /// The settlement service failed
    #[error("Payment processing failed: {message}")]
    SettlementFailed {
        /// Description of the failure
        message: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable in batch mode: the malformed row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Configuration file is malformed or holds invalid values
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },
}

impl From<std::io::Error> for TaxError {
    fn from(error: std::io::Error) -> Self {
        TaxError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TaxError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        TaxError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for TaxError {
    fn from(error: toml::de::Error) -> Self {
        TaxError::ConfigError {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for TaxError {
    fn from(error: serde_json::Error) -> Self {
        TaxError::IoError {
            message: format!("JSON output failed: {}", error),
        }
    }
}

// Helper functions for creating common errors

impl TaxError {
    /// Create an InvalidInput error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        TaxError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        TaxError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidTaxType error
    pub fn invalid_tax_type(value: &str) -> Self {
        TaxError::InvalidTaxType {
            value: value.to_string(),
        }
    }

    /// Create an InvalidTaxId error
    pub fn invalid_tax_id(id: &str) -> Self {
        TaxError::InvalidTaxId { id: id.to_string() }
    }

    /// Create a VerificationFailed error
    pub fn verification_failed(message: impl Into<String>) -> Self {
        TaxError::VerificationFailed {
            message: message.into(),
        }
    }

    /// Create an UnsupportedAsset error
    pub fn unsupported_asset(symbol: &str) -> Self {
        TaxError::UnsupportedAsset {
            symbol: symbol.to_string(),
        }
    }

    /// Create a SettlementFailed error
    pub fn settlement_failed(message: impl Into<String>) -> Self {
        TaxError::SettlementFailed {
            message: message.into(),
        }
    }

    /// Create a ConfigError
    pub fn config(message: impl Into<String>) -> Self {
        TaxError::ConfigError {
            message: message.into(),
        }
    }
}
