//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `tax`: Tax type selector, computation request and result
//! - `identifier`: Taxpayer identifier and verification outcome
//! - `payment`: Wallet, quote, settlement and receipt types
//! - `error`: Error types for the tax engine

pub mod error;
pub mod identifier;
pub mod payment;
pub mod tax;

pub use error::TaxError;
pub use identifier::{RegistrationStatus, TaxId, TaxIdKind, Verification};
pub use payment::{
    AssetRate, Chain, FeeSplit, PaymentQuote, PaymentStatus, Receipt, SettlementRequest,
    WalletAddress,
};
pub use tax::{parse_amount, validate_amount, TaxComputationRequest, TaxComputationResult, TaxType};
