//! Capability traits for the external collaborators of a tax payment
//!
//! These abstract over concrete wallet SDKs, identifier verification services
//! and settlement providers, so the payment flow is not bound to any of them.
//! The crate ships deterministic implementations of each for offline use and
//! tests.

use crate::types::{Chain, Receipt, SettlementRequest, TaxError, TaxId, WalletAddress};

/// Connects to a wallet provider and returns the address to pay from
pub trait WalletConnector {
    /// Request a connection on `chain`
    ///
    /// Fails with `TaxError::UserRejected` when the owner declines or
    /// `TaxError::ProviderUnavailable` when no provider serves the chain.
    fn connect(&self, chain: Chain) -> Result<WalletAddress, TaxError>;
}

/// Confirms an identifier with an external authority
pub trait TaxIdVerifier {
    /// Look up the registered taxpayer name for a format-checked identifier
    fn verify(&self, tax_id: &TaxId) -> Result<String, TaxError>;
}

/// Converts crypto to naira and remits the liability
pub trait PaymentSettlement {
    /// Settle the request and return a receipt
    fn settle(&self, request: &SettlementRequest) -> Result<Receipt, TaxError>;
}
