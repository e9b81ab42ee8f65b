//! Wallet connector test double
//!
//! Real wallet adapters are out of scope. `StaticWallet` hands out
//! preconfigured addresses so the payment flow can run end to end.

use crate::core::traits::WalletConnector;
use crate::types::{Chain, TaxError, WalletAddress};
use std::collections::HashMap;

/// Wallet connector backed by a fixed chain-to-address table
#[derive(Debug, Clone, Default)]
pub struct StaticWallet {
    addresses: HashMap<Chain, WalletAddress>,
    reject: bool,
}

impl StaticWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `address` for `chain`
    pub fn with_address(mut self, chain: Chain, address: impl Into<String>) -> Self {
        self.addresses.insert(chain, WalletAddress::new(address));
        self
    }

    /// Make every connection attempt fail as if the owner declined it
    pub fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }
}

impl WalletConnector for StaticWallet {
    fn connect(&self, chain: Chain) -> Result<WalletAddress, TaxError> {
        if self.reject {
            return Err(TaxError::UserRejected {
                chain: chain.to_string(),
            });
        }
        self.addresses
            .get(&chain)
            .cloned()
            .ok_or_else(|| TaxError::ProviderUnavailable {
                chain: chain.to_string(),
            })
    }
}
