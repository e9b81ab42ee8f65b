//! Payment configuration
//!
//! Exchange rates and the platform fee used when quoting and settling a
//! payment. Defaults match the rates the service launched with; a TOML file
//! can override any of them:
//!
//! ```toml
//! ngn_per_usd = "1600"
//! platform_fee_rate = "0.05"
//!
//! [[assets]]
//! symbol = "USDT"
//! name = "Tether"
//! units_per_usd = "1"
//! ```
//!
//! When `[[assets]]` is present it replaces the default asset list.

use crate::types::{AssetRate, TaxError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Naira per US dollar
    pub ngn_per_usd: Decimal,

    /// Share of each payment kept as platform fee; the rest goes to the
    /// tax authority
    pub platform_fee_rate: Decimal,

    /// Payable assets and their rates
    pub assets: Vec<AssetRate>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            ngn_per_usd: Decimal::from(1600),
            platform_fee_rate: Decimal::new(5, 2),
            assets: vec![
                AssetRate::new("USDT", "Tether", Decimal::ONE),
                AssetRate::new("USDC", "USD Coin", Decimal::ONE),
                AssetRate::new("ETH", "Ethereum", Decimal::new(41, 5)),
                AssetRate::new("SOL", "Solana", Decimal::new(12, 3)),
            ],
        }
    }
}

impl PaymentConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, TaxError> {
        let config: PaymentConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, TaxError> {
        if !path.exists() {
            return Err(TaxError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), assets = config.assets.len(), "loaded payment config");
        Ok(config)
    }

    /// Look up an asset by symbol, case-insensitively
    pub fn asset(&self, symbol: &str) -> Result<&AssetRate, TaxError> {
        self.assets
            .iter()
            .find(|asset| asset.symbol.eq_ignore_ascii_case(symbol.trim()))
            .ok_or_else(|| TaxError::unsupported_asset(symbol))
    }

    pub fn validate(&self) -> Result<(), TaxError> {
        if self.ngn_per_usd <= Decimal::ZERO {
            return Err(TaxError::config("ngn_per_usd must be greater than zero"));
        }
        if self.platform_fee_rate < Decimal::ZERO || self.platform_fee_rate >= Decimal::ONE {
            return Err(TaxError::config(
                "platform_fee_rate must be at least 0 and below 1",
            ));
        }
        if self.assets.is_empty() {
            return Err(TaxError::config("at least one asset must be configured"));
        }

        let mut seen = HashSet::new();
        for asset in &self.assets {
            if asset.units_per_usd <= Decimal::ZERO {
                return Err(TaxError::config(format!(
                    "asset {} must have a positive units_per_usd",
                    asset.symbol
                )));
            }
            if !seen.insert(asset.symbol.to_uppercase()) {
                return Err(TaxError::config(format!(
                    "asset {} is configured more than once",
                    asset.symbol
                )));
            }
        }
        Ok(())
    }
}
