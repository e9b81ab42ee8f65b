//! Payment-side types: wallets, quotes, settlement requests and receipts

use super::identifier::TaxId;
use super::tax::TaxType;
use super::error::TaxError;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chains a wallet can be connected on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Solana,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Ethereum => f.write_str("ethereum"),
            Chain::Solana => f.write_str("solana"),
        }
    }
}

/// Address returned by a wallet connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form shown on receipts: first 10 and last 8 characters
    ///
    /// Addresses of 18 characters or fewer are shown in full.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 18 {
            return self.0.clone();
        }
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 8..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Conversion rate for a payable crypto asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRate {
    /// Ticker symbol, e.g. `USDT`
    pub symbol: String,

    /// Display name, e.g. `Tether`
    pub name: String,

    /// Units of the asset bought by one US dollar
    pub units_per_usd: Decimal,
}

impl AssetRate {
    pub fn new(symbol: &str, name: &str, units_per_usd: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            units_per_usd,
        }
    }
}

/// Amount of crypto needed to cover a naira liability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentQuote {
    /// Asset symbol
    pub symbol: String,

    /// Liability in whole naira
    pub ngn_amount: u64,

    /// Crypto amount, rounded to 6 decimal places
    pub crypto_amount: Decimal,
}

impl fmt::Display for PaymentQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {}", self.crypto_amount, self.symbol)
    }
}

/// Division of a settled liability between the tax authority and the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeSplit {
    /// Total liability in naira
    pub total: Decimal,

    /// Amount remitted to the tax authority
    pub authority_amount: Decimal,

    /// Platform fee retained
    pub platform_fee: Decimal,
}

impl FeeSplit {
    /// Split `total` with `fee_rate` going to the platform
    pub fn new(total: u64, fee_rate: Decimal) -> Result<Self, TaxError> {
        let total = Decimal::from(total);
        let platform_fee = total
            .checked_mul(fee_rate)
            .ok_or_else(|| TaxError::arithmetic_overflow("platform fee"))?;
        Ok(Self {
            total,
            authority_amount: total - platform_fee,
            platform_fee,
        })
    }
}

/// Everything a settlement service needs to move funds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementRequest {
    pub wallet: WalletAddress,
    pub tax_id: TaxId,
    pub tax_type: TaxType,
    pub quote: PaymentQuote,
    /// Wallet signature authorizing the transfer
    pub signature: Option<String>,
}

/// Settlement status carried on a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
}

/// Receipt for a settled tax payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub receipt_number: String,
    pub transaction_id: String,
    pub tax_id: TaxId,
    pub tax_type: TaxType,
    /// Liability settled, in whole naira
    pub amount_paid: u64,
    /// Crypto side of the payment, e.g. `62.500000 USDT`
    pub crypto_paid: String,
    pub authority_amount: Decimal,
    pub platform_fee: Decimal,
    pub authority_reference: String,
    pub remita_rrr: String,
    pub wallet: WalletAddress,
    pub status: PaymentStatus,
    pub issued_at: DateTime<Utc>,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tax Payment Receipt")?;
        writeln!(f, "Receipt Number:  {}", self.receipt_number)?;
        writeln!(f, "Transaction ID:  {}", self.transaction_id)?;
        writeln!(f, "Payer ID (TIN):  {}", self.tax_id)?;
        writeln!(f, "Payment Date:    {}", self.issued_at.format("%B %-d, %Y"))?;
        writeln!(f, "Tax Type:        {}", self.tax_type.description())?;
        writeln!(
            f,
            "Amount Paid:     {}",
            crate::core::format::naira(Decimal::from(self.amount_paid))
        )?;
        writeln!(f, "Crypto Paid:     {}", self.crypto_paid)?;
        writeln!(
            f,
            "To Authority:    {}",
            crate::core::format::naira(self.authority_amount)
        )?;
        writeln!(
            f,
            "Platform Fee:    {}",
            crate::core::format::naira(self.platform_fee)
        )?;
        writeln!(f, "Reference:       {}", self.authority_reference)?;
        writeln!(f, "Remita RRR:      {}", self.remita_rrr)?;
        writeln!(f, "Payment Source:  {}", self.wallet.masked())?;
        write!(f, "Status:          Confirmed")
    }
}
