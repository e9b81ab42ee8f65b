//! Crypto quotes and the settlement test double
//!
//! A quote converts a naira liability into an amount of a configured crypto
//! asset. Settlement splits the liability between the tax authority and the
//! platform and issues a receipt; `MockSettlement` does this without moving
//! any funds.

use crate::config::PaymentConfig;
use crate::core::traits::PaymentSettlement;
use crate::types::{FeeSplit, PaymentQuote, PaymentStatus, Receipt, SettlementRequest, TaxError, TaxType};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Decimal places carried by crypto amounts in quotes
pub const CRYPTO_DECIMALS: u32 = 6;

/// Quote the amount of `symbol` needed to pay `ngn_amount`
///
/// The crypto amount is `ngn_amount / ngn_per_usd * units_per_usd`, rounded
/// to six decimal places.
pub fn quote(ngn_amount: u64, symbol: &str, config: &PaymentConfig) -> Result<PaymentQuote, TaxError> {
    let asset = config.asset(symbol)?;

    let usd = Decimal::from(ngn_amount)
        .checked_div(config.ngn_per_usd)
        .ok_or_else(|| TaxError::arithmetic_overflow("usd conversion"))?;
    let crypto_amount = usd
        .checked_mul(asset.units_per_usd)
        .ok_or_else(|| TaxError::arithmetic_overflow("crypto conversion"))?
        .round_dp_with_strategy(CRYPTO_DECIMALS, RoundingStrategy::MidpointAwayFromZero);

    Ok(PaymentQuote {
        symbol: asset.symbol.clone(),
        ngn_amount,
        crypto_amount,
    })
}

/// Settlement that always succeeds without touching any payment rail
///
/// Identifiers are derived from the issue time and a per-instance sequence
/// number, so two settlements never share a transaction id. Fix the clock
/// with [`MockSettlement::at`] for reproducible receipts.
#[derive(Debug)]
pub struct MockSettlement {
    fee_rate: Decimal,
    sequence: AtomicU64,
    fixed_time: Option<DateTime<Utc>>,
}

impl MockSettlement {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            fee_rate: config.platform_fee_rate,
            sequence: AtomicU64::new(0),
            fixed_time: None,
        }
    }

    /// Issue every receipt at `time`
    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.fixed_time = Some(time);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.fixed_time.unwrap_or_else(Utc::now)
    }
}

impl PaymentSettlement for MockSettlement {
    fn settle(&self, request: &SettlementRequest) -> Result<Receipt, TaxError> {
        let signed = request
            .signature
            .as_deref()
            .is_some_and(|signature| !signature.trim().is_empty());
        if !signed {
            return Err(TaxError::MissingSignature);
        }
        if request.quote.ngn_amount == 0 {
            return Err(nothing_to_pay(request.tax_type));
        }

        let split = FeeSplit::new(request.quote.ngn_amount, self.fee_rate)?;
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let issued_at = self.now();
        let millis = issued_at.timestamp_millis().unsigned_abs();

        info!(
            wallet = %request.wallet,
            total = %split.total,
            to_authority = %split.authority_amount,
            platform_fee = %split.platform_fee,
            "payment split"
        );

        Ok(Receipt {
            receipt_number: format!("LIRS-{:08}", millis % 100_000_000),
            transaction_id: format!("TX-{}-{:09}", millis, sequence),
            tax_id: request.tax_id.clone(),
            tax_type: request.tax_type,
            amount_paid: request.quote.ngn_amount,
            crypto_paid: request.quote.to_string(),
            authority_amount: split.authority_amount,
            platform_fee: split.platform_fee,
            authority_reference: format!("LIRS-{}", millis),
            remita_rrr: format!(
                "RRR-{:012}",
                (millis.wrapping_mul(1_000).wrapping_add(sequence)) % 1_000_000_000_000
            ),
            wallet: request.wallet.clone(),
            status: PaymentStatus::Completed,
            issued_at,
        })
    }
}

pub(crate) fn nothing_to_pay(tax_type: TaxType) -> TaxError {
    TaxError::NothingToPay {
        tax_type: tax_type.as_str().to_uppercase(),
    }
}
