//! End-to-end tax payment flow
//!
//! Runs the steps of a payment in order, stopping at the first failure:
//!
//! ```text
//! connect wallet -> validate tax id -> compute tax -> quote -> settle -> receipt
//! ```
//!
//! The flow owns no state between runs; each step's collaborator is injected.

use crate::config::PaymentConfig;
use crate::core::engine;
use crate::core::identifier::TaxIdValidator;
use crate::core::settlement::{nothing_to_pay, quote};
use crate::core::traits::{PaymentSettlement, TaxIdVerifier, WalletConnector};
use crate::types::{
    Chain, Receipt, SettlementRequest, TaxComputationRequest, TaxComputationResult, TaxError,
    Verification,
};
use serde::Serialize;
use tracing::info;

/// Everything the payer supplies for one payment
#[derive(Debug, Clone)]
pub struct PaymentOrder {
    pub chain: Chain,
    pub tax_id: String,
    pub request: TaxComputationRequest,
    /// Symbol of the asset to pay with
    pub asset: String,
    pub signature: Option<String>,
}

/// Outcome of a completed payment
#[derive(Debug, Clone, Serialize)]
pub struct PaymentOutcome {
    pub verification: Verification,
    pub computation: TaxComputationResult,
    pub receipt: Receipt,
}

/// Tax payment orchestrator
pub struct TaxPaymentFlow<W, V, S> {
    wallet: W,
    validator: TaxIdValidator<V>,
    settlement: S,
    config: PaymentConfig,
}

impl<W, V, S> TaxPaymentFlow<W, V, S>
where
    W: WalletConnector,
    V: TaxIdVerifier,
    S: PaymentSettlement,
{
    pub fn new(wallet: W, validator: TaxIdValidator<V>, settlement: S, config: PaymentConfig) -> Self {
        Self {
            wallet,
            validator,
            settlement,
            config,
        }
    }

    /// Run a payment from wallet connection to receipt
    ///
    /// # Errors
    ///
    /// Returns the first collaborator or engine error. A zero liability is
    /// rejected with `TaxError::NothingToPay` before anything is settled.
    pub fn run(&self, order: &PaymentOrder) -> Result<PaymentOutcome, TaxError> {
        let wallet = self.wallet.connect(order.chain)?;
        info!(chain = %order.chain, wallet = %wallet.masked(), "wallet connected");

        let verification = self.validator.validate(&order.tax_id)?;
        info!(
            tax_id = %verification.tax_id,
            verified = verification.verified,
            "tax id accepted"
        );

        let computation = engine::compute(&order.request)?;
        info!(
            tax_type = %computation.tax_type,
            tax_due = computation.tax_due,
            "tax computed"
        );
        if computation.tax_due == 0 {
            return Err(nothing_to_pay(computation.tax_type));
        }

        let quote = quote(computation.tax_due, &order.asset, &self.config)?;
        info!(quote = %quote, "payment quoted");

        let receipt = self.settlement.settle(&SettlementRequest {
            wallet,
            tax_id: verification.tax_id.clone(),
            tax_type: computation.tax_type,
            quote,
            signature: order.signature.clone(),
        })?;
        info!(
            receipt = %receipt.receipt_number,
            transaction = %receipt.transaction_id,
            "payment settled"
        );

        Ok(PaymentOutcome {
            verification,
            computation,
            receipt,
        })
    }
}
