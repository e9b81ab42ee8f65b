//! Naira Tax Engine Library
//! # Overview
//!
//! Computes Nigerian tax liabilities (PAYE, VAT, CIT and Withholding Tax)
//! with an itemized breakdown, validates taxpayer identifiers and settles
//! payments in crypto through pluggable collaborators. CSV batches can be
//! processed with a sync or an async strategy.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (tax types, requests, results, identifiers, receipts)
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Tax computation and breakdown generation
//!   - [`core::identifier`] - TIN / Taxpayer ID validation
//!   - [`core::settlement`] - Crypto quotes and settlement
//!   - [`core::flow`] - Wallet to receipt payment orchestration
//! - [`io`] - Batch CSV reading and result output
//! - [`strategy`] - Sync and async batch processing strategies
//! - [`config`] - Exchange rates and platform fee (TOML)
//! - [`cli`] - CLI arguments parsing and subcommands
//! - [`logging`] - tracing subscriber setup
//!
//! # Taxes
//!
//! - **PAYE**: progressive bands on income above the consolidated relief allowance
//! - **VAT**: 7.5% of sales
//! - **CIT**: 0% / 20% / 30% of profit depending on company size
//! - **WHT**: 5% of contract or professional-service payments
//!
//! Tax due is always a whole number of naira, rounded half away from zero.

pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use crate::config::PaymentConfig;
pub use crate::core::{compute, PaymentOrder, PaymentOutcome, TaxPaymentFlow};
pub use crate::io::write_results_csv;
pub use types::{
    TaxComputationRequest, TaxComputationResult, TaxError, TaxId, TaxType, Verification,
};
