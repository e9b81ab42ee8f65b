//! Core business logic module
//!
//! - `bands` - PAYE bands, flat rates and CIT company-size thresholds
//! - `engine` - Tax computation for PAYE, VAT, CIT and WHT
//! - `format` - Naira and percentage formatting for breakdown lines
//! - `traits` - Seams for the wallet, verifier and settlement collaborators
//! - `identifier` - Tax ID validation with optional verification
//! - `wallet` - Wallet connector backed by configured addresses
//! - `settlement` - Crypto quotes and the settlement test double
//! - `flow` - End-to-end payment orchestration
//! - `async` - Concurrent batch computation

pub mod r#async;
pub mod bands;
pub mod engine;
pub mod flow;
pub mod format;
pub mod identifier;
pub mod settlement;
pub mod traits;
pub mod wallet;

pub use engine::compute;
pub use flow::{PaymentOrder, PaymentOutcome, TaxPaymentFlow};
pub use identifier::{MockVerifier, TaxIdValidator};
pub use r#async::{BatchProcessor, TaxTotals};
pub use settlement::{quote, MockSettlement};
pub use traits::{PaymentSettlement, TaxIdVerifier, WalletConnector};
pub use wallet::StaticWallet;
