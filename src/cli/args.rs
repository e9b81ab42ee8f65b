use crate::strategy::BatchConfig;
use crate::types::{parse_amount, Chain, TaxType};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Compute and pay Nigerian taxes (PAYE, VAT, CIT, WHT)
#[derive(Parser, Debug)]
#[command(name = "naira-tax")]
#[command(about = "Compute and pay Nigerian taxes (PAYE, VAT, CIT, WHT)", long_about = None)]
pub struct CliArgs {
    /// TOML file overriding exchange rates and the platform fee
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the tax due on a single amount
    Compute(ComputeArgs),

    /// Compute taxes for every row of a CSV file
    Batch(BatchArgs),

    /// Check a TIN or Taxpayer ID
    ValidateId {
        /// TIN (10+ digits) or Taxpayer ID (N-XXXXXXXX)
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Quote a naira amount in a crypto asset
    Quote {
        /// Naira amount to convert
        #[arg(long = "amount", value_name = "NGN")]
        amount: u64,

        /// Asset symbol, e.g. USDT
        #[arg(long = "asset", value_name = "SYMBOL")]
        asset: String,
    },

    /// Compute a tax and settle it from a wallet
    Pay(PayArgs),
}

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Tax to compute: paye, vat, cit or withholding
    #[arg(long = "tax-type", value_name = "TYPE")]
    pub tax_type: TaxType,

    /// Income, sales, profit or payment amount in naira
    #[arg(long = "amount", value_name = "NGN", value_parser = parse_amount)]
    pub amount: Decimal,

    /// Print the result as JSON
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input CSV file with `tax_type,amount` rows
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of requests per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of requests per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of concurrent partitions (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of partitions computing concurrently (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,
}

#[derive(Args, Debug)]
pub struct PayArgs {
    /// Tax to pay: paye, vat, cit or withholding
    #[arg(long = "tax-type", value_name = "TYPE")]
    pub tax_type: TaxType,

    /// Income, sales, profit or payment amount in naira
    #[arg(long = "amount", value_name = "NGN", value_parser = parse_amount)]
    pub amount: Decimal,

    /// Payer's TIN or Taxpayer ID
    #[arg(long = "tax-id", value_name = "ID")]
    pub tax_id: String,

    /// Chain the wallet lives on
    #[arg(long = "chain", value_name = "CHAIN", value_enum)]
    pub chain: Chain,

    /// Asset to pay with
    #[arg(long = "asset", value_name = "SYMBOL", default_value = "USDT")]
    pub asset: String,

    /// Wallet address paying the tax
    #[arg(long = "address", value_name = "ADDRESS")]
    pub address: String,

    /// Wallet signature authorizing the transfer
    #[arg(long = "signature", value_name = "SIGNATURE")]
    pub signature: Option<String>,

    /// Print the receipt as JSON
    #[arg(long = "json")]
    pub json: bool,
}

/// Available strategies for batch CSV processing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl BatchArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults; zero values are replaced by
    /// the defaults with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }
}
