//! Naira Tax Engine CLI
//!
//! # Usage
//!
//! ```bash
//! naira-tax compute --tax-type paye --amount 1000000
//! naira-tax compute --tax-type vat --amount 250000 --json
//! naira-tax batch requests.csv > results.csv
//! naira-tax batch --strategy sync requests.csv > results.csv
//! naira-tax validate-id N-16015654
//! naira-tax quote --amount 82500 --asset USDT
//! naira-tax pay --tax-type paye --amount 1000000 --tax-id N-16015654 \
//!     --chain ethereum --address 0x... --signature 0x...
//! ```
//!
//! Results go to stdout, logs to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid input, file not found, payment failure, etc.)

use naira_tax_engine::{cli, logging};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init_cli_logger(args.verbose);

    let mut output = std::io::stdout().lock();
    if let Err(e) = cli::run(&args, &mut output) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
