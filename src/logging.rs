//! Logging setup
//!
//! Logs are written to stderr so batch CSV and JSON results on stdout stay
//! machine-readable. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter; `--verbose` raises the crate to debug
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "naira_tax_engine=debug,warn"
    } else {
        "naira_tax_engine=info,warn"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
