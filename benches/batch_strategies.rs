//! Benchmark suite for comparing batch processing strategies
//!
//! Compares the synchronous and asynchronous strategies, and the raw engine,
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! # Benchmark Fixtures
//!
//! - `benchmark_small.csv` - 100 requests
//! - `benchmark_medium.csv` - 10,000 requests
//!
//! Both mix all four tax types with whole and fractional amounts.

use naira_tax_engine::cli::StrategyType;
use naira_tax_engine::strategy::{create_strategy, BatchConfig};
use naira_tax_engine::{compute, TaxComputationRequest, TaxType};
use rust_decimal::Decimal;
use std::path::Path;

fn main() {
    divan::main();
}

fn run(strategy_type: StrategyType, fixture: &str) {
    let strategy = create_strategy(strategy_type, Some(BatchConfig::default()));
    let path = Path::new("benches/fixtures").join(fixture);
    let mut output = Vec::new();

    strategy
        .process(&path, &mut output)
        .expect("Processing failed");
}

#[divan::bench]
fn sync_strategy_small() {
    run(StrategyType::Sync, "benchmark_small.csv");
}

#[divan::bench]
fn async_strategy_small() {
    run(StrategyType::Async, "benchmark_small.csv");
}

#[divan::bench]
fn sync_strategy_medium() {
    run(StrategyType::Sync, "benchmark_medium.csv");
}

#[divan::bench]
fn async_strategy_medium() {
    run(StrategyType::Async, "benchmark_medium.csv");
}

/// Single computation per tax type, without any I/O
#[divan::bench(args = TaxType::ALL)]
fn engine_compute(tax_type: TaxType) {
    let request = TaxComputationRequest::new(tax_type, Decimal::from(12_345_678)).unwrap();
    divan::black_box(compute(divan::black_box(&request)).unwrap());
}
