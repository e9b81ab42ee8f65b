//! Per-type running totals shared across batch tasks
//!
//! Each tax type gets its own DashMap entry, so tasks recording results for
//! different types never contend on the same shard lock.

use crate::types::{TaxComputationResult, TaxType};
use dashmap::DashMap;

/// Count of computed rows and the tax due they add up to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeTotal {
    pub count: u64,
    pub tax_due: u64,
}

/// Thread-safe totals keyed by tax type
#[derive(Debug, Default)]
pub struct TaxTotals {
    totals: DashMap<TaxType, TypeTotal>,
}

impl TaxTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one computed result to its type's total
    ///
    /// The tax sum saturates instead of wrapping.
    pub fn record(&self, result: &TaxComputationResult) {
        let mut entry = self.totals.entry(result.tax_type).or_default();
        entry.count += 1;
        entry.tax_due = entry.tax_due.saturating_add(result.tax_due);
    }

    /// Totals for every type seen so far, in `TaxType::ALL` order
    pub fn snapshot(&self) -> Vec<(TaxType, TypeTotal)> {
        TaxType::ALL
            .iter()
            .filter_map(|tax_type| {
                self.totals
                    .get(tax_type)
                    .map(|total| (*tax_type, *total.value()))
            })
            .collect()
    }

    /// Number of results recorded across all types
    pub fn count(&self) -> u64 {
        self.totals.iter().map(|entry| entry.count).sum()
    }

    /// Emit one log line per tax type
    pub fn log(&self) {
        for (tax_type, total) in self.snapshot() {
            tracing::info!(
                tax_type = %tax_type,
                rows = total.count,
                tax_due = total.tax_due,
                "batch totals"
            );
        }
    }
}
