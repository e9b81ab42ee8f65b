//! Rate tables for the Nigerian taxes handled by the engine
//!
//! All rates are exact decimals so that computed liabilities never pick up
//! binary floating point error.

use rust_decimal::Decimal;

/// One PAYE band: `width` naira taxed at `rate` (`None` width is unbounded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayeBand {
    pub width: Option<Decimal>,
    pub rate: Decimal,
}

/// Progressive PAYE bands, applied in order to taxable income
pub const PAYE_BANDS: [PayeBand; 6] = [
    PayeBand {
        width: Some(Decimal::from_parts(300_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(7, 0, 0, false, 2),
    },
    PayeBand {
        width: Some(Decimal::from_parts(300_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(11, 0, 0, false, 2),
    },
    PayeBand {
        width: Some(Decimal::from_parts(500_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(15, 0, 0, false, 2),
    },
    PayeBand {
        width: Some(Decimal::from_parts(500_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(19, 0, 0, false, 2),
    },
    PayeBand {
        width: Some(Decimal::from_parts(1_600_000, 0, 0, false, 0)),
        rate: Decimal::from_parts(21, 0, 0, false, 2),
    },
    PayeBand {
        width: None,
        rate: Decimal::from_parts(24, 0, 0, false, 2),
    },
];

/// Minimum tax-free allowance for PAYE
pub const PAYE_MIN_ALLOWANCE: Decimal = Decimal::from_parts(200_000, 0, 0, false, 0);

/// Share of gross income granted as allowance (1% + 20%)
pub const PAYE_ALLOWANCE_RATE: Decimal = Decimal::from_parts(21, 0, 0, false, 2);

/// VAT rate (7.5%)
pub const VAT_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 3);

/// Withholding rate for contracts and professional services (5%)
pub const WITHHOLDING_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Company size tier for CIT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

impl CompanySize {
    /// Classify a company by taxable profit
    pub fn from_profit(profit: Decimal) -> Self {
        if profit < CIT_SMALL_LIMIT {
            CompanySize::Small
        } else if profit < CIT_MEDIUM_LIMIT {
            CompanySize::Medium
        } else {
            CompanySize::Large
        }
    }

    pub fn rate(&self) -> Decimal {
        match self {
            CompanySize::Small => Decimal::ZERO,
            CompanySize::Medium => Decimal::from_parts(20, 0, 0, false, 2),
            CompanySize::Large => Decimal::from_parts(30, 0, 0, false, 2),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Small => "small company (profit below ₦25,000,000)",
            CompanySize::Medium => "medium company (profit below ₦100,000,000)",
            CompanySize::Large => "large company",
        }
    }
}

/// Profits below this are taxed at 0%
pub const CIT_SMALL_LIMIT: Decimal = Decimal::from_parts(25_000_000, 0, 0, false, 0);

/// Profits below this (and at least the small limit) are taxed at 20%
pub const CIT_MEDIUM_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);
