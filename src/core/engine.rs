//! Tax calculation engine
//!
//! Pure functions mapping a base amount to a tax liability plus an itemized
//! breakdown. Every function validates its input first and performs no
//! computation on failure, so a caller never sees a partial result.
//!
//! Liabilities are summed exactly in decimal and rounded once, half away from
//! zero, to whole naira.

use crate::core::bands::{
    CompanySize, PAYE_ALLOWANCE_RATE, PAYE_BANDS, PAYE_MIN_ALLOWANCE, VAT_RATE,
    WITHHOLDING_RATE,
};
use crate::core::format::{naira, percent};
use crate::types::{validate_amount, TaxComputationRequest, TaxComputationResult, TaxError, TaxType};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Compute the tax for a validated request
pub fn compute(request: &TaxComputationRequest) -> Result<TaxComputationResult, TaxError> {
    match request.tax_type {
        TaxType::Paye => compute_paye(request.amount),
        TaxType::Vat => compute_vat(request.amount),
        TaxType::Cit => compute_cit(request.amount),
        TaxType::Withholding => compute_withholding(request.amount),
    }
}

/// Compute PAYE on an annual gross income
///
/// The tax-free allowance is the larger of ₦200,000 and 21% of gross income.
/// What remains is run through the progressive bands in order; bands that
/// receive nothing are not listed.
pub fn compute_paye(gross_income: Decimal) -> Result<TaxComputationResult, TaxError> {
    let gross_income = validate_amount(gross_income)?;

    let allowance =
        PAYE_MIN_ALLOWANCE.max(checked_mul(gross_income, PAYE_ALLOWANCE_RATE, "paye allowance")?);
    let taxable = (gross_income - allowance).max(Decimal::ZERO);

    let mut breakdown = vec![
        format!("Gross income: {}", naira(gross_income)),
        format!("Tax-free allowance: {}", naira(allowance)),
        format!("Taxable income: {}", naira(taxable)),
    ];

    let mut remaining = taxable;
    let mut total = Decimal::ZERO;
    for (index, band) in PAYE_BANDS.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }
        let portion = match band.width {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        let band_tax = checked_mul(portion, band.rate, "paye band")?;
        let label = if index == 0 { "First" } else { "Next" };
        breakdown.push(format!(
            "{} {} @ {}: {}",
            label,
            naira(portion),
            percent(band.rate),
            naira(band_tax)
        ));
        total += band_tax;
        remaining -= portion;
    }

    let tax_due = round_to_naira(total, "paye")?;
    breakdown.push(format!("Total PAYE: {}", naira(Decimal::from(tax_due))));

    debug!(%gross_income, %taxable, tax_due, "computed PAYE");

    Ok(TaxComputationResult {
        tax_type: TaxType::Paye,
        amount: gross_income,
        tax_due,
        breakdown,
        net_amount: None,
    })
}

/// Compute VAT at 7.5% of a sales amount
pub fn compute_vat(sales_amount: Decimal) -> Result<TaxComputationResult, TaxError> {
    let sales_amount = validate_amount(sales_amount)?;

    let tax = checked_mul(sales_amount, VAT_RATE, "vat")?;
    let tax_due = round_to_naira(tax, "vat")?;

    debug!(%sales_amount, tax_due, "computed VAT");

    Ok(TaxComputationResult {
        tax_type: TaxType::Vat,
        amount: sales_amount,
        tax_due,
        breakdown: vec![
            format!("Sales amount: {}", naira(sales_amount)),
            format!("VAT @ {}: {}", percent(VAT_RATE), naira(tax)),
            format!("Total VAT: {}", naira(Decimal::from(tax_due))),
        ],
        net_amount: None,
    })
}

/// Compute Company Income Tax on a taxable profit
///
/// Small companies (profit below ₦25m) pay 0%, medium companies (below
/// ₦100m) 20% and large companies 30%, applied flat to the whole profit.
pub fn compute_cit(taxable_profit: Decimal) -> Result<TaxComputationResult, TaxError> {
    let taxable_profit = validate_amount(taxable_profit)?;

    let size = CompanySize::from_profit(taxable_profit);
    let tax = checked_mul(taxable_profit, size.rate(), "cit")?;
    let tax_due = round_to_naira(tax, "cit")?;

    debug!(%taxable_profit, ?size, tax_due, "computed CIT");

    Ok(TaxComputationResult {
        tax_type: TaxType::Cit,
        amount: taxable_profit,
        tax_due,
        breakdown: vec![
            format!("Taxable profit: {}", naira(taxable_profit)),
            format!("Classification: {}", size.label()),
            format!("CIT @ {}: {}", percent(size.rate()), naira(tax)),
            format!("Total CIT: {}", naira(Decimal::from(tax_due))),
        ],
        net_amount: None,
    })
}

/// Compute Withholding Tax at 5% of a contract or professional-service payment
///
/// The result also carries the net amount left for the supplier.
pub fn compute_withholding(payment_amount: Decimal) -> Result<TaxComputationResult, TaxError> {
    let payment_amount = validate_amount(payment_amount)?;

    let tax = checked_mul(payment_amount, WITHHOLDING_RATE, "withholding")?;
    let tax_due = round_to_naira(tax, "withholding")?;
    let net = payment_amount - Decimal::from(tax_due);

    debug!(%payment_amount, tax_due, %net, "computed withholding");

    Ok(TaxComputationResult {
        tax_type: TaxType::Withholding,
        amount: payment_amount,
        tax_due,
        breakdown: vec![
            format!("Payment amount: {}", naira(payment_amount)),
            format!(
                "WHT @ {} (contracts/professional services): {}",
                percent(WITHHOLDING_RATE),
                naira(tax)
            ),
            format!("Net to supplier: {}", naira(net)),
            format!("Total WHT: {}", naira(Decimal::from(tax_due))),
        ],
        net_amount: Some(net),
    })
}

fn checked_mul(amount: Decimal, rate: Decimal, operation: &str) -> Result<Decimal, TaxError> {
    amount
        .checked_mul(rate)
        .ok_or_else(|| TaxError::arithmetic_overflow(operation))
}

fn round_to_naira(tax: Decimal, operation: &str) -> Result<u64, TaxError> {
    tax.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or_else(|| TaxError::arithmetic_overflow(operation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_paye_one_million() {
        let result = compute_paye(dec("1000000")).unwrap();

        assert_eq!(result.tax_due, 82_500);
        assert_eq!(
            result.breakdown,
            vec![
                "Gross income: ₦1,000,000",
                "Tax-free allowance: ₦210,000",
                "Taxable income: ₦790,000",
                "First ₦300,000 @ 7%: ₦21,000",
                "Next ₦300,000 @ 11%: ₦33,000",
                "Next ₦190,000 @ 15%: ₦28,500",
                "Total PAYE: ₦82,500",
            ]
        );
        assert_eq!(result.net_amount, None);
    }

    #[test]
    fn test_paye_below_minimum_allowance_is_zero() {
        let result = compute_paye(dec("150000")).unwrap();

        assert_eq!(result.tax_due, 0);
        assert_eq!(
            result.breakdown,
            vec![
                "Gross income: ₦150,000",
                "Tax-free allowance: ₦200,000",
                "Taxable income: ₦0",
                "Total PAYE: ₦0",
            ]
        );
    }

    #[test]
    fn test_paye_reaches_top_band() {
        // allowance 2,100,000; taxable 7,900,000
        // 21,000 + 33,000 + 75,000 + 95,000 + 336,000 + 4,700,000 * 0.24
        let result = compute_paye(dec("10000000")).unwrap();

        assert_eq!(result.tax_due, 1_688_000);
        assert_eq!(result.breakdown[3], "First ₦300,000 @ 7%: ₦21,000");
        assert_eq!(result.breakdown[7], "Next ₦1,600,000 @ 21%: ₦336,000");
        assert_eq!(result.breakdown[8], "Next ₦4,700,000 @ 24%: ₦1,128,000");
        assert_eq!(result.breakdown.len(), 10);
    }

    #[test]
    fn test_paye_stops_at_exact_band_boundary() {
        // minimum allowance applies, leaving exactly the first band
        let result = compute_paye(dec("500000")).unwrap();

        assert_eq!(result.tax_due, 21_000);
        let band_lines: Vec<&String> = result
            .breakdown
            .iter()
            .filter(|line| line.contains(" @ "))
            .collect();
        assert_eq!(band_lines.len(), 1);
    }

    #[test]
    fn test_paye_rounds_half_away_from_zero() {
        // taxable = 200,007.5 - 200,000 = 7.5; 7.5 * 0.07 = 0.525 -> 1
        let result = compute_paye(dec("200007.5")).unwrap();
        assert_eq!(result.tax_due, 1);
    }

    #[test]
    fn test_paye_is_monotonic() {
        let mut previous = 0;
        let mut amount = dec("1");
        let step = dec("37813.37");
        while amount < dec("20000000") {
            let tax_due = compute_paye(amount).unwrap().tax_due;
            assert!(
                tax_due >= previous,
                "PAYE decreased at {}: {} < {}",
                amount,
                tax_due,
                previous
            );
            previous = tax_due;
            amount += step;
        }
    }

    #[rstest]
    #[case("1000", 75)]
    #[case("100", 8)] // 7.5 rounds up
    #[case("1234567.89", 92_593)]
    #[case("0.01", 0)]
    fn test_vat(#[case] amount: &str, #[case] expected: u64) {
        let result = compute_vat(dec(amount)).unwrap();
        assert_eq!(result.tax_due, expected);
        assert_eq!(result.tax_type, TaxType::Vat);
    }

    #[test]
    fn test_vat_breakdown() {
        let result = compute_vat(dec("100")).unwrap();
        assert_eq!(
            result.breakdown,
            vec![
                "Sales amount: ₦100",
                "VAT @ 7.5%: ₦7.50",
                "Total VAT: ₦8",
            ]
        );
    }

    #[rstest]
    #[case::small("24999999", 0)]
    #[case::medium_floor("25000000", 5_000_000)]
    #[case::medium("50000000", 10_000_000)]
    #[case::large_floor("100000000", 30_000_000)]
    #[case::large("150000000", 45_000_000)]
    fn test_cit(#[case] profit: &str, #[case] expected: u64) {
        assert_eq!(compute_cit(dec(profit)).unwrap().tax_due, expected);
    }

    #[test]
    fn test_cit_breakdown_names_classification() {
        let result = compute_cit(dec("50000000")).unwrap();
        assert_eq!(result.breakdown[1], "Classification: medium company (profit below ₦100,000,000)");
        assert_eq!(result.breakdown[2], "CIT @ 20%: ₦10,000,000");
    }

    #[rstest]
    #[case("1000000", 50_000, "950000")]
    #[case("10", 1, "9")] // 0.5 rounds up
    #[case("999.99", 50, "949.99")]
    fn test_withholding(#[case] amount: &str, #[case] expected_tax: u64, #[case] expected_net: &str) {
        let result = compute_withholding(dec(amount)).unwrap();
        assert_eq!(result.tax_due, expected_tax);
        assert_eq!(result.net_amount, Some(dec(expected_net)));
        assert!(result.breakdown.iter().any(|l| l.starts_with("Net to supplier:")));
    }

    #[rstest]
    fn test_invalid_amounts_are_rejected(
        #[values(TaxType::Paye, TaxType::Vat, TaxType::Cit, TaxType::Withholding)] tax_type: TaxType,
        #[values("0", "-5")] amount: &str,
    ) {
        let result = match tax_type {
            TaxType::Paye => compute_paye(dec(amount)),
            TaxType::Vat => compute_vat(dec(amount)),
            TaxType::Cit => compute_cit(dec(amount)),
            TaxType::Withholding => compute_withholding(dec(amount)),
        };
        assert!(matches!(result, Err(TaxError::InvalidInput { .. })));
    }

    #[rstest]
    fn test_nan_request_never_reaches_engine(
        #[values(TaxType::Paye, TaxType::Vat, TaxType::Cit, TaxType::Withholding)] tax_type: TaxType,
    ) {
        let result = TaxComputationRequest::from_f64(tax_type, f64::NAN).and_then(|r| compute(&r));
        assert!(matches!(result, Err(TaxError::InvalidInput { .. })));
    }

    #[test]
    fn test_overflow_is_reported_not_panicked() {
        let result = compute_vat(Decimal::MAX);
        assert!(matches!(result, Err(TaxError::ArithmeticOverflow { .. })));
    }

    #[rstest]
    fn test_compute_is_idempotent(
        #[values(TaxType::Paye, TaxType::Vat, TaxType::Cit, TaxType::Withholding)] tax_type: TaxType,
    ) {
        let request = TaxComputationRequest::new(tax_type, dec("73456789.12")).unwrap();
        assert_eq!(compute(&request).unwrap(), compute(&request).unwrap());
    }

    #[test]
    fn test_compute_dispatches_on_tax_type() {
        for tax_type in TaxType::ALL {
            let request = TaxComputationRequest::new(tax_type, dec("1000000")).unwrap();
            let result = compute(&request).unwrap();
            assert_eq!(result.tax_type, tax_type);
            assert!(!result.breakdown.is_empty());
        }
    }
}
