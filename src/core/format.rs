//! Presentation helpers for breakdown lines and receipts
//!
//! Naira amounts use thousands grouping and show kobo only when the amount is
//! fractional. Rates are shown as percentages without trailing zeros.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a naira amount, e.g. `₦1,250,000` or `₦28,500.50`
pub fn naira(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let whole = abs.trunc();
    let fraction = abs - whole;

    let grouped = group_thousands(&whole.normalize().to_string());
    if fraction.is_zero() {
        format!("{}₦{}", sign, grouped)
    } else {
        // fraction is < 1 with at most two places: "0.5" -> "50"
        let kobo = (fraction * Decimal::ONE_HUNDRED).trunc().normalize().to_string();
        format!("{}₦{}.{:0>2}", sign, grouped, kobo)
    }
}

/// Format a fractional rate as a percentage, e.g. `0.075` -> `7.5%`
pub fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
