use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary rounding for a single-currency deployment.
///
/// Job amounts are quoted in whole currency units (no fractional kobo), so
/// every derived amount rounds to scale 0 using round-half-up. Rounding is
/// applied exactly once, at the point a value is computed; downstream code
/// formats but never re-rounds.
pub const MONEY_SCALE: u32 = 0;

/// Round an amount to the smallest currency unit, half-up.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute `percentage`% of `amount`, rounded to the smallest currency unit.
pub fn percentage_of(amount: Decimal, percentage: Decimal) -> Decimal {
    round_money(amount * percentage / Decimal::ONE_HUNDRED)
}

/// Validate that a percentage lies within 0..=100.
pub fn validate_percentage(percentage: Decimal, label: &str) -> Result<(), String> {
    if percentage < Decimal::ZERO {
        return Err(format!("{} cannot be negative", label));
    }

    if percentage > Decimal::ONE_HUNDRED {
        return Err(format!("{} cannot exceed 100", label));
    }

    Ok(())
}
