use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// One band of the platform service-fee table.
///
/// A table is an ordered list of tiers partitioning `[0, +inf)` by job
/// amount: contiguous, non-overlapping, ascending by `min`. The last tier
/// carries `max = None` and covers `[min, +inf)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeTier {
    /// Inclusive lower bound of the job-amount band
    pub min: Decimal,
    /// Inclusive upper bound; `None` means unbounded
    pub max: Option<Decimal>,
    /// Flat service fee charged for amounts in this band
    pub fee: Decimal,
}

impl FeeTier {
    pub fn new(min: Decimal, max: Option<Decimal>, fee: Decimal) -> Self {
        Self { min, max, fee }
    }

    /// Whether `amount` falls inside this band (bounds inclusive).
    pub fn contains(&self, amount: Decimal) -> bool {
        if amount < self.min {
            return false;
        }

        match self.max {
            Some(max) => amount <= max,
            None => true,
        }
    }
}

/// Validate that a tier table partitions `[0, +inf)`.
///
/// Rejects empty tables, tables not anchored at zero, gaps or overlaps
/// between adjacent tiers, bounded final tiers, inverted bounds, and
/// negative fees. Run at configuration load, not on the lookup path.
pub fn validate_tier_table(tiers: &[FeeTier]) -> Result<()> {
    if tiers.is_empty() {
        return Err(AppError::configuration("Fee tier table cannot be empty"));
    }

    if tiers[0].min != Decimal::ZERO {
        return Err(AppError::configuration(format!(
            "Fee tier table must start at 0, got {}",
            tiers[0].min
        )));
    }

    for (i, tier) in tiers.iter().enumerate() {
        if tier.fee < Decimal::ZERO {
            return Err(AppError::configuration(format!(
                "Fee tier {} has negative fee {}",
                i + 1,
                tier.fee
            )));
        }

        match tier.max {
            Some(max) => {
                if max < tier.min {
                    return Err(AppError::configuration(format!(
                        "Fee tier {} has max {} below min {}",
                        i + 1,
                        max,
                        tier.min
                    )));
                }

                // Amounts are whole currency units; the next tier must
                // start exactly one unit above this one's max.
                match tiers.get(i + 1) {
                    Some(next) if next.min != max + Decimal::ONE => {
                        return Err(AppError::configuration(format!(
                            "Fee tiers {} and {} are not contiguous: {} is followed by {}",
                            i + 1,
                            i + 2,
                            max,
                            next.min
                        )));
                    }
                    Some(_) => {}
                    None => {
                        return Err(AppError::configuration(
                            "Last fee tier must be unbounded (no max)",
                        ));
                    }
                }
            }
            None => {
                if i != tiers.len() - 1 {
                    return Err(AppError::configuration(format!(
                        "Only the last fee tier may be unbounded, tier {} is not last",
                        i + 1
                    )));
                }
            }
        }
    }

    Ok(())
}
