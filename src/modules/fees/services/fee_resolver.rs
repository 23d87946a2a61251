use rust_decimal::Decimal;
use tracing::warn;

use crate::modules::fees::models::FeeTier;

/// FeeTierResolver maps a job amount onto the platform's tiered service fee.
pub struct FeeTierResolver;

impl FeeTierResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the flat service fee for a job amount.
    ///
    /// Scans the table in order and returns the fee of the first tier whose
    /// band contains the amount. Overlapping tiers are a configuration bug
    /// caught at load; if one slips through, first match wins — that
    /// tie-break is part of the contract, not an accident of iteration.
    ///
    /// A miss (negative amount, or a gapped table) resolves to zero with a
    /// warning rather than an error: a breakdown must never fail to render
    /// because the fee table is misconfigured. Operators pick the gap up
    /// from the log.
    pub fn resolve_fee(&self, amount: Decimal, tiers: &[FeeTier]) -> Decimal {
        match tiers.iter().find(|tier| tier.contains(amount)) {
            Some(tier) => tier.fee,
            None => {
                warn!(
                    %amount,
                    tier_count = tiers.len(),
                    "No fee tier matches amount, defaulting service fee to zero"
                );
                Decimal::ZERO
            }
        }
    }
}

impl Default for FeeTierResolver {
    fn default() -> Self {
        Self::new()
    }
}
