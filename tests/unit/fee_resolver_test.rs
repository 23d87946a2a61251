use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use mount_payments::config::PricingConfig;
use mount_payments::modules::fees::{FeeTier, FeeTierResolver};

/// Property-based tests for tiered service-fee resolution
///
/// Validates:
/// - Every non-negative amount resolves against a table partitioning [0, inf)
/// - Resolved fees are monotonically non-decreasing across tier boundaries
///   (the platform's tables are monotonic by policy)
/// - First-match semantics at exact tier boundaries
/// - Zero-fee fallback on table misses

/// Build a contiguous table from ascending boundary offsets, with fees
/// increasing by tier so monotonicity is a meaningful property.
fn table_from_boundaries(offsets: &[u64]) -> Vec<FeeTier> {
    let mut tiers = Vec::new();
    let mut min = Decimal::ZERO;

    for (i, offset) in offsets.iter().enumerate() {
        let max = min + Decimal::from(*offset);
        tiers.push(FeeTier::new(
            min,
            Some(max),
            Decimal::from((i as u64 + 1) * 500),
        ));
        min = max + Decimal::ONE;
    }

    let top_fee = Decimal::from((offsets.len() as u64 + 1) * 500);
    tiers.push(FeeTier::new(min, None, top_fee));
    tiers
}

proptest! {
    #[test]
    fn every_non_negative_amount_resolves(
        offsets in prop::collection::vec(1u64..100_000u64, 1..6),
        amount in 0u64..10_000_000u64
    ) {
        let tiers = table_from_boundaries(&offsets);
        let resolver = FeeTierResolver::new();
        let fee = resolver.resolve_fee(Decimal::from(amount), &tiers);

        // A partitioning table has no gaps, so the fallback zero is never
        // the answer here (all generated fees are >= 500).
        prop_assert!(fee >= dec!(500), "amount {} fell through the table", amount);
    }

    #[test]
    fn fees_are_monotonic_across_amounts(
        offsets in prop::collection::vec(1u64..100_000u64, 1..6),
        a in 0u64..10_000_000u64,
        b in 0u64..10_000_000u64
    ) {
        let tiers = table_from_boundaries(&offsets);
        let resolver = FeeTierResolver::new();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let fee_lo = resolver.resolve_fee(Decimal::from(lo), &tiers);
        let fee_hi = resolver.resolve_fee(Decimal::from(hi), &tiers);

        prop_assert!(
            fee_lo <= fee_hi,
            "fee decreased from {} at {} to {} at {}",
            fee_lo, lo, fee_hi, hi
        );
    }

    #[test]
    fn negative_amounts_fall_back_to_zero(amount in 1u64..1_000_000u64) {
        let tiers = table_from_boundaries(&[10_000, 50_000]);
        let resolver = FeeTierResolver::new();

        prop_assert_eq!(
            resolver.resolve_fee(-Decimal::from(amount), &tiers),
            Decimal::ZERO
        );
    }
}

#[test]
fn test_configured_table_boundary_crossing() {
    let pricing = PricingConfig::default();
    let resolver = FeeTierResolver::new();

    assert_eq!(resolver.resolve_fee(dec!(30000), &pricing.fee_tiers), dec!(1000));
    assert_eq!(resolver.resolve_fee(dec!(30001), &pricing.fee_tiers), dec!(2000));
}

#[test]
fn test_configured_table_covers_edges() {
    let pricing = PricingConfig::default();
    let resolver = FeeTierResolver::new();

    assert_eq!(resolver.resolve_fee(dec!(0), &pricing.fee_tiers), dec!(500));
    assert_eq!(
        resolver.resolve_fee(dec!(99999999), &pricing.fee_tiers),
        dec!(5000)
    );
}

#[test]
fn test_overlap_resolves_to_first_match() {
    // Overlapping tables are rejected by config validation; when one is
    // supplied directly the first matching tier wins, by contract.
    let tiers = vec![
        FeeTier::new(dec!(0), Some(dec!(50000)), dec!(700)),
        FeeTier::new(dec!(25000), None, dec!(1400)),
    ];

    assert_eq!(
        FeeTierResolver::new().resolve_fee(dec!(30000), &tiers),
        dec!(700)
    );
}
