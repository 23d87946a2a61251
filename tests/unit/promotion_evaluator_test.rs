use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use mount_payments::core::dates::add_calendar_months;
use mount_payments::modules::promotions::{
    CustomerPromotionRecord, PromotionConfig, PromotionEligibilityEvaluator,
};

/// Tests for first-job promotion eligibility
///
/// Validates:
/// - Global toggle short-circuits everything else
/// - Customers with no priced job yet are always eligible
/// - The explicit end-date override wins over the computed window
/// - The computed window end is inclusive to the exact instant
/// - Calendar-month arithmetic clamps at short months

fn record(
    first_job_date: Option<DateTime<Utc>>,
    explicit_end: Option<DateTime<Utc>>,
) -> CustomerPromotionRecord {
    CustomerPromotionRecord {
        customer_id: "cus-test".to_string(),
        first_job_date,
        explicit_promotion_end_date: explicit_end,
    }
}

fn active_config(duration_months: u32) -> PromotionConfig {
    PromotionConfig {
        is_active: true,
        duration_months,
    }
}

#[test]
fn test_no_first_job_always_eligible() {
    let evaluator = PromotionEligibilityEvaluator::new();

    for year in [1990, 2025, 2090] {
        let now = Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap();
        let status = evaluator.evaluate(&record(None, None), &active_config(3), now);
        assert!(status.is_in_promotion, "year {} should be eligible", year);
        assert!(status.promotion_end_date.is_none());
    }
}

#[test]
fn test_inactive_toggle_excludes_even_new_customers() {
    let evaluator = PromotionEligibilityEvaluator::new();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let config = PromotionConfig {
        is_active: false,
        duration_months: 3,
    };

    let status = evaluator.evaluate(&record(None, None), &config, now);
    assert!(!status.is_in_promotion);
}

#[test]
fn test_window_end_is_inclusive_to_the_millisecond() {
    let evaluator = PromotionEligibilityEvaluator::new();
    let first_job = Utc.with_ymd_and_hms(2025, 2, 10, 14, 30, 0).unwrap();
    let end = add_calendar_months(first_job, 3).unwrap();

    let at_end = evaluator.evaluate(&record(Some(first_job), None), &active_config(3), end);
    assert!(at_end.is_in_promotion, "exact expiry instant is eligible");

    let just_after = end + Duration::milliseconds(1);
    let after = evaluator.evaluate(&record(Some(first_job), None), &active_config(3), just_after);
    assert!(!after.is_in_promotion, "one millisecond past expiry is not");
}

#[test]
fn test_explicit_end_date_wins_both_directions() {
    let evaluator = PromotionEligibilityEvaluator::new();
    let first_job = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    // Override keeps an expired computed window alive.
    let extended = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let status = evaluator.evaluate(
        &record(Some(first_job), Some(extended)),
        &active_config(3),
        now,
    );
    assert!(status.is_in_promotion);
    assert_eq!(status.promotion_end_date, Some(extended));

    // Override also ends a window that would still be open.
    let recent_job = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
    let cut_short = Utc.with_ymd_and_hms(2025, 5, 15, 0, 0, 0).unwrap();
    let status = evaluator.evaluate(
        &record(Some(recent_job), Some(cut_short)),
        &active_config(3),
        now,
    );
    assert!(!status.is_in_promotion);
    assert_eq!(status.promotion_end_date, Some(cut_short));
}

#[test]
fn test_month_end_clamping_in_window() {
    let evaluator = PromotionEligibilityEvaluator::new();
    // Nov 30 + 3 months lands on Feb 29 2024 directly (leap year).
    let first_job = Utc.with_ymd_and_hms(2023, 11, 30, 0, 0, 0).unwrap();
    let status = evaluator.evaluate(
        &record(Some(first_job), None),
        &active_config(3),
        Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap(),
    );
    assert!(status.is_in_promotion);

    // Dec 31 + 2 months clamps to Feb 29 2024.
    let first_job = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
    let status = evaluator.evaluate(
        &record(Some(first_job), None),
        &active_config(2),
        Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap(),
    );
    assert!(status.is_in_promotion);
    assert_eq!(
        status.promotion_end_date,
        Some(Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_unavailable_record_is_revenue_safe() {
    let status = PromotionEligibilityEvaluator::new().evaluate_unavailable();
    assert!(!status.is_in_promotion);
    assert!(status.promotion_end_date.is_none());
    assert!(status.message.is_some());
}

proptest! {
    #[test]
    fn window_end_never_precedes_first_job(
        epoch_days in 0i64..20_000i64,
        months in 1u32..=24u32
    ) {
        let first_job = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
            + Duration::days(epoch_days);
        let end = add_calendar_months(first_job, months).unwrap();

        prop_assert!(end > first_job);
    }

    #[test]
    fn customer_is_eligible_at_their_first_job_instant(
        epoch_days in 0i64..20_000i64,
        months in 1u32..=24u32
    ) {
        let first_job = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
            + Duration::days(epoch_days);
        let evaluator = PromotionEligibilityEvaluator::new();

        let status = evaluator.evaluate(
            &record(Some(first_job), None),
            &active_config(months),
            first_job,
        );
        prop_assert!(status.is_in_promotion);
    }

    #[test]
    fn eligibility_is_monotone_in_time(
        epoch_days in 0i64..20_000i64,
        months in 1u32..=24u32,
        offset_a in 0i64..100_000_000i64,
        offset_b in 0i64..100_000_000i64
    ) {
        // Once a customer with an anchored window falls out of promotion,
        // they never fall back in at a later instant.
        let first_job = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
            + Duration::days(epoch_days);
        let evaluator = PromotionEligibilityEvaluator::new();
        let config = active_config(months);
        let rec = record(Some(first_job), None);

        let (early, late) = if offset_a <= offset_b {
            (offset_a, offset_b)
        } else {
            (offset_b, offset_a)
        };
        let at_early = evaluator
            .evaluate(&rec, &config, first_job + Duration::seconds(early))
            .is_in_promotion;
        let at_late = evaluator
            .evaluate(&rec, &config, first_job + Duration::seconds(late))
            .is_in_promotion;

        prop_assert!(at_early || !at_late);
    }
}
