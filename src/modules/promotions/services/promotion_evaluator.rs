use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::dates::add_calendar_months;
use crate::modules::promotions::models::{
    CustomerPromotionRecord, PromotionConfig, PromotionStatus,
};

/// PromotionEligibilityEvaluator decides whether a customer's service fee
/// is currently waived under the first-job promotion.
pub struct PromotionEligibilityEvaluator;

impl PromotionEligibilityEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a customer's promotion eligibility at `now`.
    ///
    /// Decision sequence, each step short-circuiting:
    /// 1. Promotion globally inactive: not in promotion.
    /// 2. No first job yet: in promotion, window not yet anchored.
    /// 3. Explicit end-date override set: eligible iff `now <= end`.
    /// 4. Computed window: first job date plus `duration_months` calendar
    ///    months (day-of-month clamped); eligible iff `now <= end`.
    ///
    /// The end instant is inclusive: a customer is still eligible at the
    /// exact expiry timestamp. Pure over its inputs.
    pub fn evaluate(
        &self,
        record: &CustomerPromotionRecord,
        config: &PromotionConfig,
        now: DateTime<Utc>,
    ) -> PromotionStatus {
        if !config.is_active {
            return PromotionStatus::inactive(None, "Promotion is not currently running");
        }

        let first_job_date = match record.first_job_date {
            Some(date) => date,
            None => {
                debug!(
                    customer_id = %record.customer_id,
                    "No first job yet, waiver applies to the pending first job"
                );
                return PromotionStatus::active(
                    None,
                    "Service fee waived for your first job",
                );
            }
        };

        if let Some(end) = record.explicit_promotion_end_date {
            return Self::status_for_window(now, end);
        }

        match add_calendar_months(first_job_date, config.duration_months) {
            Some(end) => Self::status_for_window(now, end),
            None => {
                // Out-of-range arithmetic means a corrupt first_job_date;
                // fall back to the revenue-safe path rather than panic.
                warn!(
                    customer_id = %record.customer_id,
                    %first_job_date,
                    "Promotion end date overflowed, treating customer as not in promotion"
                );
                PromotionStatus::inactive(None, "Promotion period has ended")
            }
        }
    }

    /// Revenue-safe result for when the customer record could not be loaded.
    ///
    /// The payment flow must not fail because the promotion collaborator is
    /// down; the fee is simply not waived and the caller may display the
    /// message.
    pub fn evaluate_unavailable(&self) -> PromotionStatus {
        PromotionStatus::inactive(
            None,
            "Promotion status could not be determined, standard fees apply",
        )
    }

    fn status_for_window(now: DateTime<Utc>, end: DateTime<Utc>) -> PromotionStatus {
        if now <= end {
            PromotionStatus::active(Some(end), "Service fee waived during your promotion period")
        } else {
            PromotionStatus::inactive(Some(end), "Promotion period has ended")
        }
    }
}

impl Default for PromotionEligibilityEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
