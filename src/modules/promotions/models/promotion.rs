use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Platform-wide first-job promotion settings.
///
/// Read-only snapshot at evaluation time; refreshed out-of-band by admin
/// action and passed in explicitly rather than read from a shared cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionConfig {
    /// Global toggle for the promotion
    pub is_active: bool,
    /// Length of the waiver window, anchored at the customer's first job
    pub duration_months: u32,
}

impl PromotionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.duration_months == 0 {
            return Err(AppError::configuration(
                "Promotion duration must be at least 1 month",
            ));
        }

        Ok(())
    }
}

/// Per-customer promotion state, owned by the customer entity upstream.
///
/// `first_job_date` is set once, on the customer's first priced job, and
/// never cleared. `explicit_promotion_end_date` is an admin override that
/// takes precedence over the computed window once `first_job_date` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerPromotionRecord {
    pub customer_id: String,
    pub first_job_date: Option<DateTime<Utc>>,
    pub explicit_promotion_end_date: Option<DateTime<Utc>>,
}

/// Outcome of a promotion-eligibility evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionStatus {
    /// Whether the customer's service fee is currently waived
    pub is_in_promotion: bool,
    /// When the waiver ends; `None` when not anchored or not applicable
    pub promotion_end_date: Option<DateTime<Utc>>,
    /// Optional human-readable note for display
    pub message: Option<String>,
}

impl PromotionStatus {
    pub fn active(promotion_end_date: Option<DateTime<Utc>>, message: impl Into<String>) -> Self {
        Self {
            is_in_promotion: true,
            promotion_end_date,
            message: Some(message.into()),
        }
    }

    pub fn inactive(
        promotion_end_date: Option<DateTime<Utc>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            is_in_promotion: false,
            promotion_end_date,
            message: Some(message.into()),
        }
    }
}
