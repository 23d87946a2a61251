use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full payment breakdown for one (job, customer) pair.
///
/// Transient display value: built fresh on every request, never persisted,
/// never mutated after construction. If any input changes the caller
/// recomputes from scratch; there is no incremental-update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub job_amount: Decimal,
    pub deposit: Deposit,
    pub service_fee: ServiceFee,
    pub platform_commission: PlatformCommission,
    pub payment_schedule: Vec<PaymentStage>,
    pub totals: Totals,
    pub company_payout: CompanyPayout,
}

/// Upfront percentage of the job amount due before work begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub percentage: Decimal,
    pub amount: Decimal,
}

/// Customer-facing platform fee, tiered by job amount, waivable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceFee {
    pub amount: Decimal,
    pub is_waived: bool,
    pub description: String,
    /// When the waiver ends, if the customer is in a promotion window
    pub promotion_end_date: Option<DateTime<Utc>>,
}

/// Percentage of the job amount retained from the company's payout.
/// Never waived by the promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCommission {
    pub percentage: Decimal,
    pub amount: Decimal,
}

/// One stage of the payment schedule ("Deposit" or "Final Payment").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStage {
    pub name: String,
    pub items: Vec<StageItem>,
    pub total: Decimal,
}

/// A single labelled amount within a payment stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageItem {
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_due_now: Decimal,
    pub final_payment_due: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyPayout {
    pub amount: Decimal,
}
