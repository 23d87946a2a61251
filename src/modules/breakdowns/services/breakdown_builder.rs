use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{percentage_of, validate_percentage};
use crate::core::{AppError, Result};
use crate::modules::breakdowns::models::{
    CompanyPayout, Deposit, PaymentBreakdown, PaymentStage, PlatformCommission, ServiceFee,
    StageItem, Totals,
};
use crate::modules::promotions::models::PromotionStatus;

/// PaymentBreakdownBuilder assembles the customer-facing payment breakdown
/// from a resolved service fee and an evaluated promotion status.
pub struct PaymentBreakdownBuilder;

impl PaymentBreakdownBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a breakdown for one (job, customer) pair.
    ///
    /// Percentage amounts are rounded half-up to whole currency units,
    /// once, here; nothing downstream re-rounds. The promotion waives only
    /// the customer-facing service fee; the platform commission is charged
    /// against the company's payout regardless.
    ///
    /// Invalid input (negative amounts, out-of-range percentages) is a
    /// caller bug upstream of money and fails loudly with a validation
    /// error.
    pub fn build(
        &self,
        job_amount: Decimal,
        deposit_percentage: Decimal,
        commission_percentage: Decimal,
        resolved_fee: Decimal,
        promotion: &PromotionStatus,
    ) -> Result<PaymentBreakdown> {
        if job_amount < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Job amount cannot be negative, got {}",
                job_amount
            )));
        }

        if resolved_fee < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Service fee cannot be negative, got {}",
                resolved_fee
            )));
        }

        validate_percentage(deposit_percentage, "Deposit percentage")
            .map_err(AppError::validation)?;
        validate_percentage(commission_percentage, "Commission percentage")
            .map_err(AppError::validation)?;

        let deposit_amount = percentage_of(job_amount, deposit_percentage);
        let commission_amount = percentage_of(job_amount, commission_percentage);

        let is_waived = promotion.is_in_promotion;
        let fee_amount = if is_waived { Decimal::ZERO } else { resolved_fee };
        let fee_description = if is_waived {
            "Service fee waived (promotion)".to_string()
        } else {
            "Platform service fee".to_string()
        };

        let final_payment_due = job_amount - deposit_amount;
        let total_due_now = deposit_amount + fee_amount;

        let mut deposit_items = vec![StageItem {
            label: "Deposit".to_string(),
            amount: deposit_amount,
        }];
        if !is_waived {
            deposit_items.push(StageItem {
                label: "Service fee".to_string(),
                amount: fee_amount,
            });
        }

        // Commission comes out of the company's side; the customer's final
        // payment is the remaining job amount only.
        let payment_schedule = vec![
            PaymentStage {
                name: "Deposit".to_string(),
                items: deposit_items,
                total: total_due_now,
            },
            PaymentStage {
                name: "Final Payment".to_string(),
                items: vec![StageItem {
                    label: "Remaining balance".to_string(),
                    amount: final_payment_due,
                }],
                total: final_payment_due,
            },
        ];

        debug!(
            %job_amount,
            %deposit_amount,
            %fee_amount,
            is_waived,
            %commission_amount,
            "Built payment breakdown"
        );

        Ok(PaymentBreakdown {
            job_amount,
            deposit: Deposit {
                percentage: deposit_percentage,
                amount: deposit_amount,
            },
            service_fee: ServiceFee {
                amount: fee_amount,
                is_waived,
                description: fee_description,
                promotion_end_date: promotion.promotion_end_date,
            },
            platform_commission: PlatformCommission {
                percentage: commission_percentage,
                amount: commission_amount,
            },
            payment_schedule,
            totals: Totals {
                total_due_now,
                final_payment_due,
            },
            company_payout: CompanyPayout {
                amount: job_amount - commission_amount,
            },
        })
    }
}

impl Default for PaymentBreakdownBuilder {
    fn default() -> Self {
        Self::new()
    }
}
