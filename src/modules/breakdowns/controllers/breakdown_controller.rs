use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::core::Result;
use crate::modules::breakdowns::models::PaymentBreakdown;
use crate::modules::breakdowns::services::PaymentBreakdownBuilder;
use crate::modules::fees::services::FeeTierResolver;
use crate::modules::promotions::models::{CustomerPromotionRecord, PromotionStatus};
use crate::modules::promotions::services::PromotionEligibilityEvaluator;

/// Request body for a breakdown preview.
///
/// The customer's promotion record travels in the request: the data-store
/// read belongs to the caller. An absent `customer` means the record was
/// unavailable, which takes the revenue-safe path (no waiver).
#[derive(Debug, Deserialize)]
pub struct PreviewBreakdownRequest {
    pub job_amount: Decimal,
    pub customer: Option<CustomerInput>,
}

#[derive(Debug, Deserialize)]
pub struct CustomerInput {
    pub customer_id: String,
    pub first_job_date: Option<DateTime<Utc>>,
    pub explicit_promotion_end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct PreviewBreakdownResponse {
    pub breakdown: PaymentBreakdown,
    pub promotion: PromotionStatus,
}

/// Compute a payment breakdown preview
///
/// POST /breakdowns/preview
pub async fn preview_breakdown(
    pricing: web::Data<PricingConfig>,
    request: web::Json<PreviewBreakdownRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let now = Utc::now();

    let promotion = match request.customer {
        Some(customer) => {
            let record = CustomerPromotionRecord {
                customer_id: customer.customer_id,
                first_job_date: customer.first_job_date,
                explicit_promotion_end_date: customer.explicit_promotion_end_date,
            };
            PromotionEligibilityEvaluator::new().evaluate(&record, &pricing.promotion, now)
        }
        None => PromotionEligibilityEvaluator::new().evaluate_unavailable(),
    };

    let resolved_fee =
        FeeTierResolver::new().resolve_fee(request.job_amount, &pricing.fee_tiers);

    let breakdown = PaymentBreakdownBuilder::new().build(
        request.job_amount,
        pricing.deposit_percentage,
        pricing.commission_percentage,
        resolved_fee,
        &promotion,
    )?;

    Ok(HttpResponse::Ok().json(PreviewBreakdownResponse {
        breakdown,
        promotion,
    }))
}

/// Configure breakdown routes
pub fn configure_breakdown_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/breakdowns").route("/preview", web::post().to(preview_breakdown)),
    );
}
