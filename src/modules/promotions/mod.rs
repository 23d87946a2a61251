pub mod models;
pub mod services;

pub use models::{CustomerPromotionRecord, PromotionConfig, PromotionStatus};
pub use services::PromotionEligibilityEvaluator;
