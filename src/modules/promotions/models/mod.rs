pub mod promotion;

pub use promotion::{CustomerPromotionRecord, PromotionConfig, PromotionStatus};
