pub mod models;
pub mod services;

pub use models::{validate_tier_table, FeeTier};
pub use services::FeeTierResolver;
