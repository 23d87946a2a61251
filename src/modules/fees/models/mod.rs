pub mod fee_tier;

pub use fee_tier::{validate_tier_table, FeeTier};
