use std::env;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::validate_percentage;
use crate::core::{AppError, Result};
use crate::modules::fees::models::{validate_tier_table, FeeTier};
use crate::modules::promotions::models::PromotionConfig;

/// Pricing settings: fee-tier table, promotion window, and the deposit and
/// commission percentages.
///
/// Loaded once at startup and handed to each evaluation as an immutable
/// snapshot; there is no shared mutable settings cache to go stale
/// mid-request. Admin changes take effect on restart (or redeploy of the
/// pricing file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub deposit_percentage: Decimal,
    pub commission_percentage: Decimal,
    pub fee_tiers: Vec<FeeTier>,
    pub promotion: PromotionConfig,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            deposit_percentage: Decimal::from(50),
            commission_percentage: Decimal::from(10),
            fee_tiers: vec![
                FeeTier::new(Decimal::ZERO, Some(Decimal::from(10_000)), Decimal::from(500)),
                FeeTier::new(
                    Decimal::from(10_001),
                    Some(Decimal::from(30_000)),
                    Decimal::from(1_000),
                ),
                FeeTier::new(
                    Decimal::from(30_001),
                    Some(Decimal::from(100_000)),
                    Decimal::from(2_000),
                ),
                FeeTier::new(
                    Decimal::from(100_001),
                    Some(Decimal::from(500_000)),
                    Decimal::from(3_500),
                ),
                FeeTier::new(Decimal::from(500_001), None, Decimal::from(5_000)),
            ],
            promotion: PromotionConfig {
                is_active: true,
                duration_months: 3,
            },
        }
    }
}

impl PricingConfig {
    /// Load pricing settings from the file named by `PRICING_CONFIG_PATH`,
    /// falling back to the compiled-in defaults when the variable is unset.
    /// A path that is set but unreadable or malformed is a hard error: the
    /// service must not come up with a tier table nobody intended.
    pub fn from_env() -> Result<Self> {
        match env::var("PRICING_CONFIG_PATH") {
            Ok(path) => Self::from_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "Cannot read pricing config {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Configuration(format!(
                "Malformed pricing config {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        validate_percentage(self.deposit_percentage, "Deposit percentage")
            .map_err(AppError::configuration)?;
        validate_percentage(self.commission_percentage, "Commission percentage")
            .map_err(AppError::configuration)?;
        validate_tier_table(&self.fee_tiers)?;
        self.promotion.validate()?;

        Ok(())
    }
}
