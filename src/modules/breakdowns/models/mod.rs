pub mod payment_breakdown;

pub use payment_breakdown::{
    CompanyPayout, Deposit, PaymentBreakdown, PaymentStage, PlatformCommission, ServiceFee,
    StageItem, Totals,
};
