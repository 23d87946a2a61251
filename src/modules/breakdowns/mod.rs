pub mod controllers;
pub mod models;
pub mod services;

pub use models::PaymentBreakdown;
pub use services::PaymentBreakdownBuilder;
