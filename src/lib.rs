//! Mount Payments Library
//!
//! This library provides the payment-breakdown and promotion-eligibility
//! core of the Mount home-services marketplace.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::breakdowns;
pub use modules::fees;
pub use modules::promotions;
