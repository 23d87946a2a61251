pub mod breakdown_builder;

pub use breakdown_builder::PaymentBreakdownBuilder;
