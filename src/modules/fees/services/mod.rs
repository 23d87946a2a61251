pub mod fee_resolver;

pub use fee_resolver::FeeTierResolver;
