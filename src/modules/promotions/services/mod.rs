pub mod promotion_evaluator;

pub use promotion_evaluator::PromotionEligibilityEvaluator;
