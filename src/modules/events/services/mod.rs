pub mod expense_composer;
pub mod input_normalizer;
pub mod metrics_engine;
pub mod payout_calculator;
pub mod revenue_composer;

pub use expense_composer::ExpenseComposer;
pub use input_normalizer::InputNormalizer;
pub use metrics_engine::DerivedMetricsEngine;
pub use payout_calculator::PayoutCalculator;
pub use revenue_composer::RevenueComposer;
