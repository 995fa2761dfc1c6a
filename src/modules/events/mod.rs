pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ComputedEventMetrics, EventFinancialInput, RawEventRecord, RawFinancialRecord};
pub use services::{DerivedMetricsEngine, InputNormalizer, PayoutCalculator};
