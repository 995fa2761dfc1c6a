pub mod breakdown_reconciler;
pub mod dimensional_aggregator;
pub mod report_service;
pub mod time_window_resolver;

pub use breakdown_reconciler::BreakdownReconciler;
pub use dimensional_aggregator::{DimensionalAggregator, DimensionalPartial, DimensionalSummary};
pub use report_service::{ReportService, ReportTotals};
pub use time_window_resolver::TimeWindowResolver;
