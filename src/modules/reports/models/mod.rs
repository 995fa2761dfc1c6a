pub mod analytics_report;
pub mod buckets;
pub mod evaluated_event;
pub mod time_window;

pub use analytics_report::{
    AnalyticsReport, ArtistPerformance, BreakdownEntry, GenrePerformance, PeriodSummary,
    ProfitPoint, ReportRequest, Trend,
};
pub use buckets::{Merge, OrderedBuckets};
pub use evaluated_event::{EvaluatedEvent, EventFinancials};
pub use time_window::{ResolvedWindows, TimeWindow, Timeframe};
