pub mod computed_metrics;
pub mod financial_input;
pub mod raw_record;

pub use computed_metrics::ComputedEventMetrics;
pub use financial_input::{
    CustomLine, DealTerms, DealType, EventFinancialInput, HourlyRole, LaborLine, MerchSplit,
    StoredTotals,
};
pub use raw_record::{
    RawArtist, RawCustomLine, RawEventRecord, RawFinancialRecord, RawLaborLine, RawPerformance,
};
