use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::events::models::RawEventRecord;
use crate::modules::reports::models::TimeWindow;

/// Report request: the caller has already selected which events fall in
/// the current and the comparison window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRequest {
    /// week | month | quarter | year | all (ignored when start and end are given)
    pub timeframe: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub events: Vec<RawEventRecord>,
    pub previous_events: Vec<RawEventRecord>,
}

/// Dashboard analytics for one time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub timeframe: String,
    pub window: TimeWindow,
    pub previous_window: TimeWindow,

    pub total_net_event_income: Decimal,
    pub total_gross_revenue: Decimal,
    pub total_expenses: Decimal,
    pub total_artist_payout: Decimal,
    pub avg_net_margin: Decimal,
    /// Percent change of net event income vs the previous window
    pub net_income_change: Decimal,
    /// Percentage-point delta of the net margin vs the previous window
    pub margin_change: Decimal,
    pub previous_net_event_income: Decimal,

    pub total_events: usize,
    pub events_with_performance: usize,
    pub total_capacity: i64,
    pub total_tickets_sold: i64,
    pub capacity_utilization: Decimal,

    pub gross_profit_over_time: Vec<ProfitPoint>,
    pub events_over_time: Vec<PeriodSummary>,
    pub genre_performance: Vec<GenrePerformance>,
    pub artist_performance: Vec<ArtistPerformance>,
    pub revenue_breakdown: Vec<BreakdownEntry>,
    pub expense_breakdown: Vec<BreakdownEntry>,

    pub avg_cost_per_attendee: Decimal,
    pub avg_return_on_ad_spend: Decimal,
    pub total_marketing_spend: Decimal,
    pub total_new_customers: i64,
}

/// One event on the profit timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub profit: Decimal,
    pub event_name: String,
    pub is_profitable: bool,
}

/// Events per calendar month, labelled `M/YYYY`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub date: String,
    pub count: u64,
    pub avg_profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenrePerformance {
    pub genre: String,
    pub shows: u64,
    pub tickets_sold: i64,
    pub capacity: i64,
    pub gross_revenue: Decimal,
    pub net_profit: Decimal,
    pub avg_profit: Decimal,
    pub avg_tickets_sold: Decimal,
    pub capacity_utilization: Decimal,
    pub avg_margin: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistPerformance {
    pub artist: String,
    pub shows: u64,
    pub tickets_sold: i64,
    pub capacity: i64,
    pub gross_revenue: Decimal,
    pub net_profit: Decimal,
    pub avg_profit: Decimal,
    pub avg_margin: Decimal,
    pub trend: Trend,
}

/// Direction from an artist's first show to their last show in the window.
/// Intermediate shows are not considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "↑")]
    Up,
    #[serde(rename = "↓")]
    Down,
    #[serde(rename = "→")]
    Flat,
}

impl Trend {
    /// Compares only the first and last values
    pub fn from_profits(profits: &[Decimal]) -> Self {
        match (profits.first(), profits.last()) {
            (Some(first), Some(last)) if last > first => Trend::Up,
            (Some(first), Some(last)) if last < first => Trend::Down,
            _ => Trend::Flat,
        }
    }
}

/// Named slice of a revenue or expense total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub value: Decimal,
    /// Percent of the breakdown's total
    pub percentage: Decimal,
}
