use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived financial metrics for one event
///
/// Built once per calculation and never mutated afterwards. Identical inputs
/// always produce an identical value, so callers may persist it and recompute
/// over the stored copy at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedEventMetrics {
    pub net_ticket_revenue: Decimal,
    pub venue_merch_portion: Decimal,
    pub artist_merch_portion: Decimal,
    pub total_gross_revenue: Decimal,
    pub total_labor_cost: Decimal,
    pub total_expenses: Decimal,
    pub artist_payout: Decimal,
    pub gross_profit: Decimal,
    pub net_event_income: Decimal,
    /// Percent of total gross revenue
    pub profit_margin: Decimal,
    /// Percent of capacity
    pub capacity_utilization: Decimal,
    pub revenue_per_available_capacity: Decimal,
    pub revenue_per_attendee: Decimal,
    pub cost_per_attendee: Decimal,
    pub fb_per_cap: Decimal,
    pub merch_per_cap: Decimal,
    pub total_per_cap: Decimal,
}

impl ComputedEventMetrics {
    pub fn is_profitable(&self) -> bool {
        self.net_event_income > Decimal::ZERO
    }
}
