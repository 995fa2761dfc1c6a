use tracing::debug;

use crate::core::money::{count, percentage, ratio};
use crate::modules::events::models::{ComputedEventMetrics, EventFinancialInput, RawFinancialRecord};
use crate::modules::events::services::{
    ExpenseComposer, InputNormalizer, PayoutCalculator, RevenueComposer,
};

/// Per-event derived metrics.
///
/// Each step reads only inputs and results computed before it. Every ratio
/// with a zero denominator is zero.
pub struct DerivedMetricsEngine;

impl DerivedMetricsEngine {
    /// Normalize a raw record and compute its metrics
    pub fn compute_raw(raw: &RawFinancialRecord) -> ComputedEventMetrics {
        Self::compute(&InputNormalizer::normalize(raw))
    }

    pub fn compute(input: &EventFinancialInput) -> ComputedEventMetrics {
        let net_ticket_revenue = RevenueComposer::net_ticket_revenue(input);
        let venue_merch_portion = RevenueComposer::venue_merch_portion(input);
        let total_gross_revenue =
            RevenueComposer::total_gross_revenue(input, net_ticket_revenue, venue_merch_portion);

        let total_labor_cost = ExpenseComposer::total_labor_cost(input);
        let total_expenses = ExpenseComposer::total_expenses(input, total_labor_cost);

        let artist_payout = PayoutCalculator::calculate(net_ticket_revenue, &input.deal);

        let gross_profit = total_gross_revenue.saturating_sub(total_expenses);
        let net_event_income = gross_profit.saturating_sub(artist_payout);
        let profit_margin = percentage(net_event_income, total_gross_revenue);

        let capacity = count(input.capacity);
        let tickets_sold = count(input.tickets_sold);
        let capacity_utilization = percentage(tickets_sold, capacity);
        let revenue_per_available_capacity = ratio(total_gross_revenue, capacity);

        let revenue_per_attendee = ratio(total_gross_revenue, tickets_sold);
        let cost_per_attendee = ratio(total_expenses, tickets_sold);
        let fb_per_cap = ratio(input.fb_sales, tickets_sold);
        let merch_per_cap = ratio(input.total_merch_sales, tickets_sold);
        let total_per_cap = ratio(
            input.fb_sales.saturating_add(input.total_merch_sales),
            tickets_sold,
        );

        debug!(
            %net_ticket_revenue,
            %total_gross_revenue,
            %total_expenses,
            %artist_payout,
            %net_event_income,
            "Computed event metrics"
        );

        ComputedEventMetrics {
            net_ticket_revenue,
            venue_merch_portion,
            artist_merch_portion: input.total_merch_sales.saturating_sub(venue_merch_portion),
            total_gross_revenue,
            total_labor_cost,
            total_expenses,
            artist_payout,
            gross_profit,
            net_event_income,
            profit_margin,
            capacity_utilization,
            revenue_per_available_capacity,
            revenue_per_attendee,
            cost_per_attendee,
            fb_per_cap,
            merch_per_cap,
            total_per_cap,
        }
    }
}
