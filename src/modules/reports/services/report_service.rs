use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::AnalyticsConfig;
use crate::core::money::{count, percentage, ratio};
use crate::core::{AppError, Result};
use crate::modules::events::models::RawEventRecord;
use crate::modules::reports::models::{
    AnalyticsReport, EvaluatedEvent, ReportRequest, ResolvedWindows,
};
use crate::modules::reports::services::{
    BreakdownReconciler, DimensionalAggregator, TimeWindowResolver,
};

/// Sums over a set of evaluated events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTotals {
    pub events: usize,
    pub events_with_performance: usize,
    pub net_event_income: Decimal,
    pub gross_revenue: Decimal,
    pub expenses: Decimal,
    pub artist_payout: Decimal,
    pub capacity: i64,
    pub tickets_sold: i64,
    pub marketing_spend: Decimal,
    pub new_customers: i64,
}

impl ReportTotals {
    pub fn from_events(events: &[EvaluatedEvent]) -> Self {
        let mut totals = Self {
            events: events.len(),
            ..Default::default()
        };

        for financials in events.iter().filter_map(|e| e.financials.as_ref()) {
            let input = &financials.input;
            totals.events_with_performance += 1;
            totals.net_event_income = totals
                .net_event_income
                .saturating_add(financials.net_event_income());
            totals.gross_revenue = totals
                .gross_revenue
                .saturating_add(financials.total_gross_revenue());
            totals.expenses = totals
                .expenses
                .saturating_add(financials.metrics.total_expenses);
            totals.artist_payout = totals
                .artist_payout
                .saturating_add(financials.metrics.artist_payout);
            totals.capacity = totals.capacity.saturating_add(input.capacity);
            totals.tickets_sold = totals.tickets_sold.saturating_add(input.tickets_sold);
            totals.marketing_spend = totals.marketing_spend.saturating_add(input.marketing_spend);
            totals.new_customers = totals.new_customers.saturating_add(input.new_customers);
        }

        totals
    }

    /// Net event income as a percent of gross revenue
    pub fn net_margin(&self) -> Decimal {
        percentage(self.net_event_income, self.gross_revenue)
    }
}

/// Service for generating dashboard analytics reports
pub struct ReportService {
    config: AnalyticsConfig,
}

impl ReportService {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Resolve the request's windows as of `now` and build the report.
    ///
    /// # Errors
    /// Returns a validation error for an unknown timeframe, an unparseable
    /// or inverted custom range, or too many events.
    pub fn generate(&self, request: &ReportRequest, now: DateTime<Utc>) -> Result<AnalyticsReport> {
        let event_count = request.events.len() + request.previous_events.len();
        if event_count > self.config.max_events_per_report {
            return Err(AppError::validation(format!(
                "Too many events in report request: {} (maximum {})",
                event_count, self.config.max_events_per_report
            )));
        }

        let timeframe = TimeWindowResolver::parse_selector(
            request.timeframe.as_deref(),
            request.start.as_deref(),
            request.end.as_deref(),
        )?;
        let windows = TimeWindowResolver::resolve(timeframe, now)?;

        Ok(self.build_report(windows, &request.events, &request.previous_events))
    }

    /// Build the report for events already filtered to `windows`. Never
    /// fails; a bad record can only drop out of the views that need it.
    pub fn build_report(
        &self,
        windows: ResolvedWindows,
        events: &[RawEventRecord],
        previous_events: &[RawEventRecord],
    ) -> AnalyticsReport {
        info!(
            timeframe = %windows.timeframe,
            start = %windows.window.start,
            end = %windows.window.end,
            events = events.len(),
            previous_events = previous_events.len(),
            "Generating analytics report"
        );

        let evaluated: Vec<EvaluatedEvent> = events.iter().map(EvaluatedEvent::from_raw).collect();
        let previous: Vec<EvaluatedEvent> =
            previous_events.iter().map(EvaluatedEvent::from_raw).collect();

        let totals = ReportTotals::from_events(&evaluated);
        let previous_totals = ReportTotals::from_events(&previous);

        let partial = DimensionalAggregator::accumulate(&evaluated);
        if partial.skipped_dates() > 0 {
            warn!(
                skipped = partial.skipped_dates(),
                "Events excluded from time-based views"
            );
        }
        let dimensions = partial.finalize(self.config.artist_leaderboard_size);

        let revenue_breakdown =
            BreakdownReconciler::revenue_breakdown(&evaluated, totals.gross_revenue);
        let expense_breakdown = BreakdownReconciler::expense_breakdown(
            &evaluated,
            totals.expenses,
            totals.artist_payout,
        );

        let avg_net_margin = totals.net_margin();
        let report = AnalyticsReport {
            timeframe: windows.timeframe,
            window: windows.window,
            previous_window: windows.previous_window,

            total_net_event_income: totals.net_event_income,
            total_gross_revenue: totals.gross_revenue,
            total_expenses: totals.expenses,
            total_artist_payout: totals.artist_payout,
            avg_net_margin,
            net_income_change: percent_change(
                totals.net_event_income,
                previous_totals.net_event_income,
            ),
            margin_change: avg_net_margin.saturating_sub(previous_totals.net_margin()),
            previous_net_event_income: previous_totals.net_event_income,

            total_events: totals.events,
            events_with_performance: totals.events_with_performance,
            total_capacity: totals.capacity,
            total_tickets_sold: totals.tickets_sold,
            capacity_utilization: percentage(count(totals.tickets_sold), count(totals.capacity)),

            gross_profit_over_time: dimensions.gross_profit_over_time,
            events_over_time: dimensions.events_over_time,
            genre_performance: dimensions.genre_performance,
            artist_performance: dimensions.artist_performance,
            revenue_breakdown,
            expense_breakdown,

            avg_cost_per_attendee: ratio(totals.expenses, count(totals.tickets_sold)),
            avg_return_on_ad_spend: ratio(totals.gross_revenue, totals.marketing_spend),
            total_marketing_spend: totals.marketing_spend,
            total_new_customers: totals.new_customers,
        };

        info!(
            total_events = report.total_events,
            events_with_performance = report.events_with_performance,
            total_net_event_income = %report.total_net_event_income,
            "Analytics report generated"
        );

        report
    }
}

/// Percent change against the magnitude of the previous value, so moving
/// from a loss toward profit reads as positive; zero when there is no
/// previous value
fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    percentage(current.saturating_sub(previous), previous.abs())
}
