use rust_decimal::Decimal;

use crate::core::money::{self, percentage};
use crate::modules::events::models::CustomLine;
use crate::modules::events::services::ExpenseComposer;
use crate::modules::reports::models::{
    BreakdownEntry, EvaluatedEvent, EventFinancials, Merge, OrderedBuckets,
};

pub const TICKETS: &str = "Tickets";
pub const FOOD_AND_BEVERAGE: &str = "F&B";
pub const MERCH: &str = "Merch";
pub const PARKING: &str = "Parking";

pub const ARTIST_PAYOUT: &str = "Artist Payout";
pub const LABOR: &str = "Labor";
pub const FB_COGS: &str = "F&B COGS";
pub const FEES: &str = "Fees";

pub const OTHER: &str = "Other";

/// Custom revenue lines whose names contain one of these are already
/// counted by a fixed entry
pub const REVENUE_KEYWORDS: [&str; 5] = ["f&b", "food", "beverage", "merch", "parking"];

/// Custom expense lines whose names contain one of these are already
/// counted by a fixed entry
pub const EXPENSE_KEYWORDS: [&str; 6] = [
    "payout",
    "labor",
    "cogs",
    "cost of goods",
    "credit card",
    "platform fee",
];

/// Builds the revenue and expense breakdowns for a set of events.
///
/// Fixed entries come first, then each distinct custom line name (amounts
/// summed across events), then a positive "Other" residual so the entries
/// add up to the known total.
pub struct BreakdownReconciler;

impl BreakdownReconciler {
    /// Revenue slices of `total_gross_revenue`, largest first
    pub fn revenue_breakdown(
        events: &[EvaluatedEvent],
        total_gross_revenue: Decimal,
    ) -> Vec<BreakdownEntry> {
        let figures: Vec<&EventFinancials> = with_financials(events).collect();

        let fixed = vec![
            (TICKETS, sum(&figures, |f| f.metrics.net_ticket_revenue)),
            (FOOD_AND_BEVERAGE, sum(&figures, |f| f.input.fb_sales)),
            (MERCH, sum(&figures, |f| f.metrics.venue_merch_portion)),
            (PARKING, sum(&figures, |f| f.input.parking_revenue)),
        ];
        let custom = accumulate_lines(figures.iter().map(|f| f.input.custom_revenue.as_slice()));

        let mut entries = Self::reconcile(fixed, custom, &REVENUE_KEYWORDS, total_gross_revenue);
        sort_descending(&mut entries);
        entries
    }

    /// Expense slices of `total_expenses + total_artist_payout`, artist
    /// payout first and the rest largest first
    pub fn expense_breakdown(
        events: &[EvaluatedEvent],
        total_expenses: Decimal,
        total_artist_payout: Decimal,
    ) -> Vec<BreakdownEntry> {
        let figures: Vec<&EventFinancials> = with_financials(events).collect();

        let fixed = vec![
            (ARTIST_PAYOUT, total_artist_payout),
            (LABOR, sum(&figures, |f| f.metrics.total_labor_cost)),
            (FB_COGS, sum(&figures, |f| f.input.fb_cost_of_goods)),
            (FEES, sum(&figures, |f| ExpenseComposer::processing_fees(&f.input))),
        ];
        let custom = accumulate_lines(figures.iter().map(|f| f.input.custom_expenses.as_slice()));

        let total = total_expenses.saturating_add(total_artist_payout);
        let entries = Self::reconcile(fixed, custom, &EXPENSE_KEYWORDS, total);
        pin_first(entries, ARTIST_PAYOUT)
    }

    /// Fixed entries, then non-keyword custom lines, then the positive
    /// residual as "Other". Unsorted.
    pub fn reconcile(
        fixed: Vec<(&str, Decimal)>,
        custom: OrderedBuckets<Decimal>,
        keywords: &[&str],
        total: Decimal,
    ) -> Vec<BreakdownEntry> {
        let mut entries: Vec<BreakdownEntry> = fixed
            .into_iter()
            .map(|(name, value)| entry(name, value, total))
            .collect();

        for (name, value) in custom {
            if matches_keyword(&name, keywords) {
                continue;
            }
            entries.push(entry(&name, value, total));
        }

        let accounted = money::total(entries.iter().map(|e| e.value));
        let remainder = total.saturating_sub(accounted);
        if remainder > Decimal::ZERO {
            entries.push(entry(OTHER, remainder, total));
        }

        entries
    }
}

/// Sum custom lines by exact name, in first-seen order
pub fn accumulate_lines<'a>(
    groups: impl IntoIterator<Item = &'a [CustomLine]>,
) -> OrderedBuckets<Decimal> {
    let mut buckets: OrderedBuckets<Decimal> = OrderedBuckets::new();
    for lines in groups {
        for line in lines {
            buckets.entry(&line.name).merge(line.amount);
        }
    }
    buckets
}

fn with_financials(events: &[EvaluatedEvent]) -> impl Iterator<Item = &EventFinancials> {
    events.iter().filter_map(|event| event.financials.as_ref())
}

fn sum(figures: &[&EventFinancials], field: impl Fn(&EventFinancials) -> Decimal) -> Decimal {
    money::total(figures.iter().map(|f| field(*f)))
}

fn matches_keyword(name: &str, keywords: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

fn entry(name: &str, value: Decimal, total: Decimal) -> BreakdownEntry {
    BreakdownEntry {
        name: name.to_string(),
        value,
        percentage: percentage(value, total),
    }
}

fn sort_descending(entries: &mut [BreakdownEntry]) {
    entries.sort_by(|a, b| b.value.cmp(&a.value));
}

fn pin_first(entries: Vec<BreakdownEntry>, pinned: &str) -> Vec<BreakdownEntry> {
    let (mut ordered, mut rest): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|e| e.name == pinned);
    sort_descending(&mut rest);
    ordered.append(&mut rest);
    ordered
}
