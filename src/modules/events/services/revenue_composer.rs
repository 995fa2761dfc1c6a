use rust_decimal::Decimal;

use crate::core::money::{percent_of, total};
use crate::modules::events::models::{CustomLine, EventFinancialInput, MerchSplit};

/// Revenue side of the event waterfall
pub struct RevenueComposer;

impl RevenueComposer {
    /// gross tickets + facility fees kept − platform fees paid out − taxes.
    /// May be negative.
    pub fn net_ticket_revenue(input: &EventFinancialInput) -> Decimal {
        input
            .gross_ticket_sales
            .saturating_add(input.facility_fees_kept)
            .saturating_sub(input.platform_fees_paid_out)
            .saturating_sub(input.taxes)
    }

    /// Venue's share of merchandise. A flat split is a fixed dollar amount
    /// and does not scale with sales.
    pub fn venue_merch_portion(input: &EventFinancialInput) -> Decimal {
        match input.merch_split {
            MerchSplit::Percentage(percent) => percent_of(input.total_merch_sales, percent),
            MerchSplit::Flat(amount) => amount,
        }
    }

    pub fn custom_revenue_total(input: &EventFinancialInput) -> Decimal {
        sum_lines(&input.custom_revenue)
    }

    /// Total gross revenue from already-derived ticket and merch figures
    pub fn total_gross_revenue(
        input: &EventFinancialInput,
        net_ticket_revenue: Decimal,
        venue_merch_portion: Decimal,
    ) -> Decimal {
        total([
            net_ticket_revenue,
            input.fb_sales,
            venue_merch_portion,
            input.parking_revenue,
            input.other_revenue,
            Self::custom_revenue_total(input),
        ])
    }
}

pub(crate) fn sum_lines(lines: &[CustomLine]) -> Decimal {
    total(lines.iter().map(|line| line.amount))
}
