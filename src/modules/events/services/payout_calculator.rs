use rust_decimal::Decimal;

use crate::core::money::percent_of;
use crate::modules::events::models::{DealTerms, DealType};

/// Artist payout for the four deal families.
///
/// A parameter is "missing" when it is zero. Whenever a deal needs a missing
/// parameter the payout is zero; this is not an error. The result is never
/// negative.
pub struct PayoutCalculator;

impl PayoutCalculator {
    /// Payout owed to the artist given the event's net ticket revenue
    pub fn calculate(net_ticket_revenue: Decimal, deal: &DealTerms) -> Decimal {
        let Some(deal_type) = deal.deal_type else {
            return Decimal::ZERO;
        };

        let payout = match deal_type {
            DealType::FlatGuarantee => deal.guarantee,
            DealType::Percentage => Self::percentage(net_ticket_revenue, deal),
            DealType::Versus => Self::versus(net_ticket_revenue, deal),
            DealType::Hybrid => Self::hybrid(net_ticket_revenue, deal),
        };

        payout.max(Decimal::ZERO)
    }

    fn percentage(net_ticket_revenue: Decimal, deal: &DealTerms) -> Decimal {
        if deal.percentage_split.is_zero() {
            return Decimal::ZERO;
        }
        percent_of(net_ticket_revenue, deal.percentage_split)
    }

    /// Greater of the guarantee or the percentage of net tickets
    fn versus(net_ticket_revenue: Decimal, deal: &DealTerms) -> Decimal {
        if deal.guarantee.is_zero() || deal.percentage_split.is_zero() {
            return Decimal::ZERO;
        }
        deal.guarantee.max(percent_of(net_ticket_revenue, deal.percentage_split))
    }

    /// Guarantee, plus the percentage of net tickets above the split point
    fn hybrid(net_ticket_revenue: Decimal, deal: &DealTerms) -> Decimal {
        if deal.guarantee.is_zero()
            || deal.percentage_split.is_zero()
            || deal.hybrid_split_point.is_zero()
        {
            return Decimal::ZERO;
        }

        if net_ticket_revenue <= deal.hybrid_split_point {
            return deal.guarantee;
        }

        let overage = net_ticket_revenue.saturating_sub(deal.hybrid_split_point);
        deal.guarantee.saturating_add(percent_of(overage, deal.percentage_split))
    }
}
