use rust_decimal::Decimal;
use tracing::warn;

use crate::modules::events::models::{
    CustomLine, DealTerms, DealType, EventFinancialInput, HourlyRole, LaborLine, MerchSplit,
    RawCustomLine, RawFinancialRecord, RawLaborLine, StoredTotals,
};

/// Name given to custom lines saved without one
pub const UNNAMED_LINE: &str = "Unnamed";

/// Adapter from raw, partially-populated records to complete inputs.
///
/// This is the only place that knows about absent fields and legacy field
/// names; everything downstream works on `EventFinancialInput`.
pub struct InputNormalizer;

impl InputNormalizer {
    /// Build a complete input record. Never fails: absent amounts become zero,
    /// absent lists become empty, unknown deal types become "no deal".
    pub fn normalize(raw: &RawFinancialRecord) -> EventFinancialInput {
        EventFinancialInput {
            deal: DealTerms {
                deal_type: Self::deal_type(raw.deal_type.as_deref()),
                guarantee: amount(raw.guarantee),
                percentage_split: amount(raw.percentage_split),
                hybrid_split_point: amount(raw.hybrid_split_point),
            },

            gross_ticket_sales: amount(raw.gross_ticket_sales),
            facility_fees_kept: amount(raw.facility_fees_kept),
            platform_fees_paid_out: amount(raw.platform_fees_paid_out),
            taxes: amount(raw.taxes),

            fb_sales: amount(raw.fb_sales),
            total_merch_sales: amount(raw.total_merch_sales),
            merch_split: Self::merch_split(
                raw.merch_split_type.as_deref(),
                amount(raw.merch_split_value),
            ),
            parking_revenue: amount(raw.parking_revenue),
            other_revenue: amount(raw.other_revenue),

            labor_lines: Self::labor_lines(raw.labor_lines.as_deref()),
            bartender: HourlyRole::new(amount(raw.bartender_hours), amount(raw.bartender_rate)),
            security: HourlyRole::new(amount(raw.security_hours), amount(raw.security_rate)),
            box_office: HourlyRole::new(amount(raw.box_office_hours), amount(raw.box_office_rate)),
            sound_tech_cost: amount(raw.sound_tech_cost),

            fb_cost_of_goods: amount(raw.fb_cost_of_goods),
            credit_card_fees: amount(raw.credit_card_fees),
            ticket_platform_fees: amount(raw.ticket_platform_fees),
            production_costs: amount(raw.production_costs),

            tickets_sold: raw.tickets_sold.unwrap_or(0),
            capacity: raw.capacity.unwrap_or(0),

            custom_revenue: Self::custom_lines(raw.custom_revenue_streams.as_deref()),
            custom_expenses: Self::custom_lines(raw.custom_expenses.as_deref()),

            marketing_spend: amount(raw.marketing_spend),
            new_customers: raw.new_customers.unwrap_or(0),

            stored: Self::stored_totals(raw),
        }
    }

    /// Resolve the renamed total fields in priority order:
    /// netEventIncome then grossProfit; totalGrossRevenue then grossReceipts.
    pub fn stored_totals(raw: &RawFinancialRecord) -> StoredTotals {
        StoredTotals {
            net_event_income: raw.net_event_income.or(raw.gross_profit),
            total_gross_revenue: raw.total_gross_revenue.or(raw.gross_receipts),
        }
    }

    fn deal_type(raw: Option<&str>) -> Option<DealType> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
        match raw.parse::<DealType>() {
            Ok(deal_type) => Some(deal_type),
            Err(_) => {
                warn!(deal_type = raw, "Unrecognized deal type, artist payout will be zero");
                None
            }
        }
    }

    fn merch_split(split_type: Option<&str>, value: Decimal) -> MerchSplit {
        match split_type {
            Some(kind) if kind.trim().eq_ignore_ascii_case("percentage") => {
                MerchSplit::Percentage(value)
            }
            _ => MerchSplit::Flat(value),
        }
    }

    fn labor_lines(lines: Option<&[RawLaborLine]>) -> Vec<LaborLine> {
        lines
            .unwrap_or_default()
            .iter()
            .map(|line| LaborLine {
                role: line.role.clone().unwrap_or_default(),
                hours: amount(line.hours),
                rate: amount(line.rate),
            })
            .collect()
    }

    fn custom_lines(lines: Option<&[RawCustomLine]>) -> Vec<CustomLine> {
        lines
            .unwrap_or_default()
            .iter()
            .map(|line| CustomLine {
                name: line
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(UNNAMED_LINE)
                    .to_string(),
                amount: amount(line.amount),
                category: line.category.clone(),
            })
            .collect()
    }
}

fn amount(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}
