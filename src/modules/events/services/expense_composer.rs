use rust_decimal::Decimal;

use crate::core::money::total;
use crate::modules::events::models::{EventFinancialInput, LaborLine};
use crate::modules::events::services::revenue_composer::sum_lines;

/// Expense side of the event waterfall (artist payout excluded)
pub struct ExpenseComposer;

impl ExpenseComposer {
    /// Sum of structured labor lines when any were recorded; otherwise the
    /// fixed roles (bartender, security, box office) plus the flat
    /// sound/lighting tech cost.
    pub fn total_labor_cost(input: &EventFinancialInput) -> Decimal {
        if !input.labor_lines.is_empty() {
            return total(input.labor_lines.iter().map(LaborLine::cost));
        }

        total([
            input.bartender.cost(),
            input.security.cost(),
            input.box_office.cost(),
            input.sound_tech_cost,
        ])
    }

    /// credit card + ticket platform fees
    pub fn processing_fees(input: &EventFinancialInput) -> Decimal {
        input.credit_card_fees.saturating_add(input.ticket_platform_fees)
    }

    pub fn custom_expense_total(input: &EventFinancialInput) -> Decimal {
        sum_lines(&input.custom_expenses)
    }

    pub fn total_expenses(input: &EventFinancialInput, total_labor_cost: Decimal) -> Decimal {
        total([
            total_labor_cost,
            input.fb_cost_of_goods,
            Self::processing_fees(input),
            input.production_costs,
            Self::custom_expense_total(input),
        ])
    }
}
