use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Artist payout formula family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealType {
    #[serde(rename = "Flat Guarantee")]
    FlatGuarantee,
    Percentage,
    Versus,
    Hybrid,
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealType::FlatGuarantee => write!(f, "Flat Guarantee"),
            DealType::Percentage => write!(f, "Percentage"),
            DealType::Versus => write!(f, "Versus"),
            DealType::Hybrid => write!(f, "Hybrid"),
        }
    }
}

impl std::str::FromStr for DealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();

        match normalized.as_str() {
            "flat guarantee" | "flat" | "guarantee" => Ok(DealType::FlatGuarantee),
            "percentage" | "percent" => Ok(DealType::Percentage),
            "versus" | "vs" | "vs." => Ok(DealType::Versus),
            "hybrid" => Ok(DealType::Hybrid),
            _ => Err(format!("Invalid deal type: {}", s)),
        }
    }
}

/// Deal parameters. A zero parameter is treated as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealTerms {
    /// `None` when the record carried no recognizable deal type
    pub deal_type: Option<DealType>,
    pub guarantee: Decimal,
    /// Whole-number percent, e.g. 20 for 20%
    pub percentage_split: Decimal,
    pub hybrid_split_point: Decimal,
}

/// How the venue's share of merchandise is expressed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MerchSplit {
    /// Venue keeps this percent of total merch sales
    Percentage(Decimal),
    /// Venue keeps this fixed dollar amount, regardless of sales
    Flat(Decimal),
}

impl Default for MerchSplit {
    fn default() -> Self {
        MerchSplit::Flat(Decimal::ZERO)
    }
}

/// Hours × rate for one staffing role
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyRole {
    pub hours: Decimal,
    pub rate: Decimal,
}

impl HourlyRole {
    pub fn new(hours: Decimal, rate: Decimal) -> Self {
        Self { hours, rate }
    }

    pub fn cost(&self) -> Decimal {
        self.hours.saturating_mul(self.rate)
    }
}

/// Structured labor line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaborLine {
    pub role: String,
    pub hours: Decimal,
    pub rate: Decimal,
}

impl LaborLine {
    pub fn cost(&self) -> Decimal {
        self.hours.saturating_mul(self.rate)
    }
}

/// User-named custom revenue or expense line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomLine {
    pub name: String,
    pub amount: Decimal,
    pub category: Option<String>,
}

impl CustomLine {
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
            category: None,
        }
    }
}

/// Totals persisted by earlier calculations, after alias resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredTotals {
    pub net_event_income: Option<Decimal>,
    pub total_gross_revenue: Option<Decimal>,
}

/// Fully-populated financial input for one event
///
/// Produced only by `InputNormalizer`; every amount is present (zero when the
/// raw record omitted it) and every list is present (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFinancialInput {
    pub deal: DealTerms,

    pub gross_ticket_sales: Decimal,
    pub facility_fees_kept: Decimal,
    pub platform_fees_paid_out: Decimal,
    pub taxes: Decimal,

    pub fb_sales: Decimal,
    pub total_merch_sales: Decimal,
    pub merch_split: MerchSplit,
    pub parking_revenue: Decimal,
    pub other_revenue: Decimal,

    pub labor_lines: Vec<LaborLine>,
    pub bartender: HourlyRole,
    pub security: HourlyRole,
    pub box_office: HourlyRole,
    pub sound_tech_cost: Decimal,

    pub fb_cost_of_goods: Decimal,
    pub credit_card_fees: Decimal,
    pub ticket_platform_fees: Decimal,
    pub production_costs: Decimal,

    pub tickets_sold: i64,
    pub capacity: i64,

    pub custom_revenue: Vec<CustomLine>,
    pub custom_expenses: Vec<CustomLine>,

    pub marketing_spend: Decimal,
    pub new_customers: i64,

    pub stored: StoredTotals,
}
