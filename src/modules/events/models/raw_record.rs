// Raw event records as supplied by the persistence layer.
//
// Every field is optional: historical records were written by several
// schema revisions and may be partially populated. Nothing here is
// interpreted; `InputNormalizer` turns these into complete inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One event's raw financial fields (the "performance" record)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFinancialRecord {
    // Deal
    pub deal_type: Option<String>,
    pub guarantee: Option<Decimal>,
    pub percentage_split: Option<Decimal>,
    pub hybrid_split_point: Option<Decimal>,

    // Ticketing
    pub gross_ticket_sales: Option<Decimal>,
    pub facility_fees_kept: Option<Decimal>,
    pub platform_fees_paid_out: Option<Decimal>,
    pub taxes: Option<Decimal>,

    // Ancillary revenue
    pub fb_sales: Option<Decimal>,
    pub total_merch_sales: Option<Decimal>,
    pub merch_split_type: Option<String>,
    pub merch_split_value: Option<Decimal>,
    pub parking_revenue: Option<Decimal>,
    pub other_revenue: Option<Decimal>,

    // Labor
    pub labor_lines: Option<Vec<RawLaborLine>>,
    pub bartender_hours: Option<Decimal>,
    pub bartender_rate: Option<Decimal>,
    pub security_hours: Option<Decimal>,
    pub security_rate: Option<Decimal>,
    pub box_office_hours: Option<Decimal>,
    pub box_office_rate: Option<Decimal>,
    pub sound_tech_cost: Option<Decimal>,

    // Other expenses
    pub fb_cost_of_goods: Option<Decimal>,
    pub credit_card_fees: Option<Decimal>,
    pub ticket_platform_fees: Option<Decimal>,
    pub production_costs: Option<Decimal>,

    // Attendance
    pub tickets_sold: Option<i64>,
    pub capacity: Option<i64>,

    // User-defined line items
    pub custom_revenue_streams: Option<Vec<RawCustomLine>>,
    pub custom_expenses: Option<Vec<RawCustomLine>>,

    // Marketing
    pub marketing_spend: Option<Decimal>,
    pub new_customers: Option<i64>,

    // Stored totals written by earlier schema revisions
    pub net_event_income: Option<Decimal>,
    pub gross_profit: Option<Decimal>,
    pub total_gross_revenue: Option<Decimal>,
    pub gross_receipts: Option<Decimal>,
}

/// Structured labor line (hours × rate)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLaborLine {
    pub role: Option<String>,
    pub hours: Option<Decimal>,
    pub rate: Option<Decimal>,
}

/// User-named custom revenue or expense line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCustomLine {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
}

/// Event as seen by the reporting endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEventRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub genre: Option<String>,
    pub start_date: Option<String>,
    /// Free-text artist name typed on the event
    pub artist_name: Option<String>,
    /// Linked artist record, when one exists
    pub artist: Option<RawArtist>,
    pub performance: Option<RawPerformance>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawArtist {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPerformance {
    pub event_name: Option<String>,
    pub performance_date: Option<String>,
    pub financials: RawFinancialRecord,
}
