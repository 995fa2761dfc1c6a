// Test Data Factory
//
// Builds raw event payloads the way the persistence layer supplies them:
// camelCase JSON with most fields optional.

use serde_json::{json, Value};
use uuid::Uuid;

/// Test data factory for event and report payloads
pub struct TestDataFactory;

impl TestDataFactory {
    /// Random event ID with TEST prefix
    pub fn random_event_id() -> String {
        format!("TEST-{}", Uuid::new_v4())
    }

    /// Flat-guarantee show: 10000 gross tickets, 500 platform fees, 500 taxes,
    /// 3000 production costs, 2000 guarantee
    pub fn flat_guarantee_financials() -> Value {
        json!({
            "dealType": "Flat Guarantee",
            "guarantee": 2000,
            "grossTicketSales": 10000,
            "facilityFeesKept": 0,
            "platformFeesPaidOut": 500,
            "taxes": 500,
            "productionCosts": 3000,
            "ticketsSold": 300,
            "capacity": 400
        })
    }

    /// Simple show: ticket revenue, one expense, attendance
    pub fn show_financials(
        gross_ticket_sales: i64,
        production_costs: i64,
        tickets_sold: i64,
    ) -> Value {
        json!({
            "grossTicketSales": gross_ticket_sales,
            "productionCosts": production_costs,
            "ticketsSold": tickets_sold,
            "capacity": 500
        })
    }

    /// Event with a performance record
    pub fn event(name: &str, genre: &str, artist: &str, date: &str, financials: Value) -> Value {
        json!({
            "id": Self::random_event_id(),
            "name": name,
            "genre": genre,
            "startDate": date,
            "artist": { "name": artist },
            "performance": {
                "performanceDate": date,
                "financials": financials
            }
        })
    }

    /// Event that was booked but never performed
    pub fn event_without_performance(name: &str, date: &str) -> Value {
        json!({
            "id": Self::random_event_id(),
            "name": name,
            "startDate": date
        })
    }

    /// Report request over explicit events
    pub fn report_request(
        timeframe: &str,
        events: Vec<Value>,
        previous_events: Vec<Value>,
    ) -> Value {
        json!({
            "timeframe": timeframe,
            "events": events,
            "previousEvents": previous_events
        })
    }
}
