// Integration Tests for Revenue and Expense Breakdowns
//
// Checks that breakdown slices reconcile to the report totals: fixed
// entries, custom lines summed by name, keyword de-duplication, the
// "Other" residual, and Artist Payout pinning.

use chrono::{TimeZone, Utc};
use encore::config::AnalyticsConfig;
use encore::reports::models::{AnalyticsReport, BreakdownEntry, OrderedBuckets};
use encore::reports::services::breakdown_reconciler::{BreakdownReconciler, REVENUE_KEYWORDS};
use encore::reports::{ReportRequest, ReportService};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;

fn generate(events: Vec<Value>) -> AnalyticsReport {
    let request: ReportRequest =
        serde_json::from_value(TestDataFactory::report_request("all", events, vec![])).unwrap();
    ReportService::new(AnalyticsConfig::default())
        .generate(&request, Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap())
        .unwrap()
}

fn value_of(entries: &[BreakdownEntry], name: &str) -> Option<Decimal> {
    entries.iter().find(|e| e.name == name).map(|e| e.value)
}

fn names(entries: &[BreakdownEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_residual_becomes_other() {
    let fixed = vec![
        ("Tickets", dec!(6000)),
        ("F&B", dec!(2000)),
        ("Merch", dec!(1000)),
        ("Parking", dec!(0)),
    ];
    let mut custom: OrderedBuckets<Decimal> = OrderedBuckets::new();
    *custom.entry("Sponsorship") += dec!(2000);

    let entries = BreakdownReconciler::reconcile(fixed, custom, &REVENUE_KEYWORDS, dec!(12000));

    assert_eq!(value_of(&entries, "Sponsorship"), Some(dec!(2000)));
    assert_eq!(value_of(&entries, "Other"), Some(dec!(1000)));
    let total: Decimal = entries.iter().map(|e| e.value).sum();
    assert_eq!(total, dec!(12000));
}

#[test]
fn test_revenue_breakdown_from_events() {
    let report = generate(vec![TestDataFactory::event(
        "Festival Day",
        "Rock",
        "Headliner",
        "2025-06-01",
        json!({
            "grossTicketSales": 6000,
            "fbSales": 2000,
            "totalMerchSales": 2000,
            "merchSplitType": "Percentage",
            "merchSplitValue": 50,
            "otherRevenue": 1000,
            "customRevenueStreams": [{ "name": "Sponsorship", "amount": 2000 }]
        }),
    )]);

    let revenue = &report.revenue_breakdown;
    assert_eq!(report.total_gross_revenue, dec!(12000));
    assert_eq!(
        names(revenue),
        vec!["Tickets", "F&B", "Sponsorship", "Merch", "Other", "Parking"]
    );
    assert_eq!(value_of(revenue, "Other"), Some(dec!(1000)));

    let tickets = &revenue[0];
    assert_eq!(tickets.percentage, dec!(50));
}

#[test]
fn test_custom_lines_sum_across_events_and_skip_keywords() {
    let financials = |sponsor: i64| {
        json!({
            "grossTicketSales": 1000,
            "customRevenueStreams": [
                { "name": "Sponsorship", "amount": sponsor },
                { "name": "Food Truck Rental", "amount": 300 },
                { "name": "VIP MERCH Bundle", "amount": 200 }
            ]
        })
    };
    let report = generate(vec![
        TestDataFactory::event("One", "Pop", "A", "2025-06-01", financials(400)),
        TestDataFactory::event("Two", "Pop", "B", "2025-06-02", financials(600)),
    ]);

    let revenue = &report.revenue_breakdown;
    assert_eq!(value_of(revenue, "Sponsorship"), Some(dec!(1000)));
    assert_eq!(value_of(revenue, "Food Truck Rental"), None);
    assert_eq!(value_of(revenue, "VIP MERCH Bundle"), None);
    // Skipped lines still count toward gross revenue, so they land in Other
    assert_eq!(value_of(revenue, "Other"), Some(dec!(1000)));
}

#[test]
fn test_no_other_entry_when_fully_accounted() {
    let report = generate(vec![TestDataFactory::event(
        "Plain",
        "Pop",
        "A",
        "2025-06-01",
        TestDataFactory::show_financials(5000, 1000, 100),
    )]);

    assert_eq!(value_of(&report.revenue_breakdown, "Other"), None);
}

#[test]
fn test_expense_breakdown_pins_artist_payout() {
    let report = generate(vec![TestDataFactory::event(
        "Club Night",
        "Electronic",
        "DJ",
        "2025-06-01",
        json!({
            "dealType": "Flat Guarantee",
            "guarantee": 100,
            "grossTicketSales": 8000,
            "bartenderHours": 10,
            "bartenderRate": 30,
            "fbCostOfGoods": 700,
            "creditCardFees": 150,
            "ticketPlatformFees": 250,
            "productionCosts": 900,
            "customExpenses": [
                { "name": "Cleaning", "amount": 500 },
                { "name": "Extra Labor", "amount": 200 }
            ]
        }),
    )]);

    let expenses = &report.expense_breakdown;
    assert_eq!(
        names(expenses),
        vec!["Artist Payout", "Other", "F&B COGS", "Cleaning", "Fees", "Labor"]
    );
    assert_eq!(value_of(expenses, "Artist Payout"), Some(dec!(100)));
    assert_eq!(value_of(expenses, "Fees"), Some(dec!(400)));
    // Production costs plus the skipped labor line
    assert_eq!(value_of(expenses, "Other"), Some(dec!(1100)));

    let total: Decimal = expenses.iter().map(|e| e.value).sum();
    assert_eq!(total, report.total_expenses + report.total_artist_payout);
}

#[test]
fn test_events_without_performance_contribute_nothing() {
    let report = generate(vec![TestDataFactory::event_without_performance(
        "Hold",
        "2025-06-01",
    )]);

    assert!(report.revenue_breakdown.iter().all(|e| e.value.is_zero()));
    assert!(report.revenue_breakdown.iter().all(|e| e.percentage.is_zero()));
    assert_eq!(report.expense_breakdown[0].name, "Artist Payout");
}

fn amount() -> impl Strategy<Value = i64> {
    0i64..50_000
}

proptest! {
    #[test]
    fn test_revenue_slices_sum_to_gross_revenue(
        shows in prop::collection::vec(
            (amount(), amount(), amount(), amount(), amount(), amount(),
             prop::collection::vec((prop_oneof![
                 Just("Sponsorship"), Just("Food Sales"), Just("Coat Check"), Just("Parking Valet")
             ], amount()), 0..4)),
            1..6
        )
    ) {
        let events: Vec<Value> = shows
            .into_iter()
            .enumerate()
            .map(|(i, (gross, fees, fb, merch, parking, other, custom))| {
                let custom: Vec<Value> = custom
                    .into_iter()
                    .map(|(name, amount)| json!({ "name": name, "amount": amount }))
                    .collect();
                TestDataFactory::event(
                    &format!("Show {}", i),
                    "Mixed",
                    "Various",
                    "2025-06-01",
                    json!({
                        "grossTicketSales": gross,
                        "platformFeesPaidOut": fees,
                        "fbSales": fb,
                        "totalMerchSales": merch,
                        "merchSplitType": "Percentage",
                        "merchSplitValue": 25,
                        "parkingRevenue": parking,
                        "otherRevenue": other,
                        "customRevenueStreams": custom
                    }),
                )
            })
            .collect();
        let report = generate(events);

        let total: Decimal = report.revenue_breakdown.iter().map(|e| e.value).sum();
        prop_assert_eq!(total, report.total_gross_revenue);
        prop_assert!(report
            .revenue_breakdown
            .windows(2)
            .all(|pair| pair[0].value >= pair[1].value));
    }
}
