use rust_decimal::Decimal;

use crate::modules::events::models::{ComputedEventMetrics, EventFinancialInput, RawEventRecord};
use crate::modules::events::services::{DerivedMetricsEngine, InputNormalizer};

pub const DEFAULT_GENRE: &str = "Other";
pub const UNKNOWN_ARTIST: &str = "Unknown";
pub const UNTITLED_EVENT: &str = "Untitled Event";

/// An event record after normalization and per-event calculation,
/// ready for aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedEvent {
    pub id: Option<String>,
    pub name: String,
    pub genre: String,
    pub artist: String,
    /// Performance date when present, else the event start date. Unparsed.
    pub effective_date: Option<String>,
    /// Present only for events with a performance record
    pub financials: Option<EventFinancials>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventFinancials {
    pub input: EventFinancialInput,
    pub metrics: ComputedEventMetrics,
}

impl EventFinancials {
    /// Stored total when the record carries one, else the computed figure
    pub fn net_event_income(&self) -> Decimal {
        self.input
            .stored
            .net_event_income
            .unwrap_or(self.metrics.net_event_income)
    }

    /// Stored total when the record carries one, else the computed figure
    pub fn total_gross_revenue(&self) -> Decimal {
        self.input
            .stored
            .total_gross_revenue
            .unwrap_or(self.metrics.total_gross_revenue)
    }
}

impl EvaluatedEvent {
    pub fn from_raw(raw: &RawEventRecord) -> Self {
        let performance = raw.performance.as_ref();

        let artist = first_present([
            raw.artist.as_ref().and_then(|artist| artist.name.as_deref()),
            performance.and_then(|p| p.event_name.as_deref()),
            raw.artist_name.as_deref(),
        ])
        .unwrap_or(UNKNOWN_ARTIST);

        let name = first_present([
            raw.name.as_deref(),
            performance.and_then(|p| p.event_name.as_deref()),
        ])
        .unwrap_or(UNTITLED_EVENT);

        let effective_date = first_present([
            performance.and_then(|p| p.performance_date.as_deref()),
            raw.start_date.as_deref(),
        ]);

        let financials = performance.map(|p| {
            let input = InputNormalizer::normalize(&p.financials);
            let metrics = DerivedMetricsEngine::compute(&input);
            EventFinancials { input, metrics }
        });

        Self {
            id: raw.id.clone(),
            name: name.to_string(),
            genre: first_present([raw.genre.as_deref()])
                .unwrap_or(DEFAULT_GENRE)
                .to_string(),
            artist: artist.to_string(),
            effective_date: effective_date.map(str::to_string),
            financials,
        }
    }
}

/// First non-blank candidate, trimmed
fn first_present<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}
