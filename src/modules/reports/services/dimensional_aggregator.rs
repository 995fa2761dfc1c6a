use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use crate::core::dates::{format_date, DateParser};
use crate::core::money::{count, percentage, ratio};
use crate::modules::reports::models::{
    ArtistPerformance, EvaluatedEvent, GenrePerformance, Merge, OrderedBuckets, PeriodSummary,
    ProfitPoint, Trend,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodAccumulator {
    pub count: u64,
    pub profit: Decimal,
}

impl Merge for PeriodAccumulator {
    fn merge(&mut self, other: Self) {
        self.count = self.count.saturating_add(other.count);
        self.profit = self.profit.saturating_add(other.profit);
    }
}

/// Sums shared by the genre and artist rollups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowTotals {
    pub shows: u64,
    pub tickets_sold: i64,
    pub capacity: i64,
    pub gross_revenue: Decimal,
    pub net_profit: Decimal,
}

impl ShowTotals {
    fn add(
        &mut self,
        tickets_sold: i64,
        capacity: i64,
        gross_revenue: Decimal,
        net_profit: Decimal,
    ) {
        self.merge(ShowTotals {
            shows: 1,
            tickets_sold,
            capacity,
            gross_revenue,
            net_profit,
        });
    }

    fn avg_profit(&self) -> Decimal {
        ratio(self.net_profit, Decimal::from(self.shows))
    }

    fn avg_margin(&self) -> Decimal {
        percentage(self.net_profit, self.gross_revenue)
    }
}

impl Merge for ShowTotals {
    fn merge(&mut self, other: Self) {
        self.shows = self.shows.saturating_add(other.shows);
        self.tickets_sold = self.tickets_sold.saturating_add(other.tickets_sold);
        self.capacity = self.capacity.saturating_add(other.capacity);
        self.gross_revenue = self.gross_revenue.saturating_add(other.gross_revenue);
        self.net_profit = self.net_profit.saturating_add(other.net_profit);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistAccumulator {
    pub totals: ShowTotals,
    /// Per-show net profit in encounter order
    pub profits: Vec<Decimal>,
}

impl Merge for ArtistAccumulator {
    fn merge(&mut self, other: Self) {
        self.totals.merge(other.totals);
        self.profits.extend(other.profits);
    }
}

#[derive(Debug, Clone)]
struct TimelineEntry {
    at: DateTime<Utc>,
    point: ProfitPoint,
}

/// Partial aggregation over one shard of events.
///
/// Shards must be merged in the order their events were encountered so
/// that artist profit lists stay chronological.
#[derive(Debug, Clone, Default)]
pub struct DimensionalPartial {
    periods: OrderedBuckets<PeriodAccumulator>,
    genres: OrderedBuckets<ShowTotals>,
    artists: OrderedBuckets<ArtistAccumulator>,
    timeline: Vec<TimelineEntry>,
    skipped_dates: usize,
}

/// Finalized time, genre and artist views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionalSummary {
    pub gross_profit_over_time: Vec<ProfitPoint>,
    pub events_over_time: Vec<PeriodSummary>,
    pub genre_performance: Vec<GenrePerformance>,
    pub artist_performance: Vec<ArtistPerformance>,
}

/// Groups evaluated events by calendar month, genre and artist.
/// Events without a performance record carry no figures and are ignored.
pub struct DimensionalAggregator;

impl DimensionalAggregator {
    pub fn aggregate(events: &[EvaluatedEvent], artist_limit: usize) -> DimensionalSummary {
        Self::accumulate(events).finalize(artist_limit)
    }

    pub fn accumulate(events: &[EvaluatedEvent]) -> DimensionalPartial {
        let mut partial = DimensionalPartial::default();
        for event in events {
            partial.add(event);
        }
        partial
    }
}

impl DimensionalPartial {
    fn add(&mut self, event: &EvaluatedEvent) {
        let Some(financials) = event.financials.as_ref() else {
            return;
        };

        let profit = financials.net_event_income();
        let gross_revenue = financials.total_gross_revenue();
        let tickets_sold = financials.input.tickets_sold;
        let capacity = financials.input.capacity;

        self.genres
            .entry(&event.genre)
            .add(tickets_sold, capacity, gross_revenue, profit);

        let artist = self.artists.entry(&event.artist);
        artist.totals.add(tickets_sold, capacity, gross_revenue, profit);
        artist.profits.push(profit);

        // A bad date only removes the event from the time-based views
        match parse_effective_date(event) {
            Ok(at) => {
                let period = self.periods.entry(&period_label(at));
                period.merge(PeriodAccumulator { count: 1, profit });

                self.timeline.push(TimelineEntry {
                    at,
                    point: ProfitPoint {
                        date: format_date(at),
                        profit,
                        event_name: event.name.clone(),
                        is_profitable: profit > Decimal::ZERO,
                    },
                });
            }
            Err(reason) => {
                self.skipped_dates += 1;
                warn!(
                    event_id = ?event.id,
                    event_name = %event.name,
                    reason = %reason,
                    "Skipping event in time-based views: unparseable date"
                );
            }
        }
    }

    /// Combine with the partial for the events that follow this shard
    pub fn merge(mut self, other: DimensionalPartial) -> Self {
        self.periods.merge(other.periods);
        self.genres.merge(other.genres);
        self.artists.merge(other.artists);
        self.timeline.extend(other.timeline);
        self.skipped_dates += other.skipped_dates;
        self
    }

    /// Events left out of the time-based views for bad or missing dates
    pub fn skipped_dates(&self) -> usize {
        self.skipped_dates
    }

    pub fn finalize(self, artist_limit: usize) -> DimensionalSummary {
        let mut timeline = self.timeline;
        timeline.sort_by_key(|entry| entry.at);

        let events_over_time = self
            .periods
            .into_iter()
            .map(|(label, period)| PeriodSummary {
                avg_profit: ratio(period.profit, Decimal::from(period.count)),
                count: period.count,
                date: label,
            })
            .collect();

        let genre_performance = self
            .genres
            .into_iter()
            .map(|(genre, totals)| GenrePerformance {
                avg_profit: totals.avg_profit(),
                avg_tickets_sold: ratio(count(totals.tickets_sold), Decimal::from(totals.shows)),
                capacity_utilization: percentage(
                    count(totals.tickets_sold),
                    count(totals.capacity),
                ),
                avg_margin: totals.avg_margin(),
                genre,
                shows: totals.shows,
                tickets_sold: totals.tickets_sold,
                capacity: totals.capacity,
                gross_revenue: totals.gross_revenue,
                net_profit: totals.net_profit,
            })
            .collect();

        let mut artist_performance: Vec<ArtistPerformance> = self
            .artists
            .into_iter()
            .map(|(artist, acc)| ArtistPerformance {
                avg_profit: acc.totals.avg_profit(),
                avg_margin: acc.totals.avg_margin(),
                trend: Trend::from_profits(&acc.profits),
                artist,
                shows: acc.totals.shows,
                tickets_sold: acc.totals.tickets_sold,
                capacity: acc.totals.capacity,
                gross_revenue: acc.totals.gross_revenue,
                net_profit: acc.totals.net_profit,
            })
            .collect();
        // Stable: ties keep first-seen order
        artist_performance.sort_by(|a, b| b.net_profit.cmp(&a.net_profit));
        artist_performance.truncate(artist_limit);

        DimensionalSummary {
            gross_profit_over_time: timeline.into_iter().map(|entry| entry.point).collect(),
            events_over_time,
            genre_performance,
            artist_performance,
        }
    }
}

fn parse_effective_date(event: &EvaluatedEvent) -> Result<DateTime<Utc>, String> {
    match event.effective_date.as_deref() {
        Some(raw) => DateParser::parse_utc(raw),
        None => Err("no performance or start date".to_string()),
    }
}

/// `M/YYYY`, e.g. `3/2025`
fn period_label(at: DateTime<Utc>) -> String {
    format!("{}/{}", at.month(), at.year())
}
