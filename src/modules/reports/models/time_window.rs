use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named reporting period, or an explicit range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Week,
    Month,
    Quarter,
    Year,
    All,
    Custom {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::Week => write!(f, "week"),
            Timeframe::Month => write!(f, "month"),
            Timeframe::Quarter => write!(f, "quarter"),
            Timeframe::Year => write!(f, "year"),
            Timeframe::All => write!(f, "all"),
            Timeframe::Custom { .. } => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for Timeframe {
    type Err = String;

    /// Parses the named presets only; custom ranges carry explicit dates
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            "quarter" => Ok(Timeframe::Quarter),
            "year" => Ok(Timeframe::Year),
            "all" => Ok(Timeframe::All),
            _ => Err(format!("Invalid timeframe: {}", s)),
        }
    }
}

/// Inclusive instant range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// A window and the equal-length window immediately before it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedWindows {
    pub timeframe: String,
    pub window: TimeWindow,
    pub previous_window: TimeWindow,
}
