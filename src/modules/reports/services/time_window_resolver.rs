use chrono::{DateTime, Duration, Months, Utc};

use crate::core::dates::DateParser;
use crate::core::{AppError, Result};
use crate::modules::reports::models::{ResolvedWindows, TimeWindow, Timeframe};

/// Maps a timeframe to concrete windows.
///
/// Presets end at `now` and start a fixed calendar amount earlier; `All`
/// starts at the Unix epoch. The comparison window is the adjacent window
/// of identical length ending where the current one starts, not a
/// calendar-aligned prior period.
pub struct TimeWindowResolver;

impl TimeWindowResolver {
    /// Build a timeframe from request parameters. An explicit start/end pair
    /// wins over a preset name; no selector at all means `month`.
    pub fn parse_selector(
        timeframe: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Timeframe> {
        match (start, end) {
            (Some(start), Some(end)) => {
                let start = DateParser::parse_utc(start)
                    .map_err(|e| AppError::validation(format!("Invalid start: {}", e)))?;
                let end = DateParser::parse_utc(end)
                    .map_err(|e| AppError::validation(format!("Invalid end: {}", e)))?;
                Ok(Timeframe::Custom { start, end })
            }
            (Some(_), None) | (None, Some(_)) => Err(AppError::validation(
                "Custom timeframe requires both start and end",
            )),
            (None, None) => match timeframe.filter(|name| !name.trim().is_empty()) {
                Some(name) => name.parse().map_err(AppError::Validation),
                None => Ok(Timeframe::Month),
            },
        }
    }

    /// Resolve the current window for `timeframe` as of `now`
    pub fn window(timeframe: Timeframe, now: DateTime<Utc>) -> Result<TimeWindow> {
        let window = match timeframe {
            Timeframe::Week => TimeWindow::new(subtract(now, Duration::days(7)), now),
            Timeframe::Month => TimeWindow::new(subtract_months(now, 1), now),
            Timeframe::Quarter => TimeWindow::new(subtract_months(now, 3), now),
            Timeframe::Year => TimeWindow::new(subtract_months(now, 12), now),
            Timeframe::All => TimeWindow::new(DateTime::UNIX_EPOCH, now),
            Timeframe::Custom { start, end } => {
                if start > end {
                    return Err(AppError::validation(format!(
                        "start ({}) must be before or equal to end ({})",
                        start, end
                    )));
                }
                TimeWindow::new(start, end)
            }
        };
        Ok(window)
    }

    /// `previousEnd = start`, `previousStart = start − (end − start)`
    pub fn previous(window: &TimeWindow) -> TimeWindow {
        TimeWindow::new(subtract(window.start, window.duration()), window.start)
    }

    pub fn resolve(timeframe: Timeframe, now: DateTime<Utc>) -> Result<ResolvedWindows> {
        let window = Self::window(timeframe, now)?;
        Ok(ResolvedWindows {
            timeframe: timeframe.to_string(),
            previous_window: Self::previous(&window),
            window,
        })
    }
}

fn subtract(instant: DateTime<Utc>, span: Duration) -> DateTime<Utc> {
    instant
        .checked_sub_signed(span)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn subtract_months(instant: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    instant
        .checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
