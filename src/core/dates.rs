use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date handling for records supplied by the persistence layer.
/// Stored dates arrive as strings in a handful of shapes; all are
/// interpreted as UTC.
pub struct DateParser;

impl DateParser {
    /// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS[.f]`
    /// timestamp, or a bare `YYYY-MM-DD` date (midnight UTC).
    pub fn parse_utc(raw: &str) -> Result<DateTime<Utc>, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("empty date".to_string());
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(parsed.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| format!("unrecognized date: {}", raw))
    }
}

/// Calendar date (`YYYY-MM-DD`) used by chart series
pub fn format_date(utc_time: DateTime<Utc>) -> String {
    utc_time.format("%Y-%m-%d").to_string()
}
