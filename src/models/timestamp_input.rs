use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// A raw point-in-time value as it arrives in a table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum TimestampInput {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// ISO-8601, RFC 3339, RFC 2822 or `YYYY-MM-DD[ HH:MM:SS]` text.
    Text(String),
    At(DateTime<FixedOffset>),
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

impl TimestampInput {
    /// Map a JSON cell to an input. Null and non-scalar cells are absent.
    pub fn from_json(value: &Value) -> Option<TimestampInput> {
        match value {
            Value::Number(n) => {
                if let Some(ms) = n.as_i64() {
                    Some(TimestampInput::Millis(ms))
                } else {
                    n.as_f64()
                        .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                        .map(|f| TimestampInput::Millis(f.trunc() as i64))
                }
            }
            Value::String(s) => Some(TimestampInput::Text(s.clone())),
            _ => None,
        }
    }

    /// Resolve to a concrete instant, or `None` if the value is not a well-formed time
    /// or falls outside years 0..=9999.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        let dt = match self {
            TimestampInput::Millis(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .map(|dt| dt.fixed_offset()),
            TimestampInput::Text(raw) => parse_text(raw),
            TimestampInput::At(dt) => Some(*dt),
        };
        dt.filter(has_four_digit_year)
    }
}

impl From<DateTime<FixedOffset>> for TimestampInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        TimestampInput::At(dt)
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(dt: DateTime<Utc>) -> Self {
        TimestampInput::At(dt.fixed_offset())
    }
}

/// Years the `YYYY` display pattern can show.
pub fn has_four_digit_year<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    (0..=9999).contains(&dt.year())
}

fn parse_text(raw: &str) -> Option<DateTime<FixedOffset>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }
    // Zone-less values are read as UTC.
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_null_and_objects_are_absent() {
        assert_eq!(TimestampInput::from_json(&Value::Null), None);
        assert_eq!(TimestampInput::from_json(&json!({"a": 1})), None);
        assert_eq!(TimestampInput::from_json(&json!(true)), None);
    }

    #[test]
    fn json_numbers_are_millis() {
        assert_eq!(
            TimestampInput::from_json(&json!(1_709_649_000_000i64)),
            Some(TimestampInput::Millis(1_709_649_000_000))
        );
        assert_eq!(
            TimestampInput::from_json(&json!(1500.9)),
            Some(TimestampInput::Millis(1500))
        );
    }

    #[test]
    fn naive_text_is_read_as_utc() {
        let dt = TimestampInput::Text("2024-03-05 14:30:00".into())
            .to_datetime()
            .unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert_eq!(dt.timestamp(), 1_709_649_000);
    }

    #[test]
    fn millis_outside_four_digit_years_do_not_resolve() {
        // 10000-01-01T00:00:00Z and 0003-12-31 BCE
        assert!(TimestampInput::Millis(253_402_300_800_000).to_datetime().is_none());
        assert!(TimestampInput::Millis(-62_230_000_000_000).to_datetime().is_none());
        assert!(TimestampInput::Millis(253_402_300_799_999).to_datetime().is_some());
    }

    #[test]
    fn garbage_text_does_not_resolve() {
        assert!(TimestampInput::Text("not a date".into()).to_datetime().is_none());
        assert!(TimestampInput::Text("   ".into()).to_datetime().is_none());
        assert!(TimestampInput::Text("2024-13-45".into()).to_datetime().is_none());
    }
}
