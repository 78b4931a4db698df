use chrono::{FixedOffset, Offset, Utc};

use crate::models::timestamp_input::has_four_digit_year;
use crate::models::TimestampInput;

/// Shown in place of an absent or unparseable value.
pub const PLACEHOLDER: &str = "-";

const DISPLAY_FORMAT: &str = "%Y/%m/%d %-H:%M UTC%z";

/// Format a timestamp cell in UTC, e.g. `2024/03/05 14:30 UTC+0000`.
pub fn format_timestamp(value: Option<&TimestampInput>) -> String {
    format_timestamp_in(value, Utc.fix())
}

/// Format a timestamp cell in the given offset.
pub fn format_timestamp_in(value: Option<&TimestampInput>, offset: FixedOffset) -> String {
    let Some(input) = value else {
        return PLACEHOLDER.to_string();
    };
    let local = input
        .to_datetime()
        .map(|dt| dt.with_timezone(&offset))
        .filter(has_four_digit_year);
    match local {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::debug!(?input, "Unparseable timestamp");
            PLACEHOLDER.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_is_not_zero_padded() {
        let input = TimestampInput::Text("2024-03-05T04:07:00Z".into());
        assert_eq!(format_timestamp(Some(&input)), "2024/03/05 4:07 UTC+0000");
    }

    #[test]
    fn offset_pushing_past_year_9999_is_placeholder() {
        let input = TimestampInput::Text("9999-12-31T23:00:00Z".into());
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp_in(Some(&input), offset), PLACEHOLDER);
        assert_eq!(format_timestamp(Some(&input)), "9999/12/31 23:00 UTC+0000");
    }

    #[test]
    fn negative_offset_is_signed() {
        let offset = FixedOffset::west_opt(8 * 3600).unwrap();
        let input = TimestampInput::Millis(1_709_649_000_000);
        assert_eq!(
            format_timestamp_in(Some(&input), offset),
            "2024/03/05 6:30 UTC-0800"
        );
    }
}
