use std::env;
use std::path::Path;

use chrono::FixedOffset;

use crate::error::CliError;

// Default configuration constants
pub const UTC_OFFSET_ENV: &str = "CELLFMT_UTC_OFFSET";
pub const DEFAULT_UTC_OFFSET: &str = "+00:00";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Offset timestamps are displayed in, from `CELLFMT_UTC_OFFSET`.
pub fn get_display_offset() -> Result<FixedOffset, CliError> {
    let raw = env::var(UTC_OFFSET_ENV).unwrap_or_else(|_| DEFAULT_UTC_OFFSET.to_string());
    parse_utc_offset(&raw)
}

/// Accepts `Z`, `UTC`, `+05:30`, `-0800` and `+05`. Blank means UTC.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, CliError> {
    let t = raw.trim();
    if t.is_empty() || t.eq_ignore_ascii_case("z") || t.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| CliError::InvalidOffset(raw.to_string()));
    }

    let invalid = || CliError::InvalidOffset(raw.to_string());
    let (sign, rest) = match t.as_bytes()[0] {
        b'+' => (1, &t[1..]),
        b'-' => (-1, &t[1..]),
        _ => return Err(invalid()),
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().map_err(|_| invalid())?, 0),
        4 => (
            digits[..2].parse::<i32>().map_err(|_| invalid())?,
            digits[2..].parse::<i32>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
