use cellfmt::config;
use cellfmt::CliError;
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

// Environment variables are process-wide.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn offset_seconds(raw: &str) -> i32 {
    config::parse_utc_offset(raw).unwrap().local_minus_utc()
}

#[test]
fn test_parse_utc_offset_colon_form() {
    assert_eq!(offset_seconds("+05:30"), 5 * 3600 + 30 * 60);
    assert_eq!(offset_seconds("-08:00"), -8 * 3600);
}

#[test]
fn test_parse_utc_offset_compact_forms() {
    assert_eq!(offset_seconds("-0800"), -8 * 3600);
    assert_eq!(offset_seconds("+09"), 9 * 3600);
}

#[test]
fn test_parse_utc_offset_utc_aliases() {
    assert_eq!(offset_seconds("Z"), 0);
    assert_eq!(offset_seconds("utc"), 0);
    assert_eq!(offset_seconds("   "), 0);
}

#[test]
fn test_parse_utc_offset_rejects_garbage() {
    for raw in ["0530", "+5", "+24:00", "+05:60", "+ab:cd", "EST"] {
        assert!(
            matches!(config::parse_utc_offset(raw), Err(CliError::InvalidOffset(_))),
            "accepted {:?}",
            raw
        );
    }
}

#[test]
fn test_get_display_offset_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var(config::UTC_OFFSET_ENV, "+02:00");

    let result = config::get_display_offset().unwrap();

    assert_eq!(result.local_minus_utc(), 2 * 3600);

    // Clean up
    env::remove_var(config::UTC_OFFSET_ENV);
}

#[test]
fn test_get_display_offset_uses_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var(config::UTC_OFFSET_ENV);

    let result = config::get_display_offset().unwrap();

    assert_eq!(result.local_minus_utc(), 0);
}

#[test]
fn test_get_display_offset_invalid_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var(config::UTC_OFFSET_ENV, "nowhere");

    let result = config::get_display_offset();

    assert!(matches!(result, Err(CliError::InvalidOffset(ref v)) if v == "nowhere"));

    env::remove_var(config::UTC_OFFSET_ENV);
}
