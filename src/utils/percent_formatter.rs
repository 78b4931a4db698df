use super::time_formatter::PLACEHOLDER;

/// Render a fraction as a whole-number percentage: `0.45` -> `45%`,
/// `12.3456` -> `1,235%`. Rounds half away from zero.
pub fn format_percent(fraction: f64) -> String {
    let percent = (fraction * 100.0).round();
    if !in_display_range(percent) {
        return PLACEHOLDER.to_string();
    }
    let sign = if percent < 0.0 { "-" } else { "" };
    format!("{}{}%", sign, group_thousands(percent.abs() as u64))
}

/// Render a stored progress value. Progress is stored as percentage x 100,
/// so `4500` renders `45%`.
pub fn format_percent_complete(stored: f64) -> String {
    format_percent(stored / 100.0 / 100.0)
}

/// Whole-number percentage for a stored progress value, if it is usable.
pub fn stored_to_percent(stored: f64) -> Option<f64> {
    let percent = (stored / 100.0).round();
    in_display_range(percent).then_some(percent)
}

/// Whole percentages that render without saturating.
fn in_display_range(percent: f64) -> bool {
    percent.is_finite() && percent.abs() < u64::MAX as f64
}

fn group_thousands(num: u64) -> String {
    let num_str = num.to_string();
    let mut result = String::new();

    for (i, ch) in num_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_rounds() {
        assert_eq!(format_percent(0.45), "45%");
        assert_eq!(format_percent(0.456), "46%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn test_format_percent_groups_thousands() {
        assert_eq!(format_percent(12.3456), "1,235%");
        assert_eq!(format_percent(-0.2), "-20%");
    }

    #[test]
    fn test_format_percent_non_finite() {
        assert_eq!(format_percent(f64::NAN), "-");
        assert_eq!(format_percent(f64::INFINITY), "-");
        assert_eq!(format_percent(1e30), "-");
    }

    #[test]
    fn test_stored_progress_is_percent_times_hundred() {
        assert_eq!(format_percent_complete(4500.0), "45%");
        assert_eq!(format_percent_complete(10000.0), "100%");
        assert_eq!(stored_to_percent(4500.0), Some(45.0));
        assert_eq!(stored_to_percent(f64::NAN), None);
        assert_eq!(stored_to_percent(1e30), None);
    }
}
