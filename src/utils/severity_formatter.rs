use crate::models::{AlertSeverity, DisplayDescriptor, RowContext, SeverityClass, StatusIcon};

/// Classify an alert row by its severity. Unrecognised severities are shown as-is.
pub fn describe_severity(row: &RowContext) -> DisplayDescriptor {
    match &row.severity {
        Some(AlertSeverity::Severe) => {
            DisplayDescriptor::new("Error", SeverityClass::Fail, StatusIcon::Warning)
        }
        Some(AlertSeverity::Warning) => {
            DisplayDescriptor::new("Warning", SeverityClass::Warn, StatusIcon::Warning)
        }
        Some(AlertSeverity::Other(raw)) => {
            DisplayDescriptor::new(raw.as_str(), SeverityClass::Neutral, StatusIcon::Blank)
        }
        None => DisplayDescriptor::new("", SeverityClass::Neutral, StatusIcon::Blank),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_severity_passes_through() {
        let d = describe_severity(&RowContext::with_severity("severe"));
        assert_eq!(d.label, "severe");
        assert_eq!(d.severity_class, SeverityClass::Neutral);
    }

    #[test]
    fn missing_severity_is_blank() {
        let d = describe_severity(&RowContext::default());
        assert_eq!(d.label, "");
        assert_eq!(d.icon, StatusIcon::Blank);
    }
}
