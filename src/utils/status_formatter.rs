use crate::models::{DisplayDescriptor, RowContext, SeverityClass, StatusIcon, TaskStatus};

use super::percent_formatter::{format_percent_complete, stored_to_percent};

/// Classify a task row by its status.
pub fn describe_status(row: &RowContext) -> DisplayDescriptor {
    use SeverityClass::*;
    use StatusIcon::*;

    match &row.status {
        TaskStatus::Success | TaskStatus::Completed => {
            DisplayDescriptor::new("Completed", Success, Check)
        }
        TaskStatus::Initializing => DisplayDescriptor::new("Initializing", Pending, Spinner),
        TaskStatus::InProgress => DisplayDescriptor::new("InProcess", Pending, Spinner),
        TaskStatus::Running => describe_running(row.percent_complete),
        TaskStatus::Failure | TaskStatus::Failed => DisplayDescriptor::new("Failed", Fail, Warning),
        TaskStatus::Deleted => DisplayDescriptor::new("Deleted", Neutral, Warning),
        TaskStatus::Stopped => DisplayDescriptor::new("Aborted", Warn, Ban),
        TaskStatus::Other(raw) => {
            tracing::debug!(status = %raw, "Unmapped task status");
            DisplayDescriptor::new("Unknown", Fail, Warning)
        }
    }
}

fn describe_running(percent_complete: Option<f64>) -> DisplayDescriptor {
    let progress = percent_complete.and_then(|stored| stored_to_percent(stored).map(|p| (stored, p)));
    let Some((stored, percent)) = progress else {
        return DisplayDescriptor::new("Pending", SeverityClass::Pending, StatusIcon::Spinner);
    };
    DisplayDescriptor::new(
        format!("Pending ({})", format_percent_complete(stored)),
        SeverityClass::Pending,
        StatusIcon::Spinner,
    )
    .with_progress(percent)
}
