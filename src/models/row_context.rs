use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Lifecycle status of a backup or task row.
///
/// Matching against the raw value is case-sensitive; anything outside the
/// known set is kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Success,
    Completed,
    Initializing,
    InProgress,
    Running,
    Failure,
    Failed,
    Deleted,
    Stopped,
    Other(String),
}

impl TaskStatus {
    /// Parse the raw value reported by the backend. Never fails.
    pub fn from_raw(s: &str) -> TaskStatus {
        match s {
            "Success" => TaskStatus::Success,
            "Completed" => TaskStatus::Completed,
            "Initializing" => TaskStatus::Initializing,
            "InProgress" => TaskStatus::InProgress,
            "Running" => TaskStatus::Running,
            "Failure" => TaskStatus::Failure,
            "Failed" => TaskStatus::Failed,
            "Deleted" => TaskStatus::Deleted,
            "Stopped" => TaskStatus::Stopped,
            other => TaskStatus::Other(other.to_string()),
        }
    }

    /// The raw value as the backend spells it.
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Success => "Success",
            TaskStatus::Completed => "Completed",
            TaskStatus::Initializing => "Initializing",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Running => "Running",
            TaskStatus::Failure => "Failure",
            TaskStatus::Failed => "Failed",
            TaskStatus::Deleted => "Deleted",
            TaskStatus::Stopped => "Stopped",
            TaskStatus::Other(raw) => raw,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Other(String::new())
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        TaskStatus::from_raw(&s)
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        TaskStatus::from_raw(s)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Alert severity as reported by the alerting backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertSeverity {
    Severe,
    Warning,
    Other(String),
}

impl AlertSeverity {
    pub fn from_raw(s: &str) -> AlertSeverity {
        match s {
            "SEVERE" => AlertSeverity::Severe,
            "WARNING" => AlertSeverity::Warning,
            other => AlertSeverity::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AlertSeverity::Severe => "SEVERE",
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Other(raw) => raw,
        }
    }
}

impl From<String> for AlertSeverity {
    fn from(s: String) -> Self {
        AlertSeverity::from_raw(&s)
    }
}

impl From<&str> for AlertSeverity {
    fn from(s: &str) -> Self {
        AlertSeverity::from_raw(s)
    }
}

impl From<AlertSeverity> for String {
    fn from(severity: AlertSeverity) -> Self {
        severity.as_str().to_string()
    }
}

/// The fields of a table row the formatters look at.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowContext {
    #[serde(rename = "storageConfigUUID", default, skip_serializing_if = "Option::is_none")]
    pub storage_config_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: TaskStatus,
    /// Progress stored as percentage x 100 (4500 means 45%).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_severity",
        skip_serializing_if = "Option::is_none"
    )]
    pub severity: Option<AlertSeverity>,
}

/// Text of a raw cell. Null is absent; other non-string cells keep their JSON text.
fn cell_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TaskStatus, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(cell_text(value).map(TaskStatus::from).unwrap_or_default())
}

fn lenient_severity<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<AlertSeverity>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(cell_text(value).map(AlertSeverity::from))
}

impl RowContext {
    pub fn with_status(status: impl Into<TaskStatus>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    pub fn with_severity(severity: impl Into<AlertSeverity>) -> Self {
        Self {
            severity: Some(severity.into()),
            ..Self::default()
        }
    }

    pub fn storage_config(mut self, uuid: impl Into<String>) -> Self {
        self.storage_config_uuid = Some(uuid.into());
        self
    }

    pub fn percent_complete(mut self, stored: f64) -> Self {
        self.percent_complete = Some(stored);
        self
    }
}
