use serde::Serialize;

/// Outcome category that drives how a cell is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityClass {
    Success,
    Pending,
    Fail,
    Warn,
    Neutral,
}

impl SeverityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityClass::Success => "success",
            SeverityClass::Pending => "pending",
            SeverityClass::Fail => "fail",
            SeverityClass::Warn => "warn",
            SeverityClass::Neutral => "neutral",
        }
    }
}

/// Icon tag; the rendering layer picks the actual glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusIcon {
    Check,
    Warning,
    Ban,
    Spinner,
    #[serde(rename = "none")]
    Blank,
}

/// What to show for a status cell. Built fresh by the mappers, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayDescriptor {
    pub label: String,
    pub severity_class: SeverityClass,
    pub icon: StatusIcon,
    /// Whole-number percentage for running tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<f64>,
}

impl DisplayDescriptor {
    pub fn new(label: impl Into<String>, severity_class: SeverityClass, icon: StatusIcon) -> Self {
        Self {
            label: label.into(),
            severity_class,
            icon,
            progress_percent: None,
        }
    }

    pub fn with_progress(mut self, percent: f64) -> Self {
        self.progress_percent = Some(percent);
        self
    }
}
