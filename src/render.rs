//! Terminal rendering for the `cellfmt` binary: descriptor -> coloured text,
//! rows -> tables.

use chrono::FixedOffset;
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use yansi::{Color, Paint};

use crate::models::{
    AlertRow, AlertView, BackupRow, BackupView, ConfigRecord, DisplayDescriptor, SeverityClass,
    StatusIcon, TimestampInput,
};
use crate::utils::{describe_severity, describe_status, format_timestamp_in, resolve_config_name};

pub fn icon_glyph(icon: StatusIcon) -> &'static str {
    match icon {
        StatusIcon::Check => "✔",
        StatusIcon::Warning => "⚠",
        StatusIcon::Ban => "⊘",
        StatusIcon::Spinner => "⟳",
        StatusIcon::Blank => "",
    }
}

/// Glyph and label, without colour.
pub fn descriptor_text(d: &DisplayDescriptor) -> String {
    let glyph = icon_glyph(d.icon);
    if glyph.is_empty() {
        d.label.clone()
    } else {
        format!("{} {}", glyph, d.label)
    }
}

pub fn paint_descriptor(d: &DisplayDescriptor) -> String {
    let text = descriptor_text(d);
    let color = match (d.severity_class, d.icon) {
        (SeverityClass::Success, _) => Color::Green,
        (SeverityClass::Pending, _) => Color::Cyan,
        (SeverityClass::Fail, _) => Color::Red,
        (SeverityClass::Warn, _) => Color::Yellow,
        // Plain pass-through values stay uncoloured; deleted rows are orange.
        (SeverityClass::Neutral, StatusIcon::Blank) => return text,
        (SeverityClass::Neutral, _) => Color::Fixed(208),
    };
    Paint::new(text).fg(color).to_string()
}

pub fn backup_views(
    rows: &[BackupRow],
    configs: &[ConfigRecord],
    offset: FixedOffset,
) -> Vec<BackupView> {
    rows.iter()
        .map(|row| BackupView {
            id: row.backup_uuid.clone().unwrap_or_default(),
            created: format_timestamp_in(TimestampInput::from_json(&row.create_time).as_ref(), offset),
            storage_config: resolve_config_name(&row.context, configs).to_string(),
            status: describe_status(&row.context),
        })
        .collect()
}

pub fn alert_views(rows: &[AlertRow], offset: FixedOffset) -> Vec<AlertView> {
    rows.iter()
        .map(|row| AlertView {
            created: format_timestamp_in(TimestampInput::from_json(&row.create_time).as_ref(), offset),
            severity: describe_severity(&row.context),
            message: row.message.clone(),
        })
        .collect()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

pub fn backups_table(views: &[BackupView]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Backup UUID", "Created", "Storage Config", "Status"]);
    for v in views {
        table.add_row(vec![
            v.id.clone(),
            v.created.clone(),
            v.storage_config.clone(),
            paint_descriptor(&v.status),
        ]);
    }
    table
}

pub fn alerts_table(views: &[AlertView]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Created", "Severity", "Message"]);
    for v in views {
        table.add_row(vec![
            v.created.clone(),
            paint_descriptor(&v.severity),
            v.message.clone(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowContext;

    #[test]
    fn blank_icon_renders_label_only() {
        let d = describe_severity(&RowContext::with_severity("INFO"));
        assert_eq!(descriptor_text(&d), "INFO");
        assert_eq!(paint_descriptor(&d), "INFO");
    }

    #[test]
    fn glyph_precedes_label() {
        let d = describe_status(&RowContext::with_status("Stopped"));
        assert_eq!(descriptor_text(&d), "⊘ Aborted");
    }
}
