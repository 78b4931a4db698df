use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::display_descriptor::DisplayDescriptor;
use crate::models::row_context::RowContext;

/// A backup row as the console lists it.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRow {
    #[serde(rename = "backupUUID", default)]
    pub backup_uuid: Option<String>,
    #[serde(default)]
    pub create_time: Value,
    #[serde(flatten)]
    pub context: RowContext,
}

/// An alert row as the console lists it.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRow {
    #[serde(default)]
    pub create_time: Value,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub context: RowContext,
}

/// Display-ready backup row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupView {
    pub id: String,
    pub created: String,
    pub storage_config: String,
    pub status: DisplayDescriptor,
}

/// Display-ready alert row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertView {
    pub created: String,
    pub severity: DisplayDescriptor,
    pub message: String,
}
