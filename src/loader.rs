use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CliError;
use crate::models::{AlertRow, BackupRow, ConfigRecord};

/// Read and decode a JSON file.
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json { path: display, source })
}

pub fn load_configs(path: &Path) -> Result<Vec<ConfigRecord>, CliError> {
    let configs: Vec<ConfigRecord> = load_json_file(path)?;
    tracing::info!(count = configs.len(), path = %path.display(), "Loaded storage configs");
    Ok(configs)
}

pub fn load_backup_rows(path: &Path) -> Result<Vec<BackupRow>, CliError> {
    let rows: Vec<BackupRow> = load_json_file(path)?;
    tracing::info!(count = rows.len(), path = %path.display(), "Loaded backup rows");
    Ok(rows)
}

pub fn load_alert_rows(path: &Path) -> Result<Vec<AlertRow>, CliError> {
    let rows: Vec<AlertRow> = load_json_file(path)?;
    tracing::info!(count = rows.len(), path = %path.display(), "Loaded alert rows");
    Ok(rows)
}
