use crate::error::LookupError;
use crate::models::{ConfigRecord, RowContext};

pub const MISSING_CONFIG: &str = "Config UUID (Missing)";

/// Find the row's storage config. First match in list order wins.
pub fn find_config<'a>(
    row: &RowContext,
    configs: &'a [ConfigRecord],
) -> Result<&'a ConfigRecord, LookupError> {
    let uuid = match row.storage_config_uuid.as_deref() {
        Some(u) if !u.is_empty() => u,
        _ => return Err(LookupError::NoIdentifier),
    };
    configs
        .iter()
        .find(|c| c.config_uuid == uuid)
        .ok_or_else(|| LookupError::NotFound(uuid.to_string()))
}

/// Name of the row's storage config, or [`MISSING_CONFIG`] when the row has
/// no identifier or the identifier is not listed.
pub fn resolve_config_name<'a>(row: &RowContext, configs: &'a [ConfigRecord]) -> &'a str {
    match find_config(row, configs) {
        Ok(config) => &config.config_name,
        Err(e) => {
            tracing::debug!(%e, "Falling back to missing config label");
            MISSING_CONFIG
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier_counts_as_absent() {
        let configs = vec![ConfigRecord::new("", "Blank")];
        let row = RowContext::default().storage_config("");
        assert_eq!(find_config(&row, &configs), Err(LookupError::NoIdentifier));
        assert_eq!(resolve_config_name(&row, &configs), MISSING_CONFIG);
    }

    #[test]
    fn unmatched_identifier_is_reported() {
        let configs = vec![ConfigRecord::new("a", "S3")];
        let row = RowContext::default().storage_config("b");
        assert_eq!(
            find_config(&row, &configs),
            Err(LookupError::NotFound("b".into()))
        );
    }
}
