//! Display formatters for administration-console tables: timestamps,
//! storage config names, task status and alert severity.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod render;
pub mod utils;

pub use error::{CliError, LookupError};
pub use models::{
    AlertSeverity, ConfigRecord, DisplayDescriptor, RowContext, SeverityClass, StatusIcon,
    TaskStatus, TimestampInput,
};
pub use utils::{
    describe_severity, describe_status, find_config, format_percent, format_percent_complete,
    format_timestamp, format_timestamp_in, resolve_config_name,
};
