// Cell formatters
pub mod time_formatter;
pub mod percent_formatter;
pub mod config_resolver;
pub mod status_formatter;
pub mod severity_formatter;

pub use time_formatter::{format_timestamp, format_timestamp_in, PLACEHOLDER};
pub use percent_formatter::{format_percent, format_percent_complete};
pub use config_resolver::{find_config, resolve_config_name, MISSING_CONFIG};
pub use status_formatter::describe_status;
pub use severity_formatter::describe_severity;
