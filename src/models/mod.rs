pub mod config_record;
pub mod display_descriptor;
pub mod row_context;
pub mod table_rows;
pub mod timestamp_input;

pub use config_record::ConfigRecord;
pub use display_descriptor::{DisplayDescriptor, SeverityClass, StatusIcon};
pub use row_context::{AlertSeverity, RowContext, TaskStatus};
pub use table_rows::{AlertRow, AlertView, BackupRow, BackupView};
pub use timestamp_input::TimestampInput;
