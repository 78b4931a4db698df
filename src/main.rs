use std::path::PathBuf;
use std::process;

use chrono::FixedOffset;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use cellfmt::config;
use cellfmt::loader::{load_alert_rows, load_backup_rows, load_configs};
use cellfmt::render::{alert_views, alerts_table, backup_views, backups_table, paint_descriptor};
use cellfmt::{
    describe_severity, describe_status, format_timestamp_in, resolve_config_name, AlertSeverity,
    CliError, DisplayDescriptor, RowContext, TimestampInput,
};

#[derive(Parser)]
#[command(
    name = "cellfmt",
    author,
    version,
    about = "Format console table cells from the command line",
    long_about = r#"cellfmt turns raw table values (timestamps, storage config UUIDs, task statuses and alert severities) into the labels an administration console shows.

Examples:
  1) Format an epoch-millis timestamp:
      cellfmt time 1709649000000
  2) Classify a running task (progress is stored as percent x 100):
      cellfmt status Running --percent-complete 4500
  3) Render a backup list:
      cellfmt backups --rows backups.json --configs configs.json
"#,
    after_help = "Use `cellfmt <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Display offset for timestamps (e.g. +05:30); overrides CELLFMT_UTC_OFFSET
    #[arg(long, global = true, allow_hyphen_values = true)]
    utc_offset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a timestamp (integer = epoch millis, anything else = date text)
    Time {
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Classify a task status
    Status {
        status: String,
        /// Stored progress value (percent x 100)
        #[arg(long)]
        percent_complete: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Classify an alert severity
    Severity {
        severity: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Resolve a storage config UUID to its name
    ConfigName {
        /// JSON file with a list of {configUUID, configName}
        #[arg(long)]
        configs: PathBuf,
        uuid: Option<String>,
    },
    /// Render a backup list
    Backups {
        #[arg(long)]
        rows: PathBuf,
        #[arg(long)]
        configs: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Render an alert list
    Alerts {
        #[arg(long)]
        rows: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn resolve_offset(cli_value: Option<&str>) -> Result<FixedOffset, CliError> {
    match cli_value {
        Some(raw) => config::parse_utc_offset(raw),
        None => config::get_display_offset(),
    }
}

fn parse_time_arg(value: Option<String>) -> Option<TimestampInput> {
    let raw = value?;
    match raw.trim().parse::<i64>() {
        Ok(ms) => Some(TimestampInput::Millis(ms)),
        Err(_) => Some(TimestampInput::Text(raw)),
    }
}

fn print_json<T: Serialize>(value: &T) {
    let json_str = serde_json::to_string_pretty(value).unwrap_or_else(|_| "<non-json>".into());
    println!("{}", json_str);
}

fn print_descriptor(d: &DisplayDescriptor, json: bool) {
    if json {
        print_json(d);
    } else {
        println!("{}", paint_descriptor(d));
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Time { value } => {
            let offset = resolve_offset(cli.utc_offset.as_deref())?;
            println!("{}", format_timestamp_in(parse_time_arg(value).as_ref(), offset));
        }
        Commands::Status {
            status,
            percent_complete,
            json,
        } => {
            let mut row = RowContext::with_status(status.as_str());
            row.percent_complete = percent_complete;
            print_descriptor(&describe_status(&row), json);
        }
        Commands::Severity { severity, json } => {
            let row = RowContext {
                severity: severity.as_deref().map(AlertSeverity::from_raw),
                ..RowContext::default()
            };
            print_descriptor(&describe_severity(&row), json);
        }
        Commands::ConfigName { configs, uuid } => {
            let configs = load_configs(&configs)?;
            let row = RowContext {
                storage_config_uuid: uuid,
                ..RowContext::default()
            };
            println!("{}", resolve_config_name(&row, &configs));
        }
        Commands::Backups {
            rows,
            configs,
            json,
        } => {
            let offset = resolve_offset(cli.utc_offset.as_deref())?;
            let rows = load_backup_rows(&rows)?;
            let configs = load_configs(&configs)?;
            let views = backup_views(&rows, &configs, offset);
            if json {
                print_json(&views);
            } else if views.is_empty() {
                println!("(empty list)");
            } else {
                println!("\n{}\n", backups_table(&views));
            }
        }
        Commands::Alerts { rows, json } => {
            let offset = resolve_offset(cli.utc_offset.as_deref())?;
            let rows = load_alert_rows(&rows)?;
            let views = alert_views(&rows, offset);
            if json {
                print_json(&views);
            } else if views.is_empty() {
                println!("(empty list)");
            } else {
                println!("\n{}\n", alerts_table(&views));
            }
        }
    }
    Ok(())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    config::load_env_file(cli.env_file.as_deref());

    if let Err(e) = run(cli) {
        tracing::error!(%e, "Command failed");
        eprintln!("{}", yansi::Paint::new(e.to_string()).red());
        process::exit(1);
    }
}
