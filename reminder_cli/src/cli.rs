//! CLI argument definitions and shared statics.

use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(
    name = "reminder",
    version,
    about = "Post a medication reminder card to the group webhook",
    after_help = "The webhook URL is read from the environment variable named by webhook.url_env (default FEISHU_WEBHOOK)."
)]
pub struct Cli {
    /// Task id of the reminder slot to send (e.g. morning_8, morning_8_check)
    #[arg(value_name = "TASK")]
    pub task: Option<String>,

    /// Path to config TOML; the built-in catalog is used when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compute the dose as of this date (YYYY-MM-DD) instead of today
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Print the card JSON instead of sending it
    #[arg(long, action = ArgAction::SetTrue)]
    pub dry_run: bool,

    /// List the configured reminder slots and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub list: bool,

    /// Log as JSON lines and print results as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); RUST_LOG takes precedence
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

pub fn json_mode() -> bool {
    JSON_MODE.get().copied().unwrap_or(false)
}
