//! CLI argument definitions.

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "addup", version, about = "Print the sum of the fixed addends")]
pub struct Cli {
    /// Emit the total as a single JSON line instead of plain text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}
