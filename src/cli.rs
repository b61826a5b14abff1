//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Four-function button calculator.
#[derive(Parser, Debug, Clone)]
#[command(name = "pocketcalc")]
#[command(about = "A four-function button calculator")]
#[command(version)]
pub struct Cli {
    /// Press this key sequence, print the final display and exit
    /// (e.g. "7+3=" or "5 ÷ 0 =").
    #[arg(long, short)]
    pub keys: Option<String>,

    /// With --keys, print the final state as JSON instead of the display.
    #[arg(long, requires = "keys")]
    pub json: bool,

    /// With --keys, copy the final display to the clipboard. On Linux the
    /// process keeps running until the clipboard is taken over.
    #[arg(long, requires = "keys")]
    pub copy: bool,

    /// Path to the config file (interactive mode only).
    #[arg(long, conflicts_with = "keys")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
