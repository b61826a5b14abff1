//! pocketcalc binary.
//!
//! Runs an interactive calculator on stdin/stdout, or presses a single key
//! sequence with `--keys` and prints the result. The config file only
//! affects the interactive session.

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use pocketcalc::cli::Cli;
use pocketcalc::config::Config;
use pocketcalc::session::{PersistentClipboard, Session, run_once};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("pocketcalc v{}", env!("CARGO_PKG_VERSION"));

    match cli.keys.as_deref() {
        Some(keys) => {
            let clipboard = cli.copy.then_some(PersistentClipboard);
            run_once(keys, cli.json, io::stdout().lock(), clipboard)?;
            Ok(())
        }
        None => {
            let config =
                Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
            let mut session = Session::new(config, io::stdout().lock());
            session
                .run(io::stdin().lock())
                .context("Terminal session failed")
        }
    }
}
