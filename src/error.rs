//! Error types for the fallible edges of the calculator.
//!
//! The state machine itself never fails; these cover typed input,
//! configuration loading and clipboard access.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while turning typed text into button presses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// A character that maps to no calculator button.
    #[error("unrecognized key '{key}' at position {offset}")]
    Unrecognized { key: char, offset: usize },
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unexpected keys.
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid config value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Errors that can occur while copying to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The clipboard could not be opened.
    #[error("failed to access clipboard: {0}")]
    Access(String),

    /// The clipboard refused the text.
    #[error("failed to copy to clipboard: {0}")]
    Copy(String),
}

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        ClipboardError::Copy(e.to_string())
    }
}
