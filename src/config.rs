//! Configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Upper bound on the tape length.
pub const MAX_TAPE_CAPACITY: usize = 10_000;

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prompt printed before each line of input.
    pub prompt: String,

    /// Copy every `=` result to the clipboard.
    pub copy_on_equals: bool,

    /// Maximum number of tape entries kept. Zero disables the tape.
    pub tape_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            copy_on_equals: false,
            tape_capacity: 50,
        }
    }
}

impl Config {
    /// Default config file location (`<config dir>/pocketcalc/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pocketcalc").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried and a missing file there yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tape_capacity > MAX_TAPE_CAPACITY {
            return Err(ConfigError::Invalid {
                key: "tape_capacity",
                reason: format!("must be at most {MAX_TAPE_CAPACITY}"),
            });
        }
        if self.prompt.contains('\n') {
            return Err(ConfigError::Invalid {
                key: "prompt",
                reason: "must be a single line".to_string(),
            });
        }
        Ok(())
    }
}
