//! Configuration loading for OsteoOS.
//!
//! Reads `~/.osteo/config.toml` (or the file named by `OSTEO_CONFIG`) and
//! resolves it into validated [`osteo_types`] settings. A missing file is
//! not an error: every section has a default.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use osteo_types::{ProgressionRules, StartingState};

pub const CONFIG_PATH_ENV: &str = "OSTEO_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    progression: Option<ProgressionRules>,
    start: Option<StartingState>,
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsteoConfig {
    progression: ProgressionRules,
    start: Option<StartingState>,
}

impl OsteoConfig {
    /// Load from the default location, falling back to defaults on any
    /// failure. Failures are logged, never fatal.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            tracing::debug!("No home directory; using default config");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!("{err}");
                Self::default()
            }
        }
    }

    /// Load from `path`. Returns `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Self {
            progression: raw.progression.unwrap_or_default(),
            start: raw.start,
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn progression(&self) -> ProgressionRules {
        self.progression
    }

    /// Configured starting state, if the file has a `[start]` section.
    #[must_use]
    pub fn start(&self) -> Option<&StartingState> {
        self.start.as_ref()
    }
}

/// `$OSTEO_CONFIG` when set and non-empty, else `~/.osteo/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_path_from(env::var(CONFIG_PATH_ENV).ok(), dirs::home_dir())
}

fn config_path_from(override_path: Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(value) = override_path
        && !value.trim().is_empty()
    {
        return Some(PathBuf::from(value));
    }
    home.map(|home| home.join(".osteo").join("config.toml"))
}
