//! Global standings configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{StoreError, StoreResult};

static DEFAULT_EVENTS_DIR: &str = "~/standings/events";
static DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4321;
static DEFAULT_LOG_LEVEL: &str = "info";

fn default_events_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_DIR)
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration at ~/.config/standings/config.toml
///
/// Every field can be overridden with a `STANDINGS_` environment variable,
/// e.g. `STANDINGS_PORT=8080`.
#[derive(Debug, Deserialize, Clone)]
pub struct StandingsConfig {
    /// Where event files live
    #[serde(default = "default_events_dir")]
    pub events_dir: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Default tracing filter; RUST_LOG takes precedence
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        StandingsConfig {
            events_dir: default_events_dir(),
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl StandingsConfig {
    pub fn config_path() -> StoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StoreError::Config("Could not determine config directory".into()))?
            .join("standings");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> StoreResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (which may be missing) plus the environment.
    pub fn load_from(path: &Path) -> StoreResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("STANDINGS").try_parsing(true))
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| StoreError::Config(e.to_string()))
    }

    /// The events directory with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.events_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> StoreResult<()> {
        let contents = format!(
            "\
# standings configuration

# Where event files live:
# events_dir = \"{}\"

# Address the HTTP server binds to:
# host = \"{}\"
# port = {}

# Log level (overridden by RUST_LOG):
# log_level = \"{}\"
",
            DEFAULT_EVENTS_DIR, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| StoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
