use crate::algorithms::Algorithm;
use crate::dataset::ElementCount;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sort: SortConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file for the TUI; logs are discarded when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    /// Algorithm selected at startup
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Number of bars to generate (10-1000)
    #[serde(default = "default_element_count")]
    pub element_count: usize,
    /// Pause after each frame in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Seed for reproducible datasets
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            element_count: default_element_count(),
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl SortConfig {
    pub fn element_count(&self) -> Result<ElementCount, ConfigError> {
        ElementCount::new(self.element_count)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_element_count() -> usize {
    ElementCount::default().get()
}

fn default_delay_ms() -> u64 {
    50
}

impl AppConfig {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<config dir>/sortty/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sortty").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sort.element_count()?;
        Ok(())
    }
}
