//! Storefront configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_ui::Labels;

use crate::error::ConfigError;
use crate::logging::LogFormat;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Backend location.
    #[serde(default)]
    pub api: ApiConfig,

    /// Error banner behaviour.
    #[serde(default)]
    pub banner: BannerConfig,

    /// User-facing text.
    #[serde(default)]
    pub messages: Messages,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file (JSON by extension, TOML otherwise).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Find a config file in `start` or any parent directory.
    ///
    /// The nearest file that loads wins. Candidates that exist but fail to
    /// load are reported in [`Discovery::skipped`] so the caller can tell
    /// the user before logging is set up.
    pub fn discover(start: &Path) -> Discovery {
        let mut discovery = Discovery::default();
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let candidate = current.join(name);
                if candidate.exists() {
                    match Self::load(&candidate) {
                        Ok(config) => {
                            discovery.found = Some((candidate, config));
                            return discovery;
                        }
                        Err(e) => discovery.skipped.push(e),
                    }
                }
            }

            if !current.pop() {
                return discovery;
            }
        }
    }

    /// Apply overrides from the environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.api.base_url = url;
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Outcome of [`StorefrontConfig::discover`].
#[derive(Debug, Default)]
pub struct Discovery {
    /// The config file used, if any.
    pub found: Option<(PathBuf, StorefrontConfig)>,
    /// Candidates that exist but could not be loaded, nearest first.
    pub skipped: Vec<ConfigError>,
}

/// Backend location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the REST paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Error banner behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerConfig {
    /// How long a message stays visible, in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

fn default_ttl_ms() -> u64 {
    3500
}

impl BannerConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
        }
    }
}

/// User-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Banner shown when the initial load fails.
    #[serde(default = "default_load_failed")]
    pub load_failed: String,

    /// Banner shown when a background cart write fails.
    #[serde(default = "default_write_failed")]
    pub write_failed: String,

    /// Component labels.
    #[serde(flatten)]
    pub labels: Labels,
}

fn default_load_failed() -> String {
    "Товары не найдены".to_string()
}

fn default_write_failed() -> String {
    "Не удалось обновить корзину".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            load_failed: default_load_failed(),
            write_failed: default_write_failed(),
            labels: Labels::default(),
        }
    }
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `storefront_client=debug`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}
