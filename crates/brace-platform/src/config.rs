use std::path::{Path, PathBuf};
use std::time::Duration;

use brace_sizing::{CartEndpoint, DEFAULT_CART_BASE_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub cart_base_url: String,
    /// Namespace for cache keys in shared stores.
    pub storage_prefix: String,
    /// JSON file backing the native cache. In-memory when unset.
    pub store_path: Option<PathBuf>,
    pub log_filter: String,
    pub hero_interval_secs: u64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            cart_base_url: DEFAULT_CART_BASE_URL.to_string(),
            storage_prefix: "fl-".to_string(),
            store_path: None,
            log_filter: "info".to_string(),
            hero_interval_secs: 15,
        }
    }
}

impl LandingConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("config: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: LandingConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hero_interval_secs == 0 {
            return Err(ConfigError::Invalid("hero_interval_secs must be positive".into()));
        }
        if !self.cart_base_url.starts_with("http://") && !self.cart_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "cart_base_url must be an http(s) URL, got {:?}",
                self.cart_base_url
            )));
        }
        Ok(())
    }

    pub fn hero_interval(&self) -> Duration {
        Duration::from_secs(self.hero_interval_secs)
    }

    pub fn cart(&self) -> CartEndpoint {
        CartEndpoint::new(self.cart_base_url.clone())
    }
}
