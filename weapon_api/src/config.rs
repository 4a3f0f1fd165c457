//! Server configuration - loaded once at startup, immutable afterwards

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use weapon_core::config::{self, ConfigError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Weapon data file; the bundled catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub descriptions_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Origins allowed by CORS. Empty allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: default_host(),
            port: default_port(),
            catalog_path: None,
            descriptions_path: None,
            log_level: default_log_level(),
            log_file: None,
            allowed_origins: Vec::new(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiConfig {
    /// Load from a TOML file, or defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: ApiConfig = config::load_toml_or_default(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = config::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level_filter()?;
        if self.descriptions_path.is_some() && self.catalog_path.is_none() {
            return Err(ConfigError::ValidationError(
                "descriptions_path requires catalog_path".to_string(),
            ));
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::ValidationError(format!("unknown log level '{}'", self.log_level))
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
