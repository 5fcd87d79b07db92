use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::app_config::AppConfig;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::import::encoding_for_label;

pub const DEFAULT_CONFIG_PATH: &str = "pharmashop.toml";
pub const ENV_PREFIX: &str = "PHARMASHOP_";

/// Loads layered configuration: defaults, then the TOML file, then environment
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Provider stack; a missing TOML file is simply skipped
    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&self.path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(&self) -> Result<AppConfig> {
        seed_env(dotenvy::dotenv())?;
        Self::extract(self.figment())
    }

    /// Extract and validate a config from any provider stack
    pub fn extract(figment: Figment) -> Result<AppConfig> {
        let config: AppConfig = figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config.validate().map_err(AppError::ConfigError)?;

        if encoding_for_label(&config.import.csv_fallback_encoding).is_none() {
            return Err(AppError::ConfigError(format!(
                "Unknown encoding label: {}",
                config.import.csv_fallback_encoding
            )));
        }

        Ok(config)
    }
}

/// `.env` only seeds the process environment. A missing file is fine,
/// an unreadable or malformed one is a config error.
fn seed_env(loaded: std::result::Result<PathBuf, dotenvy::Error>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(AppError::ConfigError(format!("Failed to load .env: {}", err))),
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(None)
    }
}
