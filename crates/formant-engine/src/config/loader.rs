use super::schema::FormantConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid config value for {key}: {value} ({reason})")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./formant.yaml
    /// 2. ~/.formant/config.yaml
    /// 3. Default configuration
    pub async fn load_default() -> Result<FormantConfig, ConfigError> {
        // Check current directory
        let local_config = PathBuf::from("./formant.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config).await;
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".formant").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config).await;
            }
        }

        // Return default
        Ok(FormantConfig::default())
    }

    pub async fn load_from(path: &Path) -> Result<FormantConfig, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: FormantConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
