use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::rebinding::RebindingConfig;

const LOCAL_CONFIG_PATH: &str = "rebind-shield.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rebind-shield/config.toml";

/// Main configuration structure for Rebind Shield
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// DNS rebinding protection
    #[serde(default)]
    pub rebinding: RebindingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rebind-shield.toml in current directory
    /// 3. /etc/rebind-shield/config.toml
    /// 4. Default configuration
    ///
    /// Command line overrides are applied before validation.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(enabled) = overrides.rebinding_enabled {
            self.rebinding.enabled = enabled;
        }
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rebinding.allowed_domains.iter().any(str::is_empty) {
            return Err(ConfigError::Validation(
                "Rebinding allow-list contains an empty entry".to_string(),
            ));
        }

        if self.rebinding.blocked_response_ttl == 0 {
            return Err(ConfigError::Validation(
                "blocked_response_ttl cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub rebinding_enabled: Option<bool>,
}
