use rebind_shield_domain::{CliOverrides, Config, DomainError, SharedRebindingConfig};
use std::sync::PoisonError;
use tracing::info;

/// Swaps the live rebinding settings for the ones in a config file.
///
/// Filters already running keep reading the shared config, so the new
/// settings apply from the next answer record they inspect.
pub struct ReloadRebindingConfigUseCase {
    config: SharedRebindingConfig,
}

impl ReloadRebindingConfigUseCase {
    pub fn new(config: SharedRebindingConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, config_path: &str) -> Result<Config, DomainError> {
        let new_config = Config::load(Some(config_path), CliOverrides::default())
            .map_err(|e| DomainError::ConfigError(format!("Config load error: {}", e)))?;

        {
            let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *config = new_config.rebinding.clone();
        }

        info!(
            path = config_path,
            enabled = new_config.rebinding.enabled,
            allowed_domains = new_config.rebinding.allowed_domains.len(),
            "Rebinding configuration reloaded"
        );

        Ok(new_config)
    }
}
