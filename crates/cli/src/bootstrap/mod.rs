use rebind_shield_domain::{CliOverrides, Config};
use rebind_shield_infrastructure::logging;
use tracing::info;

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    Ok(config)
}

pub fn init_logging(config: &Config, config_path: Option<&str>) -> anyhow::Result<()> {
    logging::init_logging(&config.logging)?;

    match config_path.map(str::to_string).or_else(Config::get_config_path) {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    Ok(())
}
