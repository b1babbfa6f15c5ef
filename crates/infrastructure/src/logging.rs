use rebind_shield_domain::{DomainError, IpMutator, LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level when set.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, DomainError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            DomainError::ConfigError(format!("Invalid log level '{}': {}", config.level, e))
        })
}

/// Installs the global fmt subscriber. Fails if one is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), DomainError> {
    let filter = build_env_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| DomainError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Mutator applied to client addresses before they are logged.
pub fn client_ip_anonymizer(config: &LoggingConfig) -> IpMutator {
    IpMutator::anonymizer(config.anonymize_client_ip)
}
