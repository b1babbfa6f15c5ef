/// Failures while loading, validating or saving the rebind-shield TOML file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Cannot write config file {0}: {1}")]
    FileWrite(String, String),

    #[error("Invalid config TOML: {0}")]
    Parse(String),

    #[error("Invalid rebinding settings: {0}")]
    Validation(String),
}

impl From<ConfigError> for crate::DomainError {
    fn from(err: ConfigError) -> Self {
        crate::DomainError::ConfigError(err.to_string())
    }
}
