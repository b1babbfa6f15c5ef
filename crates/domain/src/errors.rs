use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to build filtered response: {0}")]
    FilteredResponseFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
