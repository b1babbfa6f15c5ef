//! Rebind Shield Domain Layer
pub mod address_classifier;
pub mod answer_record;
pub mod config;
pub mod errors;
pub mod filter_verdict;
pub mod ip_mutator;
pub mod rebind_guard;
pub mod response_source;

pub use address_classifier::AddressClassifier;
pub use answer_record::AnswerRecord;
pub use config::{
    AllowList, BlockingMode, CliOverrides, Config, ConfigError, LogFormat, LoggingConfig,
    RebindingConfig, SharedRebindingConfig,
};
pub use errors::DomainError;
pub use filter_verdict::{FilterReason, FilterVerdict, REBIND_PROTECTION_RULE};
pub use ip_mutator::{anonymize_ip, IpMutFn, IpMutator};
pub use rebind_guard::RebindGuard;
pub use response_source::ResponseSource;
