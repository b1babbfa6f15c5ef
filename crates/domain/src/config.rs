pub mod errors;
pub mod logging;
pub mod rebinding;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use rebinding::{AllowList, BlockingMode, RebindingConfig, SharedRebindingConfig};
pub use root::{CliOverrides, Config};
