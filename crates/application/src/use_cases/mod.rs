pub mod config;
pub mod rebinding;

pub use config::ReloadRebindingConfigUseCase;
pub use rebinding::{FilterRebindResponseUseCase, RebindFilterOutcome};
