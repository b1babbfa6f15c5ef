mod filter_rebind_response;

pub use filter_rebind_response::{FilterRebindResponseUseCase, RebindFilterOutcome};
