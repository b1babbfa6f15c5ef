pub mod answer_extractor;
pub mod filtered_message;

pub use answer_extractor::AnswerExtractor;
pub use filtered_message::FilteredMessageBuilder;

use rebind_shield_application::use_cases::FilterRebindResponseUseCase;
use rebind_shield_domain::SharedRebindingConfig;
use std::sync::Arc;

/// The rebinding filter stage wired to hickory messages.
pub type RebindResponseFilter = FilterRebindResponseUseCase<FilteredMessageBuilder>;

/// Builds the stage with a synthesizer reading the same live config.
pub fn rebind_response_filter(config: SharedRebindingConfig) -> RebindResponseFilter {
    let builder = Arc::new(FilteredMessageBuilder::new(config.clone()));
    FilterRebindResponseUseCase::new(config, builder)
}
