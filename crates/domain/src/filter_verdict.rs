use crate::answer_record::AnswerRecord;
use serde::{Deserialize, Serialize};

/// Rule identifier attached to responses suppressed by rebinding protection.
pub const REBIND_PROTECTION_RULE: &str = "rebind-protection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterReason {
    RebindProtection,
}

impl FilterReason {
    pub fn to_str(&self) -> &'static str {
        match self {
            FilterReason::RebindProtection => "rebind_protection",
        }
    }

    pub fn rule(&self) -> &'static str {
        match self {
            FilterReason::RebindProtection => REBIND_PROTECTION_RULE,
        }
    }
}

impl std::fmt::Display for FilterReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterVerdict {
    pub blocked: bool,
    pub triggering_record: Option<AnswerRecord>,
    pub reason: FilterReason,
}

impl FilterVerdict {
    pub fn pass() -> Self {
        Self {
            blocked: false,
            triggering_record: None,
            reason: FilterReason::RebindProtection,
        }
    }

    pub fn blocked(record: AnswerRecord) -> Self {
        Self {
            blocked: true,
            triggering_record: Some(record),
            reason: FilterReason::RebindProtection,
        }
    }

    pub fn rule(&self) -> &'static str {
        self.reason.rule()
    }
}
