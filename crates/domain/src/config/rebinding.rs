use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Live rebinding settings shared between the config-update path (writer)
/// and every in-flight response filter (readers).
pub type SharedRebindingConfig = Arc<RwLock<RebindingConfig>>;

/// Domain suffixes exempt from rebinding checks.
///
/// Matching is a plain suffix test on the presentation form of the name with
/// one trailing root dot ignored on either side, so `"lan"` and `"lan."` both
/// cover `"printer.lan."` and `"printer.lan"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AllowList(Vec<String>);

impl AllowList {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self(suffixes)
    }

    pub fn matches(&self, domain: &str) -> bool {
        let domain = without_root_dot(domain);
        self.0
            .iter()
            .any(|suffix| domain.ends_with(without_root_dot(suffix)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn without_root_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// What a filtered response looks like on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockingMode {
    /// `0.0.0.0` / `::` for address questions, empty NOERROR otherwise.
    #[default]
    NullIp,
    NxDomain,
    Refused,
}

impl BlockingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockingMode::NullIp => "null_ip",
            BlockingMode::NxDomain => "nx_domain",
            BlockingMode::Refused => "refused",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RebindingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub allowed_domains: AllowList,

    #[serde(default)]
    pub blocking_mode: BlockingMode,

    #[serde(default = "default_blocked_response_ttl")]
    pub blocked_response_ttl: u32,
}

impl RebindingConfig {
    pub fn into_shared(self) -> SharedRebindingConfig {
        Arc::new(RwLock::new(self))
    }
}

impl Default for RebindingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_domains: AllowList::default(),
            blocking_mode: BlockingMode::default(),
            blocked_response_ttl: default_blocked_response_ttl(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_blocked_response_ttl() -> u32 {
    10
}
