use crate::address_classifier::AddressClassifier;
use crate::config::RebindingConfig;

pub struct RebindGuard;

impl RebindGuard {
    /// Reports whether `domain` resolving to `host` is a rebinding attempt.
    ///
    /// An allow-listed domain is never blocked, whatever `host` is. A `host`
    /// that does not parse as an address only matches `localhost`.
    pub fn is_blocked(domain: &str, host: &str, config: &RebindingConfig) -> bool {
        if !config.enabled {
            return false;
        }

        if config.allowed_domains.matches(domain) {
            return false;
        }

        AddressClassifier::is_rebind_hostname(host)
    }
}
