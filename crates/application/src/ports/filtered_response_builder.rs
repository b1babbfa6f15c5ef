use super::DnsResponseView;
use rebind_shield_domain::{DomainError, FilterVerdict};

/// Synthesizes the response a client receives instead of a filtered one.
pub trait FilteredResponseBuilder: Send + Sync {
    type Response: DnsResponseView;

    fn build_filtered(
        &self,
        original: &Self::Response,
        verdict: &FilterVerdict,
    ) -> Result<Self::Response, DomainError>;
}
