use crate::dns::DnsResponseMessage;
use hickory_proto::op::{Message, MessageType, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record, RecordType};
use rebind_shield_application::ports::FilteredResponseBuilder;
use rebind_shield_domain::{
    BlockingMode, DomainError, FilterVerdict, RebindingConfig, SharedRebindingConfig,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::{PoisonError, RwLockReadGuard};
use tracing::debug;

/// Synthesizes the response sent in place of a filtered one.
///
/// The reply mirrors the original's id, opcode, RD flag and question, and
/// its body follows the configured [`BlockingMode`]. Mode and TTL are read
/// at build time, so config updates apply to the next filtered response.
pub struct FilteredMessageBuilder {
    config: SharedRebindingConfig,
}

impl FilteredMessageBuilder {
    pub fn new(config: SharedRebindingConfig) -> Self {
        Self { config }
    }

    fn read_config(&self) -> RwLockReadGuard<'_, RebindingConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FilteredResponseBuilder for FilteredMessageBuilder {
    type Response = DnsResponseMessage;

    fn build_filtered(
        &self,
        original: &DnsResponseMessage,
        verdict: &FilterVerdict,
    ) -> Result<DnsResponseMessage, DomainError> {
        let original = original.message();
        let query = original.queries().first().ok_or_else(|| {
            DomainError::FilteredResponseFailed(format!(
                "response {} has no question section",
                original.id()
            ))
        })?;

        let (mode, ttl) = {
            let config = self.read_config();
            (config.blocking_mode, config.blocked_response_ttl)
        };

        let mut message = Message::new(original.id(), MessageType::Response, original.op_code());
        message.set_recursion_desired(original.recursion_desired());
        message.set_recursion_available(true);
        message.add_query(query.clone());

        match mode {
            BlockingMode::NullIp => {
                if let Some(record) = null_answer(query, ttl) {
                    message.add_answer(record);
                }
            }
            BlockingMode::NxDomain => {
                message.set_response_code(ResponseCode::NXDomain);
            }
            BlockingMode::Refused => {
                message.set_response_code(ResponseCode::Refused);
            }
        }

        debug!(
            domain = %query.name(),
            mode = mode.as_str(),
            rule = verdict.rule(),
            "Filtered DNS response built"
        );

        Ok(DnsResponseMessage::new(message))
    }
}

/// Unspecified-address answer for A/AAAA questions; other types get none.
fn null_answer(query: &Query, ttl: u32) -> Option<Record> {
    let rdata = match query.query_type() {
        RecordType::A => RData::A(A(Ipv4Addr::UNSPECIFIED)),
        RecordType::AAAA => RData::AAAA(AAAA(Ipv6Addr::UNSPECIFIED)),
        _ => return None,
    };

    Some(Record::from_rdata(query.name().clone(), ttl, rdata))
}
