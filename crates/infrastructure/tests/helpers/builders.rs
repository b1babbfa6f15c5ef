#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use rebind_shield_domain::{BlockingMode, RebindingConfig, SharedRebindingConfig};
use rebind_shield_infrastructure::dns::DnsResponseMessage;
use std::str::FromStr;

const ANSWER_TTL: u32 = 300;

fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn shared_config(
    enabled: bool,
    allowed: &[&str],
    blocking_mode: BlockingMode,
) -> SharedRebindingConfig {
    RebindingConfig {
        enabled,
        allowed_domains: allowed.iter().copied().collect(),
        blocking_mode,
        ..RebindingConfig::default()
    }
    .into_shared()
}

/// Builds upstream-style responses: QR, RD and RA set, one question.
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new(id: u16, domain: &str, record_type: RecordType) -> Self {
        let mut query = Query::new();
        query.set_name(name(domain));
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Response, OpCode::Query);
        message.set_recursion_desired(true);
        message.set_recursion_available(true);
        message.add_query(query);

        Self { message }
    }

    pub fn without_question(id: u16) -> Self {
        let mut message = Message::new(id, MessageType::Response, OpCode::Query);
        message.set_recursion_desired(true);
        Self { message }
    }

    pub fn a(mut self, owner: &str, address: &str) -> Self {
        let rdata = RData::A(A(address.parse().unwrap()));
        self.message
            .add_answer(Record::from_rdata(name(owner), ANSWER_TTL, rdata));
        self
    }

    pub fn aaaa(mut self, owner: &str, address: &str) -> Self {
        let rdata = RData::AAAA(AAAA(address.parse().unwrap()));
        self.message
            .add_answer(Record::from_rdata(name(owner), ANSWER_TTL, rdata));
        self
    }

    pub fn cname(mut self, owner: &str, target: &str) -> Self {
        let rdata = RData::CNAME(CNAME(name(target)));
        self.message
            .add_answer(Record::from_rdata(name(owner), ANSWER_TTL, rdata));
        self
    }

    pub fn txt(mut self, owner: &str, text: &str) -> Self {
        let rdata = RData::TXT(TXT::new(vec![text.to_string()]));
        self.message
            .add_answer(Record::from_rdata(name(owner), ANSWER_TTL, rdata));
        self
    }

    pub fn recursion_desired(mut self, value: bool) -> Self {
        self.message.set_recursion_desired(value);
        self
    }

    pub fn build(self) -> DnsResponseMessage {
        DnsResponseMessage::new(self.message)
    }

    /// Round-trips through wire format, as an upstream answer would arrive.
    pub fn build_from_wire(self) -> DnsResponseMessage {
        let bytes = DnsResponseMessage::new(self.message).to_wire().unwrap();
        DnsResponseMessage::from_wire(&bytes).unwrap()
    }
}
