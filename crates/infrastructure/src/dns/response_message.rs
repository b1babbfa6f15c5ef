use super::rebind::AnswerExtractor;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rebind_shield_application::ports::DnsResponseView;
use rebind_shield_domain::{AnswerRecord, DomainError};

/// A DNS response as it travels through the filter pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct DnsResponseMessage {
    message: Message,
}

impl DnsResponseMessage {
    pub fn new(message: Message) -> Self {
        Self { message }
    }

    /// Parse a response from wire format bytes
    pub fn from_wire(bytes: &[u8]) -> Result<Self, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        Ok(Self { message })
    }

    /// Serialize the response back to wire format bytes
    pub fn to_wire(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        self.message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS response: {}", e))
        })?;

        Ok(buf)
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn response_code(&self) -> ResponseCode {
        self.message.response_code()
    }
}

impl DnsResponseView for DnsResponseMessage {
    fn question_name(&self) -> Option<String> {
        self.message
            .queries()
            .first()
            .map(|query| query.name().to_utf8())
    }

    fn answer_records(&self) -> impl Iterator<Item = AnswerRecord> + '_ {
        self.message.answers().iter().map(AnswerExtractor::extract)
    }
}
