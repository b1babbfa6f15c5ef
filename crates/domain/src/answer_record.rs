use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// An answer-section record as seen by the rebinding filter.
///
/// `domain` is always the record's own owner name, never the original
/// question name, so each hop of a CNAME chain is judged on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRecord {
    Cname { domain: Arc<str>, target: Arc<str> },
    A { domain: Arc<str>, address: Ipv4Addr },
    Aaaa { domain: Arc<str>, address: Ipv6Addr },
    /// Any other record kind; carried so callers can match exhaustively.
    Other { domain: Arc<str>, record_type: Arc<str> },
}

impl AnswerRecord {
    pub fn cname(domain: &str, target: &str) -> Self {
        AnswerRecord::Cname {
            domain: Arc::from(domain),
            target: Arc::from(target),
        }
    }

    pub fn a(domain: &str, address: Ipv4Addr) -> Self {
        AnswerRecord::A {
            domain: Arc::from(domain),
            address,
        }
    }

    pub fn aaaa(domain: &str, address: Ipv6Addr) -> Self {
        AnswerRecord::Aaaa {
            domain: Arc::from(domain),
            address,
        }
    }

    pub fn other(domain: &str, record_type: &str) -> Self {
        AnswerRecord::Other {
            domain: Arc::from(domain),
            record_type: Arc::from(record_type),
        }
    }

    pub fn domain(&self) -> &str {
        match self {
            AnswerRecord::Cname { domain, .. }
            | AnswerRecord::A { domain, .. }
            | AnswerRecord::Aaaa { domain, .. }
            | AnswerRecord::Other { domain, .. } => domain.as_ref(),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            AnswerRecord::Cname { .. } => "CNAME",
            AnswerRecord::A { .. } => "A",
            AnswerRecord::Aaaa { .. } => "AAAA",
            AnswerRecord::Other { record_type, .. } => record_type.as_ref(),
        }
    }

    /// The `(domain, host)` pair the rebinding guard inspects, or `None` for
    /// record kinds it ignores. CNAME targets lose their trailing dot.
    pub fn rebind_candidate(&self) -> Option<(&str, String)> {
        match self {
            AnswerRecord::Cname { domain, target } => {
                let host = target.strip_suffix('.').unwrap_or(target.as_ref());
                Some((domain.as_ref(), host.to_string()))
            }
            AnswerRecord::A { domain, address } => Some((domain.as_ref(), address.to_string())),
            AnswerRecord::Aaaa { domain, address } => Some((domain.as_ref(), address.to_string())),
            AnswerRecord::Other { .. } => None,
        }
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerRecord::Cname { domain, target } => write!(f, "{} CNAME {}", domain, target),
            AnswerRecord::A { domain, address } => write!(f, "{} A {}", domain, address),
            AnswerRecord::Aaaa { domain, address } => write!(f, "{} AAAA {}", domain, address),
            AnswerRecord::Other {
                domain,
                record_type,
            } => write!(f, "{} {}", domain, record_type),
        }
    }
}
