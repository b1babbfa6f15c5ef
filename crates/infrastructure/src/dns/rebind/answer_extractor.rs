use hickory_proto::rr::{RData, Record};
use rebind_shield_domain::AnswerRecord;

/// Maps hickory answer records onto the filter's record model.
pub struct AnswerExtractor;

impl AnswerExtractor {
    /// Owner names and CNAME targets keep their presentation form, trailing
    /// dot included.
    pub fn extract(record: &Record) -> AnswerRecord {
        let domain = record.name().to_utf8();

        match record.data() {
            RData::A(a) => AnswerRecord::a(&domain, a.0),
            RData::AAAA(aaaa) => AnswerRecord::aaaa(&domain, aaaa.0),
            RData::CNAME(canonical) => AnswerRecord::cname(&domain, &canonical.to_utf8()),
            _ => AnswerRecord::other(&domain, &record.record_type().to_string()),
        }
    }
}
