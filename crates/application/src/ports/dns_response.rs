use rebind_shield_domain::AnswerRecord;

/// Read access to an already-parsed DNS response.
pub trait DnsResponseView {
    /// Name of the first question, in presentation form.
    fn question_name(&self) -> Option<String>;

    /// Answer section in wire order, extracted lazily as the filter walks it.
    fn answer_records(&self) -> impl Iterator<Item = AnswerRecord> + '_;
}
