#![allow(dead_code)]

use rebind_shield_application::ports::{DnsResponseView, FilteredResponseBuilder};
use rebind_shield_domain::{AnswerRecord, DomainError, FilterVerdict};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Callback run with the answer index just before that record is yielded.
#[derive(Clone)]
pub struct RecordHook(Arc<dyn Fn(usize) + Send + Sync>);

impl fmt::Debug for RecordHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RecordHook")
    }
}

impl PartialEq for RecordHook {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for RecordHook {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub question: Option<String>,
    pub answers: Vec<AnswerRecord>,
    pub filtered_rule: Option<&'static str>,
    pub on_record: Option<RecordHook>,
}

impl MockResponse {
    pub fn new(question: &str) -> Self {
        Self {
            question: Some(question.to_string()),
            answers: vec![],
            filtered_rule: None,
            on_record: None,
        }
    }

    pub fn without_question() -> Self {
        Self {
            question: None,
            answers: vec![],
            filtered_rule: None,
            on_record: None,
        }
    }

    pub fn cname(mut self, domain: &str, target: &str) -> Self {
        self.answers.push(AnswerRecord::cname(domain, target));
        self
    }

    pub fn a(mut self, domain: &str, address: &str) -> Self {
        let address: Ipv4Addr = address.parse().unwrap();
        self.answers.push(AnswerRecord::a(domain, address));
        self
    }

    pub fn aaaa(mut self, domain: &str, address: &str) -> Self {
        let address: Ipv6Addr = address.parse().unwrap();
        self.answers.push(AnswerRecord::aaaa(domain, address));
        self
    }

    pub fn other(mut self, domain: &str, record_type: &str) -> Self {
        self.answers.push(AnswerRecord::other(domain, record_type));
        self
    }

    pub fn on_record(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_record = Some(RecordHook(Arc::new(hook)));
        self
    }
}

impl DnsResponseView for MockResponse {
    fn question_name(&self) -> Option<String> {
        self.question.clone()
    }

    fn answer_records(&self) -> impl Iterator<Item = AnswerRecord> + '_ {
        self.answers.iter().enumerate().map(move |(index, record)| {
            if let Some(hook) = &self.on_record {
                (hook.0)(index);
            }
            record.clone()
        })
    }
}

#[derive(Default)]
pub struct MockFilteredResponseBuilder {
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl MockFilteredResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let builder = Self::default();
        builder.fail.store(true, Ordering::SeqCst);
        builder
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FilteredResponseBuilder for MockFilteredResponseBuilder {
    type Response = MockResponse;

    fn build_filtered(
        &self,
        original: &MockResponse,
        verdict: &FilterVerdict,
    ) -> Result<MockResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::FilteredResponseFailed(
                "mock builder failure".to_string(),
            ));
        }

        Ok(MockResponse {
            question: original.question.clone(),
            answers: vec![],
            filtered_rule: Some(verdict.rule()),
            on_record: None,
        })
    }
}
