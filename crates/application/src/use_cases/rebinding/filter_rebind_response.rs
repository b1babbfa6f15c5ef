use crate::ports::{DnsResponseView, FilteredResponseBuilder};
use rebind_shield_domain::{
    AnswerRecord, DomainError, FilterVerdict, RebindGuard, RebindingConfig, ResponseSource,
    SharedRebindingConfig,
};
use std::sync::{Arc, PoisonError, RwLockReadGuard};
use std::time::Instant;
use tracing::{debug, info, Level};

/// Result of running the rebinding filter over one response.
#[derive(Debug, Clone)]
pub struct RebindFilterOutcome<M> {
    pub verdict: FilterVerdict,
    /// Set only when `verdict.blocked`; replaces the whole original response.
    pub replacement: Option<M>,
}

impl<M> RebindFilterOutcome<M> {
    pub fn pass() -> Self {
        Self {
            verdict: FilterVerdict::pass(),
            replacement: None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.verdict.blocked
    }

    /// The response to deliver: the replacement if filtered, else `original`
    /// untouched.
    pub fn into_response(self, original: M) -> M {
        self.replacement.unwrap_or(original)
    }
}

/// Post-resolution stage that suppresses responses pointing a public name
/// at a private, loopback or otherwise reserved address.
pub struct FilterRebindResponseUseCase<B: FilteredResponseBuilder> {
    config: SharedRebindingConfig,
    builder: Arc<B>,
}

impl<B: FilteredResponseBuilder> FilterRebindResponseUseCase<B> {
    pub fn new(config: SharedRebindingConfig, builder: Arc<B>) -> Self {
        Self { config, builder }
    }

    /// Runs the filter only for responses fresh from upstream.
    pub fn process(
        &self,
        response: &B::Response,
        source: ResponseSource,
    ) -> Result<RebindFilterOutcome<B::Response>, DomainError> {
        if !source.needs_rebind_check() {
            debug!(source = source.as_str(), "Skipping DNS rebinding check");
            return Ok(RebindFilterOutcome::pass());
        }

        self.execute(response)
    }

    pub fn execute(
        &self,
        response: &B::Response,
    ) -> Result<RebindFilterOutcome<B::Response>, DomainError> {
        let start = tracing::enabled!(Level::DEBUG).then(Instant::now);

        let matched = self.find_rebind_record(response);

        if let Some(start) = start {
            debug!(
                elapsed_us = start.elapsed().as_micros() as u64,
                blocked = matched.is_some(),
                "DNS rebinding check finished"
            );
        }

        let Some((record, host)) = matched else {
            return Ok(RebindFilterOutcome::pass());
        };

        let verdict = FilterVerdict::blocked(record);
        let replacement = self.builder.build_filtered(response, &verdict)?;

        let query_domain = response
            .question_name()
            .unwrap_or_else(|| verdict_domain(&verdict));
        info!(
            domain = %query_domain,
            host = %host,
            rule = verdict.rule(),
            "DNS rebinding: response filtered"
        );

        Ok(RebindFilterOutcome {
            verdict,
            replacement: Some(replacement),
        })
    }

    /// First answer record that the guard rejects, with the host it resolved
    /// to. Config is re-read for every record, so disabling protection takes
    /// effect on the next record of an in-flight response.
    fn find_rebind_record(&self, response: &B::Response) -> Option<(AnswerRecord, String)> {
        for record in response.answer_records() {
            let Some((domain, host)) = record.rebind_candidate() else {
                continue;
            };

            let blocked = {
                let config = self.read_config();
                if !config.enabled {
                    continue;
                }

                debug!(
                    domain = %domain,
                    kind = record.kind(),
                    host = %host,
                    "DNS rebinding: checking record"
                );
                RebindGuard::is_blocked(domain, &host, &config)
            };

            if blocked {
                return Some((record, host));
            }
        }

        None
    }

    fn read_config(&self) -> RwLockReadGuard<'_, RebindingConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }
}

fn verdict_domain(verdict: &FilterVerdict) -> String {
    verdict
        .triggering_record
        .as_ref()
        .map(|r| r.domain().to_string())
        .unwrap_or_default()
}
