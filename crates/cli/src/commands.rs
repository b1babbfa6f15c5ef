use anyhow::Context;
use rebind_shield_domain::{Config, FilterVerdict, ResponseSource};
use rebind_shield_infrastructure::dns::rebind::rebind_response_filter;
use rebind_shield_infrastructure::dns::DnsResponseMessage;
use rebind_shield_infrastructure::logging::client_ip_anonymizer;
use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::info;

pub struct CheckRequest {
    pub response_path: PathBuf,
    pub source: ResponseSource,
    pub client: Option<IpAddr>,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct CheckReport {
    pub source: ResponseSource,
    pub verdict: FilterVerdict,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict.triggering_record {
            Some(record) if self.verdict.blocked => write!(
                f,
                "blocked source={} rule={} record=\"{}\"",
                self.source.as_str(),
                self.verdict.rule(),
                record
            ),
            _ => write!(f, "passed source={}", self.source.as_str()),
        }
    }
}

pub fn check(config: &Config, request: &CheckRequest) -> anyhow::Result<CheckReport> {
    let bytes = std::fs::read(&request.response_path)
        .with_context(|| format!("Failed to read {}", request.response_path.display()))?;
    let response = DnsResponseMessage::from_wire(&bytes)?;

    if let Some(mut client) = request.client {
        client_ip_anonymizer(&config.logging).mutate(&mut client);
        info!(client = %client, source = request.source.as_str(), "Checking DNS response");
    }

    let filter = rebind_response_filter(config.rebinding.clone().into_shared());
    let outcome = filter.process(&response, request.source)?;
    let verdict = outcome.verdict.clone();

    if let Some(path) = &request.output_path {
        let delivered = outcome.into_response(response).to_wire()?;
        std::fs::write(path, delivered)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(CheckReport {
        source: request.source,
        verdict,
    })
}

pub fn print_config(config: &Config) -> anyhow::Result<()> {
    let rendered =
        toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    println!("{}", rendered);
    Ok(())
}
