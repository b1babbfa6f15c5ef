use clap::{Parser, Subcommand, ValueEnum};
use rebind_shield_domain::{CliOverrides, ResponseSource};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::{error, info};

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "rebind-shield")]
#[command(version)]
#[command(about = "Rebind Shield - DNS rebinding protection for resolver responses")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Turn rebinding protection off regardless of the config file
    #[arg(long)]
    no_rebind_protection: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the rebinding filter over a wire-format DNS response
    Check {
        /// File holding the raw response message
        #[arg(value_name = "FILE")]
        response: PathBuf,

        /// Where the response came from
        #[arg(long, value_enum, default_value_t = SourceArg::Upstream)]
        source: SourceArg,

        /// Client that asked the question, logged per the anonymization setting
        #[arg(long)]
        client: Option<IpAddr>,

        /// Write the response that would be delivered to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Upstream,
    Cache,
    Rewrite,
    Local,
}

impl From<SourceArg> for ResponseSource {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Upstream => ResponseSource::Upstream,
            SourceArg::Cache => ResponseSource::Cache,
            SourceArg::Rewrite => ResponseSource::Rewrite,
            SourceArg::Local => ResponseSource::Local,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        rebinding_enabled: cli.no_rebind_protection.then_some(false),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config, cli.config.as_deref())?;

    info!("Starting Rebind Shield v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Command::Check {
            response,
            source,
            client,
            output,
        } => commands::check(
            &config,
            &commands::CheckRequest {
                response_path: response,
                source: source.into(),
                client,
                output_path: output,
            },
        )
        .map(|report| println!("{}", report)),
        Command::Config => commands::print_config(&config),
    };

    if let Err(e) = &result {
        error!("Command failed: {:#}", e);
    }

    result
}
