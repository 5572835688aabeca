use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use dx_autocomplete::cli::Commands;
use dx_autocomplete::{
    AutocompleteClient, AutocompleteResponse, ClientConfig, DomainError, ReqwestTransport,
    DOMAIN_ENV_VAR,
};

#[derive(Parser)]
#[command(name = "dx-autocomplete")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base address, e.g. https://api.example.com
    #[arg(short, long, global = true)]
    domain: Option<String>,

    /// JSON options file: { "domain": ..., "token": { ... } }
    #[arg(short, long, global = true, conflicts_with = "domain")]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = log_filter(cli.verbose, std::env::var("RUST_LOG").ok().as_deref());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = resolve_config(&cli)?;
    debug!("Using domain {}", config.domain());

    let transport = match cli.timeout {
        Some(secs) => ReqwestTransport::with_timeout(Duration::from_secs(secs))?,
        None => ReqwestTransport::new(),
    };
    let client = AutocompleteClient::from_config(config, Arc::new(transport))?;

    match cli.command {
        Commands::Autocomplete { query, raw } => {
            let value = client.fetch_autocomplete(&query.to_params()).await?;

            if raw {
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            let response: AutocompleteResponse = serde_json::from_value(value)?;
            if let Some(status) = response.status.as_deref().filter(|s| *s != "OK") {
                match response.error_message.as_deref() {
                    Some(message) => println!("Status: {} ({})", status, message),
                    None => println!("Status: {}", status),
                }
            }

            if response.is_empty() {
                println!("No predictions.");
            } else {
                for (i, prediction) in response.predictions.iter().enumerate() {
                    match prediction.place_id.as_deref() {
                        Some(id) => println!("{}. {} [{}]", i + 1, prediction.description, id),
                        None => println!("{}. {}", i + 1, prediction.description),
                    }
                }
            }
        }

        Commands::Url { query } => {
            println!("{}", client.autocomplete_url(&query.to_params())?);
        }
    }

    Ok(())
}

/// `RUST_LOG` directives when set and valid, else `debug` with `--verbose`
/// and `info` without.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// `--config`, then `--domain`, then the environment.
fn resolve_config(cli: &Cli) -> Result<ClientConfig, DomainError> {
    if let Some(path) = &cli.config {
        return ClientConfig::from_json_file(path);
    }
    if let Some(domain) = &cli.domain {
        return Ok(ClientConfig::new(domain.as_str()));
    }
    ClientConfig::from_env().ok_or_else(|| {
        DomainError::configuration(format!(
            "no domain given; pass --domain, --config or set {}",
            DOMAIN_ENV_VAR
        ))
    })
}
