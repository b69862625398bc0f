use crate::config::{FinderConfig, BP_SEEDS, DEFAULT_PRODUCER_LIMIT};
use crate::get_api_endpoints_with;
use clap::Parser;
use log::{info, warn};
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(about = "Retrieve a ranked list of valid EOS API endpoints")]
pub struct Cli {
    /// Log level
    #[arg(short = 'l', long, default_value = "info")]
    pub log_level: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Number of producers to request from the seed
    #[arg(long, default_value_t = DEFAULT_PRODUCER_LIMIT)]
    pub limit: u32,

    /// Bootstrap seed URL, repeatable or comma-separated.
    /// Replaces the built-in seed list when given.
    #[arg(long = "seed", value_delimiter = ',', value_parser = parse_seed)]
    pub seeds: Vec<String>,

    /// Print the ranked endpoints as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

fn parse_seed(s: &str) -> Result<String, String> {
    let url = Url::parse(s).map_err(|e| format!("invalid seed URL '{s}': {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(s.trim_end_matches('/').to_string()),
        scheme => Err(format!("unsupported scheme '{scheme}' in seed URL '{s}'")),
    }
}

impl Cli {
    pub fn config(&self) -> FinderConfig {
        let seeds = if self.seeds.is_empty() {
            BP_SEEDS.iter().map(|s| s.to_string()).collect()
        } else {
            self.seeds.clone()
        };

        FinderConfig::default()
            .with_seeds(seeds)
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
            .with_producer_limit(self.limit)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        info!("Retrieving a list of valid EOS API endpoints...");

        let endpoints = get_api_endpoints_with(&self.config()).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&endpoints)?);
            return Ok(());
        }

        if endpoints.is_empty() {
            warn!("No valid endpoints found");
        }
        for endpoint in &endpoints {
            println!("{endpoint}");
        }
        Ok(())
    }
}
