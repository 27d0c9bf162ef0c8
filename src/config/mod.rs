use crate::config::cli::Args;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;
pub(crate) mod sources;

pub use sources::{SourceConfig, SourceKind};

pub struct Config {
    pub args: Args,
    pub sources: Vec<SourceConfig>,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let sources = match &args.sources_file {
            Some(path) => {
                info!("Loading sources from {}", path.display());
                serde_json::from_str(&std::fs::read_to_string(path)?)?
            }
            None => SourceConfig::defaults(),
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            args,
            sources,
            http_client,
        })
    }
}
