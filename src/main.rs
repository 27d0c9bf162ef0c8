use crate::config::cli::Args;
use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, HttpFetcher};
use crate::services::{FieldStatusService, ScrapingService};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let config = Config::from_args(args)?;
    let service = FieldStatusService::new(
        config.sources,
        ScrapingService::new(HttpFetcher::new(config.http_client)),
        Arc::new(FileSystemStore::new(config.args.output)),
        config.args.fail_fast,
    );

    match service.run().await {
        Ok(report) => {
            if let Some(path) = report.output {
                info!(
                    "Saved {} park(s) to {}",
                    report.parks_written,
                    path.display()
                );
            }
            Ok(())
        }
        Err(e) => {
            error!("Error during fetching or saving: {e}");
            Err(e)
        }
    }
}
