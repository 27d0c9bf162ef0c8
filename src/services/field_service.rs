use crate::config::SourceConfig;
use crate::domain::storage::Storage;
use crate::error::Result;
use crate::infrastructure::PageFetcher;
use crate::services::aggregation::aggregate;
use crate::services::scraping::{ScrapingService, SourceOutcome};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Summary of one fetch-extract-write cycle.
#[derive(Debug, Default)]
pub struct RunReport {
    pub parks_written: usize,
    pub failed_sources: Vec<String>,
    /// `None` when nothing was scraped and no file was written.
    pub output: Option<PathBuf>,
}

pub struct FieldStatusService<F> {
    sources: Vec<SourceConfig>,
    scraping: ScrapingService<F>,
    store: Arc<dyn Storage>,
    fail_fast: bool,
}

impl<F: PageFetcher> FieldStatusService<F> {
    pub fn new(
        sources: Vec<SourceConfig>,
        scraping: ScrapingService<F>,
        store: Arc<dyn Storage + 'static>,
        fail_fast: bool,
    ) -> Self {
        Self {
            sources,
            scraping,
            store,
            fail_fast,
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        info!("Starting data scrape for {} source(s)", self.sources.len());

        let outcomes = self.scraping.scrape_all(&self.sources, self.fail_fast).await?;

        let mut report = RunReport::default();
        let mut source_results = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                SourceOutcome::Scraped { source, parks } => {
                    info!("{source} contributed {} park(s)", parks.len());
                    source_results.push(parks);
                }
                SourceOutcome::Failed { source, reason } => {
                    warn!("Skipping {source}: {reason}");
                    report.failed_sources.push(source);
                }
            }
        }

        let parks = aggregate(source_results);

        if parks.is_empty() {
            if !self.sources.is_empty() && report.failed_sources.len() == self.sources.len() {
                warn!("Every source failed, nothing written");
            } else {
                info!("No data scraped from any source, nothing written");
            }
            return Ok(report);
        }

        report.output = Some(self.store.save_parks(&parks)?);
        report.parks_written = parks.len();

        Ok(report)
    }
}
