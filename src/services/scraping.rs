use crate::config::SourceConfig;
use crate::domain::Park;
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{scraper_for, PageFetcher, ParkScraper};
use scraper::Html;
use tracing::info;

/// What one source contributed to a run.
#[derive(Debug)]
pub enum SourceOutcome {
    Scraped { source: String, parks: Vec<Park> },
    Failed { source: String, reason: String },
}

pub struct ScrapingService<F> {
    fetcher: F,
}

impl<F: PageFetcher> ScrapingService<F> {
    pub fn new(fetcher: F) -> Self {
        info!("Created new Scraping service");
        Self { fetcher }
    }

    /// Scrapes every source in order, one at a time.
    ///
    /// A failing source is recorded and skipped unless `fail_fast` is set, in
    /// which case the first failure aborts the whole run.
    pub async fn scrape_all(
        &self,
        sources: &[SourceConfig],
        fail_fast: bool,
    ) -> Result<Vec<SourceOutcome>> {
        let mut outcomes = Vec::with_capacity(sources.len());

        for source in sources {
            match self.scrape_source(source).await {
                Ok(parks) => outcomes.push(SourceOutcome::Scraped {
                    source: source.name.clone(),
                    parks,
                }),
                Err(e) if fail_fast => {
                    return Err(ScrapeError::Source {
                        source_name: source.name.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    outcomes.push(SourceOutcome::Failed {
                        source: source.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(outcomes)
    }

    pub async fn scrape_source(&self, source: &SourceConfig) -> Result<Vec<Park>> {
        let html = self.fetcher.fetch(&source.url).await?;
        let document = Html::parse_document(&html);

        let scraper = scraper_for(source.kind)?;
        Ok(scraper.extract_parks(&document, source))
    }
}
