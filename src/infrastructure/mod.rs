mod clients;
mod scrapers;
mod storage;

#[cfg(test)]
pub(crate) use clients::page::testing;
pub use clients::page::{HttpFetcher, PageFetcher};
pub use scrapers::{scraper_for, ParkScraper};
pub use storage::fs_store::FileSystemStore;
