pub(crate) mod aggregation;
pub(crate) mod field_service;
pub(crate) mod scraping;

pub use field_service::FieldStatusService;
pub use scraping::ScrapingService;
