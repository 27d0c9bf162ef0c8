use super::{expected_text, parse_selector, text_of, ParkScraper};
use crate::config::SourceConfig;
use crate::domain::{classify, Field, Park};
use crate::error::Result;
use scraper::{ElementRef, Html, Selector};
use tracing::info;

// Park blocks are the direct `fs-item` children of the `fs-right` column; each
// carries its status as an `fs-open`/`fs-close` class.
const PARK_BLOCKS: &str = "div.fs-right > div.fs-item";
const PARK_NAME: &str = "h3.fs-name";
const PARK_ADDRESS: &str = "p.fs-address";

// Field blocks sit under `fs-detail` and are tagged `fs-dt-open`/`fs-dt-close`.
const FIELD_BLOCKS: &str = r#"div.fs-detail > div[class*="fs-dt-"]"#;
const FIELD_NAME: &str = "h4.fs-dt-head";
const FIELD_TIME: &str = "p.fs-dt-time";
const FIELD_MESSAGE: &str = "p.fs-dt-message";

/// Reads the "view all field status" page of a Blue Sombrero league site.
pub struct BlueSombreroScraper {
    park_blocks: Selector,
    park_name: Selector,
    park_address: Selector,
    field_blocks: Selector,
    field_name: Selector,
    field_time: Selector,
    field_message: Selector,
}

impl BlueSombreroScraper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            park_blocks: parse_selector(PARK_BLOCKS)?,
            park_name: parse_selector(PARK_NAME)?,
            park_address: parse_selector(PARK_ADDRESS)?,
            field_blocks: parse_selector(FIELD_BLOCKS)?,
            field_name: parse_selector(FIELD_NAME)?,
            field_time: parse_selector(FIELD_TIME)?,
            field_message: parse_selector(FIELD_MESSAGE)?,
        })
    }

    fn extract_park(&self, block: ElementRef<'_>, source: &SourceConfig) -> Park {
        let mut park = Park::new(
            expected_text(block, &self.park_name, source, "park name"),
            expected_text(block, &self.park_address, source, "park address"),
            source.name.clone(),
            classify(block.value().attr("class").unwrap_or_default()),
        );

        park.fields = block
            .select(&self.field_blocks)
            .map(|field| self.extract_field(field, source))
            .collect();

        park
    }

    fn extract_field(&self, block: ElementRef<'_>, source: &SourceConfig) -> Field {
        let field = Field::new(
            expected_text(block, &self.field_name, source, "field name"),
            classify(block.value().attr("class").unwrap_or_default()),
            expected_text(block, &self.field_time, source, "field update time"),
        );

        match text_of(block, &self.field_message) {
            Some(message) => field.with_message(message),
            None => field,
        }
    }
}

impl ParkScraper for BlueSombreroScraper {
    fn extract_parks(&self, document: &Html, source: &SourceConfig) -> Vec<Park> {
        let parks: Vec<Park> = document
            .select(&self.park_blocks)
            .map(|block| self.extract_park(block, source))
            .collect();

        info!("Found {} park(s) from {}", parks.len(), source.name);
        parks
    }
}
