use super::{parse_selector, text_of, ParkScraper};
use crate::config::SourceConfig;
use crate::domain::{Field, FieldStatus, Park, MISSING_UPDATE_TIME};
use crate::error::Result;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

pub const OCEE_PARK_NAME: &str = "Ocee Park";
pub const OCEE_PARK_ADDRESS: &str = "10900 Buice Rd, Johns Creek, GA 30022";

const FIELD_ITEMS: &str = "ul.rrItemsList li.rrItem";
const FIELD_NAME: &str = "span.rsConditionLocation";
const FIELD_STATUS: &str = "span.rsConditionStatus";
const FIELD_UPDATED: &str = "span.rsConditionUpdatedDate";

/// Reads the field conditions widget on the Ocee Park home page.
///
/// The site only lists fields, so every run produces at most one park with
/// its overall status derived from the fields.
pub struct OceeParkScraper {
    field_items: Selector,
    field_name: Selector,
    field_status: Selector,
    field_updated: Selector,
}

impl OceeParkScraper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            field_items: parse_selector(FIELD_ITEMS)?,
            field_name: parse_selector(FIELD_NAME)?,
            field_status: parse_selector(FIELD_STATUS)?,
            field_updated: parse_selector(FIELD_UPDATED)?,
        })
    }

    fn extract_field(&self, item: ElementRef<'_>) -> Option<Field> {
        let name = text_of(item, &self.field_name).unwrap_or_default();
        let status = text_of(item, &self.field_status).unwrap_or_default();

        if name.is_empty() || status.is_empty() {
            debug!("Skipping condition item without name or status: {name:?} {status:?}");
            return None;
        }

        let update_time = text_of(item, &self.field_updated)
            .filter(|time| !time.is_empty())
            .unwrap_or_else(|| MISSING_UPDATE_TIME.to_string());

        Some(Field::new(
            name,
            FieldStatus::from_condition_text(&status),
            update_time,
        ))
    }
}

impl ParkScraper for OceeParkScraper {
    fn extract_parks(&self, document: &Html, source: &SourceConfig) -> Vec<Park> {
        let fields: Vec<Field> = document
            .select(&self.field_items)
            .filter_map(|item| self.extract_field(item))
            .collect();

        info!("Found {} field(s) for {}", fields.len(), OCEE_PARK_NAME);

        if fields.is_empty() {
            return Vec::new();
        }

        vec![Park::from_fields(
            OCEE_PARK_NAME,
            OCEE_PARK_ADDRESS,
            source.name.clone(),
            fields,
        )]
    }
}
