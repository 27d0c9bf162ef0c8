use crate::config::{SourceConfig, SourceKind};
use crate::domain::Park;
use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

pub(crate) mod blue_sombrero;
pub(crate) mod ocee_park;

use blue_sombrero::BlueSombreroScraper;
use ocee_park::OceeParkScraper;

/// Turns one source's page into normalized parks.
///
/// Extraction is tolerant: missing elements degrade to empty values and a
/// page with no recognizable blocks yields no parks, never an error.
pub trait ParkScraper {
    fn extract_parks(&self, document: &Html, source: &SourceConfig) -> Vec<Park>;
}

pub fn scraper_for(kind: SourceKind) -> Result<Box<dyn ParkScraper>> {
    Ok(match kind {
        SourceKind::BlueSombrero => Box::new(BlueSombreroScraper::new()?),
        SourceKind::OceePark => Box::new(OceeParkScraper::new()?),
    })
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector(format!("{selector}: {e}")))
}

/// Trimmed text of every descendant matching `selector`, or `None` when
/// nothing matches.
pub(crate) fn text_of(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let mut matches = element.select(selector).peekable();
    matches.peek()?;

    Some(
        matches
            .flat_map(|el| el.text())
            .collect::<String>()
            .trim()
            .to_string(),
    )
}

/// Like [`text_of`], but reports the missing element and falls back to an
/// empty string.
pub(crate) fn expected_text(
    element: ElementRef<'_>,
    selector: &Selector,
    source: &SourceConfig,
    what: &str,
) -> String {
    text_of(element, selector).unwrap_or_else(|| {
        warn!(source = %source.name, "Markup is missing the {what}");
        String::new()
    })
}
