//! Carousel parser
//!
//! Finds the carousel container in a parsed page and turns each item card
//! into a [`Record`].

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::config::ExtractorConfig;
use crate::error::{CarouselError, Result};
use crate::types::{Extraction, ItemOutcome, Record, SkipReason};
use crate::url::{build_link, pick_thumbnail, split_extensions};

/// Compiled form of the selectors in an [`ExtractorConfig`]
#[derive(Debug, Clone)]
pub struct Selectors {
    container: Selector,
    item: Selector,
    name: Selector,
    extensions: Selector,
    thumbnail: Selector,
}

impl Selectors {
    /// Compiles every selector in `config`
    ///
    /// # Errors
    /// Returns `ParseError` naming the first selector that fails to parse
    pub fn compile(config: &ExtractorConfig) -> Result<Self> {
        Ok(Self {
            container: compile(&config.container_tag)?,
            item: compile(&config.item_selector)?,
            name: compile(&config.name_selector)?,
            extensions: compile(&config.extensions_selector)?,
            thumbnail: compile(&config.thumbnail_selector)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| CarouselError::invalid_selector(selector, e))
}

/// Extracts all records from a parsed page
///
/// # Arguments
/// * `document` - Parsed HTML page
/// * `config` - Selectors and constants to use
///
/// # Returns
/// An [`Extraction`] with the records in document order. A page without
/// the container yields an empty extraction, not an error.
///
/// # Errors
/// Returns `ParseError` if any configured selector is invalid
pub fn extract_records(document: &Html, config: &ExtractorConfig) -> Result<Extraction> {
    let selectors = Selectors::compile(config)?;
    Ok(extract_with(document, &selectors, config))
}

/// Extracts all records using already compiled selectors
pub(crate) fn extract_with(
    document: &Html,
    selectors: &Selectors,
    config: &ExtractorConfig,
) -> Extraction {
    let mut extraction = Extraction::default();

    let Some(carousel) = document.select(&selectors.container).next() else {
        info!("No carousel found in the HTML.");
        return extraction;
    };
    extraction.container_found = true;

    for (index, item) in carousel.select(&selectors.item).enumerate() {
        let outcome = extract_item(&item, selectors, config);
        if let ItemOutcome::Skipped(reason) = &outcome {
            warn!(index, %reason, "Skipping carousel item");
        }
        extraction.push(index, outcome);
    }

    debug!(
        extracted = extraction.records.len(),
        skipped = extraction.skipped.len(),
        "carousel extraction finished"
    );

    extraction
}

/// Extracts a single item card
///
/// # Arguments
/// * `item` - Reference to an item element (an `<a>` card by default)
///
/// # Returns
/// `Extracted` when both name and link are present, `Skipped` otherwise.
/// Missing metadata or thumbnail never causes a skip.
pub fn extract_item(
    item: &ElementRef,
    selectors: &Selectors,
    config: &ExtractorConfig,
) -> ItemOutcome {
    let Some(name) = first_text(item, &selectors.name) else {
        return ItemOutcome::Skipped(SkipReason::MissingName);
    };

    let Some(link) = item
        .value()
        .attr("href")
        .and_then(|href| build_link(&config.origin, href))
    else {
        return ItemOutcome::Skipped(SkipReason::MissingLink);
    };

    let extensions = first_text(item, &selectors.extensions)
        .map(|text| split_extensions(&text, &config.delimiter))
        .unwrap_or_default();

    let thumbnail = item.select(&selectors.thumbnail).next().and_then(|img| {
        let img = img.value();
        pick_thumbnail(img.attr(&config.lazy_attr), img.attr(&config.fallback_attr))
    });

    ItemOutcome::Extracted(Record {
        name,
        extensions,
        link,
        thumbnail,
    })
}

/// Trimmed text of the first match of `selector` under `element`
///
/// Returns `None` if nothing matches or the text is blank.
fn first_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    let text = element
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())?;

    if text.is_empty() { None } else { Some(text) }
}
