//! Main scraper API
//!
//! Chains the loader, the carousel parser and the JSON writer behind one
//! type.

use std::path::Path;

use scraper::Html;
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::loader::{load_html, parse_html};
use crate::parser::carousel::{Selectors, extract_with};
use crate::types::Extraction;
use crate::writer::save_as_json;

/// Carousel scraper with a validated configuration
///
/// Selectors are compiled once at construction, so extraction itself
/// cannot fail.
#[derive(Debug, Clone)]
pub struct CarouselScraper {
    config: ExtractorConfig,
    selectors: Selectors,
}

impl CarouselScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Never fails with the built-in selectors; the `Result` mirrors
    /// [`CarouselScraper::with_config`]
    pub fn new() -> Result<Self> {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create a new scraper with custom configuration
    ///
    /// # Errors
    /// Returns `ParseError` if any selector in `config` is invalid
    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        let selectors = Selectors::compile(&config)?;
        Ok(Self { config, selectors })
    }

    /// The configuration this scraper was built with
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract records from an already parsed page
    pub fn extract(&self, document: &Html) -> Extraction {
        extract_with(document, &self.selectors, &self.config)
    }

    /// Extract records from an HTML string
    ///
    /// # Example
    /// ```
    /// # fn example() -> carousel_core::Result<()> {
    /// use carousel_core::CarouselScraper;
    /// let scraper = CarouselScraper::new()?;
    /// let extraction = scraper.extract_str(
    ///     r#"<g-scrolling-carousel>
    ///          <a class="klitem" href="/search?q=irises"><div class="kltat">Irises</div></a>
    ///        </g-scrolling-carousel>"#,
    /// );
    /// assert_eq!(extraction.records[0].link, "https://www.google.com/search?q=irises");
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn extract_str(&self, html: &str) -> Extraction {
        self.extract(&parse_html(html))
    }

    /// Load an HTML file and extract its records
    ///
    /// # Errors
    /// - `FileNotFound` if `input` does not exist
    /// - `ParseError` if `input` cannot be read as UTF-8 text
    pub fn scrape_file(&self, input: impl AsRef<Path>) -> Result<Extraction> {
        let document = load_html(input)?;
        Ok(self.extract(&document))
    }

    /// Run the whole pipeline: load `input`, extract, write JSON to `output`
    ///
    /// Returns the extraction so callers can report skipped items.
    ///
    /// # Errors
    /// - `FileNotFound` / `ParseError` from loading
    /// - `WriteError` / `SerializeError` from writing
    pub fn run(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Extraction> {
        let input = input.as_ref();
        let extraction = self.scrape_file(input)?;

        debug!(
            input = %input.display(),
            records = extraction.len(),
            "writing extracted records"
        );

        save_as_json(&extraction.records, output)?;
        Ok(extraction)
    }
}
