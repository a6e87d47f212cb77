//! Carousel Scraper Core Library
//!
//! Extracts entries from a saved search-results carousel page and writes them
//! out as JSON.
//!
//! # Overview
//!
//! The crate is a three-stage pipeline:
//! - Loader: reads a local HTML file into a `scraper::Html` tree
//! - Extractor: finds the carousel container and maps each item card to a [`Record`]
//! - Writer: serializes the records as a pretty-printed JSON array
//!
//! Item cards missing a name or link are skipped individually and reported in
//! [`Extraction::skipped`]; they never abort the run.
//!
//! # Example
//!
//! ```no_run
//! use carousel_core::{CarouselScraper, Result};
//!
//! fn main() -> Result<()> {
//!     let scraper = CarouselScraper::new()?;
//!
//!     let extraction = scraper.run("files/van-gogh-paintings.html", "paintings.json")?;
//!
//!     for record in &extraction.records {
//!         println!("{} ({}): {}", record.name, record.extensions.join(", "), record.link);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod config;
mod error;
pub mod loader;
pub mod parser;
mod scraper;
mod types;
pub mod url;
pub mod writer;

// Re-export configuration
pub use config::ExtractorConfig;

// Re-export error types
pub use error::{BoxError, CarouselError, Result};

// Re-export pipeline stages
pub use loader::{load_html, parse_html};
pub use parser::{Selectors, extract_item, extract_records};
pub use writer::{save_as_json, to_json_string};

// Re-export main scraper API
pub use crate::scraper::CarouselScraper;

// Re-export data types
pub use types::{Extraction, ItemOutcome, Record, SkipReason, SkippedItem};

// Re-export field helpers for convenience
pub use url::{BASE_URL, build_link, pick_thumbnail, split_extensions};
