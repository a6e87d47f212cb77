//! Extractor configuration
//!
//! Defaults match the markup of a Google knowledge-panel carousel as saved
//! from a browser.

use serde::{Deserialize, Serialize};

use crate::url::BASE_URL;

/// Selectors and constants used to locate and read carousel items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Tag name of the element wrapping all items (default: "g-scrolling-carousel")
    pub container_tag: String,
    /// Selector for item elements inside the container (default: "a.klitem")
    pub item_selector: String,
    /// Selector for the name element inside an item (default: "div.kltat")
    pub name_selector: String,
    /// Selector for the metadata element inside an item (default: "div.klmeta")
    pub extensions_selector: String,
    /// Selector for the thumbnail image inside an item (default: ".klic img.rISBZc")
    pub thumbnail_selector: String,
    /// Image attribute holding the deferred source (default: "data-src")
    pub lazy_attr: String,
    /// Image attribute used when the lazy one is missing (default: "src")
    pub fallback_attr: String,
    /// Prefix prepended to every relative `href` (default: "https://www.google.com")
    pub origin: String,
    /// Separator between metadata values (default: ", ")
    pub delimiter: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            container_tag: "g-scrolling-carousel".to_string(),
            item_selector: "a.klitem".to_string(),
            name_selector: "div.kltat".to_string(),
            extensions_selector: "div.klmeta".to_string(),
            thumbnail_selector: ".klic img.rISBZc".to_string(),
            lazy_attr: "data-src".to_string(),
            fallback_attr: "src".to_string(),
            origin: BASE_URL.to_string(),
            delimiter: ", ".to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Returns the config with a different link origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}
