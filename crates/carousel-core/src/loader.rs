//! HTML loading
//!
//! Reads a saved page from disk and parses it into a `scraper::Html` tree.

use std::fs;
use std::path::Path;

use scraper::Html;
use tracing::debug;

use crate::error::{CarouselError, Result};

/// Parses an HTML string into a document tree
///
/// Parsing is lenient: malformed markup is repaired, never rejected.
pub fn parse_html(html: &str) -> Html {
    Html::parse_document(html)
}

/// Loads an HTML file and parses it into a document tree
///
/// # Arguments
/// * `path` - Path to a UTF-8 encoded HTML file
///
/// # Errors
/// - `FileNotFound` if the path does not exist
/// - `ParseError` for any other read failure (permissions, invalid UTF-8, directory)
pub fn load_html(path: impl AsRef<Path>) -> Result<Html> {
    let path = path.as_ref();
    let html = fs::read_to_string(path).map_err(|e| CarouselError::from_read(path, e))?;

    debug!(path = %path.display(), bytes = html.len(), "loaded HTML");

    Ok(parse_html(&html))
}
