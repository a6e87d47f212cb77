//! HTML parsers for saved result pages
//!
//! Contains modules for parsing different page structures.

pub mod carousel;

pub use carousel::{Selectors, extract_item, extract_records};
