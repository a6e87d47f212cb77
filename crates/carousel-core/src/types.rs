//! Core data types for the carousel scraper
//!
//! Contains the extracted record and the per-item and per-run outcomes
//! produced by the extractor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One carousel entry extracted from the page
///
/// Field order matches the JSON output. `thumbnail` serializes as `null`
/// when absent rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Entry title (e.g., "The Starry Night")
    pub name: String,

    /// Metadata shown under the title, split on the delimiter (e.g., `["1889"]`)
    pub extensions: Vec<String>,

    /// Absolute URL built from the item's `href`
    pub link: String,

    /// Image URL, lazy-load source preferred over the placeholder `src`
    pub thumbnail: Option<String>,
}

/// Why an item element was left out of the output
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    #[error("missing name")]
    MissingName,

    #[error("missing link")]
    MissingLink,
}

/// Result of extracting a single item element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Extracted(Record),
    Skipped(SkipReason),
}

/// An item that did not produce a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedItem {
    /// Zero-based position among the container's items
    pub index: usize,
    pub reason: SkipReason,
}

/// Aggregated output of one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Records in document order
    pub records: Vec<Record>,

    /// Items that were dropped, in document order
    pub skipped: Vec<SkippedItem>,

    /// Whether the container element was present at all
    pub container_found: bool,
}

impl Extraction {
    /// Number of extracted records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records were extracted
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the extraction, keeping only the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub(crate) fn push(&mut self, index: usize, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Extracted(record) => self.records.push(record),
            ItemOutcome::Skipped(reason) => self.skipped.push(SkippedItem { index, reason }),
        }
    }
}
