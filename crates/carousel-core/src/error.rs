//! Error types for the carousel scraper
//!
//! Every fatal condition of the load → extract → write pipeline maps to one
//! variant here. Per-item problems are not errors; see [`crate::SkipReason`].

use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Boxed cause carried by [`CarouselError::ParseError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for all carousel scraper operations
#[derive(Error, Debug)]
pub enum CarouselError {
    /// Input path does not resolve to a file
    #[error("File not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input could not be read or the document could not be processed as a whole
    #[error("Failed to parse HTML: {context}")]
    ParseError {
        context: String,
        #[source]
        source: BoxError,
    },

    /// Output file could not be written
    #[error("Failed to write output file: {}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Records could not be serialized to JSON
    #[error("Failed to serialize records: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl CarouselError {
    /// Maps a failed read of `path` to `FileNotFound` or `ParseError`
    pub(crate) fn from_read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            Self::ParseError {
                context: format!("could not read {}", path.display()),
                source: Box::new(source),
            }
        }
    }

    /// Wraps a selector that failed to compile
    ///
    /// The selector error borrows from its input, so only its debug
    /// rendering survives as the cause.
    pub(crate) fn invalid_selector(selector: &str, err: impl Debug) -> Self {
        Self::ParseError {
            context: format!("invalid selector `{}`", selector),
            source: format!("{:?}", err).into(),
        }
    }
}

/// Result type alias for carousel scraper operations
pub type Result<T> = std::result::Result<T, CarouselError>;
