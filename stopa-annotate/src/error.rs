//! Annotation provider errors
//!
//! These never cross the [`StressAnnotator`](stopa_core::StressAnnotator)
//! boundary: a provider that fails reports absence and the caller falls back
//! to the raw text. They surface when building providers and inside retry
//! loops.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by annotation providers
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// Request could not be sent or the response could not be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("service answered {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// Response page did not contain the result element
    #[error("result element #{id} not found in response")]
    MissingResult {
        /// Element id that was looked for
        id: String,
    },

    /// Response page had an empty result element
    #[error("result element #{id} is empty")]
    EmptyResult {
        /// Element id that was looked for
        id: String,
    },

    /// Dictionary file could not be read
    #[error("failed to read dictionary {}: {source}", path.display())]
    DictionaryIo {
        /// Dictionary path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Dictionary is not valid TOML
    #[error("invalid dictionary format: {0}")]
    DictionaryFormat(#[from] toml::de::Error),

    /// Dictionary entry is inconsistent
    #[error("invalid dictionary entry {word:?}: {reason}")]
    DictionaryEntry {
        /// Headword
        word: String,
        /// What is wrong with it
        reason: String,
    },

    /// Provider configuration is invalid
    #[error("invalid annotation configuration: {0}")]
    Config(String),
}

/// Result type for annotation operations
pub type Result<T> = std::result::Result<T, AnnotateError>;
