//! Poem construction errors
//!
//! Line analysis and classification never fail; only building a poem does.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Poem`](crate::Poem)
#[derive(Error, Debug)]
pub enum PoemError {
    /// Neither text nor a file name was supplied
    #[error("either text or a file name must be specified")]
    Configuration,

    /// The file name does not point to an existing file
    #[error("the specified file doesn't exist: {}", path.display())]
    MissingFile {
        /// Path that was looked up
        path: PathBuf,
    },

    /// No line of the poem has a stress pattern
    #[error("the poem has no lines with a stress pattern")]
    EmptyResult,

    /// The file exists but could not be read as UTF-8 text
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for poem operations
pub type Result<T> = std::result::Result<T, PoemError>;
