//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// Neither text nor input files were given, or patterns matched nothing
    NoInput,
    /// Refusing to overwrite an existing file
    OutputExists(PathBuf),
    /// Configuration error
    ConfigError(String),
    /// Some poems could not be analyzed
    AnalysisFailed {
        /// Poems that failed
        failed: usize,
        /// Poems attempted
        total: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoInput => write!(f, "No input: pass --text or files matching --input"),
            CliError::OutputExists(path) => write!(
                f,
                "File already exists: {} (use --force to overwrite)",
                path.display()
            ),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::AnalysisFailed { failed, total } => {
                write!(f, "Analysis failed for {failed} of {total} poems")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
