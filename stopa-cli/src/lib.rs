//! stopa CLI library
//!
//! This library provides the command-line interface for the stopa
//! metrical foot detector: commands, configuration, input resolution,
//! output formatting and progress reporting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
