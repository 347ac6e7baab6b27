//! Stress annotation providers for stopa
//!
//! Implementations of [`StressAnnotator`](stopa_core::StressAnnotator):
//!
//! - [`WebAnnotator`] posts the text to a stress-marking web page and scrapes
//!   the result, retrying a bounded number of times
//! - [`DictionaryAnnotator`] marks words from an offline TOML word list
//!
//! [`AnnotationConfig`] selects and builds one of them (or
//! [`NoAnnotation`](stopa_core::NoAnnotation)) from configuration.
//!
//! # Example
//!
//! ```rust
//! use stopa_annotate::DictionaryAnnotator;
//! use stopa_core::{MeterType, Poem};
//!
//! let dictionary = DictionaryAnnotator::from_toml_str(
//!     "[words]\n\"мама\" = \"ма́ма\"\n\"рама\" = \"ра́ма\"\n",
//! )
//! .unwrap();
//!
//! let poem = Poem::from_text("Мама рама мама\nрама мама", &dictionary).unwrap();
//! assert_eq!(poem.meter(), MeterType::Choree);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dictionary;
pub mod error;
pub mod html;
pub mod retry;
pub mod web;

// Re-export key types
pub use config::{AnnotationConfig, ProviderKind, WebConfig, DEFAULT_ENDPOINT};
pub use dictionary::DictionaryAnnotator;
pub use error::{AnnotateError, Result};
pub use retry::RetryPolicy;
pub use web::{HttpTransport, Transport, WebAnnotator};
