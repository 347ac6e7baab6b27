//! Metrical foot detection for Ukrainian verse
//!
//! Lines carrying stress marks (U+0301 after the stressed vowel) are reduced
//! to their vowels, every vowel gets a [`StressMark`], and the resulting
//! [`Pattern`] is matched against the iamb, choree, dactyl, amphibrach and
//! anapest templates. A [`Poem`] takes the most frequent line meter as its
//! verdict, together with the share of lines that agree.
//!
//! # Example
//!
//! ```rust
//! use stopa_core::{MeterType, NoAnnotation, Poem};
//!
//! // Text that already carries stress marks needs no annotator
//! let text = "Ма́ма ми́ла ра́му\nМа́ма ми́ла ра́му\nВода́ вода́";
//! let poem = Poem::from_text(text, &NoAnnotation).unwrap();
//!
//! assert_eq!(poem.meter(), MeterType::Choree);
//! assert_eq!(poem.lines()[0].pattern().unwrap().to_string(), "313131");
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod alphabet;
pub mod annotation;
pub mod classifier;
pub mod error;
pub mod line;
pub mod meter;
pub mod pattern;
pub mod poem;
pub mod report;
pub mod stress;

// Re-export key types
pub use aggregate::{aggregate, MeterTally, MeterVerdict};
pub use annotation::{annotate_or_raw, Annotated, NoAnnotation, StressAnnotator};
pub use classifier::{classify, MeterClassifier};
pub use error::{PoemError, Result};
pub use line::{analyze, reduce, Line};
pub use meter::{MeterType, ParseMeterError};
pub use pattern::{ParsePatternError, Pattern};
pub use poem::{Poem, PoemBuilder, PoemSource};
pub use report::{LabelStyle, LineReport, MeterCount, PoemReport};
pub use stress::StressMark;
