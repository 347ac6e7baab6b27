//! Stress pattern of a single line

use crate::stress::StressMark;
use core::fmt;
use core::ops::Deref;
use core::str::FromStr;
use smallvec::SmallVec;

/// Inline capacity covers the syllable count of typical verse lines
type Marks = SmallVec<[StressMark; 16]>;

/// Ordered stress marks of a line, one per vowel in reading order
///
/// A pattern is never empty: a line without vowels has no pattern at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    marks: Marks,
}

impl Pattern {
    /// Build a pattern, returning `None` for an empty sequence
    pub fn new<I: IntoIterator<Item = StressMark>>(marks: I) -> Option<Self> {
        let marks: Marks = marks.into_iter().collect();
        if marks.is_empty() {
            None
        } else {
            Some(Self { marks })
        }
    }

    /// Stress marks in reading order
    pub fn marks(&self) -> &[StressMark] {
        &self.marks
    }

    /// Every `step`-th mark starting at `start`
    pub fn slots(&self, start: usize, step: usize) -> impl Iterator<Item = StressMark> + '_ {
        self.marks.iter().skip(start).step_by(step).copied()
    }
}

impl Deref for Pattern {
    type Target = [StressMark];

    fn deref(&self) -> &Self::Target {
        &self.marks
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}

/// Error returned when a digit string is not a valid pattern
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePatternError {
    /// No digits at all
    #[error("pattern is empty")]
    Empty,
    /// Character outside `0..=5`
    #[error("invalid stress digit {ch:?} at position {position}")]
    InvalidDigit {
        /// Offending character
        ch: char,
        /// Character index in the input
        position: usize,
    },
}

impl FromStr for Pattern {
    type Err = ParsePatternError;

    /// Parse the report form, e.g. `"1414"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                StressMark::from_digit(ch).ok_or(ParsePatternError::InvalidDigit { ch, position })
            })
            .collect::<Result<Marks, _>>()?;

        Pattern::new(marks).ok_or(ParsePatternError::Empty)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let digits = String::deserialize(deserializer)?;
        digits.parse().map_err(serde::de::Error::custom)
    }
}
