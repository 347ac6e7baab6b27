//! Line reduction and stress pattern extraction
//!
//! A line is reduced to its vowels and stress marks, split into words, and
//! every vowel gets a [`StressMark`] depending on how many vowels its word
//! has and which of them carries the stress diacritic.

use crate::alphabet::{is_stress_mark, is_vowel, SEPARATOR};
use crate::classifier::classify;
use crate::meter::MeterType;
use crate::pattern::Pattern;
use crate::stress::StressMark;
use core::fmt;

/// Keep vowels and stress marks, turning each whitespace run into one separator
///
/// Everything else is dropped. The result has no leading or trailing separator.
pub fn reduce(raw: &str) -> String {
    let mut reduced = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars() {
        if is_vowel(ch) || is_stress_mark(ch) {
            if pending_separator && !reduced.is_empty() {
                reduced.push(SEPARATOR);
            }
            pending_separator = false;
            reduced.push(ch);
        } else if ch.is_whitespace() {
            pending_separator = true;
        }
    }

    reduced
}

/// Extract the stress pattern of a raw (annotated) line
///
/// Returns `None` when the line has nothing left after reduction.
pub fn analyze(raw: &str) -> Option<Pattern> {
    pattern_of_reduced(&reduce(raw))
}

fn pattern_of_reduced(reduced: &str) -> Option<Pattern> {
    if reduced.trim().is_empty() {
        return None;
    }

    let mut marks = Vec::new();
    for word in reduced.split(SEPARATOR) {
        classify_word(word, &mut marks);
    }
    Pattern::new(marks)
}

/// Append the marks of one reduced word
///
/// Only the first stress mark that directly follows a vowel counts; any
/// further marks in the same word are ignored.
fn classify_word(word: &str, marks: &mut Vec<StressMark>) {
    let mut vowels = 0usize;
    let mut stressed = None;
    let mut prev_is_vowel = false;

    for ch in word.chars() {
        if is_vowel(ch) {
            vowels += 1;
            prev_is_vowel = true;
        } else {
            if is_stress_mark(ch) && prev_is_vowel && stressed.is_none() {
                stressed = Some(vowels - 1);
            }
            prev_is_vowel = false;
        }
    }

    if vowels == 0 {
        // a bare diacritic whose vowel was not in the alphabet
        if !word.is_empty() {
            marks.push(StressMark::Unknown);
        }
        return;
    }

    marks.extend((0..vowels).map(|position| {
        match (vowels, stressed == Some(position)) {
            (1, _) => StressMark::OneSyllable,
            (_, false) => StressMark::Unstressed,
            (2, true) if position == 0 => StressMark::TwoSyllablesFirstStressed,
            (2, true) => StressMark::TwoSyllablesSecondStressed,
            (_, true) => StressMark::MoreThanTwoSyllables,
        }
    }));
}

/// One line of a poem with its analysis
///
/// Built once from raw text and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    raw: String,
    reduced: String,
    pattern: Option<Pattern>,
    meter: Option<MeterType>,
}

impl Line {
    /// Analyze and classify a raw line
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let reduced = reduce(&raw);
        let pattern = pattern_of_reduced(&reduced);
        let meter = pattern.as_ref().map(classify);

        Self {
            raw,
            reduced,
            pattern,
            meter,
        }
    }

    /// Text as it was given
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Vowel and stress mark skeleton
    pub fn reduced(&self) -> &str {
        &self.reduced
    }

    /// Stress pattern, absent for lines without vowels
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Metrical foot, absent exactly when the pattern is absent
    pub fn meter(&self) -> Option<MeterType> {
        self.meter
    }

    /// Whether the line takes part in aggregation
    pub fn is_classified(&self) -> bool {
        self.meter.is_some()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.pattern, self.meter) {
            (Some(pattern), Some(meter)) => write!(f, "{pattern}: {meter}"),
            _ => write!(f, "-"),
        }
    }
}
