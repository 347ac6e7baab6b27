//! Offline stress annotation from a word list
//!
//! The dictionary is a TOML file with a `[words]` table that maps a
//! lowercase word to its stressed spelling:
//!
//! ```toml
//! [words]
//! "мама" = "ма́ма"
//! "вода" = "вода́"
//! ```
//!
//! Marks are copied onto the word as it appears in the text, so the
//! original capitalization survives. Words that are not in the dictionary,
//! or that already carry a mark, pass through unchanged.

use crate::error::{AnnotateError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use stopa_core::alphabet::{is_stress_mark, is_vowel, STRESS_MARK};
use stopa_core::StressAnnotator;

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    words: BTreeMap<String, String>,
}

/// Stress annotator backed by an in-memory word list
#[derive(Debug, Clone, Default)]
pub struct DictionaryAnnotator {
    /// Lookup key to the char positions of stressed vowels
    entries: HashMap<String, Vec<usize>>,
}

impl DictionaryAnnotator {
    /// Empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: DictionaryFile = toml::from_str(source)?;
        let mut dictionary = Self::new();
        for (word, stressed) in &file.words {
            dictionary.insert(word, stressed)?;
        }
        Ok(dictionary)
    }

    /// Load a dictionary file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| AnnotateError::DictionaryIo {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_toml_str(&source)?;
        log::info!(
            "loaded {} dictionary entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Add one entry
    ///
    /// `stressed` must spell `word` with one or more stress marks, each
    /// directly after a vowel.
    pub fn insert(&mut self, word: &str, stressed: &str) -> Result<()> {
        let invalid = |reason: &str| AnnotateError::DictionaryEntry {
            word: word.to_string(),
            reason: reason.to_string(),
        };

        let key = lookup_key(word.trim());
        if key.is_empty() {
            return Err(invalid("empty word"));
        }

        let mut positions = Vec::new();
        let mut plain = Vec::new();
        let mut previous = None;
        for ch in stressed.trim().chars() {
            if is_stress_mark(ch) {
                match previous {
                    Some(vowel) if is_vowel(vowel) => positions.push(plain.len() - 1),
                    _ => return Err(invalid("stress mark does not follow a vowel")),
                }
            } else {
                plain.push(ch);
            }
            previous = Some(ch);
        }

        if positions.is_empty() {
            return Err(invalid("no stress mark"));
        }
        let plain: String = plain.into_iter().collect();
        if lookup_key(&plain) != key {
            return Err(invalid("stressed spelling does not match the word"));
        }

        self.entries.insert(key, positions);
        Ok(())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stressed form of a single word, keeping its case
    pub fn stress_word(&self, word: &str) -> Option<String> {
        if word.chars().any(is_stress_mark) {
            return None;
        }
        let positions = self.entries.get(&lookup_key(word))?;

        let mut stressed = String::with_capacity(word.len() + positions.len() * 2);
        for (index, ch) in word.chars().enumerate() {
            stressed.push(ch);
            if positions.contains(&index) {
                stressed.push(STRESS_MARK);
            }
        }
        Some(stressed)
    }

    /// Annotate every known word of `text`
    pub fn annotate_text(&self, text: &str) -> String {
        let mut annotated = String::with_capacity(text.len());
        let mut word = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            let in_word = ch.is_alphabetic()
                || (!word.is_empty() && is_stress_mark(ch))
                || (!word.is_empty()
                    && is_apostrophe(ch)
                    && chars.peek().is_some_and(|next| next.is_alphabetic()));

            if in_word {
                word.push(ch);
                continue;
            }
            self.flush_word(&mut word, &mut annotated);
            annotated.push(ch);
        }
        self.flush_word(&mut word, &mut annotated);

        annotated
    }

    fn flush_word(&self, word: &mut String, out: &mut String) {
        if word.is_empty() {
            return;
        }
        match self.stress_word(word) {
            Some(stressed) => out.push_str(&stressed),
            None => out.push_str(word),
        }
        word.clear();
    }
}

impl StressAnnotator for DictionaryAnnotator {
    fn annotate(&self, text: &str) -> Option<String> {
        Some(self.annotate_text(text))
    }

    fn name(&self) -> &str {
        "dictionary"
    }
}

fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}' | '\u{02bc}')
}

/// Lowercase with every apostrophe variant folded to `'`
fn lookup_key(word: &str) -> String {
    word.chars()
        .map(|ch| if is_apostrophe(ch) { '\'' } else { ch })
        .flat_map(char::to_lowercase)
        .collect()
}
