//! Poem construction
//!
//! A poem is read from text or a file, annotated once, split into lines and
//! aggregated. Construction either yields a complete [`Poem`] or an error;
//! there is no partially analyzed state.

use crate::aggregate::{MeterTally, MeterVerdict};
use crate::annotation::{annotate_or_raw, StressAnnotator};
use crate::error::{PoemError, Result};
use crate::line::Line;
use crate::meter::MeterType;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where the poem text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoemSource {
    /// Text given directly
    Text(String),
    /// UTF-8 text file
    File(PathBuf),
}

impl PoemSource {
    /// Load the raw text
    pub fn read_text(self) -> Result<String> {
        match self {
            PoemSource::Text(text) => Ok(text),
            PoemSource::File(path) => read_poem_file(&path),
        }
    }
}

fn read_poem_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PoemError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => PoemError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Builder for [`Poem`]
///
/// When both text and a file are given, the text wins.
#[derive(Debug, Clone, Default)]
pub struct PoemBuilder {
    text: Option<String>,
    file: Option<PathBuf>,
}

impl PoemBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the poem text
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the file to read the poem from
    pub fn file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Resolve the configured source
    pub fn source(self) -> Result<PoemSource> {
        match (self.text, self.file) {
            (Some(text), _) => Ok(PoemSource::Text(text)),
            (None, Some(path)) => Ok(PoemSource::File(path)),
            (None, None) => Err(PoemError::Configuration),
        }
    }

    /// Read, annotate and analyze the poem
    pub fn build<A: StressAnnotator + ?Sized>(self, annotator: &A) -> Result<Poem> {
        let text = self.source()?.read_text()?;
        Poem::analyze(text, annotator)
    }
}

/// An analyzed poem
#[derive(Debug, Clone)]
pub struct Poem {
    text: String,
    annotated_text: String,
    fell_back: bool,
    lines: Vec<Line>,
    tally: MeterTally,
    verdict: MeterVerdict,
}

impl Poem {
    /// Start building a poem
    pub fn builder() -> PoemBuilder {
        PoemBuilder::new()
    }

    /// Analyze text given directly
    pub fn from_text<A: StressAnnotator + ?Sized>(text: &str, annotator: &A) -> Result<Self> {
        Self::analyze(text.to_string(), annotator)
    }

    /// Analyze the contents of a file
    pub fn from_file<A: StressAnnotator + ?Sized>(
        path: impl AsRef<Path>,
        annotator: &A,
    ) -> Result<Self> {
        let text = read_poem_file(path.as_ref())?;
        Self::analyze(text, annotator)
    }

    /// Annotate raw text and classify every line
    ///
    /// Fails with [`PoemError::EmptyResult`] when no line has a pattern.
    pub fn analyze<A: StressAnnotator + ?Sized>(text: String, annotator: &A) -> Result<Self> {
        let annotated = annotate_or_raw(annotator, &text);

        let lines: Vec<Line> = annotated
            .text
            .lines()
            .map(Line::new)
            .filter(Line::is_classified)
            .collect();

        let tally: MeterTally = lines.iter().filter_map(Line::meter).collect();
        let verdict = tally.verdict()?;

        log::debug!(
            "classified {} lines, {} as {}{}",
            verdict.classified,
            verdict.matching,
            verdict.meter,
            if annotated.fell_back {
                " (raw text fallback)"
            } else {
                ""
            }
        );

        Ok(Self {
            text,
            annotated_text: annotated.text,
            fell_back: annotated.fell_back,
            lines,
            tally,
            verdict,
        })
    }

    /// Raw text as loaded
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text that was actually classified
    ///
    /// Equal to [`text`](Self::text) when annotation was unavailable.
    pub fn annotated_text(&self) -> &str {
        &self.annotated_text
    }

    /// Whether annotation was unavailable and the raw text was used
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    /// Lines that have a stress pattern, in order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Per-meter line counts
    pub fn tally(&self) -> &MeterTally {
        &self.tally
    }

    /// Aggregate result
    pub fn verdict(&self) -> MeterVerdict {
        self.verdict
    }

    /// Dominant meter
    pub fn meter(&self) -> MeterType {
        self.verdict.meter
    }

    /// Share of classified lines in the dominant meter
    pub fn probability(&self) -> f64 {
        self.verdict.probability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::NoAnnotation;

    #[test]
    fn test_builder_requires_a_source() {
        let result = Poem::builder().build(&NoAnnotation);
        assert!(matches!(result, Err(PoemError::Configuration)));
    }

    #[test]
    fn test_text_wins_over_file() {
        let source = PoemBuilder::new()
            .file("missing.txt")
            .text("ма́ма")
            .source()
            .unwrap();
        assert_eq!(source, PoemSource::Text("ма́ма".to_string()));
    }

    #[test]
    fn test_missing_file() {
        let result = Poem::builder()
            .file("/nonexistent/вірш.txt")
            .build(&NoAnnotation);
        match result {
            Err(PoemError::MissingFile { path }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/вірш.txt"));
            }
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let poem = Poem::from_text("ма́ма ма́ма\n\n---\nма́ма ма́ма\n", &NoAnnotation).unwrap();
        assert_eq!(poem.lines().len(), 2);
        assert_eq!(poem.verdict().classified, 2);
        assert_eq!(poem.meter(), MeterType::Choree);
        assert_eq!(poem.probability(), 1.0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let poem = Poem::from_text("вода́ вода́\r\nвода́ вода́\r\n", &NoAnnotation).unwrap();
        assert_eq!(poem.lines().len(), 2);
        assert_eq!(poem.meter(), MeterType::Iamb);
    }

    #[test]
    fn test_empty_poem_fails() {
        let result = Poem::from_text("\n \n!!!\n", &NoAnnotation);
        assert!(matches!(result, Err(PoemError::EmptyResult)));
    }

    #[test]
    fn test_tally_is_exposed() {
        let poem = Poem::from_text("ма́ма ма́ма\nвода́ вода́\nма́ма ма́ма", &NoAnnotation).unwrap();
        assert_eq!(poem.tally().count(MeterType::Choree), 2);
        assert_eq!(poem.tally().count(MeterType::Iamb), 1);
    }
}
