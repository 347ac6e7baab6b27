//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use stopa_core::{LabelStyle, Poem, PoemReport};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the analysis of one poem
    fn format_poem(&mut self, poem: &PoemOutput) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pattern and meter per line, then the summary
    #[default]
    Text,
    /// JSON array with one report per poem
    Json,
    /// Markdown table per poem
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description
    pub const ALL: [(OutputFormat, &'static str); 3] = [
        (OutputFormat::Text, "pattern and meter per line, then the summary"),
        (OutputFormat::Json, "JSON array with one report per poem"),
        (OutputFormat::Markdown, "Markdown table per poem"),
    ];

    /// Name accepted by `--format`
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Settings shared by all formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Meter label language
    pub labels: LabelStyle,
    /// Print a header naming each poem's source
    pub headers: bool,
    /// Pretty print JSON
    pub pretty_json: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            labels: LabelStyle::English,
            headers: false,
            pretty_json: true,
        }
    }
}

/// Everything printed about one poem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoemOutput {
    /// File name, or `<text>` for inline input
    pub source: String,
    /// Original text when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Annotated text when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotated_text: Option<String>,
    /// Summary line in the chosen label language
    pub summary: String,
    /// Analysis
    #[serde(flatten)]
    pub report: PoemReport,
}

impl PoemOutput {
    /// Collect the output of an analyzed poem
    pub fn new(
        source: impl Into<String>,
        poem: &Poem,
        labels: LabelStyle,
        show_text: bool,
        show_annotated: bool,
    ) -> Self {
        let report = PoemReport::from_poem(poem);
        Self {
            source: source.into(),
            text: show_text.then(|| poem.text().to_string()),
            annotated_text: show_annotated.then(|| poem.annotated_text().to_string()),
            summary: report.summary(labels),
            report,
        }
    }
}

/// Build the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    options: FormatOptions,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options)),
    }
}

/// Writer that appends to a shared buffer, for formatter tests
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_output(labels: LabelStyle) -> PoemOutput {
    let poem = Poem::from_text(
        "Ли́сті ві́тер ві́є\nХма́ри ни́зько ли́нуть\nвода́ вода́",
        &stopa_core::NoAnnotation,
    )
    .unwrap();
    PoemOutput::new("осінь.txt", &poem, labels, true, false)
}
