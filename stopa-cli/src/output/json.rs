//! JSON output formatter

use super::{FormatOptions, OutputFormatter, PoemOutput};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs poem reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    poems: Vec<PoemOutput>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            poems: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_poem(&mut self, poem: &PoemOutput) -> Result<()> {
        self.poems.push(poem.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.options.pretty_json {
            serde_json::to_writer_pretty(&mut self.writer, &self.poems)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.poems)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
