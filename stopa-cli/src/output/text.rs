//! Plain text output formatter

use super::{FormatOptions, OutputFormatter, PoemOutput};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - `pattern: meter` per line, then the summary
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    poems: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            poems: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_poem(&mut self, poem: &PoemOutput) -> Result<()> {
        if self.poems > 0 {
            writeln!(self.writer)?;
        }
        self.poems += 1;

        if self.options.headers {
            writeln!(self.writer, "==> {} <==", poem.source)?;
        }
        for echoed in [&poem.text, &poem.annotated_text].into_iter().flatten() {
            writeln!(self.writer, "{}", echoed.trim_end())?;
            writeln!(self.writer)?;
        }

        for line in &poem.report.lines {
            writeln!(self.writer, "{}", line.render(self.options.labels))?;
        }
        writeln!(self.writer, "{}", poem.summary)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
