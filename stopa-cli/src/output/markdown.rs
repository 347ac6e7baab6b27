//! Markdown output formatter

use super::{FormatOptions, OutputFormatter, PoemOutput};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - a table of lines per poem
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    poem_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            poem_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_poem(&mut self, poem: &PoemOutput) -> Result<()> {
        self.poem_count += 1;

        writeln!(self.writer, "## {}", poem.source)?;
        writeln!(self.writer)?;
        for echoed in [&poem.text, &poem.annotated_text].into_iter().flatten() {
            writeln!(self.writer, "```text")?;
            writeln!(self.writer, "{}", echoed.trim_end())?;
            writeln!(self.writer, "```")?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "| # | Line | Pattern | Meter |")?;
        writeln!(self.writer, "|---|------|---------|-------|")?;
        for (index, line) in poem.report.lines.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | `{}` | {} |",
                index + 1,
                escape_cell(line.text.trim()),
                line.pattern,
                self.options.labels.label(line.meter)
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}**", poem.summary)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total poems: {}*", self.poem_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
