//! Plain text output formatter

use super::PoemFormatter;
use anyhow::Result;
use std::io::Write;
use tanka_core::OwnedPoem;

/// Plain text formatter - outputs `poem<delimiter>sentence` per line
pub struct TextFormatter<W: Write> {
    writer: W,
    delimiter: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter separating fields with a tab
    pub fn new(writer: W) -> Self {
        Self::with_delimiter(writer, "\t")
    }

    /// Create a text formatter with a custom field separator
    pub fn with_delimiter(writer: W, delimiter: &str) -> Self {
        Self {
            writer,
            delimiter: delimiter.to_string(),
        }
    }
}

impl<W: Write + Send + Sync> PoemFormatter for TextFormatter<W> {
    fn format_poem(&mut self, poem: &OwnedPoem) -> Result<()> {
        writeln!(
            self.writer,
            "{}{}{}",
            poem.poem, self.delimiter, poem.sentence
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
