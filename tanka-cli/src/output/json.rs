//! JSON output formatter

use super::PoemFormatter;
use anyhow::Result;
use std::io::Write;
use tanka_core::OwnedPoem;

/// JSON formatter - collects poems and writes them as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    poems: Vec<OwnedPoem>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            poems: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> PoemFormatter for JsonFormatter<W> {
    fn format_poem(&mut self, poem: &OwnedPoem) -> Result<()> {
        self.poems.push(poem.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.poems)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
