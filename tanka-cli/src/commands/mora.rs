//! Mora command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use tanka_core::count_mora;

/// Arguments for the mora command
#[derive(Debug, Args)]
pub struct MoraArgs {
    /// Hiragana readings to count
    #[arg(required = true, value_name = "READING")]
    pub readings: Vec<String>,
}

impl MoraArgs {
    /// Prints `reading<TAB>count` for every reading. Invalid readings are
    /// reported on stderr and make the command fail once all are printed.
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let invalid = self.write_counts(&mut out)?;
        out.flush()?;

        if invalid > 0 {
            let message = format!("{invalid} invalid readings");
            return Err(CliError::ProcessingError(message).into());
        }
        Ok(())
    }

    fn write_counts(&self, out: &mut impl Write) -> Result<usize> {
        let mut invalid = 0;
        for reading in &self.readings {
            match count_mora(reading) {
                Ok(count) => writeln!(out, "{reading}\t{count}")?,
                Err(e) => {
                    eprintln!("{e}");
                    invalid += 1;
                }
            }
        }
        Ok(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_reading() {
        let args = MoraArgs {
            readings: vec!["きゃく".to_string(), "がっこう".to_string()],
        };
        let mut out = Vec::new();
        let invalid = args.write_counts(&mut out).unwrap();
        assert_eq!(invalid, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "きゃく\t2\nがっこう\t4\n");
    }

    #[test]
    fn test_invalid_readings_are_counted() {
        let args = MoraArgs {
            readings: vec!["カタカナ".to_string(), "かな".to_string()],
        };
        let mut out = Vec::new();
        let invalid = args.write_counts(&mut out).unwrap();
        assert_eq!(invalid, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "かな\t2\n");
    }
}
