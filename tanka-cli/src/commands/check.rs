//! Check command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use tanka_core::is_eligible;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Sentences to test against the character filter
    #[arg(required = true, value_name = "SENTENCE")]
    pub sentences: Vec<String>,
}

impl CheckArgs {
    /// Prints `sentence<TAB>eligible` or `sentence<TAB>ineligible`
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_verdicts(&mut out)?;
        out.flush()?;
        Ok(())
    }

    fn write_verdicts(&self, out: &mut impl Write) -> Result<()> {
        for sentence in &self.sentences {
            let verdict = if is_eligible(sentence) {
                "eligible"
            } else {
                "ineligible"
            };
            writeln!(out, "{sentence}\t{verdict}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdicts() {
        let args = CheckArgs {
            sentences: vec!["春が来た".to_string(), "ABCの歌".to_string()],
        };
        let mut out = Vec::new();
        args.write_verdicts(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "春が来た\teligible\nABCの歌\tineligible\n"
        );
    }
}
