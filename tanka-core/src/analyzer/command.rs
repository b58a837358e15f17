//! Juman++ piped into KNP, run as external processes

use super::{knp, Analysis, Analyzer, AnalyzerError, MalformedOutput};
use log::{debug, trace};
use std::io::{self, Read, Write};
use std::process::{ChildStdin, Command, Stdio};
use std::thread;

/// Default Juman++ command line
pub const DEFAULT_JUMANPP: &[&str] = &["jumanpp"];

/// Default KNP command line
pub const DEFAULT_KNP: &[&str] = &["knp", "-tab"];

/// Runs `jumanpp | knp -tab` once per batch of sentences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnpCommand {
    jumanpp: Vec<String>,
    knp: Vec<String>,
}

impl KnpCommand {
    /// Creates the pipeline from two command lines (program followed by its
    /// arguments).
    pub fn new(jumanpp: Vec<String>, knp: Vec<String>) -> Result<Self, AnalyzerError> {
        if jumanpp.is_empty() {
            return Err(AnalyzerError::EmptyCommand("jumanpp"));
        }
        if knp.is_empty() {
            return Err(AnalyzerError::EmptyCommand("knp"));
        }
        Ok(Self { jumanpp, knp })
    }

    /// The pipeline with the default commands found on `PATH`
    pub fn system() -> Self {
        Self {
            jumanpp: owned(DEFAULT_JUMANPP),
            knp: owned(DEFAULT_KNP),
        }
    }

    /// Juman++ command line
    pub fn jumanpp(&self) -> &[String] {
        &self.jumanpp
    }

    /// KNP command line
    pub fn knp(&self) -> &[String] {
        &self.knp
    }

    /// Feeds `sentences`, one per line, through the pipeline and returns the
    /// raw KNP output.
    pub fn run(&self, sentences: &[&str]) -> Result<String, AnalyzerError> {
        let mut input = sentences.join("\n");
        input.push('\n');

        let juman_program = &self.jumanpp[0];
        let knp_program = &self.knp[0];

        let mut juman = Command::new(juman_program)
            .args(&self.jumanpp[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| AnalyzerError::Spawn {
                program: juman_program.clone(),
                source,
            })?;

        let juman_stdout = take_pipe(juman.stdout.take(), juman_program)?;
        let knp = Command::new(knp_program)
            .args(&self.knp[1..])
            .stdin(Stdio::from(juman_stdout))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();
        let knp = match knp {
            Ok(child) => child,
            Err(source) => {
                let _ = juman.kill();
                let _ = juman.wait();
                return Err(AnalyzerError::Spawn {
                    program: knp_program.clone(),
                    source,
                });
            }
        };

        debug!(
            "Analyzing {} sentences with {} | {}",
            sentences.len(),
            juman_program,
            knp_program
        );

        let stdin = take_pipe(juman.stdin.take(), juman_program)?;
        let mut juman_stderr = take_pipe(juman.stderr.take(), juman_program)?;

        let (written, juman_errors, output) = thread::scope(|scope| {
            let writer = scope.spawn(|| write_input(stdin, &input));
            let errors = scope.spawn(move || {
                let mut buffer = String::new();
                juman_stderr.read_to_string(&mut buffer).map(|_| buffer)
            });
            let output = knp.wait_with_output();
            (join(writer), join(errors), output)
        });

        let output = output.map_err(|source| AnalyzerError::Io {
            program: knp_program.clone(),
            source,
        })?;
        let juman_status = juman.wait().map_err(|source| AnalyzerError::Io {
            program: juman_program.clone(),
            source,
        })?;

        if !juman_status.success() {
            return Err(AnalyzerError::Exit {
                program: juman_program.clone(),
                status: juman_status.to_string(),
                stderr: juman_errors.unwrap_or_default().trim().to_string(),
            });
        }
        if !output.status.success() {
            return Err(AnalyzerError::Exit {
                program: knp_program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.map_err(|source| AnalyzerError::Io {
            program: juman_program.clone(),
            source,
        })?;

        trace!("{} wrote {} bytes", knp_program, output.stdout.len());
        String::from_utf8(output.stdout).map_err(|_| AnalyzerError::Encoding {
            program: knp_program.clone(),
        })
    }
}

impl Default for KnpCommand {
    fn default() -> Self {
        Self::system()
    }
}

fn owned(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

fn take_pipe<T>(pipe: Option<T>, program: &str) -> Result<T, AnalyzerError> {
    pipe.ok_or_else(|| AnalyzerError::Io {
        program: program.to_string(),
        source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe not captured"),
    })
}

// Takes ownership so the pipe closes on return and the analyzer sees EOF.
fn write_input(mut stdin: ChildStdin, input: &str) -> io::Result<()> {
    stdin.write_all(input.as_bytes())?;
    stdin.flush()
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, io::Result<T>>) -> io::Result<T> {
    handle
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("pipe thread panicked")))
}

impl Analyzer for KnpCommand {
    fn analyze(&self, text: &str) -> Result<Analysis, AnalyzerError> {
        let mut analyses = self.analyze_batch(&[text])?;
        analyses.pop().ok_or(AnalyzerError::SentenceCount {
            expected: 1,
            actual: 0,
        })
    }

    /// One process pair per call. Texts containing a line break cannot be
    /// sent line by line and come back as [`MalformedOutput::MultiLine`].
    fn analyze_batch(&self, texts: &[&str]) -> Result<Vec<Analysis>, AnalyzerError> {
        let mut results: Vec<Option<Analysis>> = texts
            .iter()
            .map(|text| {
                text.contains(['\n', '\r'])
                    .then_some(Err(MalformedOutput::MultiLine))
            })
            .collect();

        let pending: Vec<&str> = texts
            .iter()
            .zip(&results)
            .filter(|(_, result)| result.is_none())
            .map(|(text, _)| *text)
            .collect();

        if !pending.is_empty() {
            let output = self.run(&pending)?;
            let analyses = knp::parse_document(&output);
            if analyses.len() != pending.len() {
                return Err(AnalyzerError::SentenceCount {
                    expected: pending.len(),
                    actual: analyses.len(),
                });
            }
            let mut analyses = analyses.into_iter();
            for slot in results.iter_mut().filter(|slot| slot.is_none()) {
                *slot = analyses.next();
            }
        }

        Ok(results.into_iter().flatten().collect())
    }

    fn name(&self) -> &'static str {
        "knp"
    }
}
