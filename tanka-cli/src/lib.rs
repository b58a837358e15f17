//! Tanka CLI library
//!
//! This library provides the command-line interface for finding 5-7-5-7-7
//! tanka in Japanese text.

pub mod analyzer_source;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
