//! Core library entry for the `specflow` CLI.
//!
//! Audits bidirectional traceability across use cases, acceptance
//! criteria, tests, and implementation tasks. The pipeline is
//! loader → resolver → validator → reporter; each run is a fresh,
//! read-only audit of one repository root.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod coverage;
pub mod error;
pub mod ids;
pub mod loader;
pub mod ports;
pub mod report;
pub mod resolve;
pub mod spec;
pub mod validate;

#[cfg(test)]
mod testing;

use clap::error::ErrorKind;
use clap::Parser;

use crate::report::Outcome;

/// Run the CLI with the provided arguments.
///
/// Help and version requests print and return `Outcome::Clean`.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or a document
/// cannot be loaded.
pub fn run<I, T>(args: I) -> Result<Outcome, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(Outcome::Clean);
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
