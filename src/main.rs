//! Binary entrypoint for the `specflow` CLI.

use std::process::ExitCode;

use specflow::report::Outcome;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match specflow::run(std::env::args()) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("{err}");
            Outcome::Fatal.into()
        }
    }
}
