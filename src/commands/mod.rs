//! Command dispatch and handlers.

pub mod check;
pub mod tests_map;

use std::env;
use std::path::PathBuf;

use crate::cli::Command;
use crate::config::RECORD_ENV;
use crate::context::ServiceContext;
use crate::report::Outcome;

/// Dispatch a parsed command to its handler.
///
/// When `SPECFLOW_RECORD` is set to a file path, every filesystem
/// interaction is recorded to a cassette at that path.
///
/// # Errors
///
/// Returns an error string if a document cannot be loaded or the
/// recording cannot be written.
pub fn dispatch(command: &Command) -> Result<Outcome, String> {
    let mut ctx = match env::var_os(RECORD_ENV) {
        Some(path) => ServiceContext::recording(&PathBuf::from(path)),
        None => ServiceContext::live(),
    };

    let result = dispatch_with_context(command, &ctx);

    // Finish recording after command completes (even on error)
    if let Some(path) = ctx.finish_recording()? {
        eprintln!("Recording saved to: {}", path.display());
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if a document cannot be loaded.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<Outcome, String> {
    match command {
        Command::Check(args) => check::run_with_context(ctx, &args.to_config()),
        Command::TestsMap(args) => tests_map::run_with_context(ctx, &args.to_config()),
    }
}
