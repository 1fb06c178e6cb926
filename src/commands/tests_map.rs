//! `specflow tests-map` command.

use crate::config::ChainConfig;
use crate::context::ServiceContext;
use crate::coverage;
use crate::loader::ArtifactLoader;
use crate::report::Outcome;

/// Execute the `tests-map` command against the given context.
///
/// Only the specification document is read; the task list is not needed.
///
/// # Errors
///
/// Returns an error string if the specification cannot be loaded.
pub fn run_with_context(ctx: &ServiceContext, config: &ChainConfig) -> Result<Outcome, String> {
    let loader = ArtifactLoader::new(ctx, config);
    let spec = loader.load_specification().map_err(|e| format!("tests-map failed: {e}"))?;
    println!("{}", coverage::format_map(&coverage::build(&loader, &spec)));
    Ok(Outcome::Clean)
}
