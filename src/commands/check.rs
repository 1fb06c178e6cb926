//! `specflow check` command.

use crate::config::ChainConfig;
use crate::context::ServiceContext;
use crate::report::{self, Outcome};
use crate::validate;

/// Execute the `check` command against the given context.
///
/// Prints the report and returns the outcome; violations are not errors.
///
/// # Errors
///
/// Returns an error string if either document cannot be loaded.
pub fn run_with_context(ctx: &ServiceContext, config: &ChainConfig) -> Result<Outcome, String> {
    let report = validate::audit(ctx, config).map_err(|e| format!("chain-check error: {e}"))?;
    Ok(report::emit(&report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemFs;

    #[test]
    fn clean_chain_is_clean_outcome() {
        let ctx = MemFs::new()
            .with_file(
                "/repo/spec/spec.json",
                r#"{"useCases": [{"id": "UC-01"}], "acceptanceCriteria": [
                    {"id": "AC-01", "useCase": "UC-01", "tests": ["tests/a.test"]}]}"#,
            )
            .with_file(
                "/repo/tasks/tasks.json",
                r#"{"tasks": [{"id": "T-01", "acceptanceCriteria": ["AC-01"]}]}"#,
            )
            .with_file("/repo/tests/a.test", "// AC-01")
            .into_context();

        let outcome = run_with_context(&ctx, &ChainConfig::new("/repo")).unwrap();
        assert_eq!(outcome, Outcome::Clean);
    }

    #[test]
    fn violations_are_an_outcome_not_an_error() {
        let ctx = MemFs::new()
            .with_file("/repo/spec/spec.json", "{}")
            .with_file("/repo/tasks/tasks.json", r#"{"tasks": [{"id": "T-01"}]}"#)
            .into_context();

        let outcome = run_with_context(&ctx, &ChainConfig::new("/repo")).unwrap();
        assert_eq!(outcome, Outcome::Violations(2));
    }

    #[test]
    fn missing_document_is_an_error() {
        let ctx = MemFs::new().into_context();
        let err = run_with_context(&ctx, &ChainConfig::new("/repo")).unwrap_err();
        assert!(err.starts_with("chain-check error: document not found"));
    }
}
