//! Run configuration.

use std::path::{Path, PathBuf};

/// Environment variable consulted for the repository root when no flag is given.
pub const ROOT_ENV: &str = "SPECFLOW_ROOT";

/// Environment variable naming a cassette file to record filesystem calls into.
pub const RECORD_ENV: &str = "SPECFLOW_RECORD";

/// Default specification document location, relative to the root.
pub const DEFAULT_SPEC_PATH: &str = "spec/spec.json";

/// Default task list document location, relative to the root.
pub const DEFAULT_TASKS_PATH: &str = "tasks/tasks.json";

/// Everything an audit needs to know about where its inputs live.
///
/// The root is resolved once by the caller and never rediscovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Repository root; document and test paths resolve against it.
    pub root: PathBuf,
    /// Specification document path (relative to `root` unless absolute).
    pub spec_path: PathBuf,
    /// Task list document path (relative to `root` unless absolute).
    pub tasks_path: PathBuf,
    /// Also flag ids that do not follow the `UC-NN` / `AC-NN` / `T-NN` patterns.
    pub strict_ids: bool,
}

impl ChainConfig {
    /// Creates a configuration with default document paths under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            spec_path: PathBuf::from(DEFAULT_SPEC_PATH),
            tasks_path: PathBuf::from(DEFAULT_TASKS_PATH),
            strict_ids: false,
        }
    }

    /// Overrides the specification document path.
    #[must_use]
    pub fn with_spec_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.spec_path = path.into();
        self
    }

    /// Overrides the task list document path.
    #[must_use]
    pub fn with_tasks_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tasks_path = path.into();
        self
    }

    /// Enables or disables id-pattern checks.
    #[must_use]
    pub fn with_strict_ids(mut self, strict: bool) -> Self {
        self.strict_ids = strict;
        self
    }

    /// Resolves a root-relative path; absolute paths are returned unchanged.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

/// Picks the repository root: explicit flag, then `SPECFLOW_ROOT`, then `.`.
#[must_use]
pub fn root_from(flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| std::env::var_os(ROOT_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
