//! Artifact loader: reads the specification and task list documents and
//! gives root-scoped access to test files.
//!
//! All I/O goes through `ctx.fs` so that loading works with live,
//! replaying, and recording adapters. Paths resolve against the
//! configured repository root:
//!
//! ```text
//! <root>/
//!   ├── spec/spec.json      (configurable)
//!   ├── tasks/tasks.json    (configurable)
//!   └── <test files referenced by acceptance criteria>
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config::ChainConfig;
use crate::context::ServiceContext;
use crate::error::LoadError;
use crate::spec::{Specification, TaskList};

/// The two parsed documents of one audit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artifacts {
    /// The specification document.
    pub spec: Specification,
    /// The task list document.
    pub tasks: TaskList,
}

/// Read-only access to the documents and test files under one root.
pub struct ArtifactLoader<'a> {
    ctx: &'a ServiceContext,
    config: &'a ChainConfig,
}

impl<'a> ArtifactLoader<'a> {
    /// Creates a loader for the given configuration.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, config: &'a ChainConfig) -> Self {
        Self { ctx, config }
    }

    /// Loads both documents.
    ///
    /// # Errors
    ///
    /// Returns the first `LoadError` encountered, specification first.
    pub fn load(&self) -> Result<Artifacts, LoadError> {
        Ok(Artifacts { spec: self.load_specification()?, tasks: self.load_task_list()? })
    }

    /// Loads the specification document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing, unreadable, or malformed.
    pub fn load_specification(&self) -> Result<Specification, LoadError> {
        self.load_document(&self.config.spec_path)
    }

    /// Loads the task list document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing, unreadable, or malformed.
    pub fn load_task_list(&self) -> Result<TaskList, LoadError> {
        self.load_document(&self.config.tasks_path)
    }

    /// Resolves a root-relative path.
    #[must_use]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.config.resolve(Path::new(relative))
    }

    /// Returns `true` if a root-relative file exists.
    #[must_use]
    pub fn file_exists(&self, relative: &str) -> bool {
        let path = self.resolve(relative);
        let exists = self.ctx.fs.exists(&path);
        tracing::debug!(path = %path.display(), exists, "checked test file");
        exists
    }

    /// Reads a root-relative file as text.
    ///
    /// # Errors
    ///
    /// Returns the underlying read error as a string.
    pub fn read_file(&self, relative: &str) -> Result<String, String> {
        let path = self.resolve(relative);
        self.ctx.fs.read_to_string(&path).map_err(|e| e.to_string())
    }

    fn load_document<T: DeserializeOwned>(&self, relative: &Path) -> Result<T, LoadError> {
        let path = self.config.resolve(relative);
        if !self.ctx.fs.exists(&path) {
            tracing::warn!(path = %path.display(), "document not found");
            return Err(LoadError::Missing { path });
        }
        let contents = self
            .ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| LoadError::Read { path: path.clone(), message: e.to_string() })?;
        let parsed: Result<T, String> = if is_yaml(&path) {
            serde_yaml::from_str(&contents).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&contents).map_err(|e| e.to_string())
        };
        let document =
            parsed.map_err(|message| LoadError::Parse { path: path.clone(), message })?;
        tracing::debug!(path = %path.display(), "loaded document");
        Ok(document)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemFs;

    const SPEC: &str = r#"{"useCases": [{"id": "UC-01"}],
        "acceptanceCriteria": [{"id": "AC-01", "useCase": "UC-01", "tests": ["tests/a.test"]}]}"#;
    const TASKS: &str = r#"{"tasks": [{"id": "T-01", "acceptanceCriteria": ["AC-01"]}]}"#;

    #[test]
    fn loads_both_documents_from_root() {
        let ctx = MemFs::new()
            .with_file("/repo/spec/spec.json", SPEC)
            .with_file("/repo/tasks/tasks.json", TASKS)
            .into_context();
        let config = ChainConfig::new("/repo");
        let artifacts = ArtifactLoader::new(&ctx, &config).load().unwrap();

        assert_eq!(artifacts.spec.use_cases[0].id.as_deref(), Some("UC-01"));
        assert_eq!(artifacts.tasks.tasks[0].id.as_deref(), Some("T-01"));
    }

    #[test]
    fn yaml_documents_are_selected_by_extension() {
        let ctx = MemFs::new()
            .with_file("/repo/architect/spec/SPEC.yaml", "useCases:\n  - id: UC-01\n")
            .with_file("/repo/architect/tasks/TASKS.yml", "tasks: []\n")
            .into_context();
        let config = ChainConfig::new("/repo")
            .with_spec_path("architect/spec/SPEC.yaml")
            .with_tasks_path("architect/tasks/TASKS.yml");
        let artifacts = ArtifactLoader::new(&ctx, &config).load().unwrap();

        assert_eq!(artifacts.spec.use_cases.len(), 1);
        assert!(artifacts.tasks.tasks.is_empty());
    }

    #[test]
    fn missing_document_is_fatal() {
        let ctx = MemFs::new().with_file("/repo/spec/spec.json", SPEC).into_context();
        let config = ChainConfig::new("/repo");
        let err = ArtifactLoader::new(&ctx, &config).load().unwrap_err();

        assert_eq!(err, LoadError::Missing { path: PathBuf::from("/repo/tasks/tasks.json") });
    }

    #[test]
    fn malformed_document_is_fatal() {
        let ctx = MemFs::new()
            .with_file("/repo/spec/spec.json", "{ not json")
            .with_file("/repo/tasks/tasks.json", TASKS)
            .into_context();
        let config = ChainConfig::new("/repo");
        let err = ArtifactLoader::new(&ctx, &config).load().unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
        assert_eq!(err.path(), Path::new("/repo/spec/spec.json"));
        assert!(err.to_string().starts_with("failed to parse /repo/spec/spec.json"));
    }

    #[test]
    fn test_files_resolve_against_root() {
        let ctx = MemFs::new().with_file("/repo/tests/a.test", "// AC-01").into_context();
        let config = ChainConfig::new("/repo");
        let loader = ArtifactLoader::new(&ctx, &config);

        assert!(loader.file_exists("tests/a.test"));
        assert!(!loader.file_exists("tests/b.test"));
        assert_eq!(loader.read_file("tests/a.test").unwrap(), "// AC-01");
        assert!(loader.read_file("tests/b.test").is_err());
    }
}
