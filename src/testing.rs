//! Shared fixtures for unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::context::ServiceContext;
use crate::ports::filesystem::FileSystem;

/// In-memory filesystem for auditing fixtures without touching disk.
#[derive(Default)]
pub(crate) struct MemFs {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemFs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files.lock().unwrap().insert(path.into(), contents.to_string());
        self
    }

    pub(crate) fn into_context(self) -> ServiceContext {
        ServiceContext::with_fs(Box::new(self))
    }
}

impl FileSystem for MemFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        // Check exact path or if any file is "under" this directory.
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path) && k != path)
    }
}
