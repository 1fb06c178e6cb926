//! Fatal load errors.
//!
//! These are distinct from validation violations: a document that cannot
//! be located or parsed leaves nothing to audit, so the run aborts.

use std::path::PathBuf;

use thiserror::Error;

/// A specification or task-list document could not be loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The document does not exist.
    #[error("document not found: {}", .path.display())]
    Missing {
        /// Resolved document path.
        path: PathBuf,
    },

    /// The document exists but could not be read.
    #[error("failed to read {}: {message}", .path.display())]
    Read {
        /// Resolved document path.
        path: PathBuf,
        /// Underlying I/O error text.
        message: String,
    },

    /// The document is not well-formed JSON or YAML.
    #[error("failed to parse {}: {message}", .path.display())]
    Parse {
        /// Resolved document path.
        path: PathBuf,
        /// Parser error text.
        message: String,
    },
}

impl LoadError {
    /// The path of the document that failed to load.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Missing { path } | Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
