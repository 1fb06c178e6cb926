//! Port traits defining external boundaries.
//!
//! The auditor's only boundary is the local filesystem. Implementations
//! live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::FileSystem;
