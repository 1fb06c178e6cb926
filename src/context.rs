//! Service context bundling the port trait objects an audit needs.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::adapters::live::LiveFileSystem;
use crate::adapters::recording::RecordingFileSystem;
use crate::adapters::replaying::ReplayingFileSystem;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// replaying, recording).
pub struct ServiceContext {
    /// Filesystem for document and test-file reads.
    pub fs: Box<dyn FileSystem>,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self::with_fs(Box::new(LiveFileSystem))
    }

    /// Creates a context around an arbitrary filesystem implementation.
    #[must_use]
    pub fn with_fs(fs: Box<dyn FileSystem>) -> Self {
        Self { fs, recorder: None }
    }

    /// Creates a recording context that writes a cassette file on drop.
    ///
    /// Uses the live filesystem for actual work. This is the developer-only
    /// mechanism for capturing cassettes via the `SPECFLOW_RECORD` env var.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "specflow-audit")));
        Self {
            fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self::with_fs(Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette)))))
    }

    /// Writes the cassette and stops recording, if this context is recording.
    ///
    /// Returns the cassette path. Later calls (including the one on drop)
    /// are no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error string if the cassette cannot be written.
    pub fn finish_recording(&mut self) -> Result<Option<PathBuf>, String> {
        let Some(recorder) = self.recorder.take() else {
            return Ok(None);
        };
        let guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
        guard.save().map(Some).map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Err(e) = self.finish_recording() {
            tracing::warn!("{e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_context_writes_cassette_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = dir.path().join("a.test");
        std::fs::write(&fixture, "AC-01").unwrap();
        let cassette_path = dir.path().join("run.cassette.yaml");

        {
            let ctx = ServiceContext::recording(&cassette_path);
            assert!(ctx.fs.exists(&fixture));
            assert_eq!(ctx.fs.read_to_string(&fixture).unwrap(), "AC-01");
        }

        let cassette = Cassette::load(&cassette_path).unwrap();
        assert_eq!(cassette.name, "specflow-audit");
        assert_eq!(cassette.interactions.len(), 2);
    }

    #[test]
    fn replaying_context_serves_recorded_answers() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = dir.path().join("a.test");
        std::fs::write(&fixture, "AC-07").unwrap();
        let cassette_path = dir.path().join("run.cassette.yaml");

        {
            let ctx = ServiceContext::recording(&cassette_path);
            let _ = ctx.fs.exists(&fixture);
            let _ = ctx.fs.read_to_string(&fixture);
        }
        std::fs::remove_file(&fixture).unwrap();

        let ctx = ServiceContext::replaying(&cassette_path).unwrap();
        assert!(ctx.fs.exists(&fixture));
        assert_eq!(ctx.fs.read_to_string(&fixture).unwrap(), "AC-07");
    }

    #[test]
    fn finish_recording_returns_path_once() {
        let dir = tempfile::tempdir().unwrap();
        let cassette_path = dir.path().join("run.cassette.yaml");

        let mut ctx = ServiceContext::recording(&cassette_path);
        assert_eq!(ctx.finish_recording().unwrap(), Some(cassette_path.clone()));
        assert_eq!(ctx.finish_recording().unwrap(), None);
        assert!(cassette_path.exists());
    }

    #[test]
    fn live_context_does_not_record() {
        let mut ctx = ServiceContext::live();
        assert_eq!(ctx.finish_recording().unwrap(), None);
    }
}
