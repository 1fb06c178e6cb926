//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().unwrap_or_else(PoisonError::into_inner);
        replayer.next_interaction("fs", method).output.clone()
    }
}

/// Extracts a Result from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`.
fn extract_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = self.next_output("read_to_string");
        extract_result(&output, "fs::read_to_string")
    }

    fn exists(&self, path: &Path) -> bool {
        let output = self.next_output("exists");
        output.as_bool().unwrap_or_else(|| {
            tracing::warn!(
                path = %path.display(),
                %output,
                "non-boolean exists output in cassette"
            );
            false
        })
    }
}
