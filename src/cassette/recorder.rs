//! Records interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Records interactions and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), interactions: Vec::new(), next_seq: 0 }
    }

    /// Record an interaction. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let interaction = Interaction {
            seq: self.next_seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        };
        self.next_seq += 1;
        self.interactions.push(interaction);
    }

    /// Writes the interactions captured so far to the cassette path.
    ///
    /// Recording may continue afterwards; a later save overwrites the file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            interactions: self.interactions.clone(),
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_and_save_assigns_sequence_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("audit.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "audit");
        recorder.record("fs", "read_to_string", json!({"path": "/a"}), json!({"ok": "b"}));
        recorder.record("fs", "exists", json!({"path": "/c"}), json!(false));

        let result_path = recorder.save().expect("save should succeed");
        assert_eq!(result_path, path);

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.name, "audit");
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].seq, 0);
        assert_eq!(cassette.interactions[1].seq, 1);
        assert_eq!(cassette.interactions[1].method, "exists");
    }

    #[test]
    fn later_save_overwrites_with_new_interactions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "audit");
        recorder.record("fs", "exists", json!({"path": "/a"}), json!(true));
        recorder.save().unwrap();
        recorder.record("fs", "exists", json!({"path": "/b"}), json!(false));
        recorder.save().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[1].input, json!({"path": "/b"}));
    }
}
