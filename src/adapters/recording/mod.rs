//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;

pub use filesystem::RecordingFileSystem;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record an interaction with a simple (non-Result) return value.
///
/// Mirror of the replaying adapters' plain-value reads.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or(serde_json::Value::Null);
    let output_json = serde_json::to_value(output).unwrap_or(serde_json::Value::Null);

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
}

/// Record a `Result<T, E>` interaction using the ok/err JSON convention.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"ok": v}`
/// - `Err(e)` is serialized as `{"err": e.to_string()}`
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or(serde_json::Value::Null);

    let output_json = match result {
        Ok(v) => {
            let inner = serde_json::to_value(v).unwrap_or(serde_json::Value::Null);
            serde_json::json!({ "ok": inner })
        }
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
}
