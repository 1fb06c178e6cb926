//! Cassette format for recording and replaying filesystem interactions.
//!
//! A cassette captures every read and existence check an audit performs,
//! so a run can be replayed later against the exact same observations.

pub mod format;
pub mod recorder;
pub mod replayer;
