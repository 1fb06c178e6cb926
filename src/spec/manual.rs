//! Manual and external test entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Recorded outcome of a test that is not executed by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    /// Not yet run.
    Pending,
    /// Run and passed.
    Pass,
    /// Run and failed.
    Fail,
}

impl TestStatus {
    /// The canonical lowercase spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}

impl FromStr for TestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "pass" => Ok(Self::Pass),
            "fail" => Ok(Self::Fail),
            other => Err(format!("unknown test status: {other}")),
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record field as written: string content, or the JSON text of any
/// other non-null value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    /// The field is a string.
    Text(String),
    /// The field is a number, boolean, sequence, or mapping.
    Other(String),
}

impl RawField {
    fn from_value(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s.clone())),
            other => Some(Self::Other(other.to_string())),
        }
    }

    /// The string content, if the field is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Other(_) => None,
        }
    }

    /// The field as written, whatever its type.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Text(s) | Self::Other(s) => s.as_str(),
        }
    }
}

/// A well-formed manual or external test record.
///
/// Fields are kept raw so the validator can report each problem
/// separately instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualTest {
    /// Display name; `None` when absent or null.
    pub name: Option<RawField>,
    /// Status; `None` when absent or null.
    pub status: Option<RawField>,
}

impl ManualTest {
    /// Returns `true` if the name is a string with non-whitespace content.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name.as_ref().and_then(RawField::as_text).is_some_and(|n| !n.trim().is_empty())
    }

    /// The parsed status, or `None` if it is absent, not a string, or
    /// outside the domain.
    #[must_use]
    pub fn parsed_status(&self) -> Option<TestStatus> {
        self.status.as_ref().and_then(RawField::as_text).and_then(|s| s.parse().ok())
    }

    /// Name used in messages: the name as written, or `?` when absent.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_ref().map_or("?", RawField::raw)
    }
}

/// One element of a `manualTests` or `externalTests` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManualEntry {
    /// The element is a record.
    Record(ManualTest),
    /// The element is not a record (string, number, null, sequence).
    Malformed,
}

impl ManualEntry {
    /// Classifies one sequence element.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::Malformed;
        };
        Self::Record(ManualTest {
            name: RawField::from_value(map.get("name")),
            status: RawField::from_value(map.get("status")),
        })
    }
}

impl<'de> Deserialize<'de> for ManualEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from_value(&Value::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> ManualEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn status_domain_is_exact() {
        assert_eq!("pass".parse::<TestStatus>(), Ok(TestStatus::Pass));
        assert!("done".parse::<TestStatus>().is_err());
        assert!("PASS".parse::<TestStatus>().is_err());
    }

    #[test]
    fn non_record_entries_are_malformed() {
        assert_eq!(entry(r#""Smoke test""#), ManualEntry::Malformed);
        assert_eq!(entry("null"), ManualEntry::Malformed);
        assert_eq!(entry(r#"["a", "pass"]"#), ManualEntry::Malformed);
    }

    #[test]
    fn non_string_name_is_missing_but_labelled_as_written() {
        let ManualEntry::Record(test) = entry(r#"{"name": 7, "status": "fail"}"#) else {
            panic!("expected record");
        };
        assert!(!test.has_name());
        assert_eq!(test.label(), "7");
        assert_eq!(test.parsed_status(), Some(TestStatus::Fail));
    }

    #[test]
    fn null_name_is_labelled_with_a_question_mark() {
        let ManualEntry::Record(test) = entry(r#"{"name": null, "status": 1}"#) else {
            panic!("expected record");
        };
        assert_eq!(test.label(), "?");
        assert_eq!(test.status, Some(RawField::Other("1".into())));
        assert_eq!(test.parsed_status(), None);
    }

    #[test]
    fn whitespace_name_is_missing() {
        let ManualEntry::Record(test) = entry(r#"{"name": "   ", "status": "pending"}"#) else {
            panic!("expected record");
        };
        assert!(!test.has_name());
    }
}
