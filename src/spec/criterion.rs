//! Acceptance criterion and automated test reference types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::lenient::{self, field};
use super::manual::ManualEntry;

/// Reference to an automated test: `<filePath>#<optional-locator>`.
///
/// Identity is the file path portion; the locator is informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRef(pub String);

impl TestRef {
    /// The file path portion, before the first `#`.
    #[must_use]
    pub fn path(&self) -> &str {
        self.0.split_once('#').map_or(self.0.as_str(), |(path, _)| path)
    }

    /// The locator after the first `#`, if one is present and non-empty.
    #[must_use]
    pub fn locator(&self) -> Option<&str> {
        self.0.split_once('#').map(|(_, locator)| locator).filter(|l| !l.is_empty())
    }
}

impl std::fmt::Display for TestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An acceptance criterion refining one use case, with the tests that verify it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptanceCriterion {
    /// Identifier, conventionally `AC-NN`; `None` when absent.
    pub id: Option<String>,
    /// Id of the use case this criterion belongs to.
    pub use_case: Option<String>,
    /// Precondition.
    pub given: String,
    /// Trigger.
    pub when: String,
    /// Expected outcome.
    pub then: String,
    /// Automated test references. Non-string entries keep their JSON text.
    pub tests: Vec<TestRef>,
    /// Tests executed by hand and tracked in the document.
    pub manual_tests: Vec<ManualEntry>,
    /// Tests executed by a third party and tracked in the document.
    pub external_tests: Vec<ManualEntry>,
}

impl AcceptanceCriterion {
    /// Builds a criterion from any value; a non-mapping has every field absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let record = value.as_object();
        let text = |key: &str| lenient::optional_text(field(record, key)).unwrap_or_default();
        let entries = |key: &str| -> Vec<ManualEntry> {
            lenient::items(field(record, key)).iter().map(ManualEntry::from_value).collect()
        };
        Self {
            id: lenient::optional_text(field(record, "id")),
            use_case: lenient::optional_text(field(record, "useCase")),
            given: text("given"),
            when: text("when"),
            then: text("then"),
            tests: lenient::text_list(field(record, "tests")).into_iter().map(TestRef).collect(),
            manual_tests: entries("manualTests"),
            external_tests: entries("externalTests"),
        }
    }

    /// The id for messages; `(none)` when absent.
    #[must_use]
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("(none)")
    }

    /// Total number of verification entries across all three kinds.
    #[must_use]
    pub fn test_count(&self) -> usize {
        self.tests.len() + self.manual_tests.len() + self.external_tests.len()
    }
}

impl<'de> Deserialize<'de> for AcceptanceCriterion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::from_value(deserializer, Self::from_value)
    }
}
