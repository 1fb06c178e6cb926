//! Task list types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::lenient::{self, field};

/// An implementation task, the bottom of the traceability chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
    /// Identifier, conventionally `T-NN`; `None` when absent.
    pub id: Option<String>,
    /// Short title.
    pub title: String,
    /// Ids of the acceptance criteria this task implements. Non-string
    /// entries keep their JSON text.
    pub acceptance_criteria: Vec<String>,
    /// Files the task is expected to touch.
    pub files: Vec<String>,
}

impl Task {
    /// Builds a task from any value; a non-mapping has every field absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let record = value.as_object();
        Self {
            id: lenient::optional_text(field(record, "id")),
            title: lenient::optional_text(field(record, "title")).unwrap_or_default(),
            acceptance_criteria: lenient::text_list(field(record, "acceptanceCriteria")),
            files: lenient::text_list(field(record, "files")),
        }
    }

    /// The id for messages; `(none)` when absent.
    #[must_use]
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("(none)")
    }
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::from_value(deserializer, Self::from_value)
    }
}

/// The task list document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskList {
    /// Declared tasks, in document order.
    #[serde(default, deserialize_with = "lenient::list")]
    pub tasks: Vec<Task>,
}
