//! Use case type.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::lenient::{self, field};

/// A use case: the top of the traceability chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UseCase {
    /// Identifier, conventionally `UC-NN`; `None` when absent.
    pub id: Option<String>,
    /// Short title.
    pub title: String,
    /// Primary actor.
    pub actor: String,
    /// Main success scenario steps.
    pub main_flow: Vec<String>,
    /// Alternative or exceptional flows.
    pub alternative_flows: Vec<String>,
}

impl UseCase {
    /// Builds a use case from any value; a non-mapping has every field absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let record = value.as_object();
        Self {
            id: lenient::optional_text(field(record, "id")),
            title: lenient::optional_text(field(record, "title")).unwrap_or_default(),
            actor: lenient::optional_text(field(record, "actor")).unwrap_or_default(),
            main_flow: lenient::text_list(field(record, "mainFlow")),
            alternative_flows: lenient::text_list(field(record, "alternativeFlows")),
        }
    }

    /// The id for messages; `(none)` when absent.
    #[must_use]
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("(none)")
    }
}

impl<'de> Deserialize<'de> for UseCase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::from_value(deserializer, Self::from_value)
    }
}
