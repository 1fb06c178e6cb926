//! Document types for the traceability chain.
//!
//! Defines the Rust types that mirror the specification and task-list
//! documents. Both JSON and YAML renditions deserialize into these types;
//! they are consumed read-only by the loader, resolver, and validator.

mod criterion;
mod lenient;
mod manual;
mod task;
mod use_case;

pub use criterion::{AcceptanceCriterion, TestRef};
pub use manual::{ManualEntry, ManualTest, RawField, TestStatus};
pub use task::{Task, TaskList};
pub use use_case::UseCase;

use serde::Deserialize;

/// The specification document: use cases and the acceptance criteria that
/// refine them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    /// Declared use cases, in document order.
    #[serde(default, deserialize_with = "lenient::list")]
    pub use_cases: Vec<UseCase>,
    /// Declared acceptance criteria, in document order.
    #[serde(default, deserialize_with = "lenient::list")]
    pub acceptance_criteria: Vec<AcceptanceCriterion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_json_document() {
        let doc = r#"{
            "meta": {"project": "demo"},
            "useCases": [
                {"id": "UC-01", "title": "Sign in", "actor": "User",
                 "mainFlow": ["open form", "submit"], "alternativeFlows": ["bad password"]}
            ],
            "acceptanceCriteria": [
                {"id": "AC-01", "useCase": "UC-01",
                 "given": "a user", "when": "they sign in", "then": "they see home",
                 "tests": ["tests/login.test.ts#signs in"],
                 "manualTests": [{"name": "Screen reader pass", "status": "pending"}],
                 "externalTests": []}
            ]
        }"#;

        let spec: Specification = serde_json::from_str(doc).unwrap();
        assert_eq!(spec.use_cases.len(), 1);
        assert_eq!(spec.use_cases[0].main_flow, vec!["open form", "submit"]);
        let ac = &spec.acceptance_criteria[0];
        assert_eq!(ac.use_case.as_deref(), Some("UC-01"));
        assert_eq!(ac.tests[0].path(), "tests/login.test.ts");
        assert_eq!(ac.tests[0].locator(), Some("signs in"));
        assert_eq!(ac.test_count(), 2);
    }

    #[test]
    fn parses_yaml_document() {
        let doc = "\
useCases:
  - id: UC-01
    title: Sign in
acceptanceCriteria:
  - id: AC-01
    useCase: UC-01
    externalTests:
      - name: Vendor audit
        status: pass
";

        let spec: Specification = serde_yaml::from_str(doc).unwrap();
        assert_eq!(spec.use_cases[0].id.as_deref(), Some("UC-01"));
        let ac = &spec.acceptance_criteria[0];
        assert!(ac.tests.is_empty());
        assert_eq!(ac.external_tests.len(), 1);
    }

    #[test]
    fn absent_or_non_sequence_collections_are_empty() {
        let spec: Specification = serde_json::from_str("{}").unwrap();
        assert!(spec.use_cases.is_empty());
        assert!(spec.acceptance_criteria.is_empty());

        let spec: Specification =
            serde_json::from_str(r#"{"useCases": null, "acceptanceCriteria": "nope"}"#).unwrap();
        assert!(spec.use_cases.is_empty());
        assert!(spec.acceptance_criteria.is_empty());
    }

    #[test]
    fn malformed_records_decode_instead_of_failing() {
        let doc = r#"{
            "useCases": ["UC-01", {"id": 1}],
            "acceptanceCriteria": [{"id": "AC-01", "tests": [42]}, null]
        }"#;

        let spec: Specification = serde_json::from_str(doc).unwrap();
        assert_eq!(spec.use_cases[0].id, None);
        assert_eq!(spec.use_cases[1].id.as_deref(), Some("1"));
        assert_eq!(spec.acceptance_criteria[0].tests[0].path(), "42");
        assert_eq!(spec.acceptance_criteria[1], AcceptanceCriterion::default());
    }
}
