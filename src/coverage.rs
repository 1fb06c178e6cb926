//! Acceptance criterion → test map.
//!
//! A cheaper companion to the chain audit: lists each criterion's tests
//! with a presence marker for automated files and the recorded status of
//! manual and external tests. File contents are never inspected.

use crate::loader::ArtifactLoader;
use crate::spec::{AcceptanceCriterion, ManualEntry, RawField, Specification};

/// One automated reference and whether its file exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomatedEntry {
    /// The reference as written, locator included.
    pub reference: String,
    /// Whether the file portion exists under the root.
    pub present: bool,
}

/// One manual or external test as recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEntry {
    /// Name, or `?`.
    pub name: String,
    /// Raw status, or `?`.
    pub status: String,
}

/// Coverage of a single acceptance criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRow {
    /// The criterion id.
    pub criterion: String,
    /// Automated test references.
    pub automated: Vec<AutomatedEntry>,
    /// Manual tests.
    pub manual: Vec<TrackedEntry>,
    /// External tests.
    pub external: Vec<TrackedEntry>,
}

/// Builds one row per acceptance criterion, in document order.
#[must_use]
pub fn build(loader: &ArtifactLoader<'_>, spec: &Specification) -> Vec<CoverageRow> {
    spec.acceptance_criteria.iter().map(|ac| row(loader, ac)).collect()
}

fn row(loader: &ArtifactLoader<'_>, ac: &AcceptanceCriterion) -> CoverageRow {
    let automated = ac
        .tests
        .iter()
        .map(|r| AutomatedEntry { reference: r.to_string(), present: loader.file_exists(r.path()) })
        .collect();
    CoverageRow {
        criterion: ac.label().to_string(),
        automated,
        manual: tracked(&ac.manual_tests),
        external: tracked(&ac.external_tests),
    }
}

fn tracked(entries: &[ManualEntry]) -> Vec<TrackedEntry> {
    entries
        .iter()
        .map(|entry| match entry {
            ManualEntry::Record(test) => TrackedEntry {
                name: test.label().to_string(),
                status: test.status.as_ref().map_or("?", RawField::raw).to_string(),
            },
            ManualEntry::Malformed => TrackedEntry { name: "?".into(), status: "?".into() },
        })
        .collect()
}

/// Renders the map with its header line.
#[must_use]
pub fn format_map(rows: &[CoverageRow]) -> String {
    let mut lines = vec!["AC -> Test map:".to_string()];
    for row in rows {
        let mut parts = Vec::new();
        if !row.automated.is_empty() {
            let refs: Vec<String> = row
                .automated
                .iter()
                .map(|a| format!("{} ({})", a.reference, if a.present { "ok" } else { "missing" }))
                .collect();
            parts.push(format!("automated: {}", refs.join(", ")));
        }
        if !row.manual.is_empty() {
            parts.push(format!("manual: {}", join_tracked(&row.manual)));
        }
        if !row.external.is_empty() {
            parts.push(format!("external: {}", join_tracked(&row.external)));
        }
        lines.push(format!("- {}: {}", row.criterion, parts.join(" | ")));
    }
    lines.join("\n")
}

fn join_tracked(entries: &[TrackedEntry]) -> String {
    entries.iter().map(|t| format!("{} [{}]", t.name, t.status)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChainConfig;
    use crate::testing::MemFs;

    #[test]
    fn map_marks_presence_and_statuses() {
        let ctx = MemFs::new().with_file("/repo/tests/a.test", "no tag needed").into_context();
        let config = ChainConfig::new("/repo");
        let loader = ArtifactLoader::new(&ctx, &config);
        let spec: Specification = serde_json::from_str(
            r#"{"acceptanceCriteria": [
                {"id": "AC-01", "tests": ["tests/a.test#one", "tests/b.test"],
                 "manualTests": [{"name": "Keyboard only", "status": "pending"}, 3],
                 "externalTests": [{"name": "Vendor audit", "status": "pass"}]},
                {"id": "AC-02"}]}"#,
        )
        .unwrap();

        let rows = build(&loader, &spec);
        let map = format_map(&rows);
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines[0], "AC -> Test map:");
        assert_eq!(
            lines[1],
            [
                "- AC-01: automated: tests/a.test#one (ok), tests/b.test (missing)",
                "manual: Keyboard only [pending], ? [?]",
                "external: Vendor audit [pass]",
            ]
            .join(" | ")
        );
        assert_eq!(lines[2], "- AC-02: ");
    }
}
