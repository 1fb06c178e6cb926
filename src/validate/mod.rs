//! Chain validation.
//!
//! Walks the specification and task list against the reference index and
//! the test files on disk, collecting every broken link in the
//! use case → acceptance criterion → test → task chain.
//!
//! Validation never stops early. Violations are appended in a fixed order:
//! the use-case presence check, then each acceptance criterion in document
//! order, then each task in document order, then (in strict mode) id
//! pattern checks. Running twice over unchanged inputs yields the same list.

use std::fmt;

use crate::config::ChainConfig;
use crate::context::ServiceContext;
use crate::error::LoadError;
use crate::ids;
use crate::loader::{ArtifactLoader, Artifacts};
use crate::resolve::ReferenceIndex;
use crate::spec::{AcceptanceCriterion, ManualEntry, Task};

/// Which rule a violation broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The specification declares no use cases.
    NoUseCases,
    /// An acceptance criterion names a use case that is not declared.
    MissingUseCase,
    /// An acceptance criterion has no automated, manual, or external tests.
    NoTests,
    /// An automated test file does not exist under the root.
    MissingTestFile,
    /// An automated test file exists but could not be read.
    UnreadableTestFile,
    /// An automated test file does not mention the criterion id.
    MissingTag,
    /// A manual or external test entry is not a record.
    InvalidTestEntry,
    /// A manual or external test has no name.
    MissingTestName,
    /// A manual or external test status is not pending, pass, or fail.
    InvalidTestStatus,
    /// A task links no acceptance criteria.
    NoLinkedCriteria,
    /// A task names an acceptance criterion that is not declared.
    MissingCriterion,
    /// An id does not follow its `XX-NN` pattern (strict mode only).
    MalformedId,
}

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The rule that was broken.
    pub kind: ViolationKind,
    /// Human-readable description naming the entity and missing reference.
    pub message: String,
}

impl Violation {
    fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Aggregated result of one audit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainReport {
    /// Violations in deterministic order.
    pub violations: Vec<Violation>,
}

impl ChainReport {
    /// Returns `true` if no violation was found.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violation messages, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    /// Number of violations of the given kind.
    #[must_use]
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }
}

/// Loads the documents named by `config` and validates the chain.
///
/// # Errors
///
/// Returns a `LoadError` if either document cannot be loaded. Rule
/// failures are never errors; they are returned in the report.
pub fn audit(ctx: &ServiceContext, config: &ChainConfig) -> Result<ChainReport, LoadError> {
    let loader = ArtifactLoader::new(ctx, config);
    let artifacts = loader.load()?;
    let index = ReferenceIndex::build(&artifacts.spec);
    let report = validate(&loader, &artifacts, &index, config.strict_ids);
    tracing::info!(
        root = %config.root.display(),
        use_cases = index.use_case_count(),
        criteria = index.criterion_count(),
        tasks = artifacts.tasks.tasks.len(),
        violations = report.violations.len(),
        "chain audit finished"
    );
    Ok(report)
}

/// Validates loaded artifacts against the index and the files under the
/// loader's root.
#[must_use]
pub fn validate(
    loader: &ArtifactLoader<'_>,
    artifacts: &Artifacts,
    index: &ReferenceIndex,
    strict_ids: bool,
) -> ChainReport {
    let mut violations = Vec::new();

    if artifacts.spec.use_cases.is_empty() {
        violations.push(Violation::new(
            ViolationKind::NoUseCases,
            "SPEC: define at least one use case",
        ));
    }

    for ac in &artifacts.spec.acceptance_criteria {
        check_criterion(loader, index, ac, &mut violations);
    }

    for task in &artifacts.tasks.tasks {
        check_task(index, task, &mut violations);
    }

    if strict_ids {
        check_id_patterns(artifacts, &mut violations);
    }

    ChainReport { violations }
}

fn check_criterion(
    loader: &ArtifactLoader<'_>,
    index: &ReferenceIndex,
    ac: &AcceptanceCriterion,
    out: &mut Vec<Violation>,
) {
    let id = ac.label();
    tracing::debug!(ac = id, "checking acceptance criterion");

    match ac.use_case.as_deref() {
        Some(uc) if index.has_use_case(uc) => {}
        use_case => out.push(Violation::new(
            ViolationKind::MissingUseCase,
            format!("AC {id} references missing use case {}", use_case.unwrap_or("(none)")),
        )),
    }

    if ac.test_count() == 0 {
        out.push(Violation::new(
            ViolationKind::NoTests,
            format!("AC {id} has no associated tests (automated/manual/external)"),
        ));
        return;
    }

    for test_ref in &ac.tests {
        let path = test_ref.path();
        if !loader.file_exists(path) {
            out.push(Violation::new(
                ViolationKind::MissingTestFile,
                format!("Missing automated test for {id}: {path}"),
            ));
            continue;
        }
        match loader.read_file(path) {
            Ok(content) if ac.id.as_deref().is_some_and(|tag| content.contains(tag)) => {}
            Ok(_) => out.push(Violation::new(
                ViolationKind::MissingTag,
                format!("File {path} does not contain tag {id}"),
            )),
            Err(e) => out.push(Violation::new(
                ViolationKind::UnreadableTestFile,
                format!("AC {id} automated test {path} could not be read: {e}"),
            )),
        }
    }

    check_tracked_tests(id, &ac.manual_tests, TrackedKind::Manual, out);
    check_tracked_tests(id, &ac.external_tests, TrackedKind::External, out);
}

/// Manual and external tests share rules but not wording.
#[derive(Debug, Clone, Copy)]
enum TrackedKind {
    Manual,
    External,
}

impl TrackedKind {
    fn field(self) -> &'static str {
        match self {
            Self::Manual => "manualTests",
            Self::External => "externalTests",
        }
    }

    fn adjective(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::External => "external",
        }
    }

    fn article(self) -> &'static str {
        match self {
            Self::Manual => "a",
            Self::External => "an",
        }
    }
}

fn check_tracked_tests(
    ac_id: &str,
    entries: &[ManualEntry],
    kind: TrackedKind,
    out: &mut Vec<Violation>,
) {
    for entry in entries {
        let ManualEntry::Record(test) = entry else {
            out.push(Violation::new(
                ViolationKind::InvalidTestEntry,
                format!("AC {ac_id} has an invalid {} entry (expected object)", kind.field()),
            ));
            continue;
        };
        if !test.has_name() {
            out.push(Violation::new(
                ViolationKind::MissingTestName,
                format!(
                    "AC {ac_id} has {} {} test with missing name",
                    kind.article(),
                    kind.adjective()
                ),
            ));
        }
        if test.parsed_status().is_none() {
            out.push(Violation::new(
                ViolationKind::InvalidTestStatus,
                format!(
                    "AC {ac_id} {} test '{}' has invalid status",
                    kind.adjective(),
                    test.label()
                ),
            ));
        }
    }
}

fn check_task(index: &ReferenceIndex, task: &Task, out: &mut Vec<Violation>) {
    let id = task.label();
    tracing::debug!(task = id, "checking task");

    if task.acceptance_criteria.is_empty() {
        out.push(Violation::new(
            ViolationKind::NoLinkedCriteria,
            format!("Task {id} has no linked AC"),
        ));
        return;
    }

    for ac_id in &task.acceptance_criteria {
        if !index.has_criterion(ac_id) {
            out.push(Violation::new(
                ViolationKind::MissingCriterion,
                format!("Task {id} references missing AC {ac_id}"),
            ));
        }
    }
}

fn check_id_patterns(artifacts: &Artifacts, out: &mut Vec<Violation>) {
    let malformed = |message: String| Violation::new(ViolationKind::MalformedId, message);

    for uc in &artifacts.spec.use_cases {
        if !ids::is_use_case_id(uc.label()) {
            out.push(malformed(format!("Use case id '{}' does not match UC-NN", uc.label())));
        }
    }
    for ac in &artifacts.spec.acceptance_criteria {
        if !ids::is_acceptance_criterion_id(ac.label()) {
            out.push(malformed(format!(
                "Acceptance criterion id '{}' does not match AC-NN",
                ac.label()
            )));
        }
    }
    for task in &artifacts.tasks.tasks {
        if !ids::is_task_id(task.label()) {
            out.push(malformed(format!("Task id '{}' does not match T-NN", task.label())));
        }
    }
}
