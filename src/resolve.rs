//! Reference resolution: id indices over a loaded specification.

use std::collections::HashSet;

use crate::spec::Specification;

/// Lookup sets for the ids a specification declares.
///
/// Repeated ids collapse into one entry; declaring the same id twice is
/// not reported. Records without an id are not indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex {
    use_cases: HashSet<String>,
    criteria: HashSet<String>,
}

impl ReferenceIndex {
    /// Builds the index from a specification.
    #[must_use]
    pub fn build(spec: &Specification) -> Self {
        let use_cases = spec.use_cases.iter().filter_map(|uc| uc.id.clone()).collect();
        let criteria = spec.acceptance_criteria.iter().filter_map(|ac| ac.id.clone()).collect();
        Self { use_cases, criteria }
    }

    /// Returns `true` if a use case with this id is declared.
    #[must_use]
    pub fn has_use_case(&self, id: &str) -> bool {
        self.use_cases.contains(id)
    }

    /// Returns `true` if an acceptance criterion with this id is declared.
    #[must_use]
    pub fn has_criterion(&self, id: &str) -> bool {
        self.criteria.contains(id)
    }

    /// Number of distinct use case ids.
    #[must_use]
    pub fn use_case_count(&self) -> usize {
        self.use_cases.len()
    }

    /// Number of distinct acceptance criterion ids.
    #[must_use]
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }
}
