//! Identifier conventions: `UC-NN`, `AC-NN`, `T-NN`.

/// Returns `true` if `value` is `prefix` followed by exactly two ASCII digits.
fn matches_pattern(value: &str, prefix: &str) -> bool {
    value
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.len() == 2 && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Returns `true` for use case ids such as `UC-01`.
#[must_use]
pub fn is_use_case_id(value: &str) -> bool {
    matches_pattern(value, "UC-")
}

/// Returns `true` for acceptance criterion ids such as `AC-01`.
#[must_use]
pub fn is_acceptance_criterion_id(value: &str) -> bool {
    matches_pattern(value, "AC-")
}

/// Returns `true` for task ids such as `T-01`.
#[must_use]
pub fn is_task_id(value: &str) -> bool {
    matches_pattern(value, "T-")
}
