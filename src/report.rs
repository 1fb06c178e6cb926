//! Report rendering and outcome mapping.

use std::process::ExitCode;

use crate::validate::ChainReport;

/// Printed on a clean audit.
pub const SUCCESS_MESSAGE: &str = "Chain check OK";

/// Header printed before the violation list.
pub const FAILURE_HEADER: &str = "Chain check failed:";

/// How a run ended, independent of how it was printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No violations.
    Clean,
    /// One or more violations were found.
    Violations(usize),
    /// A document could not be loaded, or the command line was invalid.
    Fatal,
}

impl Outcome {
    /// Classifies a finished audit.
    #[must_use]
    pub fn of(report: &ChainReport) -> Self {
        if report.passed() {
            Self::Clean
        } else {
            Self::Violations(report.violations.len())
        }
    }

    /// Process exit status: 0 clean, 1 violations, 2 fatal.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::Violations(_) => 1,
            Self::Fatal => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Formats the violation list, one prefixed line per violation.
///
/// Returns the success message when the report is clean.
#[must_use]
pub fn format_report(report: &ChainReport) -> String {
    if report.passed() {
        return SUCCESS_MESSAGE.to_string();
    }
    let mut lines = Vec::with_capacity(report.violations.len() + 1);
    lines.push(FAILURE_HEADER.to_string());
    for violation in &report.violations {
        lines.push(format!(" - {violation}"));
    }
    lines.join("\n")
}

/// Prints the report to the right channel and returns the outcome.
///
/// Success goes to stdout; violations go to stderr.
#[must_use]
pub fn emit(report: &ChainReport) -> Outcome {
    let rendered = format_report(report);
    if report.passed() {
        println!("{rendered}");
    } else {
        eprintln!("{rendered}");
    }
    Outcome::of(report)
}
