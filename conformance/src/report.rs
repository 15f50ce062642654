//! Conformance report types: check results, severity levels, and aggregation.

use std::fmt;

/// Severity of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Something is off but the table is still usable.
    Warning,
    /// The table does not conform.
    Failure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        })
    }
}

/// Outcome of one check against an emitted table.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check, e.g. `chain/ordering`.
    pub check: &'static str,
    /// One-line summary.
    pub message: String,
    /// Severity of the outcome.
    pub severity: Severity,
    /// Offending blocks or other detail lines.
    pub details: Vec<String>,
}

impl CheckResult {
    fn new(check: &'static str, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            check,
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// A passing result.
    pub fn pass(check: &'static str, message: impl Into<String>) -> Self {
        Self::new(check, message, Severity::Pass)
    }

    /// A warning.
    pub fn warn(check: &'static str, message: impl Into<String>) -> Self {
        Self::new(check, message, Severity::Warning)
    }

    /// A failure.
    pub fn fail(check: &'static str, message: impl Into<String>) -> Self {
        Self::new(check, message, Severity::Failure)
    }

    /// Attaches detail lines.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// True for [`Severity::Failure`].
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// All check results for one emitted table.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Results in the order the checks ran.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// True when no check failed. Warnings do not count.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Looks up the first result produced by `check`.
    pub fn find(&self, check: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.check == check)
    }
}
