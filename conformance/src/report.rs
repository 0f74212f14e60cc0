//! Check results and their aggregation into a report.

use std::fmt;

/// Outcome class of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Something is off but conformance holds.
    Warning,
    /// Conformance is broken.
    Failure,
}

impl Severity {
    /// Fixed-width tag used in printed reports.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warning => "WARN",
            Self::Failure => "FAIL",
        }
    }
}

/// The outcome of one check.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Identifier of the validator, such as `vocabulary/structure`.
    pub validator: String,
    /// One-line summary.
    pub message: String,
    /// Outcome class.
    pub severity: Severity,
    /// One line per offending item, if any.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// A passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// A failing result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// A warning.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// Passes with `ok` when `violations` is empty, otherwise fails with
    /// `failed` and one detail line per violation.
    pub fn check(
        validator: impl Into<String>,
        ok: impl Into<String>,
        failed: impl Into<String>,
        violations: Vec<String>,
    ) -> Self {
        if violations.is_empty() {
            Self::pass(validator, ok)
        } else {
            Self {
                details: violations,
                ..Self::fail(validator, failed)
            }
        }
    }

    /// True if this result breaks conformance.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.tag(), self.validator, self.message)?;
        for detail in &self.details {
            write!(f, "\n       {detail}")?;
        }
        Ok(())
    }
}

/// Results from every validator run.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Results in the order they were produced.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// An empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// True if no check failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// The failed results.
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.is_failure())
    }
}

impl FromIterator<TestResult> for ConformanceReport {
    fn from_iter<I: IntoIterator<Item = TestResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_collapses_empty_violations_to_a_pass() {
        let ok = TestResult::check("v", "fine", "broken", Vec::new());
        assert_eq!(ok.severity, Severity::Pass);
        assert_eq!(ok.message, "fine");

        let bad = TestResult::check("v", "fine", "broken", vec!["x".to_owned()]);
        assert!(bad.is_failure());
        assert_eq!(bad.details, ["x"]);
    }

    #[test]
    fn counts_by_severity() {
        let report: ConformanceReport = [
            TestResult::pass("a", "ok"),
            TestResult::warn("b", "hmm"),
            TestResult::fail("c", "no"),
        ]
        .into_iter()
        .collect();
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn displays_details_indented() {
        let result = TestResult::check("v", "fine", "broken", vec!["first".to_owned()]);
        assert_eq!(result.to_string(), "[FAIL] v: broken\n       first");
    }
}
