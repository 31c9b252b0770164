use super::Reporter;
use crate::{failure::Failure, test::TestDesc};
use std::cell::Cell;

/// A reporter that counts executed and failed tests before forwarding
/// everything to an inner reporter.
///
/// The harness itself never looks at these counts. `Tally` exists for
/// drivers that need a pass/fail signal on top of the reported failures.
#[derive(Debug, Default)]
pub struct Tally<R> {
    inner: R,
    executed: Cell<usize>,
    failed: Cell<usize>,
}

impl<R: Reporter> Tally<R> {
    /// Wrap the given reporter.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            executed: Cell::new(0),
            failed: Cell::new(0),
        }
    }

    /// Return the number of executed test cases.
    #[inline]
    pub fn executed(&self) -> usize {
        self.executed.get()
    }

    /// Return the number of reported failures.
    ///
    /// A test case reports at most one failure per execution.
    #[inline]
    pub fn failed(&self) -> usize {
        self.failed.get()
    }

    /// Return the number of test cases that completed without a failure.
    #[inline]
    pub fn passed(&self) -> usize {
        self.executed().saturating_sub(self.failed())
    }

    /// Return whether no failures were reported.
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Return a reference to the inner reporter.
    #[inline]
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Consume the tally and return the inner reporter.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Reporter> Reporter for Tally<R> {
    fn test_run_starting(&self, num_tests: usize) {
        self.inner.test_run_starting(num_tests);
    }

    fn test_case_starting(&self, desc: &TestDesc) {
        self.executed.set(self.executed.get() + 1);
        self.inner.test_case_starting(desc);
    }

    fn report(&self, desc: &TestDesc, failure: &Failure) {
        self.failed.set(self.failed.get() + 1);
        self.inner.report(desc, failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::LogReporter;

    const DESC: TestDesc = TestDesc {
        suite: "Tally",
        name: "count",
        module_path: "tally",
        file: "tally.rs",
        line: 1,
    };

    #[test]
    fn counts_starts_and_failures() {
        let tally = Tally::new(LogReporter::new());
        tally.test_run_starting(3);
        for _ in 0..3 {
            tally.test_case_starting(&DESC);
        }
        tally.report(&DESC, &Failure::new("boom"));

        assert_eq!(tally.executed(), 3);
        assert_eq!(tally.failed(), 1);
        assert_eq!(tally.passed(), 2);
        assert!(!tally.is_passed());
    }

    #[test]
    fn report_without_start_does_not_underflow() {
        let tally = Tally::new(LogReporter::new());
        tally.report(&DESC, &Failure::new("boom"));

        assert_eq!(tally.executed(), 0);
        assert_eq!(tally.failed(), 1);
        assert_eq!(tally.passed(), 0);
    }
}
