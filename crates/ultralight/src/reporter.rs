//! Receivers of test failures.

mod console;
mod log;
mod tally;

pub use self::{console::ConsoleReporter, log::LogReporter, tally::Tally};

use crate::{failure::Failure, test::TestDesc};

/// The receiver of failures reported by the test runners.
///
/// A reporter only observes the run. Nothing it does can change which tests
/// are executed or in what order.
pub trait Reporter {
    /// Called once before the first test of a run is executed.
    fn test_run_starting(&self, num_tests: usize) {
        let _ = num_tests;
    }

    /// Called before each test case is executed.
    fn test_case_starting(&self, desc: &TestDesc) {
        let _ = desc;
    }

    /// Report a failure of the given test case.
    fn report(&self, desc: &TestDesc, failure: &Failure);
}

macro_rules! impl_reporter_body {
    () => {
        fn test_run_starting(&self, num_tests: usize) {
            (**self).test_run_starting(num_tests)
        }

        fn test_case_starting(&self, desc: &TestDesc) {
            (**self).test_case_starting(desc)
        }

        fn report(&self, desc: &TestDesc, failure: &Failure) {
            (**self).report(desc, failure)
        }
    };
}

impl<R: ?Sized> Reporter for &R
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for Box<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::rc::Rc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::sync::Arc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}
