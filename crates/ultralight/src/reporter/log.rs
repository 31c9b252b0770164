use super::Reporter;
use crate::{failure::Failure, test::TestDesc};

/// A reporter that forwards the run to the `log` facade.
///
/// Test starts are logged at the `info` level and failures at the `error`
/// level, with the failure message as the record text.
#[derive(Debug, Clone, Default)]
pub struct LogReporter {
    _p: (),
}

impl LogReporter {
    /// Create a `LogReporter`.
    pub fn new() -> Self {
        Self { _p: () }
    }
}

impl Reporter for LogReporter {
    fn test_run_starting(&self, num_tests: usize) {
        let suffix = match num_tests {
            1 => "",
            _ => "s",
        };
        log::info!("running {} test{}", num_tests, suffix);
    }

    fn test_case_starting(&self, desc: &TestDesc) {
        log::info!("start: {}", desc);
    }

    fn report(&self, _: &TestDesc, failure: &Failure) {
        log::error!("{}", failure);
    }
}
