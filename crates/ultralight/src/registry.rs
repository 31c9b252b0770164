use crate::{
    reporter::Reporter,
    runner::TestRunner,
    test::{TestCase, TestDesc},
};

/// An ordered collection of test runners.
///
/// Entries are only ever appended and are run in the order they were
/// registered.
#[derive(Default)]
pub struct Registry {
    runners: Vec<TestRunner>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a set of registration records.
    ///
    /// The records are registered in the order of their declaration site,
    /// i.e. by source file and then by line. Within one file this is the
    /// order in which the tests were written.
    pub fn collect(registrars: &'static [Registrar]) -> Self {
        let mut registrars: Vec<&'static Registrar> = registrars.iter().collect();
        registrars.sort_by_key(|r| (r.test_case.desc.file, r.test_case.desc.line));

        let mut registry = Self::new();
        for registrar in registrars {
            registrar.register(&mut registry);
        }
        registry
    }

    /// Append a runner.
    pub fn register(&mut self, runner: TestRunner) {
        log::debug!("registered {}", runner.desc());
        self.runners.push(runner);
    }

    /// Return the number of registered runners.
    #[inline]
    pub fn len(&self) -> usize {
        self.runners.len()
    }

    /// Return whether no runner has been registered yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runners.is_empty()
    }

    /// Iterate over the metadata of the registered test cases, in order.
    pub fn descs(&self) -> impl Iterator<Item = &TestDesc> + '_ {
        self.runners.iter().map(TestRunner::desc)
    }

    /// Run every registered test case once, in registration order.
    ///
    /// A failing test never prevents the following ones from running.
    pub fn run_all<R>(&self, reporter: &R)
    where
        R: Reporter + ?Sized,
    {
        log::debug!("running {} registered tests", self.runners.len());
        reporter.test_run_starting(self.runners.len());
        for runner in &self.runners {
            runner.run(reporter);
        }
    }
}

/// The registration record of a single declared test case.
///
/// A `Registrar` is emitted for every `test!` declaration. Registering it
/// appends exactly one runner owning its test case.
#[derive(Debug)]
pub struct Registrar {
    test_case: TestCase,
}

impl Registrar {
    /// Create a registration record for the given test case.
    pub const fn new(test_case: TestCase) -> Self {
        Self { test_case }
    }

    /// Return the test case registered by this record.
    #[inline]
    pub fn test_case(&self) -> &TestCase {
        &self.test_case
    }

    /// Register a runner for the test case into `registry`.
    pub fn register(&'static self, registry: &mut Registry) {
        registry.register(TestRunner::new(&self.test_case));
    }
}
