use crate::{
    context::Context,
    failure::Failure,
    reporter::Reporter,
    test::{Runnable, TestDesc},
};
use maybe_unwind::{capture_panic_info, maybe_unwind, Unwind};
use std::{any::Any, panic, panic::AssertUnwindSafe, sync::Once};

/// The failure boundary around a single test case.
///
/// Whatever happens inside the test body, `run` returns normally and at
/// most one failure is forwarded to the reporter.
pub struct TestRunner {
    runnable: Box<dyn Runnable>,
}

impl TestRunner {
    /// Create a runner that owns the given test case.
    pub fn new<R>(runnable: R) -> Self
    where
        R: Runnable + 'static,
    {
        Self {
            runnable: Box::new(runnable),
        }
    }

    /// Return the metadata of the owned test case.
    #[inline]
    pub fn desc(&self) -> &TestDesc {
        self.runnable.desc()
    }

    /// Execute the test case once and report its failure, if any.
    ///
    /// Every call executes the body again with a fresh context.
    pub fn run<R>(&self, reporter: &R)
    where
        R: Reporter + ?Sized,
    {
        install_panic_hook();

        let desc = self.runnable.desc();
        reporter.test_case_starting(desc);

        let mut ctx = Context::new(desc);
        let result = maybe_unwind(AssertUnwindSafe(|| self.runnable.execute(&mut ctx)));

        match check_result(&ctx, result) {
            Some(failure) => {
                log::trace!("{}: failed", ctx.label());
                reporter.report(desc, &failure);
            }
            None => log::trace!("{}: ok", ctx.label()),
        }
    }
}

fn check_result(
    ctx: &Context<'_>,
    result: Result<anyhow::Result<()>, Unwind>,
) -> Option<Failure> {
    match result {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(match err.downcast::<Failure>() {
            Ok(failure) => failure,
            Err(err) => Failure::new(format!("Caught error: {:#} in {}", err, ctx.label())),
        }),
        Err(unwind) => {
            let payload = unwind.payload();
            if let Some(failure) = payload.downcast_ref::<Failure>() {
                return Some(failure.clone());
            }
            Some(Failure::new(match panic_message(payload) {
                Some(msg) => format!("Caught panic: {} in {}", msg, ctx.label()),
                None => format!("Caught unknown panic in {}", ctx.label()),
            }))
        }
    }
}

fn panic_message<'a>(payload: &'a (dyn Any + Send + 'static)) -> Option<&'a str> {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        return Some(*msg);
    }
    payload.downcast_ref::<String>().map(String::as_str)
}

fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !capture_panic_info(info) {
                prev_hook(info);
            }
        }));
    });
}
