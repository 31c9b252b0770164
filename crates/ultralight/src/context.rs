use crate::{assert::Site, failure::Failure, test::TestDesc};
use std::panic;

/// Context values while running a test case.
///
/// A fresh context is created for every execution of a test body. It owns
/// the rendered label used by assertions.
pub struct Context<'a> {
    desc: &'a TestDesc,
    label: String,
}

impl<'a> Context<'a> {
    pub(crate) fn new(desc: &'a TestDesc) -> Self {
        Self {
            desc,
            label: desc.label(),
        }
    }

    /// Return the metadata of the running test case.
    #[inline]
    pub fn desc(&self) -> &TestDesc {
        self.desc
    }

    /// Return the label of the running test case.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

hidden_item! {
    impl Context<'_> {
        pub fn site(&self, file: &'static str, line: u32) -> Site<'_> {
            Site {
                file,
                line,
                label: &self.label,
            }
        }

        /// Stop the running test body with the given failure.
        ///
        /// The failure unwinds to the runner without invoking the panic
        /// hook, so no helper function or closure between the assertion and
        /// the body can continue past it.
        pub fn raise(&self, failure: Failure) -> ! {
            panic::resume_unwind(Box::new(failure))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESC: TestDesc = TestDesc {
        suite: "Ctx",
        name: "raise",
        module_path: "ctx",
        file: "ctx.rs",
        line: 1,
    };

    #[test]
    fn site_carries_the_label() {
        let ctx = Context::new(&DESC);
        let site = ctx.site("ctx.rs", 5);
        assert_eq!(site.label, "[test <raise> in suite <Ctx>]");
        assert_eq!(site.line, 5);
    }

    #[test]
    fn raise_unwinds_with_the_failure() {
        let ctx = Context::new(&DESC);
        let payload = panic::catch_unwind(|| {
            ctx.raise(Failure::new("boom"));
        })
        .unwrap_err();
        assert_eq!(
            payload.downcast_ref::<Failure>(),
            Some(&Failure::new("boom"))
        );
    }
}
