/*!
A minimal self-registering unit testing harness.

Test cases are declared with [`test!`] and collected without maintaining any
list by hand. They are run one after another, and a failure in one test,
whether an assertion, a returned error or a panic, never prevents the next
one from running.

# Writing Test Cases

```ignore
ultralight::test_harness!();

ultralight::test!(Stack, push_then_pop, |ctx| {
    let mut stack = vec![];
    stack.push(1);

    ultralight::assert_equal!(ctx, stack.len(), 1);
    ultralight::assert_not_null!(ctx, stack.pop());
    ultralight::assert_true!(ctx, stack.is_empty());
});

ultralight::test!(Stack, parse, |ctx| -> anyhow::Result<()> {
    let n: i32 = "42".parse()?;
    ultralight::assert_equal!(ctx, n, 42);
    Ok(())
});
```

The first failed assertion stops its test body and is printed as a single
line, e.g.

```txt
tests/stack.rs:7: [test <push_then_pop> in suite <Stack>] expected: <2> but was: <1>
```

The process always exits successfully, however many tests failed. Use
[`Tally`] with your own driver when a pass/fail signal is needed.
!*/

#![doc(html_root_url = "https://docs.rs/ultralight/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

#[macro_use]
mod macros;
mod assert;
pub mod cli;
mod context;
mod declare;
mod failure;
mod harness;
pub mod message;
mod registry;
mod reporter;
mod runner;
mod termination;

pub use crate::{
    assert::{Nullable, Site},
    context::Context,
    failure::Failure,
    registry::{Registrar, Registry},
    reporter::{ConsoleReporter, LogReporter, Reporter, Tally},
    runner::TestRunner,
    termination::Termination,
    test::{Runnable, TestCase, TestDesc, TestFn},
};

/// Assertion primitives used by the `assert_*!` macros.
pub mod check {
    pub use crate::assert::{assert_bool, assert_equal, assert_not_null, assert_null, fail};
}

#[cfg(feature = "harness")]
pub use crate::harness::registry;

hidden_item! {
    /// Re-exported items for test!() and the assertion macros
    pub mod _test_reexports {
        pub use crate::{
            assert::{assert_bool, assert_equal, assert_not_null, assert_null, fail},
            context::Context,
            registry::Registrar,
            termination::Termination,
            test::{TestCase, TestDesc},
        };
        pub use anyhow::Error;
        pub use std::{file, format, line, module_path, result::Result, stringify};
    }

    /// Re-exported items for test_harness!() and __test_case_harness!()
    #[cfg(feature = "harness")]
    pub mod _test_harness_reexports {
        pub use {
            crate::harness::{REGISTRARS, main},
            linkme::{self, distributed_slice},
        };
    }
}

#[doc(hidden)] // private API
#[cfg(feature = "harness")]
#[macro_export]
macro_rules! __test_case {
    ( $item:item ) => {
        $crate::__test_case_harness!($item);
    };
}

#[doc(hidden)] // private API
#[cfg(not(feature = "harness"))]
#[macro_export]
macro_rules! __test_case {
    ( $item:item ) => {
        /* stub */
    };
}
