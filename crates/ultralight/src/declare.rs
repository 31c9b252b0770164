//! The declaration macro.
//!
//! Kept out of the `#[macro_use]` scope of this crate so that the `test!`
//! macro does not shadow the built-in `#[test]` attribute.

/// Declare a test case.
///
/// The declaration is registered automatically: there is no list of tests
/// to maintain. The body receives the test context under the given name and
/// may return `()` or `Result<(), E>`.
///
/// ```ignore
/// ultralight::test!(Stack, push_then_pop, |ctx| {
///     let mut stack = vec![1];
///     stack.pop();
///     ultralight::assert_equal!(ctx, stack.len(), 0);
/// });
/// ```
///
/// The test name is also used as the name of a module-level item, so it
/// must be unique within its module.
#[macro_export]
macro_rules! test {
    ( $suite:ident, $name:ident, |$ctx:ident| $body:block $(;)? ) => {
        $crate::test!($suite, $name, |$ctx| -> () $body);
    };

    ( $suite:ident, $name:ident, |$ctx:ident| -> $ret:ty $body:block $(;)? ) => {
        $crate::__test_case! {
            #[allow(non_upper_case_globals)]
            static $name: $crate::_test_reexports::Registrar = {
                use $crate::_test_reexports as __ul;

                fn __body($ctx: &mut __ul::Context<'_>) -> $ret
                where
                    $ret: __ul::Termination,
                $body

                fn __test_fn(ctx: &mut __ul::Context<'_>) -> __ul::Result<(), __ul::Error> {
                    __ul::Termination::into_result(__body(ctx))
                }

                __ul::Registrar::new(__ul::TestCase {
                    desc: __ul::TestDesc {
                        suite: __ul::stringify!($suite),
                        name: __ul::stringify!($name),
                        module_path: __ul::module_path!(),
                        file: __ul::file!(),
                        line: __ul::line!(),
                    },
                    test_fn: __test_fn,
                })
            };
        }
    };
}
