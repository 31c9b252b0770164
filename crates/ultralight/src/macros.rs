macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __check {
    ( $ctx:ident, |$site:ident| $check:expr ) => {{
        let result = {
            let $site = $ctx.site(
                $crate::_test_reexports::file!(),
                $crate::_test_reexports::line!(),
            );
            $check
        };
        if let $crate::_test_reexports::Result::Err(failure) = result {
            $ctx.raise(failure);
        }
    }};
}

/// Assert that two values are equal.
///
/// On mismatch the test fails with
/// `<file>:<line>: <label> expected: <EXPECTED> but was: <ACTUAL>`.
#[macro_export]
macro_rules! assert_equal {
    ( $ctx:ident, $expected:expr, $actual:expr $(,)? ) => {
        match (&$expected, &$actual) {
            (expected, actual) => {
                $crate::__check!($ctx, |site| {
                    $crate::_test_reexports::assert_equal(&site, expected, actual)
                })
            }
        }
    };
}

/// Assert that a boolean expression is `true`.
#[macro_export]
macro_rules! assert_true {
    ( $ctx:ident, $cond:expr $(,)? ) => {{
        let observed: bool = $cond;
        $crate::__check!($ctx, |site| {
            $crate::_test_reexports::assert_bool(
                &site,
                observed,
                true,
                $crate::_test_reexports::stringify!($cond),
            )
        })
    }};
}

/// Assert that a boolean expression is `false`.
#[macro_export]
macro_rules! assert_false {
    ( $ctx:ident, $cond:expr $(,)? ) => {{
        let observed: bool = $cond;
        $crate::__check!($ctx, |site| {
            $crate::_test_reexports::assert_bool(
                &site,
                observed,
                false,
                $crate::_test_reexports::stringify!($cond),
            )
        })
    }};
}

/// Assert that a value is null (`None` or a null pointer).
#[macro_export]
macro_rules! assert_null {
    ( $ctx:ident, $value:expr $(,)? ) => {
        match &$value {
            value => $crate::__check!($ctx, |site| {
                $crate::_test_reexports::assert_null(
                    &site,
                    value,
                    $crate::_test_reexports::stringify!($value),
                )
            }),
        }
    };
}

/// Assert that a value is not null.
#[macro_export]
macro_rules! assert_not_null {
    ( $ctx:ident, $value:expr $(,)? ) => {
        match &$value {
            value => $crate::__check!($ctx, |site| {
                $crate::_test_reexports::assert_not_null(
                    &site,
                    value,
                    $crate::_test_reexports::stringify!($value),
                )
            }),
        }
    };
}

/// Mark the current test case as failed and then terminate its execution.
#[macro_export]
macro_rules! fail {
    ( $ctx:ident ) => {
        $crate::fail!($ctx, "explicitly failed")
    };
    ( $ctx:ident, $($arg:tt)+ ) => {
        $crate::__check!($ctx, |site| {
            $crate::_test_reexports::fail(&site, &$crate::_test_reexports::format!($($arg)+))
        })
    };
}
