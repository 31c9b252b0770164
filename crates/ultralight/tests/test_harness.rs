use std::cell::RefCell;
use ultralight::{Failure, Reporter, Tally, TestDesc};

#[derive(Default)]
struct Collect(RefCell<Vec<String>>);

impl Reporter for Collect {
    fn report(&self, _: &TestDesc, failure: &Failure) {
        self.0.borrow_mut().push(failure.message().to_owned());
    }
}

thread_local! {
    static EXECUTED: RefCell<Vec<&'static str>> = RefCell::new(vec![]);
}

fn executed(name: &'static str) {
    EXECUTED.with(|e| e.borrow_mut().push(name));
}

ultralight::test!(Vector, starts_empty, |ctx| {
    executed("starts_empty");
    let v: Vec<u8> = Vec::new();
    ultralight::assert_equal!(ctx, v.len(), 0);
    ultralight::assert_true!(ctx, v.is_empty());
    ultralight::assert_null!(ctx, v.first());
});

ultralight::test!(Vector, wrong_length, |ctx| {
    executed("wrong_length");
    let v = vec![1, 2, 3];
    ultralight::assert_equal!(ctx, 2, v.len());
    executed("unreachable");
});

ultralight::test!(Vector, strings, |ctx| {
    executed("strings");
    let joined = ["a", "b"].concat();
    ultralight::assert_equal!(ctx, "ab", joined);
    ultralight::assert_not_null!(ctx, joined.find('b'));
    ultralight::assert_false!(ctx, joined.is_empty());
});

ultralight::test!(Vector, is_not_empty, |ctx| {
    executed("is_not_empty");
    let v = vec![1];
    ultralight::assert_false!(ctx, !v.is_empty());
});

ultralight::test!(Errors, returns_error, |ctx| -> anyhow::Result<()> {
    executed("returns_error");
    let n: i32 = "forty-two".parse()?;
    ultralight::assert_equal!(ctx, n, 42);
    Ok(())
});

ultralight::test!(Errors, panics, |_ctx| {
    executed("panics");
    let v: Vec<u8> = vec![];
    if v.is_empty() {
        panic!("nothing to see here");
    }
});

ultralight::test!(Errors, panics_opaquely, |_ctx| {
    executed("panics_opaquely");
    std::panic::panic_any(7u8);
});

ultralight::test!(Errors, fails_explicitly, |ctx| {
    executed("fails_explicitly");
    ultralight::fail!(ctx, "boom {}", 1);
});

ultralight::test!(Errors, last_one_still_runs, |ctx| {
    executed("last_one_still_runs");
    ultralight::assert_true!(ctx, true);
});

fn check_positive(ctx: &ultralight::Context<'_>, n: i32) {
    ultralight::assert_true!(ctx, n > 0);
}

ultralight::test!(Helpers, stops_in_helper, |ctx| {
    executed("stops_in_helper");
    check_positive(ctx, -1);
    executed("after_helper");
    ultralight::assert_equal!(ctx, 1, 2);
});

ultralight::test!(Helpers, stops_in_closure, |ctx| {
    executed("stops_in_closure");
    [1, 2].iter().for_each(|n| ultralight::assert_equal!(ctx, *n, 0));
    executed("after_closure");
});

fn main() {
    let registry = ultralight::registry();
    assert_eq!(registry.len(), 11);

    let tally = Tally::new(Collect::default());
    registry.run_all(&tally);

    assert_eq!(tally.executed(), 11);
    assert_eq!(tally.failed(), 8);
    assert_eq!(tally.passed(), 3);

    let file = file!();
    let reports = tally.into_inner().0.into_inner();
    let expected = vec![
        format!(
            "{}:32: [test <wrong_length> in suite <Vector>] expected: <2> but was: <3>",
            file
        ),
        format!(
            "{}:47: [test <is_not_empty> in suite <Vector>] expected: !v.is_empty() to be false",
            file
        ),
        "Caught error: invalid digit found in string in [test <returns_error> in suite <Errors>]"
            .to_owned(),
        "Caught panic: nothing to see here in [test <panics> in suite <Errors>]".to_owned(),
        "Caught unknown panic in [test <panics_opaquely> in suite <Errors>]".to_owned(),
        format!(
            "{}:72: [test <fails_explicitly> in suite <Errors>] error: boom 1",
            file
        ),
        format!(
            "{}:81: [test <stops_in_helper> in suite <Helpers>] expected: n > 0 to be true",
            file
        ),
        format!(
            "{}:93: [test <stops_in_closure> in suite <Helpers>] expected: <1> but was: <0>",
            file
        ),
    ];
    assert_eq!(reports, expected);

    EXECUTED.with(|e| {
        assert_eq!(
            *e.borrow(),
            vec![
                "starts_empty",
                "wrong_length",
                "strings",
                "is_not_empty",
                "returns_error",
                "panics",
                "panics_opaquely",
                "fails_explicitly",
                "last_one_still_runs",
                "stops_in_helper",
                "stops_in_closure",
            ]
        );
    });
}
