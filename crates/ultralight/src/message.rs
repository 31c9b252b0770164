//! Rendering of failure descriptions.
//!
//! Every message starts with the location prefix `<file>:<line>: <label> `.
//! The trailing space is part of the format and is what separates the label
//! from `error:` or `expected:`.

use std::fmt::{self, Write as _};

/// Render the location prefix of a failure message.
pub fn location(file: &str, line: u32, label: &str) -> String {
    format!("{}:{}: {} ", file, line, label)
}

/// Render the message of an explicit failure.
pub fn fail_message(file: &str, line: u32, label: &str, message: &str) -> String {
    let mut buf = location(file, line, label);
    buf.push_str("error: ");
    buf.push_str(message);
    buf
}

/// Render the message of a failed equality assertion.
pub fn equals_message<E, A>(file: &str, line: u32, label: &str, expected: &E, actual: &A) -> String
where
    E: fmt::Display + ?Sized,
    A: fmt::Display + ?Sized,
{
    let mut buf = location(file, line, label);
    let _ = write!(buf, "expected: <{}> but was: <{}>", expected, actual);
    buf
}

/// Render the message of a failed boolean assertion.
///
/// `actual` is the observed value; the message names its negation,
/// i.e. the value the expression should have had.
pub fn bool_message(file: &str, line: u32, label: &str, expr_text: &str, actual: bool) -> String {
    let mut buf = location(file, line, label);
    let _ = write!(buf, "expected: {} to be {}", expr_text, condition_text(!actual));
    buf
}

fn condition_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LABEL: &str = "[test <push> in suite <Stack>]";

    #[test]
    fn location_keeps_trailing_space() {
        assert_eq!(
            location("stack.rs", 12, LABEL),
            "stack.rs:12: [test <push> in suite <Stack>] "
        );
    }

    #[test]
    fn fail_message_appends_error() {
        assert_eq!(
            fail_message("stack.rs", 3, LABEL, "boom"),
            "stack.rs:3: [test <push> in suite <Stack>] error: boom"
        );
    }

    #[test]
    fn equals_message_wraps_values_in_angle_brackets() {
        assert_eq!(
            equals_message("stack.rs", 7, LABEL, &1, &2),
            "stack.rs:7: [test <push> in suite <Stack>] expected: <1> but was: <2>"
        );
        assert_eq!(
            equals_message("stack.rs", 8, LABEL, "abc", &String::from("abd")),
            "stack.rs:8: [test <push> in suite <Stack>] expected: <abc> but was: <abd>"
        );
    }

    #[test]
    fn bool_message_names_the_negated_value() {
        assert_eq!(
            bool_message("stack.rs", 9, LABEL, "stack.is_empty()", false),
            "stack.rs:9: [test <push> in suite <Stack>] expected: stack.is_empty() to be true"
        );
        assert_eq!(
            bool_message("stack.rs", 10, LABEL, "stack.is_empty()", true),
            "stack.rs:10: [test <push> in suite <Stack>] expected: stack.is_empty() to be false"
        );
    }
}
