use super::Reporter;
use crate::{cli::ColorConfig, failure::Failure, test::TestDesc};
use std::{
    cell::RefCell,
    io::{self, IsTerminal as _},
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A reporter that writes each failure as one line of text.
///
/// Only the failure message is written; there are no headers, counts or
/// timestamps. When the underlying stream supports color, the line is
/// printed in red.
pub struct ConsoleReporter<W = StandardStream> {
    stream: RefCell<W>,
}

impl ConsoleReporter {
    /// Create a reporter writing to the standard output.
    pub fn stdout(color: ColorConfig) -> Self {
        Self::new(StandardStream::stdout(color_choice(
            color,
            io::stdout().is_terminal(),
        )))
    }
}

// termcolor's `Auto` only looks at the environment, not at the stream.
fn color_choice(color: ColorConfig, is_terminal: bool) -> ColorChoice {
    match color {
        ColorConfig::Always => ColorChoice::Always,
        ColorConfig::Never => ColorChoice::Never,
        ColorConfig::Auto if is_terminal => ColorChoice::Auto,
        ColorConfig::Auto => ColorChoice::Never,
    }
}

impl<W: WriteColor> ConsoleReporter<W> {
    /// Create a reporter writing to the given stream.
    pub fn new(stream: W) -> Self {
        Self {
            stream: RefCell::new(stream),
        }
    }

    /// Consume the reporter and return the underlying stream.
    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }

    fn write_failure(&self, failure: &Failure) -> io::Result<()> {
        let mut w = self.stream.borrow_mut();
        w.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(w, "{}", failure.message())?;
        w.reset()?;
        writeln!(w)?;
        w.flush()
    }
}

impl<W: WriteColor> Reporter for ConsoleReporter<W> {
    fn report(&self, _: &TestDesc, failure: &Failure) {
        let _ = self.write_failure(failure);
    }
}
