//! Definition of command line interface.

use super::exit_status::ExitStatus;
use getopts::Options;
use std::{path::Path, str::FromStr};

/// Command line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Print the registered tests instead of running them.
    pub list_tests: bool,
    /// Coloring of the console output.
    pub color: ColorConfig,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            list_tests: false,
            color: ColorConfig::Auto,
        }
    }
}

impl Args {
    /// Parse command line arguments.
    ///
    /// Returns the exit status to terminate with when the process should not
    /// go on running tests (`--help`). Arguments that cannot be parsed are
    /// reported on stderr and replaced with the defaults, so every test
    /// still runs.
    pub fn from_env() -> Result<Self, ExitStatus> {
        let args: Vec<_> = std::env::args().collect();
        Self::from_args(&args)
    }

    /// Parse the given arguments; the first one is the program name.
    pub fn from_args(args: &[String]) -> Result<Self, ExitStatus> {
        let parser = Parser::new(args);
        match parser.parse() {
            Ok(Some(args)) => Ok(args),
            Ok(None) => {
                parser.print_usage();
                Err(ExitStatus::OK)
            }
            Err(err) => {
                eprintln!("CLI argument error: {} (running with default options)", err);
                log::warn!("ignoring invalid arguments: {}", err);
                Ok(Args::default())
            }
        }
    }
}

/// The color configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ColorConfig {
    /// Colorize if stdout is a tty.
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl FromStr for ColorConfig {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => Err(format!(
                "argument for --color must be auto, always, or never (was {})",
                v
            )
            .into()),
        }
    }
}

struct Parser<'a> {
    args: &'a [String],
    opts: Options,
}

impl<'a> Parser<'a> {
    fn new(args: &'a [String]) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optflag("", "list", "List all registered tests");
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if stdout is a tty (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );

        // Accepted for compatibility with the arguments `cargo test` passes
        // to the built-in harness. All of them are ignored.
        opts.optflag("", "ignored", "");
        opts.optflag("", "include-ignored", "");
        opts.optflag("", "test", "");
        opts.optflag("", "bench", "");
        opts.optflag("", "nocapture", "");
        opts.optflag("", "show-output", "");
        opts.optflag("", "exact", "");
        opts.optflag("q", "quiet", "");
        opts.optmulti("", "skip", "", "FILTER");
        opts.optopt("", "logfile", "", "PATH");
        opts.optopt("", "test-threads", "", "n_threads");
        opts.optopt("", "format", "", "");
        opts.optopt("Z", "", "", "unstable-options");

        Self { args, opts }
    }

    fn print_usage(&self) {
        let binary = self.args.get(0).map_or("ultralight", String::as_str);
        let progname = Path::new(binary)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(binary);

        let message = format!("Usage: {} [OPTIONS]", progname);
        eprintln!(
            r#"{usage}
Every registered test is run, in declaration order. Failures are printed
one per line and never change the exit status."#,
            usage = self.opts.usage(&message)
        );
    }

    fn parse(&self) -> Result<Option<Args>, Box<dyn std::error::Error>> {
        let args = &self.args[..];

        let matches = self.opts.parse(args.get(1..).unwrap_or(args))?;
        if matches.opt_present("h") {
            return Ok(None);
        }

        let list_tests = matches.opt_present("list");
        let color = matches.opt_get("color")?.unwrap_or(ColorConfig::Auto);

        // a positional filter is accepted and ignored: every test always runs.
        if let Some(filter) = matches.free.get(0) {
            log::debug!("ignoring test filter {:?}", filter);
        }

        Ok(Some(Args { list_tests, color }))
    }
}
