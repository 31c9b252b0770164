#![cfg(feature = "harness")]

use crate::{
    cli::{Args, ExitStatus},
    registry::{Registrar, Registry},
    reporter::ConsoleReporter,
};
use linkme::distributed_slice;
use std::io::{self, Write as _};

/// The registration records of every test declared with `test!`.
#[doc(hidden)]
#[distributed_slice]
pub static REGISTRARS: [Registrar];

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __test_case_harness {
    ( $item:item ) => {
        #[$crate::_test_harness_reexports::distributed_slice(
            $crate::_test_harness_reexports::REGISTRARS
        )]
        #[linkme(crate = $crate::_test_harness_reexports::linkme)]
        $item
    };
}

/// Build the registry from every test declared in the program.
pub fn registry() -> Registry {
    Registry::collect(&*REGISTRARS)
}

#[doc(hidden)]
pub fn main() {
    let args = Args::from_env().unwrap_or_else(|st| st.exit());
    let registry = registry();

    if args.list_tests {
        let stdout = io::stdout();
        let mut w = stdout.lock();
        for desc in registry.descs() {
            let _ = writeln!(w, "{}: test", desc);
        }
        ExitStatus::OK.exit();
    }

    let reporter = ConsoleReporter::stdout(args.color);
    registry.run_all(&reporter);

    // reported failures never change the exit status.
    ExitStatus::OK.exit();
}

/// Generate the main function for running test application.
#[macro_export]
macro_rules! test_harness {
    () => {
        fn main() {
            $crate::_test_harness_reexports::main()
        }
    };
}
