//! Command line configuration of the test process.

mod args;
mod exit_status;

pub use self::{
    args::{Args, ColorConfig},
    exit_status::ExitStatus,
};
