//! Driver support for the `lox` binary
//!
//! Runs source text from a file, a pipe, or an interactive prompt through the
//! front-end and prints the result. Kept in the library so it can be embedded
//! and tested without a terminal.

mod prompt;
mod run;

pub use prompt::run_prompt;
pub use run::{Emit, RunOptions, execute, run_file, run_source};

use std::io;

/// Errors that can end a driver run
#[derive(Debug)]
pub enum CliError {
    /// Reading the script or writing output failed
    Io(io::Error),
    /// The run reported this many diagnostics
    Reported(usize),
}

impl CliError {
    /// Process exit status, following the sysexits convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => 74,
            CliError::Reported(_) => 65,
        }
    }
}

/// Exit status for command line usage errors.
pub const EXIT_USAGE: i32 = 64;

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::Reported(1) => write!(f, "1 error reported"),
            CliError::Reported(n) => write!(f, "{} errors reported", n),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Reported(_) => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
