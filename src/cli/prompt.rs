//! Interactive line-at-a-time prompt

use std::io::{BufRead, Write};

use super::{CliError, RunOptions, execute};
use crate::Diagnostics;

const PROMPT: &str = "> ";
const FAREWELL: &str = "Have a great day!";

/// Runs each line of `input` on its own until input ends.
///
/// Errors on one line are printed and forgotten; they never end the session.
pub fn run_prompt<R: BufRead, W: Write, E: Write>(
    mut input: R,
    options: &RunOptions,
    out: &mut W,
    err: &mut E,
) -> Result<(), CliError> {
    let mut diagnostics = Diagnostics::new();
    let mut line = String::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "{}", FAREWELL)?;
            return Ok(());
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if let Some(text) = execute(source, options, &mut diagnostics) {
            writeln!(out, "{}", text)?;
        }
        for diagnostic in diagnostics.iter() {
            writeln!(err, "{}", diagnostic)?;
        }
        diagnostics.reset();
    }
}
