//! Run source text through the front-end

use std::{fs, io::Write, path::Path};

use super::CliError;
use crate::{AstPrinter, Diagnostics, Parser, RpnPrinter, Scanner, output};

/// What to print for a successfully processed input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Emit {
    /// Parenthesized prefix form of the tree
    #[default]
    Ast,
    /// Reverse-Polish form of the tree
    Rpn,
    /// One token per line, `<kind> <lexeme> <literal>`
    Tokens,
    /// Tokens and tree as a JSON document
    Json,
}

/// Options for a run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub emit: Emit,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Scans and parses `source`, returning the text to print.
///
/// Token listings are produced even when the scan reported errors. Every other
/// mode prints nothing once any diagnostic has been reported.
pub fn execute(
    source: &str,
    options: &RunOptions,
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    let tokens = Scanner::new(source, diagnostics).scan_tokens();

    if options.emit == Emit::Tokens {
        let lines: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        return Some(lines.join("\n"));
    }

    let token_json = (options.emit == Emit::Json).then(|| output::tokens_to_json(&tokens));
    let expr = Parser::new(tokens, diagnostics).parse();
    if diagnostics.had_error() {
        return None;
    }
    let expr = expr?;

    let rendered = match options.emit {
        Emit::Ast | Emit::Tokens => AstPrinter.print(&expr),
        Emit::Rpn => RpnPrinter.print(&expr),
        Emit::Json => {
            let document = serde_json::json!({
                "tokens": token_json,
                "ast": output::expr_to_json(&expr),
            });
            let json = if options.pretty {
                serde_json::to_string_pretty(&document)
            } else {
                serde_json::to_string(&document)
            };
            json.ok()?
        }
    };
    Some(rendered)
}

/// Runs `source` as one batch, writing output to `out` and diagnostics to `err`.
pub fn run_source<W: Write, E: Write>(
    source: &str,
    options: &RunOptions,
    out: &mut W,
    err: &mut E,
) -> Result<(), CliError> {
    let mut diagnostics = Diagnostics::new();

    if let Some(text) = execute(source, options, &mut diagnostics) {
        writeln!(out, "{}", text)?;
    }
    for diagnostic in diagnostics.iter() {
        writeln!(err, "{}", diagnostic)?;
    }

    if diagnostics.had_error() {
        return Err(CliError::Reported(diagnostics.len()));
    }
    Ok(())
}

/// Reads the script at `path` and runs it.
pub fn run_file<W: Write, E: Write>(
    path: &Path,
    options: &RunOptions,
    out: &mut W,
    err: &mut E,
) -> Result<(), CliError> {
    let source = fs::read_to_string(path)?;
    tracing::info!(path = %path.display(), bytes = source.len(), "running script");
    run_source(&source, options, out, err)
}
