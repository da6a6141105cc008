use std::io::{Cursor, Write};

use lox_lang::cli::{self, CliError, Emit, RunOptions};
use lox_lang::{AstPrinter, Diagnostics, TokenKind};
use tempfile::NamedTempFile;

fn run(source: &str, emit: Emit) -> (Result<(), CliError>, String, String) {
    let options = RunOptions {
        emit,
        pretty: false,
    };
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = cli::run_source(source, &options, &mut out, &mut err);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

// ============================================================================
// End to end through the library
// ============================================================================

#[test]
fn test_negated_product() {
    let mut diagnostics = Diagnostics::new();
    let tokens = lox_lang::scan("-123 * 45.67", &mut diagnostics);
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );

    let expr = lox_lang::parse(tokens, &mut diagnostics).unwrap();
    assert_eq!(AstPrinter.print(&expr), "(* (- 123) 45.67)");
    assert!(!diagnostics.had_error());
}

#[test]
fn test_unknown_character_still_parses() {
    let mut diagnostics = Diagnostics::new();
    let tokens = lox_lang::scan("1 == 2 §", &mut diagnostics);
    let expr = lox_lang::parse(tokens, &mut diagnostics).unwrap();

    assert_eq!(AstPrinter.print(&expr), "(== 1 2)");
    let errors: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(errors, vec!["[line 1] Error: Unexpected character."]);
}

// ============================================================================
// Batch runs
// ============================================================================

#[test]
fn test_run_prints_tree() {
    let (result, out, err) = run("1 + 2 * 3", Emit::Ast);
    assert!(result.is_ok());
    assert_eq!(out, "(+ 1 (* 2 3))\n");
    assert_eq!(err, "");
}

#[test]
fn test_run_prints_rpn() {
    let (result, out, _) = run("(1 + 2) * (4 - 3)", Emit::Rpn);
    assert!(result.is_ok());
    assert_eq!(out, "1 2 + 4 3 - *\n");
}

#[test]
fn test_run_prints_tokens() {
    let (result, out, _) = run("1 + \"a\"", Emit::Tokens);
    assert!(result.is_ok());
    assert_eq!(out, "NUMBER 1 1\nPLUS + \nSTRING \"a\" a\nEOF  \n");
}

#[test]
fn test_run_prints_tokens_despite_lexical_error() {
    let (result, out, err) = run("1 # 2", Emit::Tokens);
    assert!(matches!(result, Err(CliError::Reported(1))));
    assert_eq!(out, "NUMBER 1 1\nNUMBER 2 2\nEOF  \n");
    assert_eq!(err, "[line 1] Error: Unexpected character.\n");
}

#[test]
fn test_run_prints_json() {
    let (result, out, _) = run("-1 == nil", Emit::Json);
    assert!(result.is_ok());

    let document: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(document["tokens"].as_array().unwrap().len(), 5);
    assert_eq!(document["tokens"][0]["kind"], "MINUS");
    assert_eq!(document["tokens"][1]["literal"], 1.0);
    assert_eq!(document["ast"]["type"], "binary");
    assert_eq!(document["ast"]["operator"], "==");
    assert_eq!(document["ast"]["left"]["type"], "unary");
    assert_eq!(document["ast"]["right"]["value"], serde_json::Value::Null);
}

#[test]
fn test_run_reports_syntax_error() {
    let (result, out, err) = run("(1 + 2", Emit::Ast);
    let error = result.unwrap_err();
    assert_eq!(error.exit_code(), 65);
    assert_eq!(error.to_string(), "1 error reported");
    assert_eq!(out, "");
    assert_eq!(err, "[line 1] Error at end: Expect ')' after expression.\n");
}

#[test]
fn test_run_prints_nothing_after_lexical_error() {
    let (result, out, err) = run("1 == 2 §", Emit::Ast);
    assert!(matches!(result, Err(CliError::Reported(1))));
    assert_eq!(out, "");
    assert_eq!(err, "[line 1] Error: Unexpected character.\n");
}

#[test]
fn test_run_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "// comparison").unwrap();
    writeln!(file, "!(1 >= 2)").unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    cli::run_file(file.path(), &RunOptions::default(), &mut out, &mut err).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "(! (group (>= 1 2)))\n");
    assert!(err.is_empty());
}

#[test]
fn test_run_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.lox");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let error = cli::run_file(&path, &RunOptions::default(), &mut out, &mut err).unwrap_err();

    assert!(matches!(error, CliError::Io(_)));
    assert_eq!(error.exit_code(), 74);
}

// ============================================================================
// Interactive prompt
// ============================================================================

#[test]
fn test_prompt_runs_each_line() {
    let input = Cursor::new("1 + 2\n(3\n4\n");
    let mut out = Vec::new();
    let mut err = Vec::new();

    cli::run_prompt(input, &RunOptions::default(), &mut out, &mut err).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "> (+ 1 2)\n> > 4\n> Have a great day!\n"
    );
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "[line 1] Error at end: Expect ')' after expression.\n"
    );
}

#[test]
fn test_prompt_on_empty_input() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    cli::run_prompt(Cursor::new(""), &RunOptions::default(), &mut out, &mut err).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "> Have a great day!\n");
    assert!(err.is_empty());
}
