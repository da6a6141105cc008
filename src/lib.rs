pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod output;
pub mod parser;
pub mod printer;
pub mod scanner;

pub use ast::{Expr, Literal, LiteralValue, Token, TokenKind, Visitor};
pub use diagnostics::{Diagnostic, Diagnostics, ErrorKind};
pub use output::{expr_to_json, tokens_to_json};
pub use parser::{ParseError, Parser};
pub use printer::{AstPrinter, RpnPrinter};
pub use scanner::Scanner;

/// Scans `source` into tokens, reporting lexical errors to `diagnostics`.
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    Scanner::new(source, diagnostics).scan_tokens()
}

/// Parses one expression, or returns `None` after reporting a syntax error.
pub fn parse(tokens: Vec<Token>, diagnostics: &mut Diagnostics) -> Option<Expr> {
    Parser::new(tokens, diagnostics).parse()
}
