use crate::ast::{Literal, Token, TokenKind};
use crate::diagnostics::Diagnostics;

/// Single-pass scanner turning source text into tokens.
///
/// Invalid input never stops the scan: it is reported to the sink and skipped.
pub struct Scanner<'d> {
    input: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    position: usize,
    line: usize,
    /// Line of the first character of the current lexeme
    start_line: usize,
    diagnostics: &'d mut Diagnostics,
}

impl<'d> Scanner<'d> {
    pub fn new(input: &str, diagnostics: &'d mut Diagnostics) -> Self {
        Scanner {
            input: input.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            position: 0,
            line: 1,
            start_line: 1,
            diagnostics,
        }
    }

    /// Scans the whole input. The result always ends with exactly one EOF token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.position;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        tracing::debug!(tokens = self.tokens.len(), lines = self.line, "scan finished");
        self.tokens
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current_char();
        self.position += 1;
        ch
    }

    /// Consumes the next character only if it is `expected`.
    fn advance_if(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> String {
        self.input[self.start..self.position].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme();
        self.tokens.push(Token::new(kind, lexeme, literal, self.start_line));
    }

    fn scan_token(&mut self) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.advance_if('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.advance_if('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.advance_if('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.advance_if('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.advance_if('/') {
                    self.skip_line_comment();
                } else if self.advance_if('*') {
                    self.skip_block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.read_string(),
            c if c.is_ascii_digit() => self.read_number(),
            c if is_identifier_start(c) => self.read_identifier(),
            _ => {
                self.diagnostics.error(self.line, "Unexpected character.");
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skips through the closing `*/`. Block comments do not nest; an
    /// unclosed one runs to the end of input.
    fn skip_block_comment(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == '*' && self.peek_char(1) == Some('/') {
                self.position += 2;
                return;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }
    }

    fn read_string(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == '"' {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.diagnostics.error(self.line, "Unterminated string.");
            return;
        }

        self.advance(); // closing quote

        let value: String = self.input[self.start + 1..self.position - 1]
            .iter()
            .collect();
        self.add_literal_token(TokenKind::String, Some(Literal::String(value)));
    }

    fn read_number(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A '.' only belongs to the number when a digit follows it
        if self.current_char() == Some('.')
            && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        match self.lexeme().parse::<f64>() {
            Ok(n) => self.add_literal_token(TokenKind::Number, Some(Literal::Number(n))),
            Err(_) => {
                self.diagnostics.error(self.line, "Invalid number literal.");
            }
        }
    }

    fn read_identifier(&mut self) {
        while self.current_char().is_some_and(is_identifier_char) {
            self.advance();
        }

        let kind = TokenKind::keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

#[cfg(test)]
fn kinds(input: &str) -> Vec<TokenKind> {
    let mut diagnostics = Diagnostics::new();
    Scanner::new(input, &mut diagnostics)
        .scan_tokens()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_keywords() {
    assert_eq!(
        kinds("and or true false nil"),
        vec![
            TokenKind::And,
            TokenKind::Or,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Nil,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comparison_run() {
    assert_eq!(
        kinds("!(x >= 5)"),
        vec![
            TokenKind::Bang,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::GreaterEqual,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );
}
