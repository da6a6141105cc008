use std::fmt;

use crate::{
    ast::{Expr, LiteralValue, Token, TokenKind},
    diagnostics::{Diagnostic, Diagnostics},
};

/// A failed parse. The diagnostic has already been reported to the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub diagnostic: Diagnostic,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostic)
    }
}

impl std::error::Error for ParseError {}

type ParseResult = Result<Expr, ParseError>;

/// Recursive-descent parser over a scanned token sequence.
pub struct Parser<'d> {
    tokens: Vec<Token>,
    current: usize,
    diagnostics: &'d mut Diagnostics,
}

impl<'d> Parser<'d> {
    /// Creates a parser, appending an EOF token if `tokens` does not end with one.
    pub fn new(mut tokens: Vec<Token>, diagnostics: &'d mut Diagnostics) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::eof(line));
        }
        Parser {
            tokens,
            current: 0,
            diagnostics,
        }
    }

    /// Parses one expression. Returns `None` if a syntax error was reported.
    pub fn parse(&mut self) -> Option<Expr> {
        self.parse_expression().ok()
    }

    pub fn parse_expression(&mut self) -> ParseResult {
        let result = self.expression();
        match &result {
            Ok(_) => tracing::debug!(consumed = self.current, "parsed expression"),
            Err(e) => tracing::debug!(error = %e, "parse abandoned"),
        }
        result
    }

    /// The next token not yet consumed.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Discards tokens until the next likely statement boundary: just past a
    /// `;`, or before a keyword that starts a statement.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {}
            }

            self.advance();
        }
    }

    fn expression(&mut self) -> ParseResult {
        self.equality()
    }

    fn equality(&mut self) -> ParseResult {
        let mut left = self.comparison()?;

        while self.match_any(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            left = Expr::binary(left, operator, right);
        }
        Ok(left)
    }

    fn comparison(&mut self) -> ParseResult {
        let mut left = self.term()?;

        while self.match_any(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            left = Expr::binary(left, operator, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> ParseResult {
        let mut left = self.factor()?;

        while self.match_any(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            left = Expr::binary(left, operator, right);
        }
        Ok(left)
    }

    fn factor(&mut self) -> ParseResult {
        let mut left = self.unary()?;

        while self.match_any(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            left = Expr::binary(left, operator, right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> ParseResult {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?; // Right-recursive
            return Ok(Expr::unary(operator, right));
        }
        self.primary()
    }

    fn primary(&mut self) -> ParseResult {
        let token = self.peek();
        let (kind, literal) = (token.kind, token.literal.clone());

        let expr = match kind {
            TokenKind::False => Expr::literal(false),
            TokenKind::True => Expr::literal(true),
            TokenKind::Nil => Expr::literal(LiteralValue::Nil),
            TokenKind::Number | TokenKind::String => match literal {
                Some(literal) => Expr::literal(literal),
                None => return Err(self.error_at_current("Expect expression.")),
            },
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(self.error_at_current("Expect expression.")),
        };
        self.advance();
        Ok(expr)
    }

    /// Consumes the current token if it has one of `kinds`.
    fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.error_at_current(message))
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// The most recently consumed token.
    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    fn error_at_current(&mut self, message: &str) -> ParseError {
        let token = self.tokens[self.current].clone();
        ParseError {
            diagnostic: self.diagnostics.error_at(&token, message),
        }
    }
}
