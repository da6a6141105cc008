use std::fmt;

use crate::ast::{Literal, Token};

/// Value of a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `true` or `false`
    Boolean(bool),

    /// Number literal
    ///
    /// # Example
    /// ```text
    /// 45.67
    /// ```
    Number(f64),

    /// String literal, without its quotes
    String(String),

    /// `nil`
    Nil,
}

impl From<Literal> for LiteralValue {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Number(n) => LiteralValue::Number(n),
            Literal::String(s) => LiteralValue::String(s),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::String(s) => f.write_str(s),
            LiteralValue::Nil => f.write_str("nil"),
        }
    }
}

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Every node exclusively owns its children. Trees are built bottom-up and
/// are not mutated once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Infix operation
    ///
    /// # Examples
    /// ```text
    /// 1 + 2
    /// a != b
    /// ```
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// Parenthesized sub-expression
    ///
    /// # Example
    /// ```text
    /// (1 + 2)
    /// ```
    Grouping { expression: Box<Expr> },

    /// Literal value
    Literal { value: LiteralValue },

    /// Prefix `!` or `-`
    ///
    /// # Examples
    /// ```text
    /// -x
    /// !!true
    /// ```
    Unary { operator: Token, right: Box<Expr> },
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping {
            expression: Box::new(expression),
        }
    }

    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expr::Literal {
            value: value.into(),
        }
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::String(s.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::String(s)
    }
}
