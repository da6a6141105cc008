//! JSON dumps of tokens and expression trees.
//!
//! Used by the `--emit json` mode of the command line driver to hand the
//! front-end's output to other tools.
//!
//! # Examples
//!
//! ```
//! use lox_lang::{Diagnostics, output::expr_to_json};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = lox_lang::scan("-1", &mut diagnostics);
//! let expr = lox_lang::parse(tokens, &mut diagnostics).unwrap();
//!
//! let json = expr_to_json(&expr);
//! assert_eq!(json["type"], "unary");
//! assert_eq!(json["operator"], "-");
//! assert_eq!(json["right"]["value"], 1.0);
//! ```

use serde_json::{Map, Value as JsonValue, json};

use crate::ast::{Expr, Literal, LiteralValue, Token, Visitor};

/// Builds a JSON object per node: `{"type": "binary", "operator": "+", ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBuilder;

impl JsonBuilder {
    fn build(&mut self, expr: &Expr) -> JsonValue {
        expr.accept(self)
    }
}

impl Visitor<JsonValue> for JsonBuilder {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> JsonValue {
        json!({
            "type": "binary",
            "operator": operator.lexeme,
            "line": operator.line,
            "left": self.build(left),
            "right": self.build(right),
        })
    }

    fn visit_grouping(&mut self, expression: &Expr) -> JsonValue {
        json!({
            "type": "grouping",
            "expression": self.build(expression),
        })
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> JsonValue {
        let value = match value {
            LiteralValue::Boolean(b) => JsonValue::Bool(*b),
            LiteralValue::Number(n) => number_to_json(*n),
            LiteralValue::String(s) => JsonValue::String(s.clone()),
            LiteralValue::Nil => JsonValue::Null,
        };
        json!({ "type": "literal", "value": value })
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> JsonValue {
        json!({
            "type": "unary",
            "operator": operator.lexeme,
            "line": operator.line,
            "right": self.build(right),
        })
    }
}

/// Non-finite numbers have no JSON form and become `null`.
fn number_to_json(n: f64) -> JsonValue {
    serde_json::Number::from_f64(n)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

/// Converts one token to `{"kind", "lexeme", "literal", "line"}`.
pub fn token_to_json(token: &Token) -> JsonValue {
    let literal = match &token.literal {
        Some(Literal::Number(n)) => number_to_json(*n),
        Some(Literal::String(s)) => JsonValue::String(s.clone()),
        None => JsonValue::Null,
    };

    let mut object = Map::new();
    object.insert("kind".to_string(), JsonValue::String(token.kind.to_string()));
    object.insert("lexeme".to_string(), JsonValue::String(token.lexeme.clone()));
    object.insert("literal".to_string(), literal);
    object.insert("line".to_string(), JsonValue::from(token.line));
    JsonValue::Object(object)
}

pub fn tokens_to_json(tokens: &[Token]) -> JsonValue {
    JsonValue::Array(tokens.iter().map(token_to_json).collect())
}

pub fn expr_to_json(expr: &Expr) -> JsonValue {
    expr.accept(&mut JsonBuilder)
}
