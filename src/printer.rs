//! Text renderings of an expression tree.
//!
//! - [`AstPrinter`] - fully parenthesized prefix form, e.g. `(* (- 123) 45.67)`
//! - [`RpnPrinter`] - reverse-Polish form, e.g. `-123 45.67 *`
//!
//! Both are stateless and produce the same literal text: numbers in their
//! shortest form (`123`, not `123.0`), strings without quotes, and `nil`.
//!
//! # Examples
//!
//! ```
//! use lox_lang::{Diagnostics, printer::AstPrinter};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = lox_lang::scan("1 - 2 - 3", &mut diagnostics);
//! let expr = lox_lang::parse(tokens, &mut diagnostics).unwrap();
//!
//! assert_eq!(AstPrinter.print(&expr), "(- (- 1 2) 3)");
//! ```

use crate::ast::{Expr, LiteralValue, Token, Visitor};

/// Renders every operator application in parentheses, operator first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&self, expr: &Expr) -> String {
        expr.accept(&mut AstPrinter)
    }

    fn render(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut result = format!("({}", name);
        for expr in exprs {
            result.push(' ');
            result.push_str(&self.render(expr));
        }
        result.push(')');
        result
    }
}

impl Visitor<String> for AstPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, expression: &Expr) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[right])
    }
}

/// Renders operands before their operator.
///
/// Groupings disappear. A prefix operator is glued to the front of its
/// operand's rendering, so `-(1 + 2)` comes out as `-1 2 +`; that output is
/// not valid postfix and cannot be read back unambiguously.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn print(&self, expr: &Expr) -> String {
        expr.accept(&mut RpnPrinter)
    }

    fn render(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }
}

impl Visitor<String> for RpnPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        format!(
            "{} {} {}",
            self.render(left),
            self.render(right),
            operator.lexeme
        )
    }

    fn visit_grouping(&mut self, expression: &Expr) -> String {
        self.render(expression)
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        format!("{}{}", operator.lexeme, self.render(right))
    }
}
