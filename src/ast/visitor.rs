use crate::ast::{Expr, LiteralValue, Token};

/// One operation over the expression tree.
///
/// Each method receives the fields of one node variant. Implementations
/// recurse by calling [`Expr::accept`] on the children they care about.
pub trait Visitor<R> {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> R;
    fn visit_grouping(&mut self, expression: &Expr) -> R;
    fn visit_literal(&mut self, value: &LiteralValue) -> R;
    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> R;
}

impl Expr {
    /// Dispatches to the visitor method for this node's variant.
    pub fn accept<R, V>(&self, visitor: &mut V) -> R
    where
        V: Visitor<R> + ?Sized,
    {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Grouping { expression } => visitor.visit_grouping(expression),
            Expr::Literal { value } => visitor.visit_literal(value),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
        }
    }
}
