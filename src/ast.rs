//! # Lox Expression Language - Abstract Syntax Tree
//!
//! This module defines the lexical tokens and the expression tree for the Lox
//! expression language front-end.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the scanner
//! - **[expressions]** - Expression nodes (binary, grouping, literal, unary)
//! - **[visitor]** - Traversal trait used by the printers and any later evaluator
//!
//! ## Quick Start
//!
//! ```text
//! -123 * (45.67)
//! ```
//!
//! parses to
//!
//! ```text
//! Binary(Unary(-, Literal(123)), *, Grouping(Literal(45.67)))
//! ```
//!
//! ## Precedence
//!
//! From lowest to highest, every binary level is left-associative:
//!
//! ```text
//! equality    != ==
//! comparison  > >= < <=
//! term        - +
//! factor      / *
//! unary       ! -        (prefix, right-recursive)
//! primary     literals, ( expression )
//! ```
//!
//! ## Trees
//!
//! Nodes own their children through `Box`, are built bottom-up by the parser and
//! never mutated afterwards. Operations over the tree are written as [`Visitor`]
//! implementations so adding one never touches the node types.
pub mod expressions;
pub mod tokens;
pub mod visitor;

pub use expressions::{Expr, LiteralValue};
pub use tokens::{Literal, Token, TokenKind};
pub use visitor::Visitor;
