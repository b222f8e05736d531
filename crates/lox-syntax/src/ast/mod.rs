// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Expression tree definitions for Lox.
//!
//! Nothing builds these yet; they fix the shape a parser will produce from
//! the token stream.

use std::fmt;

use crate::lexer::{Literal, Token};

/// A Lox expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Binary operation: `left operator right`
    Binary(BinaryExpr),
    /// Parenthesized expression
    Grouping(Box<Expr>),
    /// Literal value
    Literal(Literal),
}

/// A binary expression.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// Left operand
    pub left: Box<Expr>,
    /// Operator token
    pub operator: Token,
    /// Right operand
    pub right: Box<Expr>,
}

impl Expr {
    /// Builds a binary expression.
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Wraps an expression in a grouping.
    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }
}

/// Renders the tree in parenthesized prefix form, e.g. `(* (- 1.0) 2.0)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.operator.lexeme(),
                binary.left,
                binary.right
            ),
            Expr::Grouping(inner) => write!(f, "(group {inner})"),
            Expr::Literal(Literal::None) => f.write_str("nil"),
            Expr::Literal(literal) => write!(f, "{literal}"),
        }
    }
}
