//! Directive prologue detection.
//!
//! A directive prologue is the leading run of string literal statements of a program or of
//! a function body, e.g. `"use strict";`. Only that run counts; the same statement after
//! any other statement is an ordinary (unused) expression.
//!
//! Membership is decided by node identity. Spans are not unique on ASTs built in code or
//! rewritten by earlier passes, where many nodes carry `DUMMY_SP`.

use std::ptr;

use swc_core::ecma::ast::{Expr, ExprStmt, Lit, Stmt};

use crate::utils::unparen;

/// A node enclosing the statement being checked. Only the nodes that decide whether a
/// directive prologue can exist are tracked.
///
/// Prologues hold the addresses of their statements. The AST is borrowed for the whole
/// walk, so they stay valid while the ancestor is on the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ancestor {
    /// The program root, with its directive prologue.
    Program { prologue: Vec<*const ExprStmt> },
    /// A `{ ... }` block, with its leading directive-looking statements.
    Block { prologue: Vec<*const ExprStmt> },
    /// A function-like construct owning the block that follows it.
    Function,
    /// `static { ... }` in a class body. Its block never has a prologue.
    StaticBlock,
}

pub fn looks_like_directive(stmt: &ExprStmt) -> bool {
    matches!(unparen(&stmt.expr), Expr::Lit(Lit::Str(_)))
}

/// The leading directive-looking statements of a statement list.
pub fn prologue<'a>(stmts: impl IntoIterator<Item = &'a Stmt>) -> Vec<*const ExprStmt> {
    stmts
        .into_iter()
        .map_while(|stmt| match stmt {
            Stmt::Expr(expr_stmt) if looks_like_directive(expr_stmt) => {
                Some(ptr::from_ref(expr_stmt))
            }
            _ => None,
        })
        .collect()
}

/// Whether `stmt` is a directive, given its ancestors (root first, parent last).
pub fn is_directive(stmt: &ExprStmt, ancestors: &[Ancestor]) -> bool {
    let Some((parent, rest)) = ancestors.split_last() else {
        return false;
    };

    let prologue = match parent {
        Ancestor::Program { prologue } => prologue,
        Ancestor::Block { prologue } if matches!(rest.last(), Some(Ancestor::Function)) => {
            prologue
        }
        _ => return false,
    };

    prologue.iter().any(|&entry| ptr::eq(entry, stmt))
}
