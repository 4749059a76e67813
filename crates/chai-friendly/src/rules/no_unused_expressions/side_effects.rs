//! Classification of expressions that are known to be free of side effects.
//!
//! Only syntactic shapes are considered. Identifier bindings, getters and runtime values
//! are never looked at, so `foo.bar` counts as side-effect free even if `bar` is a getter.

use swc_core::ecma::ast::*;

use crate::{config::Options, utils::unparen};

/// Returns `true` if `expr` is side-effect free and therefore pointless as a statement.
///
/// Shapes that are not recognized return `false`: an unknown construct is assumed to do
/// something, which keeps the rule from reporting code it does not understand.
pub fn is_disallowed(expr: &Expr, options: &Options) -> bool {
    match unparen(expr) {
        Expr::Lit(_)
        | Expr::Ident(_)
        | Expr::Member(_)
        | Expr::SuperProp(_)
        | Expr::Array(_)
        | Expr::Object(_)
        | Expr::This(_)
        | Expr::Fn(_)
        | Expr::Arrow(_)
        | Expr::Class(_)
        | Expr::MetaProp(_)
        | Expr::Tpl(_)
        | Expr::Seq(_) => true,

        // `void` and `delete` only exist for their evaluation.
        Expr::Unary(UnaryExpr { op, .. }) => !matches!(op, UnaryOp::Void | UnaryOp::Delete),

        Expr::Bin(BinExpr { op, right, .. }) if is_logical(*op) => {
            // The left operand always runs, only the right one is conditional.
            !options.allow_short_circuit || is_disallowed(right, options)
        }
        Expr::Bin(_) => true,

        // With `allow_ternary`, a ternary is exempt only when neither branch would be
        // reported on its own: `a ? b() : c()` passes, `a ? b : c()` does not.
        Expr::Cond(CondExpr { cons, alt, .. }) => {
            !options.allow_ternary || is_disallowed(cons, options) || is_disallowed(alt, options)
        }

        Expr::TaggedTpl(_) => !options.allow_tagged_templates,

        Expr::OptChain(OptChainExpr { base, .. }) => match &**base {
            OptChainBase::Member(_) => true,
            OptChainBase::Call(_) => false,
        },

        Expr::JSXElement(_) | Expr::JSXFragment(_) => options.enforce_for_jsx,

        // Calls, `new`, assignments, updates, `await`, `yield`, `import()` and anything
        // TypeScript specific.
        _ => false,
    }
}

fn is_logical(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
    )
}
