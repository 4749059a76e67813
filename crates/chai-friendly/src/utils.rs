use swc_core::ecma::ast::Expr;

/// Strips any number of parentheses around `expr`.
///
/// ESTree has no node for parentheses, so every check in this crate looks through them.
pub fn unparen(expr: &Expr) -> &Expr {
    let mut expr = expr;
    while let Expr::Paren(paren) = expr {
        expr = &*paren.expr;
    }
    expr
}
