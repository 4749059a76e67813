//! Recognition of chai assertion chains.
//!
//! ```js
//! expect(foo).to.eventually.be.true;
//! foo.should.eventually.be.true;
//! ```
//!
//! Both idioms end in a property access that only exists to trigger the assertion, which
//! looks exactly like an unused expression.

use swc_core::ecma::ast::*;

use crate::utils::unparen;

const EXPECT: &str = "expect";
const SHOULD: &str = "should";

/// Whether `stmt` is a property chain hanging off an `expect(...)` call, e.g.
/// `expect(foo).to.have.a.property('bar').which.is.true`.
pub fn is_expect_chain(stmt: &ExprStmt) -> bool {
    match unparen(&stmt.expr) {
        Expr::Member(member) => reaches_expect_call(&member.obj),
        _ => false,
    }
}

/// Whether `stmt` is a property chain going through `.should`, e.g. `foo.should.be.true`
/// or `foo?.bar?.should.be.true`.
pub fn is_should_chain(stmt: &ExprStmt) -> bool {
    let expr = match unparen(&stmt.expr) {
        Expr::OptChain(OptChainExpr { base, .. }) => match &**base {
            OptChainBase::Member(member) => return reaches_should_access(&member.obj),
            OptChainBase::Call(_) => return false,
        },
        expr => expr,
    };

    match expr {
        Expr::Member(member) => reaches_should_access(&member.obj),
        _ => false,
    }
}

/// Walks from `expr` towards the root of the chain looking for `expect(...)`.
fn reaches_expect_call(expr: &Expr) -> bool {
    let mut current = expr;
    loop {
        current = match unparen(current) {
            Expr::Call(CallExpr {
                callee: Callee::Expr(callee),
                ..
            }) => {
                if is_expect_ident(callee) {
                    return true;
                }
                &**callee
            }
            Expr::Member(member) => &*member.obj,
            Expr::OptChain(OptChainExpr { base, .. }) => match &**base {
                OptChainBase::Call(OptCall { callee, .. }) => {
                    if is_expect_ident(callee) {
                        return true;
                    }
                    &**callee
                }
                OptChainBase::Member(member) => &*member.obj,
            },
            _ => return false,
        };
    }
}

/// Walks from `expr` towards the root of the chain looking for a `.should` access.
fn reaches_should_access(expr: &Expr) -> bool {
    let mut current = expr;
    loop {
        current = match unparen(current) {
            Expr::Member(member) => {
                if is_should_prop(&member.prop) {
                    return true;
                }
                &*member.obj
            }
            Expr::SuperProp(super_prop) => {
                // The object is `super`, so the chain ends here either way.
                return matches!(
                    &super_prop.prop,
                    SuperProp::Ident(ident) if ident.sym == SHOULD
                ) || matches!(
                    &super_prop.prop,
                    SuperProp::Computed(computed) if is_should_ident(&computed.expr)
                );
            }
            Expr::Call(CallExpr {
                callee: Callee::Expr(callee),
                ..
            }) => &**callee,
            Expr::OptChain(OptChainExpr { base, .. }) => match &**base {
                OptChainBase::Member(member) => {
                    if is_should_prop(&member.prop) {
                        return true;
                    }
                    &*member.obj
                }
                OptChainBase::Call(OptCall { callee, .. }) => &**callee,
            },
            _ => return false,
        };
    }
}

fn is_expect_ident(expr: &Expr) -> bool {
    matches!(unparen(expr), Expr::Ident(ident) if ident.sym == EXPECT)
}

fn is_should_ident(expr: &Expr) -> bool {
    matches!(unparen(expr), Expr::Ident(ident) if ident.sym == SHOULD)
}

/// Matches on the property's name the way ESTree exposes it, so `foo[should]` and
/// `this.#should` count while `foo['should']` does not.
fn is_should_prop(prop: &MemberProp) -> bool {
    match prop {
        MemberProp::Ident(ident) => ident.sym == SHOULD,
        MemberProp::PrivateName(private) => private.name == SHOULD,
        MemberProp::Computed(computed) => is_should_ident(&computed.expr),
    }
}
