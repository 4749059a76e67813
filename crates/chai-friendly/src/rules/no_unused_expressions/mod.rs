//! `chai-friendly/no-unused-expressions`: disallow unused expressions, except for directives
//! and chai assertion chains.

mod assertions;
mod directives;
mod side_effects;

use serde::Serialize;
use serde_json::{Value, json};
use swc_core::ecma::{
    ast::*,
    visit::{Visit, VisitWith, noop_visit_type},
};
use tracing::{debug, trace};

pub use self::{
    assertions::{is_expect_chain, is_should_chain},
    directives::{Ancestor, is_directive, looks_like_directive},
    side_effects::is_disallowed,
};
use crate::{
    config::{Options, RuleSetting},
    diagnostics::{Diagnostic, Reporter},
};

pub const RULE_NAME: &str = "no-unused-expressions";
pub const RULE_ID: &str = "chai-friendly/no-unused-expressions";
pub const MESSAGE_ID: &str = "unusedExpression";
pub const MESSAGE: &str = "Expected an assignment or function call and instead saw an expression.";

/// Whether `stmt` is acceptable in its position.
pub fn is_valid(stmt: &ExprStmt, ancestors: &[Ancestor], options: &Options) -> bool {
    if !is_disallowed(&stmt.expr, options) {
        return true;
    }
    if is_directive(stmt, ancestors) {
        trace!(span = ?stmt.span, "directive");
        return true;
    }
    if is_expect_chain(stmt) || is_should_chain(stmt) {
        trace!(span = ?stmt.span, "chai assertion chain");
        return true;
    }
    false
}

/// The rule as a visitor. Every expression statement reached during the walk is checked
/// and violations are handed to `R`.
pub struct NoUnusedExpressions<R: Reporter> {
    setting: RuleSetting,
    reporter: R,
    ancestors: Vec<Ancestor>,
}

impl<R: Reporter> NoUnusedExpressions<R> {
    pub fn new(setting: RuleSetting, reporter: R) -> Self {
        NoUnusedExpressions {
            setting,
            reporter,
            ancestors: Vec::new(),
        }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn with_ancestor<F>(&mut self, ancestor: Ancestor, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.ancestors.push(ancestor);
        f(self);
        self.ancestors.pop();
    }

    fn check(&mut self, stmt: &ExprStmt) {
        if !self.setting.severity.is_enabled()
            || is_valid(stmt, &self.ancestors, &self.setting.options)
        {
            return;
        }

        debug!(span = ?stmt.span, "unused expression");
        self.reporter.report(Diagnostic {
            rule_id: RULE_ID,
            message_id: MESSAGE_ID,
            message: MESSAGE,
            severity: self.setting.severity,
            span: stmt.span,
        });
    }
}

impl<R: Reporter> Visit for NoUnusedExpressions<R> {
    noop_visit_type!();

    fn visit_program(&mut self, program: &Program) {
        if !self.setting.severity.is_enabled() {
            return;
        }
        program.visit_children_with(self);
    }

    fn visit_module(&mut self, module: &Module) {
        let prologue = directives::prologue(module.body.iter().map_while(ModuleItem::as_stmt));
        self.with_ancestor(Ancestor::Program { prologue }, |this| {
            module.visit_children_with(this)
        });
    }

    fn visit_script(&mut self, script: &Script) {
        let prologue = directives::prologue(&script.body);
        self.with_ancestor(Ancestor::Program { prologue }, |this| {
            script.visit_children_with(this)
        });
    }

    fn visit_function(&mut self, function: &Function) {
        self.with_ancestor(Ancestor::Function, |this| function.visit_children_with(this));
    }

    fn visit_arrow_expr(&mut self, arrow: &ArrowExpr) {
        self.with_ancestor(Ancestor::Function, |this| arrow.visit_children_with(this));
    }

    fn visit_constructor(&mut self, constructor: &Constructor) {
        self.with_ancestor(Ancestor::Function, |this| {
            constructor.visit_children_with(this)
        });
    }

    fn visit_getter_prop(&mut self, getter: &GetterProp) {
        self.with_ancestor(Ancestor::Function, |this| getter.visit_children_with(this));
    }

    fn visit_setter_prop(&mut self, setter: &SetterProp) {
        self.with_ancestor(Ancestor::Function, |this| setter.visit_children_with(this));
    }

    fn visit_static_block(&mut self, block: &StaticBlock) {
        self.with_ancestor(Ancestor::StaticBlock, |this| block.visit_children_with(this));
    }

    fn visit_block_stmt(&mut self, block: &BlockStmt) {
        let prologue = directives::prologue(&block.stmts);
        self.with_ancestor(Ancestor::Block { prologue }, |this| {
            block.visit_children_with(this)
        });
    }

    fn visit_expr_stmt(&mut self, stmt: &ExprStmt) {
        self.check(stmt);
        stmt.visit_children_with(self);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleDocs {
    pub description: &'static str,
    pub category: &'static str,
    pub recommended: bool,
}

/// Static description of the rule, in the shape ESLint expects from `meta`.
#[derive(Debug, Clone, Serialize)]
pub struct RuleMeta {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub docs: RuleDocs,
    pub schema: Value,
    pub messages: indexmap::IndexMap<&'static str, &'static str>,
}

pub fn meta() -> RuleMeta {
    RuleMeta {
        kind: "suggestion",
        docs: RuleDocs {
            description: "disallow unused expressions",
            category: "Best Practices",
            recommended: false,
        },
        schema: json!([
            {
                "type": "object",
                "properties": {
                    "allowShortCircuit": { "type": "boolean" },
                    "allowTernary": { "type": "boolean" },
                    "allowTaggedTemplates": { "type": "boolean" },
                    "enforceForJSX": { "type": "boolean", "default": false }
                },
                "additionalProperties": false
            }
        ]),
        messages: [(MESSAGE_ID, MESSAGE)].into_iter().collect(),
    }
}
