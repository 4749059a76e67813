//! A `no-unused-expressions` lint rule for the swc ECMAScript AST that stays quiet on
//! chai assertion chains.
//!
//! Statements that consist of a bare expression without a side effect (`a;`, `foo.bar;`,
//! `a || b;`) are reported, except for:
//! - directive prologues such as `"use strict";` at the top of a program or function body,
//! - chai `expect` chains like `expect(foo).to.be.true;`,
//! - chai `should` chains like `foo.should.be.true;`.
//!
//! The rule is exposed as a [`swc_core::ecma::visit::Visit`] implementation
//! ([`rules::no_unused_expressions::NoUnusedExpressions`]), as an swc `Pass` through
//! [`linter::no_unused_expressions`], and as a standalone driver over source text through
//! [`linter::lint_source`].

pub mod config;
pub mod diagnostics;
pub mod linter;
pub mod plugin;
pub mod rules;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{Options, RuleSetting, Severity};
pub use diagnostics::{Diagnostic, HandlerReporter, Reporter};
pub use plugin::Plugin;
