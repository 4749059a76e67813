use swc_core::common::{Span, errors::HANDLER};

use crate::config::Severity;

/// A single rule violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Fully qualified rule id, e.g. `chai-friendly/no-unused-expressions`.
    pub rule_id: &'static str,
    pub message_id: &'static str,
    pub message: &'static str,
    pub severity: Severity,
    pub span: Span,
}

/// Receives the violations found by a rule.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Emits violations through the swc [`HANDLER`] of the current pipeline.
///
/// Must be used while a handler is set, like any other swc pass that reports errors.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandlerReporter;

impl Reporter for HandlerReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        let message = format!("{} ({})", diagnostic.message, diagnostic.rule_id);
        HANDLER.with(|handler| match diagnostic.severity {
            Severity::Off => {}
            Severity::Warn => handler.struct_span_warn(diagnostic.span, &message).emit(),
            Severity::Error => handler.struct_span_err(diagnostic.span, &message).emit(),
        });
    }
}
