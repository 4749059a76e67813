use anyhow::{Result, anyhow};
use serde::Serialize;
use swc_core::{
    common::{FileName, GLOBALS, SourceMap, sync::Lrc},
    ecma::{
        ast::{EsVersion, Pass, Program},
        parser::{Syntax, parse_file_as_program},
        visit::{Visit, VisitWith, visit_pass},
    },
};

use crate::{
    config::{RuleSetting, Severity},
    diagnostics::{Diagnostic, HandlerReporter},
    rules::no_unused_expressions::NoUnusedExpressions,
};

pub fn linter<V>(visitor: V) -> impl Pass
where
    V: Visit,
{
    visit_pass(visitor)
}

/// `no-unused-expressions` as an swc pass. Violations go to the current `HANDLER`.
pub fn no_unused_expressions(setting: RuleSetting) -> impl Pass {
    linter(NoUnusedExpressions::new(setting, HandlerReporter))
}

/// Runs `no-unused-expressions` over an already parsed program.
pub fn lint_program(program: &Program, setting: &RuleSetting) -> Vec<Diagnostic> {
    let _span = tracing::trace_span!("no_unused_expressions").entered();
    let mut rule = NoUnusedExpressions::new(*setting, Vec::new());
    program.visit_with(&mut rule);
    rule.into_reporter()
}

/// A [`Diagnostic`] resolved against its source text. Lines and columns are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    pub rule_id: &'static str,
    pub message_id: &'static str,
    pub message: &'static str,
    pub severity: Severity,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// Parses `source` and runs `no-unused-expressions` over it.
///
/// Fails if the source does not parse; the rule itself never fails.
pub fn lint_source(
    file_name: &str,
    source: &str,
    syntax: Syntax,
    setting: &RuleSetting,
) -> Result<Vec<LintMessage>> {
    GLOBALS.set(&Default::default(), || {
        let cm = Lrc::new(SourceMap::default());
        let fm = cm.new_source_file(
            Lrc::new(FileName::Custom(file_name.to_string())),
            source.to_string(),
        );

        let mut errors = vec![];
        let span = tracing::trace_span!("swc_parse", file_name).entered();
        let program = parse_file_as_program(&fm, syntax, EsVersion::latest(), None, &mut errors)
            .map_err(|err| anyhow!("failed to parse {file_name}: {}", err.kind().msg()))?;
        drop(span);

        if let Some(err) = errors.first() {
            return Err(anyhow!("failed to parse {file_name}: {}", err.kind().msg()));
        }

        let messages = lint_program(&program, setting)
            .into_iter()
            .map(|diagnostic| {
                let start = cm.lookup_char_pos(diagnostic.span.lo);
                let end = cm.lookup_char_pos(diagnostic.span.hi);
                LintMessage {
                    rule_id: diagnostic.rule_id,
                    message_id: diagnostic.message_id,
                    message: diagnostic.message,
                    severity: diagnostic.severity,
                    line: start.line,
                    column: start.col.0 + 1,
                    end_line: end.line,
                    end_column: end.col.0 + 1,
                }
            })
            .collect();
        Ok(messages)
    })
}
