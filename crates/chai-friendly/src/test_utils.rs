use swc_core::{
    common::{FileName, GLOBALS, SourceMap, sync::Lrc},
    ecma::{
        ast::{EsVersion, ExprStmt, ModuleItem, Program, Stmt},
        parser::{EsSyntax, Syntax, parse_file_as_program},
    },
};

/// Parses `code` as a script or module with JSX enabled.
pub fn parse(code: &str) -> Program {
    GLOBALS.set(&Default::default(), || {
        let cm = Lrc::new(SourceMap::default());
        let fm = cm.new_source_file(Lrc::new(FileName::Anon), code.to_string());

        let mut errors = vec![];
        let program = parse_file_as_program(
            &fm,
            Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
            EsVersion::latest(),
            None,
            &mut errors,
        )
        .expect("Failed to parse");
        assert!(errors.is_empty(), "unexpected recoverable errors in:\n{code}");
        program
    })
}

/// The top-level expression statements of `program`, in source order.
pub fn top_level_expr_stmts(program: &Program) -> Vec<&ExprStmt> {
    match program {
        Program::Module(module) => module
            .body
            .iter()
            .filter_map(ModuleItem::as_stmt)
            .filter_map(Stmt::as_expr)
            .collect(),
        Program::Script(script) => script.body.iter().filter_map(Stmt::as_expr).collect(),
    }
}

/// The single top-level expression statement of `code`.
pub fn expr_stmt(code: &str) -> ExprStmt {
    let program = parse(code);
    let stmts = top_level_expr_stmts(&program);
    assert_eq!(stmts.len(), 1, "expected one expression statement in:\n{code}");
    stmts[0].clone()
}
