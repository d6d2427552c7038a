use super::{Analyzer, Symbol};
use crate::ast::{Expr, Program, Stmt};
use crate::diagnostics::{ErrorHandler, ErrorKind};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::types::Type;

fn analyze(src: &str) -> (Program, ErrorHandler, Vec<String>) {
    let mut errors = ErrorHandler::new();
    let mut program = Parser::new(Lexer::new(src), &mut errors).parse("test");
    assert!(errors.is_empty(), "parse errors: {:?}", errors.errors());
    let log = {
        let mut analyzer = Analyzer::new(&mut errors);
        analyzer.visit(&mut program);
        analyzer.into_log()
    };
    (program, errors, log)
}

fn kinds(errors: &ErrorHandler) -> Vec<ErrorKind> {
    errors.errors().iter().map(|d| d.kind).collect()
}

#[test]
fn variables_are_annotated_with_their_declared_type() {
    let (program, errors, _) = analyze("float x = 1.5\nfloat y = x\n");
    assert!(errors.is_empty());
    match &program.statements[1] {
        Stmt::Declaration(decl) => match &decl.init {
            Some(Expr::Variable(var)) => assert_eq!(var.resolved, Some(Type::Float)),
            other => panic!("expected variable initializer, got {:?}", other),
        },
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn function_scope_is_owned_by_the_function() {
    let mut errors = ErrorHandler::new();
    let mut program =
        Parser::new(Lexer::new("fn f(int a) -> int\ngive a\n;\n"), &mut errors).parse("test");
    let mut analyzer = Analyzer::new(&mut errors);
    analyzer.visit(&mut program);

    let scopes = analyzer.scopes();
    assert_eq!(scopes.len(), 2);
    assert_eq!(scopes[0].scope_name, "global");
    assert!(scopes[0].owner.is_none());
    assert_eq!(scopes[1].scope_name, "f");
    assert_eq!(scopes[1].parent, Some(super::ScopeId(0)));
    let owner = scopes[1].owner.as_ref().map(|o| o.name.as_str());
    assert_eq!(owner, Some("f"));
    assert!(matches!(
        scopes[0].lookup_only_current_scope("f"),
        Some(Symbol::Function(_))
    ));
    assert!(scopes[1].lookup_only_current_scope("a").is_some());
    assert!(scopes[0].lookup_only_current_scope("a").is_none());
}

#[test]
fn function_scope_does_not_leak_into_siblings() {
    let (_, errors, _) = analyze("fn f(int a)\nint b = a\n;\nb = 1\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::UndefinedSymbol]);
}

#[test]
fn redefined_function_skips_its_body() {
    let (_, errors, _) = analyze("int f\nfn f()\nint x = true\n;\n");
    // The body holds a type error, but it is never analyzed.
    assert_eq!(kinds(&errors), vec![ErrorKind::MultipleDefinition]);
}

#[test]
fn give_type_without_direct_give_is_reported() {
    let (_, errors, _) = analyze("fn f() -> int\nif (true)\ngive 1\n;\n;\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::NoGive]);
}

#[test]
fn give_outside_function_is_not_allowed() {
    let (_, errors, _) = analyze("give 1\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::GiveNotAllowed]);
}

#[test]
fn give_in_function_without_give_type_is_incompatible() {
    let (_, errors, _) = analyze("fn f()\ngive 1\n;\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::IncompatibleTypes]);
}

#[test]
fn give_of_wrong_type_is_incompatible() {
    let (_, errors, _) = analyze("fn f() -> bool\ngive 1\n;\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::IncompatibleTypes]);
}

#[test]
fn calling_a_variable_is_undefined_symbol() {
    let (_, errors, _) = analyze("int f\nf()\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::UndefinedSymbol]);
}

#[test]
fn call_annotates_give_type() {
    let (program, errors, _) = analyze("fn half(int a) -> float\ngive a / 2\n;\nfloat h = half(3)\n");
    assert!(errors.is_empty(), "{:?}", errors.errors());
    match &program.statements[1] {
        Stmt::Declaration(decl) => {
            assert_eq!(decl.init.as_ref().and_then(|e| e.ty()), Some(Type::Float))
        }
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn binary_operator_mismatch_is_reported_once_per_operator() {
    let (_, errors, _) = analyze("bool b = true\nint x = 1 + b\n");
    // The operator error, then the declaration that cannot be typed.
    assert_eq!(
        kinds(&errors),
        vec![ErrorKind::IncompatibleTypes, ErrorKind::IncompatibleTypes]
    );
    assert!(errors.errors()[0].message.contains("'+'"));
}

#[test]
fn unary_minus_on_bool_is_rejected() {
    let (_, errors, _) = analyze("bool b = -true\n");
    assert_eq!(errors.errors()[0].kind, ErrorKind::IncompatibleTypes);
    assert!(errors.errors()[0].message.contains("'-'"));
}

#[test]
fn if_condition_must_be_bool() {
    let (_, errors, _) = analyze("if (1)\nint a\n;\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::IncompatibleTypes]);
}

#[test]
fn if_body_cannot_redeclare_names_of_its_record() {
    let (_, errors, _) = analyze("int a\nif (true)\nint a\n;\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::MultipleDefinition]);
}

#[test]
fn if_body_names_are_not_visible_after_the_if() {
    let (_, errors, _) = analyze("if (false)\n  int b = 1\n;\nint c = b\n");
    // Undefined name, then the initializer that cannot be typed.
    assert_eq!(
        kinds(&errors),
        vec![ErrorKind::UndefinedSymbol, ErrorKind::IncompatibleTypes]
    );
    assert_eq!(errors.errors()[0].pos, 33);
}

#[test]
fn function_defined_in_if_is_not_callable_after_it() {
    let (_, errors, _) = analyze("if (false)\n  fn g()\n  ;\n;\ng()\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::UndefinedSymbol]);
}

#[test]
fn if_scope_keeps_the_enclosing_owner() {
    let (program, errors, scopes) = {
        let mut errors = ErrorHandler::new();
        let mut program = Parser::new(
            Lexer::new("fn f(bool c) -> int
if (c)
int x = 1
give x
;
give 2
;
"),
            &mut errors,
        )
        .parse("test");
        let mut analyzer = Analyzer::new(&mut errors);
        analyzer.visit(&mut program);
        let scopes = analyzer.scopes().to_vec();
        (program, errors, scopes)
    };
    assert!(errors.is_empty(), "{:?}", errors.errors());
    assert_eq!(program.statements.len(), 1);
    let block = &scopes[2];
    assert_eq!(block.scope_name, "if");
    assert!(block.is_block);
    assert_eq!(block.parent, Some(super::ScopeId(1)));
    assert_eq!(block.owner.as_ref().map(|o| o.name.as_str()), Some("f"));
    assert!(block.lookup_only_current_scope("x").is_some());
}

#[test]
fn dynamic_values_only_assign_to_dynamic() {
    let (_, errors, _) = analyze("dyn a\ndyn b = a\nint c = a\n");
    assert_eq!(kinds(&errors), vec![ErrorKind::IncompatibleTypes]);
}

#[test]
fn log_records_definitions_assignments_and_calls() {
    let (_, errors, log) = analyze("int a = 1\nfn f(int x)\n;\nf(a)\n");
    assert!(errors.is_empty());
    assert_eq!(
        log,
        vec![
            "DEFINITION     : int a defined in scope 'global'.".to_string(),
            "ASSIGNMENT     : Assigned int to int.".to_string(),
            "DEFINITION     : fn [int] f defined in scope 'global'.".to_string(),
            "DEFINITION     : int x defined in scope 'f'.".to_string(),
            "CALL           : Function f called with arguments [int]".to_string(),
        ]
    );
}
