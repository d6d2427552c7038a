/// Spec tests for the Boink semantic analyzer.
///
/// Each test runs the full front end (lexer, parser, analyzer) over a small
/// program and checks the kinds of the reported errors in order.
use boink::diagnostics::ErrorKind;
use boink::source::analyze_source;
use indoc::indoc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn errors(src: &str) -> Vec<ErrorKind> {
    analyze_source("test", src)
        .errors
        .errors()
        .iter()
        .map(|d| d.kind)
        .collect()
}

fn messages(src: &str) -> Vec<String> {
    analyze_source("test", src)
        .errors
        .errors()
        .iter()
        .map(|d| d.message.clone())
        .collect()
}

fn ok(src: &str) {
    let analyzed = analyze_source("test", src);
    assert!(
        analyzed.is_runnable(),
        "expected no errors, got: {:?}",
        analyzed.errors.describe(src)
    );
}

// ---------------------------------------------------------------------------
// Declarations and scopes
// ---------------------------------------------------------------------------

#[test]
fn redeclaration_in_same_scope() {
    assert_eq!(errors("int a\nfloat a\n"), vec![ErrorKind::MultipleDefinition]);
}

#[test]
fn shadowing_in_function_scope_is_allowed() {
    ok(indoc! {"
        int a = 1
        fn f()
          int a = 2
        ;
        f()
    "});
}

#[test]
fn parameters_shadow_outer_names() {
    ok("int a = 1\nfn f(bool a)\n;\nf(true)\n");
}

#[test]
fn duplicate_parameter_names() {
    assert_eq!(
        errors("fn f(int a, int a)\n;\n"),
        vec![ErrorKind::MultipleDefinition]
    );
}

#[test]
fn function_name_clashes_with_outer_chain() {
    assert_eq!(
        errors("fn f()\nfn f()\n;\n;\n"),
        vec![ErrorKind::MultipleDefinition]
    );
}

#[test]
fn names_must_be_declared_before_the_function() {
    let src = indoc! {"
        fn f()
          a = 3
        ;
        int a
        f()
    "};
    assert_eq!(errors(src), vec![ErrorKind::UndefinedSymbol]);
    ok("int a\nfn f()\na = 3\n;\nf()\n");
}

#[test]
fn recursion_is_resolvable() {
    ok("fn f(int n) -> int\ngive f(n)\n;\n");
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[test]
fn assignment_to_undeclared_name() {
    assert_eq!(errors("a = 1\n"), vec![ErrorKind::UndefinedSymbol]);
}

#[test]
fn assignment_of_mismatched_type() {
    assert_eq!(errors("int a\na = true\n"), vec![ErrorKind::IncompatibleTypes]);
    assert_eq!(
        messages("int a\na = true\n"),
        vec!["Type bool and int are not compatible for assignment".to_string()]
    );
}

#[test]
fn undefined_name_in_initializer_cascades() {
    assert_eq!(
        errors("int a = b\n"),
        vec![ErrorKind::UndefinedSymbol, ErrorKind::IncompatibleTypes]
    );
}

// ---------------------------------------------------------------------------
// Operator typing
// ---------------------------------------------------------------------------

#[test]
fn arithmetic_promotion() {
    ok("int i = 1 + 2 - 3\n");
    ok("float f = 1 + 2.0\n");
    ok("float f = 1.5 - 2\n");
    ok("int i = 2 * 3\n");
    ok("float f = 2 * 3.0\n");
    ok("float q = 4 / 2\n");
    assert_eq!(errors("int i = 1 + 2.0\n"), vec![ErrorKind::IncompatibleTypes]);
    assert_eq!(errors("int q = 4 / 2\n"), vec![ErrorKind::IncompatibleTypes]);
}

#[test]
fn logical_operators_need_bools() {
    ok("bool b = true && false || true\n");
    assert_eq!(
        errors("bool b = 1 && 2\n"),
        vec![ErrorKind::IncompatibleTypes, ErrorKind::IncompatibleTypes]
    );
}

#[test]
fn arithmetic_on_bools_is_rejected() {
    let kinds = errors("int i = true + true\n");
    assert_eq!(kinds[0], ErrorKind::IncompatibleTypes);
}

#[test]
fn dynamic_has_no_operators() {
    let kinds = errors("dyn d\ndyn e = d + d\n");
    assert_eq!(kinds[0], ErrorKind::IncompatibleTypes);
}

#[test]
fn unary_minus_keeps_numeric_type() {
    ok("int i = -1\nfloat f = -(2.5 * 2)\n");
}

// ---------------------------------------------------------------------------
// Functions, calls and give
// ---------------------------------------------------------------------------

#[test]
fn too_many_and_too_few_arguments() {
    let src = "fn f(int a)\n;\nf(1, 2)\nf()\n";
    assert_eq!(
        errors(src),
        vec![ErrorKind::ArgumentMismatch, ErrorKind::ArgumentMismatch]
    );
    let msgs = messages(src);
    assert!(msgs[0].starts_with("Too many arguments"), "{:?}", msgs);
    assert!(msgs[1].starts_with("Too few arguments"), "{:?}", msgs);
}

#[test]
fn argument_type_mismatch() {
    assert_eq!(
        errors("fn f(int a, bool b)\n;\nf(1, 2)\n"),
        vec![ErrorKind::IncompatibleTypes]
    );
}

#[test]
fn undefined_function_call() {
    assert_eq!(errors("g(undefinedarg)\n"), vec![ErrorKind::UndefinedSymbol]);
}

#[test]
fn call_result_type_is_give_type() {
    ok("fn f() -> bool\ngive true\n;\nbool b = f()\n");
    assert_eq!(
        errors("fn f()\n;\nint x = f()\n"),
        vec![ErrorKind::IncompatibleTypes]
    );
}

#[test]
fn give_rules() {
    assert_eq!(errors("give 1\n"), vec![ErrorKind::GiveNotAllowed]);
    assert_eq!(errors("fn f()\ngive 1\n;\n"), vec![ErrorKind::IncompatibleTypes]);
    assert_eq!(errors("fn f() -> float\ngive 1\n;\n"), vec![ErrorKind::IncompatibleTypes]);
    assert_eq!(errors("fn f() -> int\nint a = 1\n;\n"), vec![ErrorKind::NoGive]);
}

#[test]
fn give_inside_if_does_not_satisfy_give_type() {
    let src = indoc! {"
        fn f(bool c) -> int
          if (c)
            give 1
          ;
        ;
    "};
    assert_eq!(errors(src), vec![ErrorKind::NoGive]);
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

#[test]
fn errors_accumulate_across_the_program() {
    let src = "int a\na = true\nb = 1\nint a\n";
    assert_eq!(
        errors(src),
        vec![
            ErrorKind::IncompatibleTypes,
            ErrorKind::UndefinedSymbol,
            ErrorKind::MultipleDefinition,
        ]
    );
}

#[test]
fn describe_renders_kind_message_and_position() {
    let src = "int a\na = true\n";
    let analyzed = analyze_source("test", src);
    assert_eq!(
        analyzed.errors.describe(src),
        vec![
            "IncompatibleTypesError: Type bool and int are not compatible for assignment. Error Position: (2, 1)"
                .to_string()
        ]
    );
}
