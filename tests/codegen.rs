use jspy::{
    ast::Expr,
    config::Options,
    translate, translate_with,
    translator::{
        codegen::{Generator, format_number, render},
        context::{Context, Externals},
        parser::parse,
    },
};

fn python(src: &str) -> String {
    let translation = translate(src);
    assert!(translation.is_clean(), "Translating {src:?} failed: {:?}", translation.diagnostics);
    translation.code
}

fn render_first_statement(src: &str) -> String {
    let mut context = Context::with_externals(Externals::host_defaults());
    parse(src, &mut context);
    Generator::default().render_statement(&context.globals[0].body)
                        .trim_end()
                        .to_string()
}

#[test]
fn binary_expressions_are_parenthesized() {
    assert_eq!(render_first_statement("1 + 2 * 3"), "(1.0 + (2.0 * 3.0))");
    assert_eq!(render_first_statement("(1 + 2) * 3"), "((1.0 + 2.0) * 3.0)");
    assert_eq!(render_first_statement("a < b"), "(a < b)");
}

#[test]
fn assignments_and_declarations_are_not_parenthesized() {
    assert_eq!(render_first_statement("var foo = 1.0"), "foo = 1.0");
    assert_eq!(render_first_statement("foo = bar / 2"), "foo = (bar / 2.0)");
}

#[test]
fn declaration_keyword_is_configurable() {
    let generator = Generator::new(Options { declaration_keyword: Some("let".to_string()),
                                             ..Options::default() });
    let mut context = Context::new();
    parse("var foo = 1\nfoo = 2\nvar a = b = 3", &mut context);

    assert_eq!(generator.render(&context), "let foo = 1.0\nfoo = 2.0\nlet a = b = 3.0\n\n");
}

#[test]
fn assignment_chains_render_as_python_chains() {
    assert_eq!(python("a = b = 1"), "a = b = 1.0\n\n");
    assert_eq!(python("var a = b = 1"), "a = b = 1.0\n\n");
    assert_eq!(python("var a = b = c = x + 1"), "a = b = c = (x + 1.0)\n\n");
}

#[test]
fn assignments_inside_expressions_become_assignment_expressions() {
    assert_eq!(python("f(a = 1)"), "f((a := 1.0))\n\n");
    assert_eq!(python("f(a = b = 1)"), "f((a := (b := 1.0)))\n\n");
    assert_eq!(python("x = if (c) y = 1 else 2"), "x = ((y := 1.0) if c else 2.0)\n\n");
    assert_eq!(python("x = { a = 1; a + 1 }"), "x = ((a := 1.0), (a + 1.0))[-1]\n\n");
    assert_eq!(python("function f() { return a = 1 }"),
               "\ndef f():\n    return (a := 1.0)\n\n");
}

#[test]
fn numbers_render_as_python_floats() {
    assert_eq!(format_number(1.0), "1.0");
    assert_eq!(format_number(0.0), "0.0");
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(0.125), "0.125");
    assert_eq!(format_number(1_000_000.0), "1000000.0");
}

#[test]
fn calls_render_with_remapped_names() {
    assert_eq!(render_first_statement("Math.max(1, 2)"), "max(1.0, 2.0)");
    assert_eq!(render_first_statement("f()"), "f()");
    assert_eq!(render_first_statement("f(a + 1, g(b))"), "f((a + 1.0), g(b))");
}

#[test]
fn function_definitions() {
    assert_eq!(python("function add(a, b) { return a + b; }"),
               "\ndef add(a, b):\n    return (a + b)\n\n");
    assert_eq!(python("function noop() {}"), "\ndef noop():\n    pass\n\n");
}

#[test]
fn globals_come_before_functions() {
    let src = "function get_bar() {\n    return bar\n}\nvar foo = 1.0\nfoo = get_bar()";

    assert_eq!(python(src),
               "foo = 1.0\nfoo = get_bar()\n\ndef get_bar():\n    return bar\n\n");
}

#[test]
fn indent_width_is_configurable() {
    let options = Options { indent_width: 2,
                            ..Options::default() };
    let translation = translate_with("function f(x) { if (x) { return 1 } }",
                                     &mut Context::new(),
                                     &Generator::new(options));

    assert_eq!(translation.code, "\ndef f(x):\n  if x:\n    return 1.0\n\n");
}

#[test]
fn if_else_statements() {
    assert_eq!(python("if (a < 0) { b = 0; } else { b = 1; }"),
               "if (a < 0.0):\n    b = 0.0\nelse:\n    b = 1.0\n\n");
    assert_eq!(python("if (a < 0) b = 0"), "if (a < 0.0):\n    b = 0.0\n\n");
}

#[test]
fn else_if_renders_as_elif() {
    assert_eq!(python("if (a < 0) b = 0 else if (a > 0) b = 1 else b = 2"),
               "if (a < 0.0):\n    b = 0.0\nelif (a > 0.0):\n    b = 1.0\nelse:\n    b = 2.0\n\n");
}

#[test]
fn else_block_containing_if_stays_nested() {
    assert_eq!(python("if (a) { b = 0 } else { if (c) { b = 1 } }"),
               "if a:\n    b = 0.0\nelse:\n    if c:\n        b = 1.0\n\n");
}

#[test]
fn nested_blocks_follow_their_depth() {
    let src = "function f(a, b) {\n    if (a) {\n        if (b) {\n            return 1\n        }\n    }\n    return 0\n}";

    assert_eq!(python(src),
               "\ndef f(a, b):\n    if a:\n        if b:\n            return 1.0\n    return 0.0\n\n");
}

#[test]
fn braceless_branch_still_indents_its_block() {
    assert_eq!(python("if (a) if (b) { c = 1 }"), "if a:\n    if b:\n        c = 1.0\n\n");
}

#[test]
fn standalone_blocks_are_flattened() {
    assert_eq!(python("{ a = 1; b = 2 }"), "a = 1.0\nb = 2.0\n\n");
    assert_eq!(python("{}"), "pass\n\n");
}

#[test]
fn if_in_expression_position_is_a_conditional_expression() {
    assert_eq!(render_first_statement("x = if (a) 1 else 2"), "x = (1.0 if a else 2.0)");
    assert_eq!(render_first_statement("x = if (a) 1"), "x = (1.0 if a else None)");
}

#[test]
fn block_in_expression_position_yields_its_last_value() {
    assert_eq!(render_first_statement("x = { 1; 2 }"), "x = (1.0, 2.0)[-1]");
    assert_eq!(render_first_statement("x = { 3 }"), "x = 3.0");
    assert_eq!(render_first_statement("x = {}"), "x = None");
}

#[test]
fn render_uses_default_options() {
    let mut context = Context::new();
    parse("var x = 1\nfunction f() { return x }", &mut context);

    assert_eq!(render(&context), Generator::new(Options::default()).render(&context));
}

#[test]
fn failed_statements_are_absent_from_the_output() {
    let translation = translate("a = 1\nb = (2\nc = 3");

    assert_eq!(translation.code, "a = 1.0\nc = 3.0\n\n");
    assert_eq!(translation.diagnostics.len(), 1);
}

#[test]
fn return_renders_its_value() {
    let expr = Expr::Return { value: Box::new(Expr::binary(Expr::variable("a"), '*', Expr::number(2.0))) };
    assert_eq!(Generator::default().render_expression(&expr), "return (a * 2.0)");
}
