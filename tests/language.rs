use std::{
    fs::{self},
    io,
};

use prog::{
    error::{Error, RuntimeError},
    get_result_with,
    interpreter::{
        evaluator::Context,
        lexer::tokenize,
        parser::parse,
        value::{Value, ValueKind},
    },
    run, RunOptions,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_prog_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code, io::sink()) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No prog examples found in book/src");
}

fn extract_prog_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```prog") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn value_of(src: &str) -> Value {
    run(src, io::sink()).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run(src, &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).expect("output is valid UTF-8")
}

fn runtime_error_of(src: &str) -> RuntimeError {
    match run(src, io::sink()) {
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("Expected a runtime error, got: {e}"),
        Ok(v) => panic!("Script succeeded with {v} but was expected to fail"),
    }
}

fn assert_failure(src: &str) {
    if run(src, io::sink()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn while_loop_counts_to_five() {
    assert_eq!(output_of("let x = 1; while (x < 5) { x = x + 1; } print(x);"),
               "5\n");
}

#[test]
fn builtins_print_space_separated() {
    assert_eq!(output_of("print(floor(3.7), sin(0));"), "3 0\n");
    assert_eq!(output_of("print(\"a b\", \"c\", true, none)"), "a b c true none\n");
    assert_eq!(output_of("print()"), "\n");
}

#[test]
fn print_returns_none() {
    assert_eq!(value_of("print(1)"), Value::None);
}

#[test]
fn strings_have_no_escapes() {
    assert_eq!(output_of(r#"print("a\nb")"#), "a\\nb\n");
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(value_of("2 - 2 - 2"), Value::Number(-2.0));
    assert_eq!(value_of("10 - 4 - 3 - 2"), Value::Number(1.0));
    assert_eq!(value_of("100 / 10 / 5 / 2"), Value::Number(1.0));
    assert_eq!(value_of("1 - 2 + 3 - 4 + 5"), Value::Number(3.0));
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(output_of("let a; let b; let c = 3; a = b = c; print(a, b, c);"),
               "3 3 3\n");
}

#[test]
fn assignment_yields_assigned_value() {
    assert_eq!(value_of("let a = 1; a = 7"), Value::Number(7.0));
}

#[test]
fn precedence_follows_operator_table() {
    assert_eq!(value_of("1 + 2 * 3"), Value::Number(7.0));
    assert_eq!(value_of("(1 + 2) * 3"), Value::Number(9.0));
    assert_eq!(value_of("2 * 3 % 4"), Value::Number(2.0));
    assert_eq!(value_of("-2 * 3"), Value::Number(-6.0));
    assert_eq!(value_of("1 + 1 < 3 == true"), Value::Boolean(true));
    assert_eq!(value_of("1 < 2 && 3 >= 3 || false"), Value::Boolean(true));
}

#[test]
fn equality_is_structural() {
    assert_eq!(value_of("1 == 1.0"), Value::Boolean(true));
    assert_eq!(value_of("1 == \"1\""), Value::Boolean(false));
    assert_eq!(value_of("none == none"), Value::Boolean(true));
    assert_eq!(value_of("none != false"), Value::Boolean(true));
    assert_eq!(value_of("\"ab\" == \"ab\""), Value::Boolean(true));
}

#[test]
fn unary_operators() {
    assert_eq!(value_of("+4"), Value::Number(4.0));
    assert_eq!(value_of("-(1 + 2)"), Value::Number(-3.0));
    assert_eq!(value_of("!(1 < 2)"), Value::Boolean(false));
}

#[test]
fn no_implicit_coercion() {
    assert!(matches!(runtime_error_of("if (5) {}"),
                     RuntimeError::ExpectedBoolean { found: ValueKind::Number,
                                                     line:  1, }));
    assert!(matches!(runtime_error_of("while (none) {}"),
                     RuntimeError::ExpectedBoolean { found: ValueKind::None, .. }));
    assert!(matches!(runtime_error_of("\"a\" + 1"),
                     RuntimeError::ExpectedNumber { found: ValueKind::String, .. }));
    assert!(matches!(runtime_error_of("-true"),
                     RuntimeError::ExpectedNumber { found: ValueKind::Boolean, .. }));
    assert!(matches!(runtime_error_of("!1"),
                     RuntimeError::ExpectedBoolean { found: ValueKind::Number, .. }));
    assert!(matches!(runtime_error_of("1 && true"),
                     RuntimeError::ExpectedBoolean { .. }));
}

#[test]
fn logical_operators_do_not_short_circuit() {
    assert!(matches!(runtime_error_of("false && missing"),
                     RuntimeError::UndefinedSymbol { .. }));
    assert!(matches!(runtime_error_of("true || 1"),
                     RuntimeError::ExpectedBoolean { .. }));
}

#[test]
fn blocks_scope_their_declarations() {
    assert_eq!(output_of("let x = 1; { let x = 2; print(x); } print(x);"),
               "2\n1\n");
    assert_eq!(value_of("let x = 1; { x = 5; } x"), Value::Number(5.0));
    assert!(matches!(runtime_error_of("{ let y = 1; } y"),
                     RuntimeError::UndefinedSymbol { .. }));
}

#[test]
fn statements_are_expressions() {
    assert_eq!(value_of("let x = { 5 }; x"), Value::Number(5.0));
    assert_eq!(value_of("let y = if (true) 1 else 2; y"), Value::Number(1.0));
    assert_eq!(value_of("if (false) 1"), Value::None);
    assert_eq!(value_of("let i = 0; while (i < 3) i = i + 1"), Value::Number(3.0));
    assert_eq!(value_of("while (false) 1"), Value::None);
    assert_eq!(value_of("{}"), Value::None);
    assert_eq!(value_of("let z"), Value::None);
}

#[test]
fn empty_statements_are_no_ops() {
    assert_eq!(value_of(";;;"), Value::None);
    assert_eq!(value_of(""), Value::None);
    assert_eq!(value_of("1;;"), Value::None);
}

#[test]
fn redeclaration_in_same_scope_overwrites() {
    assert_eq!(value_of("let a = 1; let a = 2; a"), Value::Number(2.0));
}

#[test]
fn declaration_initializer_sees_outer_variable() {
    assert_eq!(value_of("let x = 2; { let x = x * 10; x }"), Value::Number(20.0));
}

#[test]
fn undefined_names() {
    assert!(matches!(runtime_error_of("y + 1"), RuntimeError::UndefinedSymbol { .. }));
    assert!(matches!(runtime_error_of("z = 1"), RuntimeError::UndefinedSymbol { .. }));
    assert!(matches!(runtime_error_of("cos(1)"), RuntimeError::UndefinedFunction { .. }));
}

#[test]
fn undefined_identifier_is_not_a_parse_error() {
    let tokens = tokenize("print(nope)").unwrap();
    let program = parse(&tokens).unwrap();

    let result = Context::new(io::sink()).execute(&program);
    assert!(matches!(result, Err(RuntimeError::UndefinedSymbol { .. })));
}

#[test]
fn builtin_signatures_are_checked() {
    assert!(matches!(runtime_error_of("sin(1, 2)"),
                     RuntimeError::ArgumentCountMismatch { expected: 1,
                                                           found: 2,
                                                           .. }));
    assert!(matches!(runtime_error_of("floor()"),
                     RuntimeError::ArgumentCountMismatch { expected: 1,
                                                           found: 0,
                                                           .. }));
    assert!(matches!(runtime_error_of("floor(\"x\")"),
                     RuntimeError::ArgumentKindMismatch { position: 1,
                                                          expected: ValueKind::Number,
                                                          found: ValueKind::String,
                                                          .. }));
}

#[test]
fn assignment_target_must_be_identifier() {
    assert!(matches!(runtime_error_of("1 = 2"),
                     RuntimeError::InvalidAssignmentTarget { .. }));
    assert!(matches!(runtime_error_of("let a = 1; (a + 1) = 2"),
                     RuntimeError::InvalidAssignmentTarget { .. }));
}

#[test]
fn division_by_zero_is_infinite() {
    assert_eq!(value_of("1 / 0"), Value::Number(f64::INFINITY));
    assert_eq!(output_of("print(-1 / 0)"), "-inf\n");
}

#[test]
fn comments_are_ignored() {
    assert_eq!(value_of("let x = 1 // one\n// nothing here\nx + 1"),
               Value::Number(2.0));
}

#[test]
fn errors_report_their_line() {
    let err = runtime_error_of("let x = 1;\n\nx + true");
    assert_eq!(err.to_string(), "Error on line 3: Expected a number, got boolean.");

    let err = runtime_error_of("if (5) {}");
    assert_eq!(err.to_string(), "Error on line 1: Expected a boolean, got number.");
}

#[test]
fn pipeline_errors_keep_their_stage() {
    assert!(matches!(run("34.", io::sink()), Err(Error::Lexical(_))));
    assert!(matches!(run("1 +", io::sink()), Err(Error::Syntactic(_))));
    assert!(matches!(run("x", io::sink()), Err(Error::Runtime(_))));
    assert_failure("let");
    assert_failure("\"open");
}

#[test]
fn evaluating_pure_program_twice_is_idempotent() {
    let tokens = tokenize("let a = 3; let b = a * a - 1; if (b > 5) b % 5 else -b").unwrap();
    let program = parse(&tokens).unwrap();

    let first = Context::new(io::sink()).execute(&program).unwrap();
    let second = Context::new(io::sink()).execute(&program).unwrap();

    assert_eq!(first, Value::Number(3.0));
    assert_eq!(first, second);
}

#[test]
fn scopes_are_closed_after_runtime_error() {
    let tokens = tokenize("let x = 1; { let y = 2; { y + missing } }").unwrap();
    let program = parse(&tokens).unwrap();

    let mut context = Context::new(io::sink());
    assert!(context.execute(&program).is_err());
    assert_eq!(context.symbols.depth(), 0);
}

#[test]
fn context_can_run_several_programs() {
    let mut context = Context::new(Vec::new());
    for source in ["let a = 1; print(a)", "let a = 2; print(a)"] {
        let program = parse(&tokenize(source).unwrap()).unwrap();
        context.execute(&program).unwrap();
    }

    assert_eq!(String::from_utf8(context.into_output()).unwrap(), "1\n2\n");
}

#[test]
fn pipe_mode_prints_final_value() {
    let options = RunOptions { pipe_mode: true,
                               ..RunOptions::default() };

    let mut out = Vec::new();
    get_result_with("let x = 2; x * 21", &options, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "42\n");

    let mut out = Vec::new();
    get_result_with("let x = 2", &options, &mut out).unwrap();
    get_result_with("print(\"only\")", &options, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2\nonly\n");
}

#[test]
fn token_and_tree_printing() {
    let options = RunOptions { print_tokens: true,
                               print_tree: true,
                               ..RunOptions::default() };

    let mut out = Vec::new();
    get_result_with("x = 1 // set", &options, &mut out).unwrap_err();
    assert_eq!(String::from_utf8(out).unwrap(),
               "(Identifier:x)\n(Operator:=)\n(Literal:1)\nProgram\n  Binary =\n    \
                Identifier x\n    Literal 1\n");
}

#[test]
fn check_option_runs_analyzer() {
    let options = RunOptions { check: true,
                               ..RunOptions::default() };

    let mut out = Vec::new();
    let result = get_result_with("let a = 1; let a = 2; print(a)", &options, &mut out);

    assert!(matches!(result, Err(Error::Semantic(_))));
    assert!(out.is_empty());
}
