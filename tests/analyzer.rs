use prog::{
    error::SemanticError,
    interpreter::{analyzer::analyze, lexer::tokenize, parser::parse},
};

fn check(source: &str) -> Result<(), SemanticError> {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("Failed to tokenize {source:?}: {e}"));
    let program = parse(&tokens).unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"));
    analyze(&program)
}

fn assert_clean(source: &str) {
    if let Err(e) = check(source) {
        panic!("Analysis of {source:?} failed: {e}");
    }
}

#[test]
fn accepts_valid_programs() {
    assert_clean("let x = 1; while (x < 5) { x = x + 1; } print(x);");
    assert_clean("let a; let b; a = b = 3;");
    assert_clean("let flag = true; if (flag) print(1) else print(sin(0));");
    assert_clean("");
}

#[test]
fn rejects_redeclaration_in_same_scope() {
    assert_eq!(check("let a = 1;\nlet a = 2;"),
               Err(SemanticError::Redeclaration { name: "a".to_string(),
                                                  line: 2, }));
    assert!(matches!(check("{ let b; let b; }"),
                     Err(SemanticError::Redeclaration { .. })));
}

#[test]
fn allows_shadowing_in_inner_scope() {
    assert_clean("let a = 1; { let a = 2; print(a); } print(a);");
    assert_clean("{ let t = 1; } { let t = 2; }");
}

#[test]
fn rejects_undefined_variables() {
    assert!(matches!(check("x + 1"), Err(SemanticError::UndefinedVariable { .. })));
    assert!(matches!(check("{ let y = 1; } y"),
                     Err(SemanticError::UndefinedVariable { .. })));
    assert!(matches!(check("let z = z;"),
                     Err(SemanticError::UndefinedVariable { .. })));
}

#[test]
fn initializer_may_read_outer_variable() {
    assert_clean("let z = 1; { let z = z + 1; }");
}

#[test]
fn rejects_undefined_functions() {
    assert_eq!(check("cos(0)"),
               Err(SemanticError::UndefinedFunction { name: "cos".to_string(),
                                                      line: 1, }));
}

#[test]
fn rejects_invalid_assignment_target() {
    assert!(matches!(check("1 = 2"), Err(SemanticError::InvalidAssignmentTarget { .. })));
    assert!(matches!(check("let a; (a) = 2"), Ok(())));
    assert!(matches!(check("let a; -a = 2"),
                     Err(SemanticError::InvalidAssignmentTarget { .. })));
}

#[test]
fn rejects_conditions_that_cannot_be_boolean() {
    for source in ["if (5) {}",
                   "if (\"yes\") 1",
                   "if (none) 1",
                   "let n = 1; while (n + 1) {}",
                   "let n = 1; if (-n) 1"]
    {
        assert!(matches!(check(source), Err(SemanticError::NonBooleanCondition { .. })),
                "{source:?} was accepted");
    }
}

#[test]
fn accepts_conditions_that_may_be_boolean() {
    assert_clean("if (true) 1");
    assert_clean("let n = 1; if (n < 2 && !false) 1");
    assert_clean("let b; if (b) 1");
    assert_clean("let b; while (b = false) {}");
}

#[test]
fn checks_both_branches() {
    assert!(matches!(check("if (true) 1 else missing"),
                     Err(SemanticError::UndefinedVariable { .. })));
    assert!(matches!(check("while (false) { let q; let q; }"),
                     Err(SemanticError::Redeclaration { .. })));
}

#[test]
fn messages_name_the_problem() {
    assert_eq!(check("let a; let a;").unwrap_err().to_string(),
               "Error on line 1: Variable 'a' has already been declared.");
    assert_eq!(check("if (1) 1").unwrap_err().to_string(),
               "Error on line 1: Expected boolean in test expression result.");
}
