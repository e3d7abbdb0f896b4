use prog::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{lexer::tokenize, parser::parse},
};

fn parse_source(source: &str) -> Result<Program, ParseError> {
    parse(&tokenize(source).unwrap_or_else(|e| panic!("Failed to tokenize {source:?}: {e}")))
}

fn tree(source: &str) -> String {
    parse_source(source).unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"))
                        .to_string()
}

/// Renders an expression with explicit parentheses around every operation.
fn grouping(expr: &Expr) -> String {
    match expr {
        Expr::Binary { operator,
                       left,
                       right,
                       .. } => format!("({} {operator} {})", grouping(left), grouping(right)),
        Expr::Unary { operator, operand, .. } => format!("({operator}{})", grouping(operand)),
        Expr::Literal { text, .. } => text.clone(),
        Expr::Identifier { name, .. } => name.clone(),
        other => panic!("unexpected node {other:?}"),
    }
}

fn grouped(source: &str) -> String {
    let program = parse_source(source).unwrap();
    assert_eq!(program.statements.len(), 1);
    grouping(&program.statements[0])
}

#[test]
fn left_to_right_operators_lean_left() {
    assert_eq!(tree("2 - 2 - 2"),
               "Program\n  Binary -\n    Binary -\n      Literal 2\n      Literal 2\n    Literal 2\n");
    assert_eq!(grouped("a - b - c - d"), "(((a - b) - c) - d)");
    assert_eq!(grouped("a * b / c % d * e"), "((((a * b) / c) % d) * e)");
    assert_eq!(grouped("a + b - c + d - e"), "((((a + b) - c) + d) - e)");
}

#[test]
fn right_to_left_operators_lean_right() {
    assert_eq!(tree("a = b = c"),
               "Program\n  Binary =\n    Identifier a\n    Binary =\n      Identifier b\n      \
                Identifier c\n");
    assert_eq!(grouped("a = b = c = d"), "(a = (b = (c = d)))");
}

#[test]
fn groups_nest_by_priority() {
    assert_eq!(grouped("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(grouped("1 * 2 + 3"), "((1 * 2) + 3)");
    assert_eq!(grouped("a = 1 + 2 < 3 && c"), "(a = (((1 + 2) < 3) && c))");
    assert_eq!(grouped("a || b && c == d"), "(a || (b && (c == d)))");
    assert_eq!(grouped("a < b == c > d"), "((a < b) == (c > d))");
    assert_eq!(grouped("x = y - 1 - 2 * 3"), "(x = ((y - 1) - (2 * 3)))");
}

#[test]
fn unary_binds_tightest() {
    assert_eq!(grouped("-x * 2"), "((-x) * 2)");
    assert_eq!(grouped("!a == b"), "((!a) == b)");
    assert_eq!(grouped("a - -b"), "(a - (-b))");
    assert_eq!(grouped("-(a + b)"), "(-(a + b))");
}

#[test]
fn parentheses_override_priority() {
    assert_eq!(grouped("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(grouped("a - (b - c)"), "(a - (b - c))");
}

#[test]
fn statements_and_terminators() {
    let program = parse_source("let x = 1; x\n;;").unwrap();
    assert_eq!(program.statements.len(), 3);
    assert!(matches!(program.statements[0], Expr::VariableDeclaration { .. }));
    assert!(matches!(program.statements[1], Expr::Identifier { .. }));
    assert!(matches!(program.statements[2], Expr::Empty { line: 2 }));

    assert_eq!(parse_source(";;;").unwrap().statements.len(), 3);
    assert_eq!(parse_source("").unwrap(), Program::default());
}

#[test]
fn statement_expressions_in_operand_position() {
    assert_eq!(tree("let x = { 5 }"),
               "Program\n  Let x\n    Block\n      Literal 5\n");
    assert_eq!(tree("let y = if (c) 1 else 2"),
               "Program\n  Let y\n    If\n      Identifier c\n      Literal 1\n      Literal 2\n");
    assert_eq!(tree("1 + { 2 }"),
               "Program\n  Binary +\n    Literal 1\n    Block\n      Literal 2\n");
}

#[test]
fn declaration_without_initializer() {
    let program = parse_source("let x").unwrap();
    assert_eq!(program.statements,
               [Expr::VariableDeclaration { name:        "x".to_string(),
                                            initializer: None,
                                            line:        1, }]);
}

#[test]
fn control_flow_shapes() {
    assert_eq!(tree("while (i < 3) { i = i + 1; }"),
               "Program\n  While\n    Binary <\n      Identifier i\n      Literal 3\n    Block\n      \
                Binary =\n        Identifier i\n        Binary +\n          Identifier i\n          \
                Literal 1\n");
    assert_eq!(tree("if (a) b"), "Program\n  If\n    Identifier a\n    Identifier b\n");
}

#[test]
fn invocations_take_argument_lists() {
    assert_eq!(tree("print(1, x, \"s\")"),
               "Program\n  Invocation print\n    Literal 1\n    Identifier x\n    Literal \"s\"\n");
    assert_eq!(tree("f()"), "Program\n  Invocation f\n");
    assert_eq!(tree("f(g(1))"), "Program\n  Invocation f\n    Invocation g\n      Literal 1\n");
}

#[test]
fn trivia_is_skipped() {
    assert_eq!(tree("1 // one\n  +\n// two\n 2"),
               "Program\n  Binary +\n    Literal 1\n    Literal 2\n");
}

#[test]
fn nodes_record_lines() {
    let program = parse_source("1\n+\n2").unwrap();
    assert_eq!(program.statements[0].line(), 2);
}

#[test]
fn reports_end_of_file() {
    assert_eq!(parse_source("let").unwrap_err().to_string(),
               "Error on line 1: expected `Identifier`, reached end of file.");
    assert_eq!(parse_source("if (true").unwrap_err().to_string(),
               "Error on line 1: expected `)`, reached end of file.");
    assert_eq!(parse_source("{ 1").unwrap_err().to_string(),
               "Error on line 1: expected `}`, reached end of file.");
    assert!(matches!(parse_source("let x ="),
                     Err(ParseError::Expected { found: None, .. })));
}

#[test]
fn reports_wrong_token() {
    assert_eq!(parse_source("if true) 1").unwrap_err().to_string(),
               "Error on line 1: expected `(`, got (Literal:true).");
    assert_eq!(parse_source("print(1 2)").unwrap_err().to_string(),
               "Error on line 1: expected `,`, got (Literal:2).");
    assert_eq!(parse_source("let 5").unwrap_err(),
               ParseError::Expected { expected: "`Identifier`".to_string(),
                                      found:    Some(("Literal".to_string(), "5".to_string())),
                                      line:     1, });
}

#[test]
fn missing_operands() {
    assert_eq!(parse_source("1 +"),
               Err(ParseError::MissingOperand { operator: "+".to_string(),
                                                line:     1, }));
    assert!(matches!(parse_source("-"), Err(ParseError::MissingOperand { .. })));
    assert!(matches!(parse_source("--x"), Err(ParseError::MissingOperand { .. })));
}

#[test]
fn invalid_unary_operator() {
    assert_eq!(parse_source("* 3"),
               Err(ParseError::InvalidUnaryOperator { operator: "*".to_string(),
                                                      line:     1, }));
    assert!(matches!(parse_source("a = = b"), Err(ParseError::InvalidUnaryOperator { .. })));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(parse_source("1 )").unwrap_err().to_string(),
               "Error on line 1: Expected a statement, got (Separator:)).");
    assert!(matches!(parse_source("else 1"), Err(ParseError::TrailingInput { .. })));
}
