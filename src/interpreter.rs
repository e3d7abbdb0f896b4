/// The analyzer module performs optional static checks on a parsed program.
///
/// It walks the syntax tree with the same scoping rules as the evaluator and
/// reports redeclarations, undefined names, invalid assignment targets and
/// conditions that can never be boolean, all before any statement runs.
pub mod analyzer;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST depth first, applies operators, manages
/// variable state through the symbol table and calls builtins. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every node kind to a value.
/// - Opens and closes scopes for the program and for each block.
/// - Reports runtime errors such as undefined symbols or operand kind
///   mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens,
/// each classified as a keyword, operator, separator, literal, identifier,
/// comment or whitespace and tagged with its line. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Recognizes operators by maximal munch over the operator table.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The operator table shared by the lexer and the parser.
pub mod operator;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`Program`](crate::ast::Program). Precedence and associativity of binary
/// operators come from the operator table rather than from one grammar rule
/// per level.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Reports the first syntax error with what was expected and what was found.
pub mod parser;
/// Lexical scopes and variable storage.
pub mod symbol_table;
/// The value module defines the runtime data types for evaluation.
///
/// There are exactly four kinds of values: `none`, numbers, booleans and
/// strings. Nothing converts between them implicitly.
pub mod value;
