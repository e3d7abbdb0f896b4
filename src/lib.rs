//! # prog
//!
//! prog is an interpreter for a small dynamically typed scripting language
//! written in Rust. Source text is tokenized, parsed into a syntax tree whose
//! operator precedence is driven by a declarative table, optionally checked
//! statically, and then evaluated with lexical block scoping and a handful of
//! builtin functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use log::debug;

use crate::{
    error::Error,
    interpreter::{
        analyzer::analyze,
        evaluator::Context,
        lexer::tokenize,
        parser::parse,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the `Program` root that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser, checked by the analyzer and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node type for every language construct.
/// - Attaches source lines to nodes for error reporting.
/// - Renders a program as an indented tree for inspection.
pub mod ast;
/// Provides unified error types for every stage of the pipeline.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// analyzing or evaluating code. Every message starts with the source line the
/// problem was found on.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Combines them into a single [`Error`](error::Error) for callers of the
///   whole pipeline.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, analysis, evaluation and value
/// representations to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for each stage.
pub mod interpreter;

/// Switches that control what [`get_result`] does besides running the
/// program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the program's final value unless it is `none`.
    pub pipe_mode:    bool,
    /// Run the semantic analyzer before evaluating.
    pub check:        bool,
    /// Print every significant token before parsing.
    pub print_tokens: bool,
    /// Print the syntax tree before evaluating.
    pub print_tree:   bool,
}

/// Tokenizes, parses and executes `source`, writing program output to
/// `output`.
///
/// Returns the value of the last top-level statement.
///
/// # Errors
/// The first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use prog::{interpreter::value::Value, run};
///
/// let mut out = Vec::new();
/// let value = run("let x = 1; while (x < 5) { x = x + 1; } print(x); x", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "5\n");
/// assert_eq!(value, Value::Number(5.0));
/// ```
pub fn run<W: Write>(source: &str, output: W) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    Ok(Context::new(output).execute(&program)?)
}

/// Runs `source` on standard output according to `options`.
///
/// This is the entry point of the command line interface.
///
/// # Errors
/// Returns an error if any stage fails or standard output cannot be written.
///
/// # Examples
/// ```
/// use prog::{get_result, RunOptions};
///
/// // Simple program: the result will be calculated and no error should occur.
/// let res = get_result("let result = 2 + 2", &RunOptions::default());
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("let y = x + 1", &RunOptions::default());
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, options: &RunOptions) -> Result<(), Error> {
    let stdout = io::stdout();
    get_result_with(source, options, &mut stdout.lock())
}

/// Like [`get_result`], but writes everything to `output`.
///
/// Tokens and the tree are written before the program runs, the final value
/// after it finished.
///
/// # Examples
/// ```
/// use prog::{get_result_with, RunOptions};
///
/// let options = RunOptions { pipe_mode: true,
///                            ..RunOptions::default() };
/// let mut out = Vec::new();
/// get_result_with("print(\"hi\"); 6 * 7", &options, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "hi\n42\n");
/// ```
pub fn get_result_with<W: Write>(source: &str,
                                 options: &RunOptions,
                                 output: &mut W)
                                 -> Result<(), Error> {
    let tokens = tokenize(source)?;
    debug!("lexed {} tokens", tokens.len());

    if options.print_tokens {
        for token in tokens.iter().filter(|token| !token.kind.is_trivia()) {
            writeln!(output, "{token}")?;
        }
    }

    let program = parse(&tokens)?;
    if options.print_tree {
        write!(output, "{program}")?;
    }

    if options.check {
        analyze(&program)?;
    }

    let value = Context::new(&mut *output).execute(&program)?;

    if options.pipe_mode && value != Value::None {
        writeln!(output, "{value}")?;
    }
    Ok(())
}
