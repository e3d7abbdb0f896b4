use thiserror::Error;

use crate::interpreter::value::ValueKind;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read or assign a variable no enclosing scope declares.
    #[error("Error on line {line}: Undefined symbol '{name}'.")]
    UndefinedSymbol {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is not registered as a builtin.
    #[error("Error on line {line}: Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a builtin.
    #[error("Error on line {line}: Invalid number of arguments for '{function}'. Expected {expected} got {found}.")]
    ArgumentCountMismatch {
        /// The builtin that was called.
        function: String,
        /// The number of parameters it declares.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument had a different kind than the builtin declares.
    #[error("Error on line {line}: Argument {position} of '{function}' must be {expected}, got {found}.")]
    ArgumentKindMismatch {
        /// The builtin that was called.
        function: String,
        /// One-based position of the argument.
        position: usize,
        /// The declared kind.
        expected: ValueKind,
        /// The kind actually supplied.
        found:    ValueKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A builtin produced a value of a different kind than it declares.
    #[error("Error on line {line}: '{function}' must return {expected}, got {found}.")]
    ResultKindMismatch {
        /// The builtin that was called.
        function: String,
        /// The declared result kind.
        expected: ValueKind,
        /// The kind actually returned.
        found:    ValueKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A boolean value was expected, but not found.
    #[error("Error on line {line}: Expected a boolean, got {found}.")]
    ExpectedBoolean {
        /// The kind that was found instead.
        found: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric value was expected, but not found.
    #[error("Error on line {line}: Expected a number, got {found}.")]
    ExpectedNumber {
        /// The kind that was found instead.
        found: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left side of `=` is not a variable name.
    #[error("Error on line {line}: Expected a variable name to the left of an assignment.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator the evaluator has no rule for.
    #[error("Error on line {line}: Unsupported operator '{operator}'.")]
    UnsupportedOperator {
        /// The operator lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A literal whose text is not a valid number, string, boolean or `none`.
    #[error("Error on line {line}: Invalid literal '{text}'.")]
    InvalidLiteral {
        /// The raw literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output stream failed.
    #[error("Error on line {line}: Failed to write output: {source}.")]
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}
