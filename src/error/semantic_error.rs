use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors found by the static checks of the analyzer.
pub enum SemanticError {
    /// A name declared twice in the same scope.
    #[error("Error on line {line}: Variable '{name}' has already been declared.")]
    Redeclaration {
        /// The variable name.
        name: String,
        /// The source line of the second declaration.
        line: usize,
    },
    /// A name used without a declaration in any enclosing scope.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The variable name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call to a function that is not a builtin.
    #[error("Error on line {line}: Undefined reference to function '{name}'.")]
    UndefinedFunction {
        /// The function name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of `=` is not a variable name.
    #[error("Error on line {line}: Expected a variable name to the left of an assignment.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `if` or `while` condition that can never be a boolean.
    #[error("Error on line {line}: Expected boolean in test expression result.")]
    NonBooleanCondition {
        /// The source line where the error occurred.
        line: usize,
    },
}
