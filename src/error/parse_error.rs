use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A required token, lexeme or construct was not found.
    ///
    /// `found` is the `(kind, lexeme)` of the token that was there instead, or
    /// `None` when the input ended.
    #[error("Error on line {line}: {}.", describe_expected(.expected, .found))]
    Expected {
        /// What the parser was looking for.
        expected: String,
        /// The token actually present.
        found:    Option<(String, String)>,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary or unary operator with nothing to apply it to.
    #[error("Error on line {line}: Expected an operand after '{operator}'.")]
    MissingOperand {
        /// The dangling operator.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator in prefix position that has no unary form.
    #[error("Error on line {line}: Invalid unary operator '{operator}'.")]
    InvalidUnaryOperator {
        /// The operator.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operator accepted at a precedence level that does not list it.
    #[error("Error on line {line}: Binary operator not found: '{operator}'.")]
    UnknownBinaryOperator {
        /// The operator.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Tokens left over after the last complete statement of a program.
    #[error("Error on line {line}: Expected a statement, got ({kind}:{lexeme}).")]
    TrailingInput {
        /// Kind of the first unconsumed token.
        kind:   String,
        /// Lexeme of the first unconsumed token.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

fn describe_expected(expected: &str, found: &Option<(String, String)>) -> String {
    match found {
        Some((kind, lexeme)) => format!("expected {expected}, got ({kind}:{lexeme})"),
        None => format!("expected {expected}, reached end of file"),
    }
}
