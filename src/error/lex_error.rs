use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A character that starts no token at all.
    #[error("Error on line {line}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal with no closing quote.
    #[error("Error on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the string starts.
        line: usize,
    },
    /// A number literal ending in a decimal point, such as `34.`.
    #[error("Error on line {line}: Fractional part expected in '{lexeme}'.")]
    FractionalPartExpected {
        /// The malformed literal.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A run of characters that begins some operator but is not one, such as a
    /// lone `&`.
    #[error("Error on line {line}: Unknown operator '{candidate}'.")]
    UnknownOperator {
        /// The longest operator prefix that was read.
        candidate: String,
        /// The source line where the error occurred.
        line:      usize,
    },
}
