/// Lexical errors.
///
/// Raised while the source text is split into tokens: characters no rule
/// accepts, unterminated strings, malformed numbers and operator prefixes that
/// never complete into a known operator.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while tokens are assembled into a
/// syntax tree. Parse errors report what the parser expected and what it found
/// instead, or that it reached the end of the input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, operand and argument kind mismatches, invalid assignment targets and
/// failures of the output stream.
pub mod runtime_error;
/// Semantic analysis errors.
///
/// Reported by the optional static checks that run between parsing and
/// evaluation.
pub mod semantic_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;
use thiserror::Error;

/// Any failure of the interpreter pipeline.
///
/// Every stage aborts on its first error; this enum records which stage it came
/// from, so callers can tell faults apart while still composing the stages
/// with `?`.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lexical(#[from] LexError),
    /// The token stream is not a valid program.
    #[error(transparent)]
    Syntactic(#[from] ParseError),
    /// The program failed the static checks.
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Writing diagnostics (tokens, tree, final value) failed.
    #[error("Failed to write output: {0}.")]
    Io(#[from] std::io::Error),
}
