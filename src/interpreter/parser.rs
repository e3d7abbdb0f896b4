/// Token cursor, error construction and the parser entry points.
pub mod core;

/// Statement grammar.
///
/// Programs, blocks, declarations, `if` and `while`, and the optional `;`
/// terminator.
pub mod statement;

/// Binary operator parsing.
///
/// One generic rule, instantiated once per priority group of the operator
/// table, that resolves precedence and associativity from the table.
pub mod binary;

/// Unary operators and primary operands.
///
/// Prefix operators, identifiers, invocations, parenthesized expressions,
/// literals and statement expressions in operand position.
pub mod unary;

pub use self::core::{parse, ParseResult, Parser};
