/// Binary operator evaluation logic.
///
/// Arithmetic, comparisons, structural equality, eager logical operators and
/// assignment.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric identity, negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the node dispatch and the program entry
/// point.
pub mod core;

/// Evaluation of literals, identifiers, declarations, blocks and control
/// flow, plus the scope guard they share.
pub mod utils;

/// Builtin function registry and invocation.
pub mod function;

/// Indented execution trace.
pub mod trace;

pub use self::core::{Context, EvalResult};
