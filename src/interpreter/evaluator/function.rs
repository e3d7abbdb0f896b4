/// Numeric builtin implementations.
///
/// `sin` and `floor`, each taking and returning a number.
pub mod builtin;
/// The `print` function implementation.
///
/// Writes its arguments to the context's output stream.
pub mod print;

/// Registry of builtins, signature checking and invocation.
pub mod core;

pub use self::core::{lookup, BuiltinFunction, Parameters};
