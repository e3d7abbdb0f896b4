use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// The value domain is closed: every expression evaluates to exactly one of
/// these four variants. Operators never convert between them, so a `Number`
/// is never treated as a `Boolean` or a `String` and vice versa.
///
/// Equality is structural. `None` equals only itself; the other variants
/// compare their underlying values.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absence of a value, written `none`.
    #[default]
    None,
    /// A double precision floating-point number.
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and required by `if` and
    /// `while` conditions.
    Boolean(bool),
    /// A string of characters, written between double quotes.
    String(String),
}

/// The kind of a [`Value`], without its payload.
///
/// Builtin signatures and type errors are described in terms of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Kind of [`Value::None`].
    None,
    /// Kind of [`Value::Number`].
    Number,
    /// Kind of [`Value::Boolean`].
    Boolean,
    /// Kind of [`Value::String`].
    String,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl Value {
    /// Returns the kind of this value.
    ///
    /// # Example
    /// ```
    /// use prog::interpreter::value::{Value, ValueKind};
    ///
    /// assert_eq!(Value::from(1.5).kind(), ValueKind::Number);
    /// assert_eq!(Value::None.kind(), ValueKind::None);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::None => ValueKind::None,
            Self::Number(_) => ValueKind::Number,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Extracts the number, or reports `ExpectedNumber` for any other kind.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::ExpectedNumber { found: other.kind(),
                                                        line }),
        }
    }

    /// Extracts the boolean, or reports `ExpectedBoolean` for any other kind.
    ///
    /// There is no truthiness: `0`, `""` and `none` are errors, not `false`.
    pub fn as_boolean(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            other => Err(RuntimeError::ExpectedBoolean { found: other.kind(),
                                                         line }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
        };
        f.write_str(name)
    }
}
