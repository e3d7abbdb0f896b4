use std::io::Write;

use itertools::Itertools;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Writes the arguments separated by single spaces, then a newline.
///
/// Accepts any number of arguments of any kind; `print()` writes an empty
/// line. Strings are written without their quotes.
///
/// # Returns
/// Always `none`.
///
/// # Example
/// ```
/// use prog::interpreter::{evaluator::function::print::print, value::Value};
///
/// let mut out = Vec::new();
/// let result = print(&[Value::from("x ="), Value::from(3.0), Value::from(true)], &mut out, 1).unwrap();
///
/// assert_eq!(result, Value::None);
/// assert_eq!(String::from_utf8(out).unwrap(), "x = 3 true\n");
/// ```
pub fn print(args: &[Value], output: &mut dyn Write, line: usize) -> EvalResult<Value> {
    writeln!(output, "{}", args.iter().join(" ")).map_err(|source| RuntimeError::Output { source,
                                                                                         line })?;
    Ok(Value::None)
}
