use std::io::Write;

use crate::interpreter::{evaluator::core::EvalResult, value::Value};

/// Applies an `f64` method to the single numeric argument.
///
/// The generated functions expect exactly one `Number`, which the registry
/// checks before calling them. Any other argument count yields `none`, and
/// the registry reports that as a result kind mismatch.
///
/// # Example
/// ```
/// use prog::interpreter::{evaluator::function::builtin::floor, value::Value};
///
/// let r = floor(&[Value::Number(3.7)], &mut std::io::sink(), 1).unwrap();
///
/// assert_eq!(r, Value::Number(3.0));
/// ```
macro_rules! number_builtin {
    ($fname:ident, $method:ident) => {
        pub fn $fname(args: &[Value], _output: &mut dyn Write, line: usize) -> EvalResult<Value> {
            match args {
                [arg] => Ok(Value::Number(arg.as_number(line)?.$method())),
                _ => Ok(Value::None),
            }
        }
    };
}

number_builtin!(sin, sin);
number_builtin!(floor, floor);
