use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a unary node.
    pub(crate) fn eval_unary_expr(&mut self,
                                  operator: &str,
                                  operand: &Expr,
                                  line: usize)
                                  -> EvalResult<Value> {
        self.tracer.log(format_args!("UNARY: {operator}"));
        self.tracer.indent();
        let value = self.eval(operand);
        self.tracer.unindent();

        apply_unary(operator, &value?, line)
    }
}

/// Applies a prefix operator to a value.
///
/// `+` returns the number unchanged, `-` negates it and `!` inverts a
/// boolean. There is no coercion: `-true` and `!0` are errors.
///
/// # Example
/// ```
/// use prog::interpreter::{evaluator::unary::apply_unary, value::Value};
///
/// assert_eq!(apply_unary("-", &Value::from(3.0), 1).unwrap(), Value::Number(-3.0));
/// assert_eq!(apply_unary("!", &Value::from(false), 1).unwrap(), Value::Boolean(true));
/// assert!(apply_unary("+", &Value::from("3"), 1).is_err());
/// ```
pub fn apply_unary(operator: &str, operand: &Value, line: usize) -> EvalResult<Value> {
    match operator {
        "+" => Ok(Value::Number(operand.as_number(line)?)),
        "-" => Ok(Value::Number(-operand.as_number(line)?)),
        "!" => Ok(Value::Boolean(!operand.as_boolean(line)?)),
        _ => Err(RuntimeError::UnsupportedOperator { operator: operator.to_string(),
                                                     line }),
    }
}
