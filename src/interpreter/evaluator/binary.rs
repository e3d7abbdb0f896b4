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
    /// Evaluates a binary node.
    ///
    /// Both operands are evaluated, left first, before the operator is
    /// applied. There is no short-circuiting: `false && x` still reads `x`.
    /// Assignment follows the same order, so the target is read once before
    /// it is written.
    pub(crate) fn eval_binary_expr(&mut self,
                                   operator: &str,
                                   left: &Expr,
                                   right: &Expr,
                                   line: usize)
                                   -> EvalResult<Value> {
        self.tracer.log(format_args!("BINARY: {operator}"));
        self.tracer.indent();
        let operands = self.eval(left)
                           .and_then(|lhs| Ok((lhs, self.eval(right)?)));
        self.tracer.unindent();
        let (lhs, rhs) = operands?;

        if operator == "=" {
            return self.assign(left, rhs, line);
        }
        apply_binary(operator, &lhs, &rhs, line)
    }

    /// Stores `value` in the variable named by `target`.
    ///
    /// The nearest enclosing scope that declares the name is updated in
    /// place.
    fn assign(&mut self, target: &Expr, value: Value, line: usize) -> EvalResult<Value> {
        let Expr::Identifier { name, .. } = target else {
            return Err(RuntimeError::InvalidAssignmentTarget { line });
        };

        let assigned = self.symbols
                           .lookup(name)
                           .is_some_and(|handle| self.symbols.set(handle, value.clone()));
        if !assigned {
            return Err(RuntimeError::UndefinedSymbol { name: name.clone(),
                                                       line });
        }
        Ok(value)
    }
}

/// Applies a non-assigning binary operator to two values.
///
/// - `+ - * / %` take numbers and produce a number.
/// - `< <= > >=` take numbers and produce a boolean.
/// - `== !=` compare any two values structurally.
/// - `&& ||` take booleans and produce a boolean.
///
/// Division by zero follows IEEE 754 and yields an infinity or NaN.
///
/// # Errors
/// `ExpectedNumber` or `ExpectedBoolean` when an operand has the wrong kind,
/// `UnsupportedOperator` for any other lexeme.
///
/// # Example
/// ```
/// use prog::interpreter::{evaluator::binary::apply_binary, value::Value};
///
/// let difference = apply_binary("-", &Value::from(7.0), &Value::from(2.0), 1).unwrap();
/// assert_eq!(difference, Value::Number(5.0));
///
/// let same = apply_binary("==", &Value::None, &Value::from("none"), 1).unwrap();
/// assert_eq!(same, Value::Boolean(false));
///
/// assert!(apply_binary("+", &Value::from("a"), &Value::from(1.0), 1).is_err());
/// ```
pub fn apply_binary(operator: &str, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let value = match operator {
        "+" | "-" | "*" | "/" | "%" => {
            let (a, b) = numbers(left, right, line)?;
            Value::Number(arithmetic(operator, a, b, line)?)
        },
        "<" | "<=" | ">" | ">=" => {
            let (a, b) = numbers(left, right, line)?;
            Value::Boolean(compare(operator, a, b, line)?)
        },
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        "&&" => {
            let (a, b) = booleans(left, right, line)?;
            Value::Boolean(a && b)
        },
        "||" => {
            let (a, b) = booleans(left, right, line)?;
            Value::Boolean(a || b)
        },
        _ => return Err(unsupported(operator, line)),
    };
    Ok(value)
}

fn numbers(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    Ok((left.as_number(line)?, right.as_number(line)?))
}

fn booleans(left: &Value, right: &Value, line: usize) -> EvalResult<(bool, bool)> {
    Ok((left.as_boolean(line)?, right.as_boolean(line)?))
}

fn arithmetic(operator: &str, a: f64, b: f64, line: usize) -> EvalResult<f64> {
    match operator {
        "+" => Ok(a + b),
        "-" => Ok(a - b),
        "*" => Ok(a * b),
        "/" => Ok(a / b),
        "%" => Ok(a % b),
        _ => Err(unsupported(operator, line)),
    }
}

fn compare(operator: &str, a: f64, b: f64, line: usize) -> EvalResult<bool> {
    match operator {
        "<" => Ok(a < b),
        "<=" => Ok(a <= b),
        ">" => Ok(a > b),
        ">=" => Ok(a >= b),
        _ => Err(unsupported(operator, line)),
    }
}

fn unsupported(operator: &str, line: usize) -> RuntimeError {
    RuntimeError::UnsupportedOperator { operator: operator.to_string(),
                                        line }
}
