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
    /// Runs `body` inside a fresh scope.
    ///
    /// The scope is popped on every exit path, including errors, so a failed
    /// statement never leaves its variables visible to the caller.
    pub(crate) fn scoped<T>(&mut self,
                            body: impl FnOnce(&mut Self) -> EvalResult<T>)
                            -> EvalResult<T> {
        self.symbols.enter_scope();
        self.tracer.indent();

        let result = body(self);

        self.tracer.unindent();
        self.symbols.leave_scope();
        result
    }

    /// Evaluates a block in its own scope.
    ///
    /// Returns the value of the last statement, or `none` for `{}`.
    pub(crate) fn eval_block(&mut self, statements: &[Expr]) -> EvalResult<Value> {
        self.tracer.log(format_args!("BLOCK BEGIN"));
        let value = self.scoped(|ctx| ctx.eval_statements(statements))?;
        self.tracer.log(format_args!("BLOCK END"));
        Ok(value)
    }

    /// Declares a variable in the innermost scope and returns its value.
    ///
    /// The initializer is evaluated before the name is declared, so
    /// `let x = x` reads an outer `x`.
    pub(crate) fn eval_declaration(&mut self,
                                   name: &str,
                                   initializer: Option<&Expr>)
                                   -> EvalResult<Value> {
        let value = match initializer {
            Some(expr) => self.eval(expr)?,
            None => Value::None,
        };

        self.tracer.log(format_args!("VAR: {name} = {value}"));
        self.symbols.declare(name, value.clone());
        Ok(value)
    }

    /// Evaluates an `if`. Yields the taken branch's value or `none`.
    pub(crate) fn eval_if(&mut self,
                          condition: &Expr,
                          then_branch: &Expr,
                          else_branch: Option<&Expr>,
                          line: usize)
                          -> EvalResult<Value> {
        self.tracer.log(format_args!("IF BEGIN"));

        let value = if self.eval(condition)?.as_boolean(line)? {
            self.eval(then_branch)?
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)?
        } else {
            Value::None
        };

        self.tracer.log(format_args!("IF END"));
        Ok(value)
    }

    /// Evaluates a `while` loop. Yields the last body value, or `none` if
    /// the body never ran.
    ///
    /// The loop is iterative, so the number of iterations does not grow the
    /// call stack.
    pub(crate) fn eval_while(&mut self,
                             condition: &Expr,
                             body: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        self.tracer.log(format_args!("WHILE BEGIN"));

        let mut value = Value::None;
        while self.eval(condition)?.as_boolean(line)? {
            value = self.eval(body)?;
        }

        self.tracer.log(format_args!("WHILE END"));
        Ok(value)
    }

    /// Converts literal text to a value.
    ///
    /// `none`, `true` and `false` are words; text starting with `"` is a
    /// string and loses its delimiting quotes; anything else is a number.
    pub(crate) fn eval_literal(&self, text: &str, line: usize) -> EvalResult<Value> {
        self.tracer.log(format_args!("LITERAL: {text}"));

        match text {
            "none" => Ok(Value::None),
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => {
                if let Some(quoted) = text.strip_prefix('"') {
                    let contents = quoted.strip_suffix('"').unwrap_or(quoted);
                    return Ok(Value::from(contents));
                }
                text.parse::<f64>()
                    .map(Value::Number)
                    .map_err(|_| RuntimeError::InvalidLiteral { text: text.to_string(),
                                                                line })
            },
        }
    }

    /// Reads the innermost visible variable called `name`.
    pub(crate) fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<Value> {
        let value = self.symbols
                        .lookup(name)
                        .and_then(|handle| self.symbols.get(handle))
                        .cloned()
                        .ok_or_else(|| RuntimeError::UndefinedSymbol { name: name.to_string(),
                                                                       line })?;

        self.tracer.log(format_args!("ID: {name} = {value}"));
        Ok(value)
    }
}
