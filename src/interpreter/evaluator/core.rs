use std::io::Write;

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{evaluator::trace::Tracer, symbol_table::SymbolTable, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope stack with every live
/// variable and the stream that `print` writes to.
///
/// ## Usage
///
/// `Context` is created once per run. [`Context::execute`] opens the program
/// scope, evaluates the statements and closes the scope again, so a context
/// can execute several programs in a row without leaking variables between
/// them.
pub struct Context<W: Write> {
    /// Variables of every open scope.
    pub symbols:       SymbolTable,
    pub(crate) output: W,
    pub(crate) tracer: Tracer,
}

impl<W: Write> Context<W> {
    /// Creates a context with no scopes that prints to `output`.
    #[must_use]
    pub fn new(output: W) -> Self {
        Self { symbols: SymbolTable::new(),
               output,
               tracer: Tracer::default() }
    }

    /// Consumes the context and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes a program and returns the value of its last statement.
    ///
    /// An empty program evaluates to `none`. The program scope is closed even
    /// when evaluation fails.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    ///
    /// # Example
    /// ```
    /// use prog::interpreter::{
    ///     evaluator::Context, lexer::tokenize, parser::parse, value::Value,
    /// };
    ///
    /// let program = parse(&tokenize("let x = 4; x * 2").unwrap()).unwrap();
    /// let mut ctx = Context::new(Vec::new());
    ///
    /// assert_eq!(ctx.execute(&program).unwrap(), Value::Number(8.0));
    /// assert_eq!(ctx.symbols.depth(), 0);
    /// ```
    pub fn execute(&mut self, program: &Program) -> EvalResult<Value> {
        self.tracer.log(format_args!("PROGRAM BEGIN"));
        let value = self.scoped(|ctx| ctx.eval_statements(&program.statements))?;
        self.tracer.log(format_args!("PROGRAM END"));

        debug!("program evaluated to {value}");
        Ok(value)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches based on the node variant. Every node yields
    /// a value; constructs without a natural result yield `none`.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for undefined names, operand kind mismatches,
    /// non-boolean conditions, failing builtins and output failures.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Block { statements, .. } => self.eval_block(statements),
            Expr::VariableDeclaration { name,
                                        initializer,
                                        .. } => self.eval_declaration(name, initializer.as_deref()),
            Expr::If { condition,
                       then_branch,
                       else_branch,
                       line, } => self.eval_if(condition, then_branch, else_branch.as_deref(), *line),
            Expr::While { condition,
                          body,
                          line, } => self.eval_while(condition, body, *line),
            Expr::Binary { operator,
                           left,
                           right,
                           line, } => self.eval_binary_expr(operator, left, right, *line),
            Expr::Unary { operator,
                          operand,
                          line, } => self.eval_unary_expr(operator, operand, *line),
            Expr::Literal { text, line } => self.eval_literal(text, *line),
            Expr::Identifier { name, line } => self.eval_identifier(name, *line),
            Expr::Invocation { name,
                               arguments,
                               line, } => self.eval_invocation(name, arguments, *line),
            Expr::Empty { .. } => Ok(Value::None),
        }
    }

    /// Evaluates statements in order and keeps the last value.
    pub(crate) fn eval_statements(&mut self, statements: &[Expr]) -> EvalResult<Value> {
        let mut last = Value::None;
        for statement in statements {
            last = self.eval(statement)?;
        }
        Ok(last)
    }
}
