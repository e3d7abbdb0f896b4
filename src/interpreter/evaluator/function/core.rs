use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, print},
        },
        value::{Value, ValueKind},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments, the output stream and the line
/// number. Arguments have already been checked against the declared
/// [`Parameters`] when the handler runs.
pub type BuiltinFn = fn(&[Value], &mut dyn Write, usize) -> EvalResult<Value>;

/// The arguments a builtin accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameters {
    /// Exactly these kinds, in order.
    Exact(&'static [ValueKind]),
    /// Any number of arguments of any kind.
    Variadic,
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the parameter kinds,
/// - the kind of the returned value,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinFunction` (signature plus handler),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                parameters: $parameters:expr,
                returns: $returns:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A host function callable from the language.
        #[derive(Debug)]
        pub struct BuiltinFunction {
            /// Name used at call sites.
            pub name:       &'static str,
            /// Accepted arguments.
            pub parameters: Parameters,
            /// Kind of every value the function returns.
            pub returns:    ValueKind,
            func:           BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinFunction] = &[
            $(
                BuiltinFunction { name: $name, parameters: $parameters, returns: $returns, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "sin"   => { parameters: Parameters::Exact(&[ValueKind::Number]), returns: ValueKind::Number, func: builtin::sin },
    "floor" => { parameters: Parameters::Exact(&[ValueKind::Number]), returns: ValueKind::Number, func: builtin::floor },
    "print" => { parameters: Parameters::Variadic,                    returns: ValueKind::None,   func: print::print },
}

/// Finds a builtin by name.
///
/// # Example
/// ```
/// use prog::interpreter::{evaluator::function::lookup, value::ValueKind};
///
/// assert_eq!(lookup("floor").unwrap().returns, ValueKind::Number);
/// assert!(lookup("cos").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinFunction> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

impl BuiltinFunction {
    /// Checks the arguments, runs the handler and checks its result.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` and `ArgumentKindMismatch` for arguments that
    /// do not fit the signature, `ResultKindMismatch` if the handler returns
    /// a value of an undeclared kind, and whatever the handler itself raises.
    pub fn invoke(&self,
                  arguments: &[Value],
                  output: &mut dyn Write,
                  line: usize)
                  -> EvalResult<Value> {
        self.check_arguments(arguments, line)?;

        let result = (self.func)(arguments, output, line)?;
        if result.kind() != self.returns {
            return Err(RuntimeError::ResultKindMismatch { function: self.name.to_string(),
                                                          expected: self.returns,
                                                          found:    result.kind(),
                                                          line });
        }
        Ok(result)
    }

    fn check_arguments(&self, arguments: &[Value], line: usize) -> EvalResult<()> {
        let Parameters::Exact(kinds) = self.parameters else {
            return Ok(());
        };

        if arguments.len() != kinds.len() {
            return Err(RuntimeError::ArgumentCountMismatch { function: self.name.to_string(),
                                                             expected: kinds.len(),
                                                             found:    arguments.len(),
                                                             line });
        }

        for (position, (argument, &expected)) in arguments.iter().zip(kinds).enumerate() {
            if argument.kind() != expected {
                return Err(RuntimeError::ArgumentKindMismatch { function: self.name.to_string(),
                                                                position: position + 1,
                                                                expected,
                                                                found: argument.kind(),
                                                                line });
            }
        }
        Ok(())
    }
}

impl<W: Write> Context<W> {
    /// Evaluates a call to a builtin.
    ///
    /// Arguments are evaluated left to right before the name is resolved, so
    /// an error inside an argument wins over an unknown function name.
    pub(crate) fn eval_invocation(&mut self,
                                  name: &str,
                                  arguments: &[Expr],
                                  line: usize)
                                  -> EvalResult<Value> {
        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        self.tracer.log(format_args!("INVOCATION: {name}, {}", values.len()));

        let builtin = lookup(name).ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                                    line })?;
        builtin.invoke(&values, &mut self.output, line)
    }
}
