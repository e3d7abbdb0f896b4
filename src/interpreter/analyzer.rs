use log::debug;

use crate::{
    ast::{Expr, Program},
    error::SemanticError,
    interpreter::{evaluator::function, symbol_table::SymbolTable, value::Value},
};

/// Operators whose result is always a boolean.
const BOOLEAN_OPERATORS: &[&str] = &["<", "<=", ">", ">=", "==", "!=", "&&", "||", "!"];

/// Checks a program for mistakes that are visible without running it.
///
/// The analyzer mirrors the evaluator's scoping: the program and every block
/// open a scope, and a declaration becomes visible after its initializer.
/// It rejects
/// - a second `let` of the same name in one scope,
/// - reads of names that no enclosing scope declares,
/// - calls of functions that are not builtins,
/// - assignments whose left side is not a variable name,
/// - `if` and `while` conditions that can never be boolean.
///
/// Both branches of an `if` and the body of a `while` are always checked.
///
/// # Errors
/// The first `SemanticError` found, in source order.
///
/// # Example
/// ```
/// use prog::{
///     error::SemanticError,
///     interpreter::{analyzer::analyze, lexer::tokenize, parser::parse},
/// };
///
/// let program = parse(&tokenize("let a = 1; let a = 2;").unwrap()).unwrap();
///
/// assert!(matches!(analyze(&program), Err(SemanticError::Redeclaration { .. })));
/// ```
pub fn analyze(program: &Program) -> Result<(), SemanticError> {
    let mut analyzer = Analyzer::default();
    analyzer.scoped(|analyzer| analyzer.visit_all(&program.statements))?;

    debug!("semantic analysis passed");
    Ok(())
}

#[derive(Default)]
struct Analyzer {
    symbols: SymbolTable,
}

impl Analyzer {
    fn scoped(&mut self,
              body: impl FnOnce(&mut Self) -> Result<(), SemanticError>)
              -> Result<(), SemanticError> {
        self.symbols.enter_scope();
        let result = body(self);
        self.symbols.leave_scope();
        result
    }

    fn visit_all(&mut self, statements: &[Expr]) -> Result<(), SemanticError> {
        statements.iter().try_for_each(|statement| self.visit(statement))
    }

    fn visit(&mut self, expr: &Expr) -> Result<(), SemanticError> {
        match expr {
            Expr::Block { statements, .. } => self.scoped(|analyzer| analyzer.visit_all(statements)),
            Expr::VariableDeclaration { name,
                                        initializer,
                                        line, } => {
                if let Some(initializer) = initializer {
                    self.visit(initializer)?;
                }
                if self.symbols.is_declared_in_current_scope(name) {
                    return Err(SemanticError::Redeclaration { name: name.clone(),
                                                              line: *line, });
                }
                self.symbols.declare(name, Value::None);
                Ok(())
            },
            Expr::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                self.visit_condition(condition)?;
                self.visit(then_branch)?;
                match else_branch {
                    Some(else_branch) => self.visit(else_branch),
                    None => Ok(()),
                }
            },
            Expr::While { condition, body, .. } => {
                self.visit_condition(condition)?;
                self.visit(body)
            },
            Expr::Binary { operator,
                           left,
                           right,
                           line, } => {
                if *operator == "=" && !matches!(**left, Expr::Identifier { .. }) {
                    return Err(SemanticError::InvalidAssignmentTarget { line: *line });
                }
                self.visit(left)?;
                self.visit(right)
            },
            Expr::Unary { operand, .. } => self.visit(operand),
            Expr::Identifier { name, line } => {
                if self.symbols.lookup(name).is_none() {
                    return Err(SemanticError::UndefinedVariable { name: name.clone(),
                                                                  line: *line, });
                }
                Ok(())
            },
            Expr::Invocation { name,
                               arguments,
                               line, } => {
                if function::lookup(name).is_none() {
                    return Err(SemanticError::UndefinedFunction { name: name.clone(),
                                                                  line: *line, });
                }
                self.visit_all(arguments)
            },
            Expr::Literal { .. } | Expr::Empty { .. } => Ok(()),
        }
    }

    fn visit_condition(&mut self, condition: &Expr) -> Result<(), SemanticError> {
        if is_never_boolean(condition) {
            return Err(SemanticError::NonBooleanCondition { line: condition.line() });
        }
        self.visit(condition)
    }
}

/// Returns `true` for conditions whose value kind is known not to be
/// boolean: non-boolean literals and operators that produce numbers.
fn is_never_boolean(expr: &Expr) -> bool {
    match expr {
        Expr::Literal { text, .. } => text != "true" && text != "false",
        Expr::Binary { operator, .. } => *operator != "=" && !BOOLEAN_OPERATORS.contains(operator),
        Expr::Unary { operator, .. } => !BOOLEAN_OPERATORS.contains(operator),
        _ => false,
    }
}
