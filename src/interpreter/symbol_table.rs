use std::collections::HashMap;

use itertools::Itertools;
use log::trace;

use crate::interpreter::value::Value;

/// Stable reference to a variable cell.
///
/// A handle is only valid until the scope that declared the variable is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarHandle(usize);

/// A named, mutable value cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The declared name.
    pub name:  String,
    /// Current contents.
    pub value: Value,
}

#[derive(Debug, Default)]
struct Scope {
    /// First cell owned by this scope.
    base:  usize,
    names: HashMap<String, usize>,
}

/// A stack of lexical scopes over a single cell arena.
///
/// Every declaration appends a cell to the arena and records its index in the
/// innermost scope. Leaving a scope truncates the arena back to where the
/// scope began, so variables never outlive their block. Lookup walks the
/// scopes from innermost to outermost, which is what makes shadowing work.
///
/// # Example
/// ```
/// use prog::interpreter::{symbol_table::SymbolTable, value::Value};
///
/// let mut symbols = SymbolTable::new();
/// symbols.enter_scope();
/// symbols.declare("x", Value::from(1.0));
///
/// symbols.enter_scope();
/// symbols.declare("x", Value::from("inner"));
/// let inner = symbols.lookup("x").unwrap();
/// assert_eq!(symbols.get(inner), Some(&Value::from("inner")));
/// symbols.leave_scope();
///
/// let outer = symbols.lookup("x").unwrap();
/// assert_eq!(symbols.get(outer), Some(&Value::from(1.0)));
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    cells:  Vec<Variable>,
}

impl SymbolTable {
    /// Creates a table with no scopes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Pushes an empty scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope { base:  self.cells.len(),
                                 names: HashMap::new(), });
    }

    /// Pops the innermost scope and drops every variable it declared.
    pub fn leave_scope(&mut self) {
        if let Some(scope) = self.scopes.pop() {
            trace!("releasing [{}]",
                   self.cells[scope.base..].iter().map(|variable| &variable.name).join(", "));
            self.cells.truncate(scope.base);
        }
    }

    /// Declares `name` in the innermost scope.
    ///
    /// Declaring a name twice in the same scope overwrites the existing cell.
    /// Returns `None`, and declares nothing, when no scope is open.
    pub fn declare(&mut self, name: &str, value: Value) -> Option<VarHandle> {
        let index = self.cells.len();
        let scope = self.scopes.last_mut()?;
        if let Some(&existing) = scope.names.get(name) {
            self.cells[existing].value = value;
            return Some(VarHandle(existing));
        }

        scope.names.insert(name.to_string(), index);
        self.cells.push(Variable { name: name.to_string(),
                                   value });
        Some(VarHandle(index))
    }

    /// Finds the innermost visible variable called `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<VarHandle> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.names.get(name))
            .map(|&index| VarHandle(index))
    }

    /// Returns `true` if the innermost scope already declares `name`.
    #[must_use]
    pub fn is_declared_in_current_scope(&self, name: &str) -> bool {
        self.scopes
            .last()
            .is_some_and(|scope| scope.names.contains_key(name))
    }

    /// Reads a variable's value.
    #[must_use]
    pub fn get(&self, handle: VarHandle) -> Option<&Value> {
        self.cells.get(handle.0).map(|variable| &variable.value)
    }

    /// Replaces a variable's value in place. Returns `false` if the handle no
    /// longer refers to a live variable.
    pub fn set(&mut self, handle: VarHandle, value: Value) -> bool {
        match self.cells.get_mut(handle.0) {
            Some(variable) => {
                variable.value = value;
                true
            },
            None => false,
        }
    }
}
