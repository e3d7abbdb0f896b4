use prog::interpreter::{symbol_table::SymbolTable, value::Value};

#[test]
fn declare_needs_an_open_scope() {
    let mut symbols = SymbolTable::new();

    assert_eq!(symbols.declare("x", Value::from(1.0)), None);
    assert_eq!(symbols.depth(), 0);
    assert_eq!(symbols.lookup("x"), None);
}

#[test]
fn redeclaration_overwrites_the_same_cell() {
    let mut symbols = SymbolTable::new();
    symbols.enter_scope();

    let first = symbols.declare("x", Value::from(1.0)).unwrap();
    let second = symbols.declare("x", Value::from("two")).unwrap();

    assert_eq!(first, second);
    assert_eq!(symbols.get(first), Some(&Value::from("two")));
}

#[test]
fn leaving_a_scope_drops_its_variables() {
    let mut symbols = SymbolTable::new();
    symbols.enter_scope();
    let outer = symbols.declare("a", Value::from(1.0)).unwrap();

    symbols.enter_scope();
    let inner = symbols.declare("b", Value::from(2.0)).unwrap();
    assert!(symbols.set(outer, Value::from(3.0)));
    symbols.leave_scope();

    assert_eq!(symbols.depth(), 1);
    assert_eq!(symbols.lookup("b"), None);
    assert_eq!(symbols.get(inner), None);
    assert!(!symbols.set(inner, Value::None));
    assert_eq!(symbols.get(outer), Some(&Value::from(3.0)));
}

#[test]
fn current_scope_check_ignores_outer_scopes() {
    let mut symbols = SymbolTable::new();
    symbols.enter_scope();
    symbols.declare("a", Value::None);
    symbols.enter_scope();

    assert!(!symbols.is_declared_in_current_scope("a"));
    assert!(symbols.lookup("a").is_some());
}
