use once_cell::sync::Lazy;

/// Number of operands an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Prefix operator with one operand.
    Unary,
    /// Infix operator with two operands.
    Binary,
}

/// Direction in which a chain of same-priority operators groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    #[default]
    LeftToRight,
    /// `a = b = c` groups as `a = (b = c)`.
    RightToLeft,
}

/// Declarative description of one operator.
///
/// A lower `priority` binds tighter. The same lexeme may appear twice with
/// different arities (`-` is both negation and subtraction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    /// The operator text, e.g. `<=`.
    pub lexeme:        &'static str,
    /// Unary or binary.
    pub arity:         Arity,
    /// Binding strength; lower numbers bind tighter.
    pub priority:      u8,
    /// Grouping direction for chains of this operator.
    pub associativity: Associativity,
}

impl OperatorSpec {
    const fn unary(lexeme: &'static str, priority: u8) -> Self {
        Self { lexeme,
               arity: Arity::Unary,
               priority,
               associativity: Associativity::RightToLeft }
    }

    const fn binary(lexeme: &'static str, priority: u8) -> Self {
        Self { lexeme,
               arity: Arity::Binary,
               priority,
               associativity: Associativity::LeftToRight }
    }

    const fn right_to_left(self) -> Self {
        Self { associativity: Associativity::RightToLeft,
               ..self }
    }
}

/// Every operator of the language.
///
/// The lexer uses the lexemes for maximal munch and the parser derives its
/// precedence levels from the binary entries, so adding a row here is enough
/// to make an operator parse.
pub static OPERATORS: &[OperatorSpec] = &[OperatorSpec::unary("+", 1),
                                          OperatorSpec::unary("-", 1),
                                          OperatorSpec::unary("!", 1),
                                          OperatorSpec::binary("*", 2),
                                          OperatorSpec::binary("/", 2),
                                          OperatorSpec::binary("%", 2),
                                          OperatorSpec::binary("+", 3),
                                          OperatorSpec::binary("-", 3),
                                          OperatorSpec::binary("<", 5),
                                          OperatorSpec::binary("<=", 5),
                                          OperatorSpec::binary(">", 5),
                                          OperatorSpec::binary(">=", 5),
                                          OperatorSpec::binary("==", 6),
                                          OperatorSpec::binary("!=", 6),
                                          OperatorSpec::binary("&&", 10),
                                          OperatorSpec::binary("||", 11),
                                          OperatorSpec::binary("=", 13).right_to_left()];

/// All binary operators sharing one priority.
#[derive(Debug, Clone)]
pub struct OperatorGroup {
    /// The shared priority.
    pub priority:  u8,
    /// Members in table order.
    pub operators: Vec<&'static OperatorSpec>,
}

impl OperatorGroup {
    /// Finds the member with the given lexeme.
    #[must_use]
    pub fn find(&self, lexeme: &str) -> Option<&'static OperatorSpec> {
        self.operators.iter().copied().find(|op| op.lexeme == lexeme)
    }

    /// Returns `true` if some member has the given lexeme.
    #[must_use]
    pub fn contains(&self, lexeme: &str) -> bool {
        self.find(lexeme).is_some()
    }
}

static BINARY_GROUPS: Lazy<Vec<OperatorGroup>> = Lazy::new(|| {
    let mut groups: Vec<OperatorGroup> = Vec::new();
    for op in OPERATORS.iter().filter(|op| op.arity == Arity::Binary) {
        match groups.iter_mut().find(|g| g.priority == op.priority) {
            Some(group) => group.operators.push(op),
            None => groups.push(OperatorGroup { priority:  op.priority,
                                                operators: vec![op], }),
        }
    }
    groups.sort_by(|a, b| b.priority.cmp(&a.priority));
    groups
});

/// Binary operators grouped by priority, loosest group first.
///
/// The parser walks this slice from index `0` (assignment) towards the end
/// (multiplicative operators); the unary level sits below the last group.
///
/// # Example
/// ```
/// use prog::interpreter::operator::binary_groups;
///
/// let groups = binary_groups();
/// assert!(groups.first().unwrap().contains("="));
/// assert!(groups.last().unwrap().contains("*"));
/// ```
#[must_use]
pub fn binary_groups() -> &'static [OperatorGroup] {
    &BINARY_GROUPS
}

/// Looks up an operator by lexeme and arity.
///
/// # Example
/// ```
/// use prog::interpreter::operator::{find, Arity, Associativity};
///
/// let assign = find("=", Arity::Binary).unwrap();
/// assert_eq!(assign.associativity, Associativity::RightToLeft);
/// assert!(find("*", Arity::Unary).is_none());
/// ```
#[must_use]
pub fn find(lexeme: &str, arity: Arity) -> Option<&'static OperatorSpec> {
    OPERATORS.iter()
             .find(|op| op.arity == arity && op.lexeme == lexeme)
}

/// Returns `true` if `lexeme` is a complete operator of either arity.
#[must_use]
pub fn is_operator(lexeme: &str) -> bool {
    OPERATORS.iter().any(|op| op.lexeme == lexeme)
}

/// Returns `true` if some operator starts with `candidate`.
#[must_use]
pub fn is_operator_prefix(candidate: &str) -> bool {
    OPERATORS.iter().any(|op| op.lexeme.starts_with(candidate))
}
