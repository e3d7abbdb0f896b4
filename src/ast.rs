use std::fmt;

/// An abstract syntax tree (AST) node.
///
/// There is no separate statement type: blocks, conditionals, loops and
/// declarations are expressions too and may appear anywhere an operand may,
/// e.g. `let x = { 5 }`. Every variant records the line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `{ statement* }`; introduces a scope and yields its last value.
    Block {
        /// The statements in source order.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `let name [= initializer]`.
    VariableDeclaration {
        /// The declared name.
        name:        String,
        /// Initial value; `none` when absent.
        initializer: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `if (condition) then_branch [else else_branch]`.
    If {
        /// Must evaluate to a boolean.
        condition:   Box<Self>,
        /// Evaluated when the condition is true.
        then_branch: Box<Self>,
        /// Evaluated when the condition is false.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (condition) body`.
    While {
        /// Must evaluate to a boolean on every iteration.
        condition: Box<Self>,
        /// Evaluated while the condition holds.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An infix operation, including assignment.
    Binary {
        /// Operator lexeme from the operator table.
        operator: &'static str,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Line number of the operator.
        line:     usize,
    },
    /// A prefix operation.
    Unary {
        /// Operator lexeme from the operator table.
        operator: &'static str,
        /// The operand.
        operand:  Box<Self>,
        /// Line number of the operator.
        line:     usize,
    },
    /// Raw literal text: a number, a quoted string, `true`, `false` or `none`.
    Literal {
        /// The token text, quotes included for strings.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Call of a builtin function, e.g. `print(x, 1)`.
    Invocation {
        /// Name of the function being called.
        name:      String,
        /// Arguments in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A lone `;`.
    Empty {
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// The line the node starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Block { line, .. }
            | Self::VariableDeclaration { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Binary { line, .. }
            | Self::Unary { line, .. }
            | Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::Invocation { line, .. }
            | Self::Empty { line } => *line,
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Block { .. } => "Block".to_string(),
            Self::VariableDeclaration { name, .. } => format!("Let {name}"),
            Self::If { .. } => "If".to_string(),
            Self::While { .. } => "While".to_string(),
            Self::Binary { operator, .. } => format!("Binary {operator}"),
            Self::Unary { operator, .. } => format!("Unary {operator}"),
            Self::Literal { text, .. } => format!("Literal {text}"),
            Self::Identifier { name, .. } => format!("Identifier {name}"),
            Self::Invocation { name, .. } => format!("Invocation {name}"),
            Self::Empty { .. } => "Empty".to_string(),
        }
    }

    fn children(&self) -> Vec<&Self> {
        match self {
            Self::Block { statements, .. } => statements.iter().collect(),
            Self::VariableDeclaration { initializer, .. } => initializer.as_deref().into_iter().collect(),
            Self::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                let mut children = vec![&**condition, &**then_branch];
                children.extend(else_branch.as_deref());
                children
            },
            Self::While { condition, body, .. } => vec![&**condition, &**body],
            Self::Binary { left, right, .. } => vec![&**left, &**right],
            Self::Unary { operand, .. } => vec![&**operand],
            Self::Invocation { arguments, .. } => arguments.iter().collect(),
            Self::Literal { .. } | Self::Identifier { .. } | Self::Empty { .. } => Vec::new(),
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.label(), indent = depth * 2)?;
        for child in self.children() {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Expr>,
}

/// Renders the program as an indented tree, one node per line.
///
/// # Example
/// ```
/// use prog::interpreter::{lexer::tokenize, parser::parse};
///
/// let program = parse(&tokenize("1 + x").unwrap()).unwrap();
/// assert_eq!(program.to_string(),
///            "Program\n  Binary +\n    Literal 1\n    Identifier x\n");
/// ```
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program")?;
        for statement in &self.statements {
            statement.write_tree(f, 1)?;
        }
        Ok(())
    }
}
