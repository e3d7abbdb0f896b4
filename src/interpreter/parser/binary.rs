use std::mem;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        operator::{binary_groups, Associativity, OperatorSpec},
        parser::core::{ParseResult, Parser},
    },
};

/// A binary node whose left operand is not known yet.
///
/// Continuations are parsed right-recursively, so the operand to the left of
/// an operator is only available after the rest of the chain has been read.
/// A `Tail` holds the operator and its right operand and leaves the left slot
/// open until [`Tail::close`] fills it.
#[derive(Debug)]
struct Tail {
    operator: &'static OperatorSpec,
    left:     Slot,
    right:    Expr,
    line:     usize,
}

/// Left operand position of a [`Tail`].
#[derive(Debug)]
enum Slot {
    /// Waiting for an operand.
    Open,
    /// Another incomplete node whose result becomes this left operand.
    Chain(Box<Tail>),
}

impl Tail {
    const fn new(operator: &'static OperatorSpec, right: Expr, line: usize) -> Self {
        Self { operator,
               left: Slot::Open,
               right,
               line }
    }

    /// Fills the leftmost open slot with `operand` and builds the tree.
    fn close(self, operand: Expr) -> Expr {
        let left = match self.left {
            Slot::Open => operand,
            Slot::Chain(inner) => inner.close(operand),
        };
        Expr::Binary { operator: self.operator.lexeme,
                       left:     Box::new(left),
                       right:    Box::new(self.right),
                       line:     self.line, }
    }

    /// Hangs `node` in the leftmost open slot, making it the innermost
    /// left operand of the chain.
    fn splice(mut self, node: Self) -> Self {
        self.left = match mem::replace(&mut self.left, Slot::Open) {
            Slot::Open => Slot::Chain(Box::new(node)),
            Slot::Chain(inner) => Slot::Chain(Box::new(inner.splice(node))),
        };
        self
    }
}

impl Parser<'_> {
    /// Parses an expression at the given priority level.
    ///
    /// Level `0` is the loosest group of [`binary_groups`]; each level parses
    /// its operands with the next tighter one, and the level after the last
    /// group is the unary level.
    ///
    /// Grammar: `binary(n) := operand(n) continuation(n)?`
    pub(crate) fn parse_binary(&mut self, level: usize) -> ParseResult<Option<Expr>> {
        let Some(operand) = self.parse_operand(level)? else {
            return Ok(None);
        };

        match self.parse_continuation(level)? {
            Some(tail) => Ok(Some(tail.close(operand))),
            None => Ok(Some(operand)),
        }
    }

    fn parse_operand(&mut self, level: usize) -> ParseResult<Option<Expr>> {
        if level + 1 < binary_groups().len() {
            self.parse_binary(level + 1)
        } else {
            self.parse_unary()
        }
    }

    /// Parses `(op operand)+` for the operators of one group.
    ///
    /// The rest of the chain is read first. How the current operator is
    /// grafted onto it depends on the associativity recorded in the table:
    /// right-to-left operators take the deeper chain as their right operand,
    /// left-to-right operators become the innermost left operand of it.
    ///
    /// Grammar: `continuation(n) := op(n) operand(n) continuation(n)?`
    fn parse_continuation(&mut self, level: usize) -> ParseResult<Option<Tail>> {
        let group = &binary_groups()[level];
        let Some(token) =
            self.accept_if(|token| token.kind == TokenKind::Operator && group.contains(&token.lexeme))
        else {
            return Ok(None);
        };

        let spec =
            group.find(&token.lexeme)
                 .ok_or_else(|| ParseError::UnknownBinaryOperator { operator: token.lexeme.clone(),
                                                                    line:     token.line, })?;

        let Some(operand) = self.parse_operand(level)? else {
            return Err(ParseError::MissingOperand { operator: token.lexeme.clone(),
                                                    line:     token.line, });
        };

        let tail = match self.parse_continuation(level)? {
            None => Tail::new(spec, operand, token.line),
            Some(deeper) => match spec.associativity {
                Associativity::RightToLeft => Tail::new(spec, deeper.close(operand), token.line),
                Associativity::LeftToRight => deeper.splice(Tail::new(spec, operand, token.line)),
            },
        };
        Ok(Some(tail))
    }
}
