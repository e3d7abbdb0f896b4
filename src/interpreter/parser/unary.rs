use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        operator::{self, Arity},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a prefix operator applied to a primary operand.
    ///
    /// The operator must be followed directly by a primary, so `--x` is a
    /// syntax error rather than a double negation.
    ///
    /// Grammar: `unary := unary_op primary | primary`
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Option<Expr>> {
        let Some(token) = self.accept_kind(TokenKind::Operator) else {
            return self.parse_primary();
        };

        let spec = operator::find(&token.lexeme, Arity::Unary).ok_or_else(|| {
                       ParseError::InvalidUnaryOperator { operator: token.lexeme.clone(),
                                                          line:     token.line, }
                   })?;

        let Some(operand) = self.parse_primary()? else {
            return Err(ParseError::MissingOperand { operator: token.lexeme.clone(),
                                                    line:     token.line, });
        };

        Ok(Some(Expr::Unary { operator: spec.lexeme,
                              operand:  Box::new(operand),
                              line:     token.line, }))
    }

    /// Parses a primary operand.
    ///
    /// In order: an identifier with an optional argument list, a parenthesized
    /// expression, a literal, and finally the statement expressions (`let`,
    /// `if`, `while`, blocks). Returns `None` if nothing matches.
    ///
    /// Grammar:
    /// ```text
    ///     primary := identifier arguments?
    ///              | "(" expression ")"
    ///              | literal
    ///              | statement_expression
    /// ```
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Option<Expr>> {
        if let Some(identifier) = self.accept_kind(TokenKind::Identifier) {
            if self.accept("(").is_some() {
                let arguments = self.parse_arguments()?;
                return Ok(Some(Expr::Invocation { name: identifier.lexeme.clone(),
                                                  arguments,
                                                  line: identifier.line }));
            }
            return Ok(Some(Expr::Identifier { name: identifier.lexeme.clone(),
                                              line: identifier.line, }));
        }

        if self.accept("(").is_some() {
            let inner = self.parse_expression()?;
            let inner = self.require(inner, "an expression")?;
            self.expect(")")?;
            return Ok(Some(inner));
        }

        if let Some(literal) = self.accept_kind(TokenKind::Literal) {
            return Ok(Some(Expr::Literal { text: literal.lexeme.clone(),
                                           line: literal.line, }));
        }

        self.parse_statement_expression()
    }

    /// Parses a comma-separated argument list after the opening `(`.
    ///
    /// Grammar: `arguments := "(" (expression ("," expression)*)? ")"`
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut arguments = Vec::new();

        while let Some(argument) = self.parse_expression()? {
            arguments.push(argument);
            if self.accept(")").is_some() {
                return Ok(arguments);
            }
            self.expect(",")?;
        }

        self.expect(")")?;
        Ok(arguments)
    }
}
