use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses statements until none can start, then requires end of input.
    ///
    /// Grammar: `program := statement*`
    pub(crate) fn parse_program(&mut self) -> ParseResult<Program> {
        let statements = self.parse_statements()?;

        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingInput { kind:   token.kind.to_string(),
                                                   lexeme: token.lexeme.clone(),
                                                   line:   token.line, });
        }
        Ok(Program { statements })
    }

    fn parse_statements(&mut self) -> ParseResult<Vec<Expr>> {
        let mut statements = Vec::new();
        while let Some(statement) = self.parse_statement()? {
            statements.push(statement);
        }
        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// A statement is a lone `;` (the empty statement) or an expression
    /// followed by an optional `;`. Returns `None` when the next token cannot
    /// begin an expression.
    ///
    /// Grammar: `statement := ";" | expression ";"?`
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Option<Expr>> {
        if let Some(token) = self.accept(";") {
            return Ok(Some(Expr::Empty { line: token.line }));
        }

        let expr = self.parse_expression()?;
        self.accept(";");
        Ok(expr)
    }

    /// Parses the constructs that are statements and expressions at once.
    ///
    /// Tried last among the primary operands, so they may appear on either
    /// side of an operator: `let y = if (c) 1 else 2`.
    pub(crate) fn parse_statement_expression(&mut self) -> ParseResult<Option<Expr>> {
        if let Some(declaration) = self.parse_variable_declaration()? {
            return Ok(Some(declaration));
        }
        if let Some(conditional) = self.parse_if()? {
            return Ok(Some(conditional));
        }
        if let Some(while_loop) = self.parse_while()? {
            return Ok(Some(while_loop));
        }
        self.parse_block()
    }

    /// Parses a block delimited by braces.
    ///
    /// Grammar: `block := "{" statement* "}"`
    fn parse_block(&mut self) -> ParseResult<Option<Expr>> {
        let Some(open) = self.accept("{") else {
            return Ok(None);
        };

        let statements = self.parse_statements()?;
        self.expect("}")?;

        Ok(Some(Expr::Block { statements,
                              line: open.line }))
    }

    /// Parses a variable declaration.
    ///
    /// Grammar: `declaration := "let" identifier ("=" expression)?`
    fn parse_variable_declaration(&mut self) -> ParseResult<Option<Expr>> {
        let Some(keyword) = self.accept("let") else {
            return Ok(None);
        };

        let name = self.expect_kind(TokenKind::Identifier)?;
        let initializer = if self.accept("=").is_some() {
            let expr = self.parse_expression()?;
            Some(Box::new(self.require(expr, "an expression")?))
        } else {
            None
        };

        Ok(Some(Expr::VariableDeclaration { name: name.lexeme.clone(),
                                            initializer,
                                            line: keyword.line }))
    }

    /// Parses an `if` with an optional `else` branch.
    ///
    /// Grammar: `if := "if" "(" expression ")" statement ("else" statement)?`
    fn parse_if(&mut self) -> ParseResult<Option<Expr>> {
        let Some(keyword) = self.accept("if") else {
            return Ok(None);
        };

        let condition = self.parse_condition()?;

        let then_branch = self.parse_statement()?;
        let then_branch = self.require(then_branch, "a statement after the test expression")?;

        let else_branch = if self.accept("else").is_some() {
            let statement = self.parse_statement()?;
            Some(Box::new(self.require(statement, "a statement after `else`")?))
        } else {
            None
        };

        Ok(Some(Expr::If { condition: Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch,
                           line: keyword.line }))
    }

    /// Parses a `while` loop.
    ///
    /// Grammar: `while := "while" "(" expression ")" statement`
    fn parse_while(&mut self) -> ParseResult<Option<Expr>> {
        let Some(keyword) = self.accept("while") else {
            return Ok(None);
        };

        let condition = self.parse_condition()?;

        let body = self.parse_statement()?;
        let body = self.require(body, "a statement after the test expression")?;

        Ok(Some(Expr::While { condition: Box::new(condition),
                              body:      Box::new(body),
                              line:      keyword.line, }))
    }

    /// `"(" expression ")"` after `if` and `while`.
    fn parse_condition(&mut self) -> ParseResult<Expr> {
        self.expect("(")?;
        let condition = self.parse_expression()?;
        let condition = self.require(condition, "a test expression")?;
        self.expect(")")?;
        Ok(condition)
    }
}
