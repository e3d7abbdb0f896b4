use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive descent parser over a token slice.
///
/// Whitespace and comment tokens are skipped transparently, so the slice may
/// come straight from [`tokenize`](crate::interpreter::lexer::tokenize).
/// Grammar rules that may not apply at the current position return
/// `Ok(None)` without consuming anything; rules that have committed to a
/// construct report a [`ParseError`] instead.
pub struct Parser<'t> {
    tokens:   &'t [Token],
    position: usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// Returns the next significant token without consuming it.
    pub(crate) fn peek(&mut self) -> Option<&'t Token> {
        while let Some(token) = self.tokens.get(self.position) {
            if !token.kind.is_trivia() {
                return Some(token);
            }
            self.position += 1;
        }
        None
    }

    /// Consumes the next token if its lexeme is `lexeme`.
    pub(crate) fn accept(&mut self, lexeme: &str) -> Option<&'t Token> {
        self.accept_if(|token| token.lexeme == lexeme)
    }

    /// Consumes the next token if it is of kind `kind`.
    pub(crate) fn accept_kind(&mut self, kind: TokenKind) -> Option<&'t Token> {
        self.accept_if(|token| token.kind == kind)
    }

    pub(crate) fn accept_if(&mut self, predicate: impl Fn(&Token) -> bool) -> Option<&'t Token> {
        let token = self.peek()?;
        if !predicate(token) {
            return None;
        }
        self.position += 1;
        Some(token)
    }

    /// Consumes a token with the given lexeme or fails.
    pub(crate) fn expect(&mut self, lexeme: &str) -> ParseResult<&'t Token> {
        match self.accept(lexeme) {
            Some(token) => Ok(token),
            None => Err(self.expected(&format!("`{lexeme}`"))),
        }
    }

    /// Consumes a token of the given kind or fails.
    pub(crate) fn expect_kind(&mut self, kind: TokenKind) -> ParseResult<&'t Token> {
        match self.accept_kind(kind) {
            Some(token) => Ok(token),
            None => Err(self.expected(&format!("`{kind}`"))),
        }
    }

    /// Builds an error saying `what` was expected at the current position.
    pub(crate) fn expected(&mut self, what: &str) -> ParseError {
        let line = self.line();
        let found = self.peek()
                        .map(|token| (token.kind.to_string(), token.lexeme.clone()));
        ParseError::Expected { expected: what.to_string(),
                               found,
                               line }
    }

    /// Turns an optional sub-rule result into a required one.
    pub(crate) fn require(&mut self, expr: Option<Expr>, what: &str) -> ParseResult<Expr> {
        match expr {
            Some(expr) => Ok(expr),
            None => Err(self.expected(what)),
        }
    }

    /// Line of the next significant token, or of the last token at the end
    /// of the input.
    pub(crate) fn line(&mut self) -> usize {
        match self.peek() {
            Some(token) => token.line,
            None => self.tokens.last().map_or(1, |token| token.line),
        }
    }

    /// Parses a full expression, or returns `None` if none starts here.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// loosest priority group, assignment, and descends through the table.
    pub fn parse_expression(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_binary(0)
    }
}

/// Parses a complete program.
///
/// Stops at the first syntax error; there is no recovery.
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form a program, including when
/// tokens remain that no statement can start with.
///
/// # Example
/// ```
/// use prog::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let program = parse(&tokenize("let x = 2; x").unwrap()).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// assert!(matches!(program.statements[0], Expr::VariableDeclaration { .. }));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program()?;

    debug!("parsed {} top-level statements", program.statements.len());
    Ok(program)
}
