use std::fmt;

use logos::Logos;

use crate::{error::LexError, interpreter::operator};

/// Words that are parsed as keywords rather than identifiers.
pub const KEYWORDS: &[&str] = &["let", "if", "else", "while"];

/// Words that are literal values.
pub const WORD_LITERALS: &[&str] = &["true", "false", "none"];

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `let`, `if`, `else`, `while`.
    Keyword,
    /// A lexeme from the operator table.
    Operator,
    /// One of `( ) { } , ;`.
    Separator,
    /// Number, string, `true`, `false` or `none`.
    Literal,
    /// A variable or function name.
    Identifier,
    /// `// ...` up to the end of the line.
    Comment,
    /// A run of whitespace.
    Whitespace,
}

impl TokenKind {
    /// Returns `true` for kinds the parser skips.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Comment | Self::Whitespace)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Represents a lexical token in the source input.
///
/// `lexeme` is the exact source text, so string literals keep their quotes
/// and comments keep their leading `//`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token classification.
    pub kind:   TokenKind,
    /// The source text of the token.
    pub lexeme: String,
    /// The line the token starts on, counting from 1.
    pub line:   usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.kind, self.lexeme)
    }
}

/// Raw token recognized by the derived lexer.
///
/// Each variant maps onto one [`TokenKind`]; the lexeme and line are taken
/// from the lexer state when the public [`Token`] is built.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
enum Lexeme {
    /// A run of whitespace, newlines included.
    #[regex(r"\s+", |lex| {
        lex.extras.line += newlines(lex.slice());
        Lexeme::Whitespace
    })]
    Whitespace,
    /// Digits with at most one decimal point, which must be followed by a
    /// digit.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    #[regex(r"[0-9]+\.", fractional_part_expected)]
    Number,
    /// Everything up to the next `"`. There are no escape sequences.
    #[regex(r#""[^"]*""#, |lex| {
        lex.extras.line += newlines(lex.slice());
        Lexeme::Text
    }, allow_greedy = true)]
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    Text,
    /// Identifiers, keywords and the word literals.
    #[regex(r"[_\p{Alphabetic}][_\p{Alphabetic}\p{N}]*", classify_word)]
    Word(TokenKind),
    /// `(`, `)`, `{`, `}`, `,` or `;`
    #[regex(r"[(){},;]")]
    Separator,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", allow_greedy = true)]
    Comment,
    /// Any character that starts an operator; the callback extends it.
    #[regex(r"[-+!*/%<>=&|]", munch_operator)]
    Operator,
}

impl Lexeme {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Whitespace => TokenKind::Whitespace,
            Self::Number | Self::Text => TokenKind::Literal,
            Self::Word(kind) => kind,
            Self::Separator => TokenKind::Separator,
            Self::Comment => TokenKind::Comment,
            Self::Operator => TokenKind::Operator,
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Debug, Default)]
struct LexerExtras {
    /// The line the next token starts on.
    line: usize,
}

/// Failure raised inside the derived lexer.
///
/// Lexeme and line are attached afterwards by [`LexFault::at`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum LexFault {
    /// No pattern matches the next character.
    #[default]
    Unrecognized,
    /// A number literal ending in `.`.
    FractionalPart,
    /// A `"` with no closing quote.
    Unterminated,
    /// The longest operator prefix that was read.
    UnknownOperator(String),
}

impl LexFault {
    fn at(self, slice: &str, line: usize) -> LexError {
        match self {
            Self::Unrecognized => {
                LexError::InvalidCharacter { character: slice.chars().next().unwrap_or_default(),
                                             line }
            },
            Self::FractionalPart => LexError::FractionalPartExpected { lexeme: slice.to_string(),
                                                                        line },
            Self::Unterminated => LexError::UnterminatedString { line },
            Self::UnknownOperator(candidate) => LexError::UnknownOperator { candidate, line },
        }
    }
}

fn newlines(slice: &str) -> usize {
    slice.matches('\n').count()
}

fn fractional_part_expected(_lex: &mut logos::Lexer<Lexeme>) -> Result<(), LexFault> {
    Err(LexFault::FractionalPart)
}

fn unterminated_string(_lex: &mut logos::Lexer<Lexeme>) -> Result<(), LexFault> {
    Err(LexFault::Unterminated)
}

fn classify_word(lex: &mut logos::Lexer<Lexeme>) -> TokenKind {
    let word = lex.slice();
    if WORD_LITERALS.contains(&word) {
        TokenKind::Literal
    } else if KEYWORDS.contains(&word) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

/// Maximal munch over the operator table.
///
/// The candidate grows one character at a time while some operator still
/// starts with it. The longest candidate that is itself an operator wins and
/// the lexer is bumped past it.
fn munch_operator(lex: &mut logos::Lexer<Lexeme>) -> Result<(), LexFault> {
    let rest = &lex.source()[lex.span().start..];
    let mut longest_prefix = None;
    let mut longest_match = None;

    for (offset, c) in rest.char_indices() {
        let candidate = &rest[..offset + c.len_utf8()];
        if !operator::is_operator_prefix(candidate) {
            break;
        }
        longest_prefix = Some(candidate);
        if operator::is_operator(candidate) {
            longest_match = Some(candidate);
        }
    }

    match (longest_match, longest_prefix) {
        (Some(lexeme), _) => {
            let matched = lex.slice().len();
            lex.bump(lexeme.len() - matched);
            Ok(())
        },
        (None, Some(candidate)) => Err(LexFault::UnknownOperator(candidate.to_string())),
        (None, None) => Err(LexFault::Unrecognized),
    }
}

/// Single forward pass over the source text.
///
/// The lexer is an iterator of `Result<Token, LexError>`. Tokens are produced
/// lazily; after the first error the iterator is exhausted.
pub struct Lexer<'s> {
    inner:  logos::Lexer<'s, Lexeme>,
    failed: bool,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { inner:  Lexeme::lexer_with_extras(source, LexerExtras { line: 1 }),
               failed: false, }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let line = self.inner.extras.line;
        let token = match self.inner.next()? {
            Ok(lexeme) => Ok(Token::new(lexeme.kind(), self.inner.slice(), line)),
            Err(fault) => Err(fault.at(self.inner.slice(), line)),
        };
        self.failed = token.is_err();
        Some(token)
    }
}

/// Splits source text into tokens, including whitespace and comments.
///
/// Fails on the first lexical error; no partial token list is returned.
///
/// # Example
/// ```
/// use prog::interpreter::lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("x <= 3.5").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Whitespace,
///             TokenKind::Operator,
///             TokenKind::Whitespace,
///             TokenKind::Literal]);
/// assert_eq!(tokens[2].lexeme, "<=");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
