//! A lexical token from blast source text

use crate::spanned::{Span, Spanned};
use std::fmt::{Debug, Display, Formatter};

/// A lexical token from a source string
#[derive(Clone)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    span: Span,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The text this token was matched from.
    ///
    /// For strings this excludes the surrounding quotes.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.lexeme)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Identifier => write!(f, "{} `{}`", self.kind, self.lexeme),
            TokenKind::String => write!(f, "{} `\"{}\"`", self.kind, self.lexeme),
            kind => write!(f, "`{kind}`"),
        }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// Tokens are equal when they are of the same kind and were read from the same text,
/// regardless of where they were read from.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

/// The kind for this token
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr)]
pub enum TokenKind {
    /// end of input, never produced by the scanner but used to describe a missing token
    #[strum(to_string = "EOF")]
    Eof,

    #[strum(to_string = "<number>")]
    Number,
    #[strum(to_string = "<string>")]
    String,
    #[strum(to_string = "<identifier>")]
    Identifier,

    #[strum(to_string = "+")]
    Plus,
    #[strum(to_string = "-")]
    Minus,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Div,
    #[strum(to_string = "%")]
    Mod,
    #[strum(to_string = "**")]
    Exp,

    /// `:`, assignment
    #[strum(to_string = ":")]
    Colon,

    #[strum(to_string = "=")]
    Eq,
    #[strum(to_string = "<>")]
    Ne,
    #[strum(to_string = "<")]
    Lt,
    #[strum(to_string = "<=")]
    Le,
    #[strum(to_string = ">")]
    Gt,
    #[strum(to_string = ">=")]
    Ge,

    /// `.`, ends a statement
    #[strum(to_string = ".")]
    Period,
    #[strum(to_string = "(")]
    LParen,
    #[strum(to_string = ")")]
    RParen,

    #[strum(to_string = "if")]
    If,
    #[strum(to_string = "then")]
    Then,
    #[strum(to_string = "else")]
    Else,
    #[strum(to_string = "end")]
    End,
    #[strum(to_string = "while")]
    While,
    #[strum(to_string = "do")]
    Do,
    #[strum(to_string = "routine")]
    Routine,
}

impl TokenKind {
    /// Gets the fixed text of this kind, or a placeholder like `<number>` for kinds whose text varies
    pub fn symbol(self) -> &'static str {
        self.into()
    }
}
