use blast_tokens::spanned::{Span, Spanned};
use blast_tokens::token::{Token, TokenKind};
use itertools::Itertools;

/// Represents an error occurring during parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("syntax error: {kind}")]
pub struct SyntaxError {
    pub kind: ErrorKind,
    /// Where the error was found. At the end of input this is an empty span after the last token.
    pub location: Span,
    /// The grammar productions that were being parsed, outermost first
    pub non_terminals: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(kind: ErrorKind, location: Span, non_terminals: Vec<&'static str>) -> Self {
        Self {
            kind,
            location,
            non_terminals,
        }
    }

    /// The productions being parsed when the error occurred, like `program > block > statement`
    pub fn non_terminal_stack(&self) -> String {
        self.non_terminals.iter().join(" > ")
    }
}

impl Spanned for SyntaxError {
    fn span(&self) -> Span {
        self.location
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected {}, found {}", one_of(.expected), describe_found(.found))]
    ExpectedToken {
        expected: Vec<TokenKind>,
        found: Option<Token>,
    },
    #[error("expected expression, found {}", describe_found(.found))]
    ExpectedExpression { found: Option<Token> },
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("expressions and blocks nest deeper than {limit} levels")]
    TooDeep { limit: usize },
}

impl ErrorKind {
    pub fn expected_token(
        expected: impl IntoIterator<Item = TokenKind>,
        found: impl Into<Option<Token>>,
    ) -> Self {
        Self::ExpectedToken {
            expected: expected.into_iter().collect(),
            found: found.into(),
        }
    }
}

fn one_of(kinds: &[TokenKind]) -> String {
    match kinds {
        [kind] => format!("`{kind}`"),
        kinds => format!("one of {}", kinds.iter().map(|kind| format!("`{kind}`")).join(", ")),
    }
}

fn describe_found(token: &Option<Token>) -> String {
    match token {
        Some(token) => token.to_string(),
        None => TokenKind::Eof.to_string(),
    }
}
