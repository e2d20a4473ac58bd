//! Responsible for converting source text into a stream of tokens

use crate::lexer::token_parsing::{parse_token, parse_whitespace};
use blast_tokens::spanned::{Span, Spanned};
use blast_tokens::token::Token;
use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, trace};

mod token_parsing;

pub use token_parsing::{Pattern, RULES};

/// Scans tokens out of a source string, one at a time.
///
/// A character that no rule matches is reported as a [`LexError`] and skipped, after which
/// scanning carries on from the next character.
///
/// # Examples
/// ```
/// # use blast_parsing::lexer::Scanner;
/// # use blast_tokens::token::TokenKind;
/// let kinds = Scanner::new("x: 1.")
///     .map(|token| token.map(|token| token.kind()))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Colon, TokenKind::Number, TokenKind::Period]);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    src: &'s str,
    offset: usize,
}

impl<'s> Scanner<'s> {
    /// Creates a new scanner at the start of `src`
    pub fn new(src: &'s str) -> Self {
        Self { src, offset: 0 }
    }

    fn rest(&self) -> &'s str {
        self.src.get(self.offset..).unwrap_or_default()
    }

    fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if let Ok((_, whitespace)) = parse_whitespace(self.rest()) {
            self.offset += whitespace.len();
        }
        let rest = self.rest();
        let next_char = rest.chars().next()?;
        match parse_token(rest) {
            Ok((_, (kind, consumed, lexeme))) => {
                let token = Token::new(kind, lexeme, Span::new(self.offset, consumed.len()));
                self.offset += consumed.len();
                trace!("scanned {token:?} at {:?}", token.span());
                Some(Ok(token))
            }
            Err(_) => {
                let error = LexError {
                    position: self.offset,
                    character: next_char,
                };
                self.offset += next_char.len_utf8();
                debug!("{error} at offset {}", error.position);
                Some(Err(error))
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// No rule matched at `position`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character {character:?}")]
pub struct LexError {
    /// Byte offset of the character
    pub position: usize,
    /// The character no rule could start with
    pub character: char,
}

impl Spanned for LexError {
    fn span(&self) -> Span {
        Span::new(self.position, self.character.len_utf8())
    }
}

/// Everything found while scanning a source string
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanOutput {
    /// Tokens in source order
    pub tokens: Vec<Token>,
    /// Errors in source order
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Gets the tokens if there were no errors
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Scans all of `src`
pub fn scan(src: &str) -> ScanOutput {
    let (tokens, errors): (Vec<_>, Vec<_>) = Scanner::new(src).partition_result();
    debug!(
        "scanned {} tokens with {} errors",
        tokens.len(),
        errors.len()
    );
    ScanOutput { tokens, errors }
}
