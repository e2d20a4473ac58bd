//! Builds a syntax tree out of a sequence of tokens

use blast_ast::Block;
use blast_tokens::spanned::{Span, Spanned};
use blast_tokens::token::{Token, TokenKind};
use tracing::{debug, trace};

pub mod error;
pub mod expr;
pub mod statement;

pub use error::*;

pub type Result<T> = std::result::Result<T, SyntaxError>;

/// How deeply productions may nest before parsing gives up
pub const MAX_DEPTH: usize = 128;

/// A cursor over a slice of tokens with one token of lookahead.
///
/// The cursor only ever moves forward and never moves past the end of the slice.
///
/// # Examples
/// ```
/// # use blast_parsing::{scan, parser::Parser};
/// # use blast_tokens::token::TokenKind;
/// let tokens = scan("f(x).").tokens;
/// let mut parser = Parser::new(&tokens);
/// assert!(parser.check(&[TokenKind::Identifier]));
/// assert!(parser.consume(&[TokenKind::Period]).is_err());
/// assert_eq!(parser.consume(&[TokenKind::Identifier]).unwrap().lexeme(), "f");
/// ```
#[derive(Debug)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    current: usize,
    non_terminals: Vec<&'static str>,
    depth: usize,
}

impl<'t> Parser<'t> {
    /// Creates a new parser at the start of `tokens`
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            non_terminals: vec![],
            depth: 0,
        }
    }

    /// Whether every token has been consumed
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// peek the current lookahead
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Whether the current token is one of `kinds`. Always false at the end of input.
    pub fn check(&self, kinds: &[TokenKind]) -> bool {
        self.peek().is_some_and(|token| kinds.contains(&token.kind()))
    }

    /// Consumes the current token, if there is one
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.current += 1;
        trace!("consumed {token:?}");
        Some(token)
    }

    /// Consumes the current token if it's one of `kinds`, otherwise errors without moving.
    pub fn consume(&mut self, kinds: &[TokenKind]) -> Result<&'t Token> {
        match self.consume_if(kinds) {
            Some(token) => Ok(token),
            None => Err(self.error(ErrorKind::expected_token(
                kinds.iter().copied(),
                self.peek().cloned(),
            ))),
        }
    }

    /// consumes if the current token is one of `kinds`
    pub fn consume_if(&mut self, kinds: &[TokenKind]) -> Option<&'t Token> {
        if self.check(kinds) {
            self.advance()
        } else {
            None
        }
    }

    /// Runs `parse` as the named grammar production, so errors raised within know what was being
    /// parsed.
    pub fn within<T, F>(&mut self, non_terminal: &'static str, parse: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        trace!("starting parsing {non_terminal} at {:?}", self.peek());
        self.non_terminals.push(non_terminal);
        let result = self.nested(1, parse);
        self.non_terminals.pop();
        result
    }

    /// Runs `parse` `levels` deeper in the tree being built. Errors instead of running it once the
    /// total would pass [MAX_DEPTH].
    pub fn nested<T, F>(&mut self, levels: usize, parse: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        if self.depth + levels > MAX_DEPTH {
            return Err(self.error(ErrorKind::TooDeep { limit: MAX_DEPTH }));
        }
        self.depth += levels;
        let result = parse(self);
        self.depth -= levels;
        result
    }

    /// Creates an error located at the current token, or just past the last token at the end of
    /// input.
    pub fn error(&self, kind: ErrorKind) -> SyntaxError {
        let location = match self.peek() {
            Some(token) => token.span(),
            None => self
                .tokens
                .last()
                .map(|token| token.span().end())
                .unwrap_or_default(),
        };
        self.error_at(kind, location)
    }

    /// Creates an error at a given location
    pub fn error_at(&self, kind: ErrorKind, location: Span) -> SyntaxError {
        let error = SyntaxError::new(kind, location, self.non_terminals.clone());
        debug!("{error} in {}", error.non_terminal_stack());
        error
    }

    /// Parses statements until the end of input
    pub fn parse_program(&mut self) -> Result<Block> {
        self.within("program", |parser| statement::parse_block(parser, &[]))
    }
}

/// Parses a whole program
pub fn parse(tokens: &[Token]) -> Result<Block> {
    let block = Parser::new(tokens).parse_program()?;
    debug!("parsed {} statements", block.len());
    Ok(block)
}
