//! The ordered table of rules used to recognize tokens

use blast_tokens::token::TokenKind;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::{char, digit1, satisfy};
use nom::combinator::{consumed, map, not, opt, recognize};
use nom::error::{ErrorKind, ParseError, VerboseError};
use nom::sequence::{delimited, pair, terminated};
use nom::IResult;

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// How the text of a token is recognized
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Exactly this text
    Literal(&'static str),
    /// Exactly this word, as long as it isn't the start of a longer identifier
    Keyword(&'static str),
    /// Digits, optionally followed by `.` and more digits
    Number,
    /// Any run of characters between two `"`. The quotes aren't part of the lexeme.
    String,
    /// A letter, `_` or `$`, then any number of letters, digits, `_` or `$`
    Identifier,
}

impl Pattern {
    /// Matches this pattern at the very start of `src`.
    ///
    /// On success gives back the text that was consumed along with the lexeme of the token.
    pub fn matches<'a>(&self, src: &'a str) -> Result<'a, (&'a str, &'a str)> {
        match *self {
            Pattern::Literal(text) => map(tag(text), |t: &'a str| (t, t))(src),
            Pattern::Keyword(word) => map(
                terminated(tag(word), not(satisfy(is_identifier_char))),
                |t: &'a str| (t, t),
            )(src),
            Pattern::Number => map(parse_number, |t: &'a str| (t, t))(src),
            Pattern::String => consumed(parse_string)(src),
            Pattern::Identifier => map(parse_identifier, |t: &'a str| (t, t))(src),
        }
    }
}

/// Every token kind the scanner produces, paired with the pattern that recognizes it.
///
/// Rules are tried in order and the first match wins, so a rule must come before any later rule
/// that would match a prefix of the same text (`**` before `*`, `<=` before `<`, keywords before
/// identifiers).
pub static RULES: &[(TokenKind, Pattern)] = &[
    (TokenKind::Number, Pattern::Number),
    (TokenKind::String, Pattern::String),
    (TokenKind::Plus, Pattern::Literal("+")),
    (TokenKind::Minus, Pattern::Literal("-")),
    (TokenKind::Exp, Pattern::Literal("**")),
    (TokenKind::Mul, Pattern::Literal("*")),
    (TokenKind::Div, Pattern::Literal("/")),
    (TokenKind::Mod, Pattern::Literal("%")),
    (TokenKind::Colon, Pattern::Literal(":")),
    (TokenKind::Ne, Pattern::Literal("<>")),
    (TokenKind::Le, Pattern::Literal("<=")),
    (TokenKind::Ge, Pattern::Literal(">=")),
    (TokenKind::Lt, Pattern::Literal("<")),
    (TokenKind::Gt, Pattern::Literal(">")),
    (TokenKind::Eq, Pattern::Literal("=")),
    (TokenKind::Period, Pattern::Literal(".")),
    (TokenKind::LParen, Pattern::Literal("(")),
    (TokenKind::RParen, Pattern::Literal(")")),
    (TokenKind::If, Pattern::Keyword("if")),
    (TokenKind::Then, Pattern::Keyword("then")),
    (TokenKind::Else, Pattern::Keyword("else")),
    (TokenKind::End, Pattern::Keyword("end")),
    (TokenKind::While, Pattern::Keyword("while")),
    (TokenKind::Do, Pattern::Keyword("do")),
    (TokenKind::Routine, Pattern::Keyword("routine")),
    (TokenKind::Identifier, Pattern::Identifier),
];

/// Parses a single token from the start of `src`, giving back its kind, the consumed text and its
/// lexeme.
pub fn parse_token(src: &str) -> Result<(TokenKind, &str, &str)> {
    for &(kind, pattern) in RULES {
        match pattern.matches(src) {
            Ok((rest, (consumed, lexeme))) => return Ok((rest, (kind, consumed, lexeme))),
            Err(nom::Err::Error(_)) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(nom::Err::Error(VerboseError::from_error_kind(
        src,
        ErrorKind::Alt,
    )))
}

/// Recognizes any leading ASCII whitespace. Other whitespace is left for the scanner to reject.
pub fn parse_whitespace(src: &str) -> Result<&str> {
    take_while(|c: char| c.is_ascii_whitespace())(src)
}

fn parse_number(src: &str) -> Result<&str> {
    recognize(pair(digit1, opt(pair(char('.'), digit1))))(src)
}

fn parse_string(src: &str) -> Result<&str> {
    delimited(char('"'), take_while(|c: char| c != '"'), char('"'))(src)
}

fn parse_identifier(src: &str) -> Result<&str> {
    recognize(pair(
        satisfy(is_identifier_start),
        take_while(is_identifier_char),
    ))(src)
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
