#![doc = include_str!("../README.md")]

use blast_ast::Block;
use itertools::Itertools;
use tracing::instrument;

pub mod lexer;
pub mod parser;

pub use lexer::{scan, LexError, ScanOutput, Scanner};
pub use parser::{parse, Parser, SyntaxError};

/// An error from either pass over some source text
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrontendError {
    #[error("{}", .0.iter().join("\n"))]
    Lex(Vec<LexError>),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Scans and then parses `src`.
///
/// Lexical errors are all reported together, and parsing is only attempted when there were none.
#[instrument(level = "debug", skip_all, fields(len = src.len()))]
pub fn parse_source(src: &str) -> Result<Block, FrontendError> {
    let tokens = scan(src).into_result().map_err(FrontendError::Lex)?;
    Ok(parse(&tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blast_ast::{Expr, Stmt};
    use test_log::test;

    #[test]
    fn test_parse_source() {
        let block = parse_source("x: \"hello\".").unwrap();
        assert_eq!(
            block,
            Block::new([Stmt::expr(Expr::binary(
                blast_ast::BinOp::Assign,
                Expr::variable("x"),
                Expr::string("hello"),
            ))])
        );
    }

    #[test]
    fn test_lex_errors_stop_parsing() {
        let error = parse_source("x: 1 ? 2 ?").unwrap_err();
        let FrontendError::Lex(errors) = &error else {
            panic!("expected lex errors, got {error:?}");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(
            error.to_string(),
            "unexpected character '?'\nunexpected character '?'"
        );
    }

    #[test]
    fn test_syntax_error() {
        let error = parse_source("x: .").unwrap_err();
        assert!(matches!(error, FrontendError::Syntax(_)), "{error:?}");
    }
}
