//! Expression parsing, one function per level of binding power from loosest to tightest

use crate::parser::{ErrorKind, Parser, Result};
use blast_ast::expr::{BinOp, CallExpr, Expr, UnaryOp};
use blast_tokens::spanned::Spanned;
use blast_tokens::token::TokenKind;

/// Parses an expression
pub fn parse_expression(parser: &mut Parser) -> Result<Expr> {
    parser.within("expression", parse_assignment)
}

/// Consumes the current token if it's one of `kinds`, giving back the operator it stands for
fn binary_op(parser: &mut Parser, kinds: &[TokenKind]) -> Option<BinOp> {
    let token = parser.consume_if(kinds)?;
    BinOp::from_token_kind(token.kind())
}

/// Parses a left associative chain of `operand`s joined by any of `kinds`.
///
/// Each operator puts everything before it one level deeper in the tree, which counts towards
/// the parser's nesting limit.
fn parse_left_assoc(
    parser: &mut Parser,
    kinds: &[TokenKind],
    operand: fn(&mut Parser) -> Result<Expr>,
) -> Result<Expr> {
    let mut l = operand(parser)?;
    let mut chain = 0;
    while let Some(op) = binary_op(parser, kinds) {
        chain += 1;
        let r = parser.nested(chain, operand)?;
        l = Expr::binary(op, l, r);
    }
    Ok(l)
}

fn parse_assignment(parser: &mut Parser) -> Result<Expr> {
    let l = parse_equality(parser)?;
    if let Some(op) = binary_op(parser, &[TokenKind::Colon]) {
        let r = parser.nested(1, parse_assignment)?;
        return Ok(Expr::binary(op, l, r));
    }
    Ok(l)
}

fn parse_equality(parser: &mut Parser) -> Result<Expr> {
    parse_left_assoc(parser, &[TokenKind::Eq, TokenKind::Ne], parse_relational)
}

fn parse_relational(parser: &mut Parser) -> Result<Expr> {
    parse_left_assoc(
        parser,
        &[TokenKind::Lt, TokenKind::Gt, TokenKind::Le, TokenKind::Ge],
        parse_additive,
    )
}

fn parse_additive(parser: &mut Parser) -> Result<Expr> {
    parse_left_assoc(parser, &[TokenKind::Plus, TokenKind::Minus], parse_multiplicative)
}

fn parse_multiplicative(parser: &mut Parser) -> Result<Expr> {
    parse_left_assoc(
        parser,
        &[TokenKind::Mul, TokenKind::Div, TokenKind::Mod],
        parse_exponent,
    )
}

fn parse_exponent(parser: &mut Parser) -> Result<Expr> {
    let l = parse_unary(parser)?;
    if let Some(op) = binary_op(parser, &[TokenKind::Exp]) {
        let r = parser.nested(1, parse_exponent)?;
        return Ok(Expr::binary(op, l, r));
    }
    Ok(l)
}

fn parse_unary(parser: &mut Parser) -> Result<Expr> {
    let op = parser
        .consume_if(&[TokenKind::Minus])
        .and_then(|token| UnaryOp::from_token_kind(token.kind()));
    match op {
        Some(op) => {
            let operand = parser.nested(1, parse_unary)?;
            Ok(Expr::unary(op, operand))
        }
        None => parse_primary(parser),
    }
}

fn parse_primary(parser: &mut Parser) -> Result<Expr> {
    let Some(token) = parser.peek() else {
        return Err(parser.error(ErrorKind::ExpectedExpression { found: None }));
    };
    match token.kind() {
        TokenKind::Number => {
            parser.advance();
            match token.lexeme().parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Expr::Number(value)),
                _ => Err(parser.error_at(
                    ErrorKind::InvalidNumber(token.lexeme().to_string()),
                    token.span(),
                )),
            }
        }
        TokenKind::String => {
            parser.advance();
            Ok(Expr::string(token.lexeme()))
        }
        TokenKind::Identifier => {
            parser.advance();
            if parser.check(&[TokenKind::LParen]) {
                parser.within("call", |parser| parse_call(parser, token.lexeme()))
            } else {
                Ok(Expr::variable(token.lexeme()))
            }
        }
        TokenKind::LParen => {
            parser.advance();
            let expr = parse_expression(parser)?;
            parser.consume(&[TokenKind::RParen])?;
            Ok(expr)
        }
        _ => Err(parser.error(ErrorKind::ExpectedExpression {
            found: Some(token.clone()),
        })),
    }
}

/// Arguments are separated by whitespace alone, `f(a b)`
fn parse_call(parser: &mut Parser, name: &str) -> Result<Expr> {
    parser.consume(&[TokenKind::LParen])?;
    let mut args = vec![];
    while !parser.is_at_end() && !parser.check(&[TokenKind::RParen]) {
        args.push(parse_expression(parser)?);
    }
    parser.consume(&[TokenKind::RParen])?;
    Ok(Expr::Call(CallExpr {
        name: name.to_string(),
        args,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use crate::parser::{SyntaxError, MAX_DEPTH};
    use blast_tokens::spanned::Span;
    use blast_tokens::token::Token;
    use test_log::test;

    fn expr(src: &str) -> Expr {
        try_expr(src).unwrap_or_else(|e| panic!("{src:?}: {e}"))
    }

    fn try_expr(src: &str) -> std::result::Result<Expr, SyntaxError> {
        let tokens = scan(src).tokens;
        let mut parser = Parser::new(&tokens);
        let expr = parse_expression(&mut parser)?;
        assert!(parser.is_at_end(), "{src:?} was not fully parsed");
        Ok(expr)
    }

    fn num(value: f64) -> Expr {
        Expr::number(value)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            expr("1 + 2 * 3"),
            Expr::binary(
                BinOp::Add,
                num(1.0),
                Expr::binary(BinOp::Mul, num(2.0), num(3.0))
            )
        );
        assert_eq!(
            expr("a = b < c + d % e ** f"),
            Expr::binary(
                BinOp::Eq,
                Expr::variable("a"),
                Expr::binary(
                    BinOp::Lt,
                    Expr::variable("b"),
                    Expr::binary(
                        BinOp::Add,
                        Expr::variable("c"),
                        Expr::binary(
                            BinOp::Mod,
                            Expr::variable("d"),
                            Expr::binary(BinOp::Exp, Expr::variable("e"), Expr::variable("f"))
                        )
                    )
                )
            )
        );
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(
            expr("1 - 2 - 3"),
            Expr::binary(
                BinOp::Sub,
                Expr::binary(BinOp::Sub, num(1.0), num(2.0)),
                num(3.0)
            )
        );
        assert_eq!(
            expr("8 / 4 * 2"),
            Expr::binary(
                BinOp::Mul,
                Expr::binary(BinOp::Div, num(8.0), num(4.0)),
                num(2.0)
            )
        );
        assert_eq!(
            expr("a <> b = c"),
            Expr::binary(
                BinOp::Eq,
                Expr::binary(BinOp::Ne, Expr::variable("a"), Expr::variable("b")),
                Expr::variable("c")
            )
        );
    }

    #[test]
    fn test_right_associative() {
        assert_eq!(
            expr("2 ** 3 ** 2"),
            Expr::binary(
                BinOp::Exp,
                num(2.0),
                Expr::binary(BinOp::Exp, num(3.0), num(2.0))
            )
        );
        assert_eq!(
            expr("a : b : 1"),
            Expr::binary(
                BinOp::Assign,
                Expr::variable("a"),
                Expr::binary(BinOp::Assign, Expr::variable("b"), num(1.0))
            )
        );
    }

    #[test]
    fn test_unary() {
        assert_eq!(
            expr("--x"),
            Expr::unary(UnaryOp::Neg, Expr::unary(UnaryOp::Neg, Expr::variable("x")))
        );
        assert_eq!(
            expr("-2 ** 2"),
            Expr::binary(BinOp::Exp, Expr::unary(UnaryOp::Neg, num(2.0)), num(2.0))
        );
    }

    #[test]
    fn test_primary() {
        assert_eq!(expr("4.25"), num(4.25));
        assert_eq!(expr("\"hi there\""), Expr::string("hi there"));
        assert_eq!(expr("(((x)))"), Expr::variable("x"));
        assert_eq!(
            expr("(1 + 2) * 3"),
            Expr::binary(
                BinOp::Mul,
                Expr::binary(BinOp::Add, num(1.0), num(2.0)),
                num(3.0)
            )
        );
    }

    #[test]
    fn test_call_vs_variable() {
        assert_eq!(expr("f"), Expr::variable("f"));
        assert_eq!(expr("f()"), Expr::call("f", []));
        assert_eq!(
            expr("f(a 1 + 2 g(\"s\"))"),
            Expr::call(
                "f",
                [
                    Expr::variable("a"),
                    Expr::binary(BinOp::Add, num(1.0), num(2.0)),
                    Expr::call("g", [Expr::string("s")]),
                ]
            )
        );
    }

    #[test]
    fn test_expected_expression() {
        let error = try_expr("1 + .").unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::ExpectedExpression {
                found: Some(Token::new(TokenKind::Period, ".", Span::default()))
            }
        );
        assert_eq!(error.location, Span::new(4, 1));
        assert_eq!(error.non_terminals, ["expression"]);

        let error = try_expr("1 *").unwrap_err();
        assert_eq!(error.kind, ErrorKind::ExpectedExpression { found: None });
        assert_eq!(error.location, Span::new(3, 0));
    }

    #[test]
    fn test_unclosed() {
        let error = try_expr("(1 + 2").unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::expected_token([TokenKind::RParen], None)
        );
        let error = try_expr("f(1 2").unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::expected_token([TokenKind::RParen], None)
        );
        assert_eq!(error.non_terminals, ["expression", "call"]);
    }

    #[test]
    fn test_invalid_number() {
        let tokens = [Token::new(TokenKind::Number, "1.2.3", Span::new(0, 5))];
        let mut parser = Parser::new(&tokens);
        let error = parse_expression(&mut parser).unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidNumber("1.2.3".to_string()));
        assert_eq!(error.location, Span::new(0, 5));
    }

    #[test]
    fn test_number_too_large() {
        let src = "9".repeat(400);
        let error = try_expr(&src).unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidNumber(src.clone()));
        assert_eq!(error.location, Span::new(0, 400));
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let negations = format!("{}1", "-".repeat(50_000));
        let parens = format!("{}1{}", "(".repeat(50_000), ")".repeat(50_000));
        let calls = format!("{}x{}", "f(".repeat(50_000), ")".repeat(50_000));
        let powers = format!("2{}", " ** 2".repeat(50_000));
        let sums = format!("1{}", " + 1".repeat(50_000));
        for src in [negations, parens, calls, powers, sums] {
            let error = try_expr(&src).unwrap_err();
            assert_eq!(error.kind, ErrorKind::TooDeep { limit: MAX_DEPTH });
        }
    }

    #[test]
    fn test_moderate_nesting() {
        let src = format!("{}1{}", "(".repeat(60), ")".repeat(60));
        assert_eq!(expr(&src), num(1.0));
        let src = format!("1{}", " + 1".repeat(99));
        assert!(matches!(expr(&src), Expr::Binary(_)));
    }
}
