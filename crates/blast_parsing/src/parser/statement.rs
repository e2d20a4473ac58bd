//! Statement and block parsing

use crate::parser::expr::parse_expression;
use crate::parser::{Parser, Result};
use blast_ast::statements::{IfStmt, RoutineStmt, Stmt, WhileStmt};
use blast_ast::Block;
use blast_tokens::token::{Token, TokenKind};

/// Parses statements until the current token is one of `terminators` or the input runs out. The
/// terminator itself isn't consumed.
pub fn parse_block(parser: &mut Parser, terminators: &[TokenKind]) -> Result<Block> {
    parser.within("block", |parser| {
        let mut stmts = vec![];
        while !parser.is_at_end() && !parser.check(terminators) {
            stmts.push(parse_statement(parser)?);
        }
        Ok(Block::new(stmts))
    })
}

/// Parses a single statement
pub fn parse_statement(parser: &mut Parser) -> Result<Stmt> {
    parser.within("statement", |parser| match parser.peek().map(Token::kind) {
        Some(TokenKind::If) => parse_if(parser),
        Some(TokenKind::While) => parse_while(parser),
        Some(TokenKind::Routine) => parse_routine(parser),
        _ => parse_expression_statement(parser),
    })
}

fn parse_expression_statement(parser: &mut Parser) -> Result<Stmt> {
    let expr = parse_expression(parser)?;
    parser.consume(&[TokenKind::Period])?;
    Ok(Stmt::Expr(expr))
}

fn parse_if(parser: &mut Parser) -> Result<Stmt> {
    parser.within("if-statement", |parser| {
        parser.consume(&[TokenKind::If])?;
        let cond = parse_expression(parser)?;
        parser.consume(&[TokenKind::Then])?;
        let then_block = parse_block(parser, &[TokenKind::Else, TokenKind::End])?;
        let else_block = match parser.consume_if(&[TokenKind::Else]) {
            Some(_) => Some(parse_block(parser, &[TokenKind::End])?),
            None => None,
        };
        parser.consume(&[TokenKind::End])?;
        Ok(Stmt::If(IfStmt {
            cond,
            then_block,
            else_block,
        }))
    })
}

fn parse_while(parser: &mut Parser) -> Result<Stmt> {
    parser.within("while-statement", |parser| {
        parser.consume(&[TokenKind::While])?;
        let cond = parse_expression(parser)?;
        parser.consume(&[TokenKind::Do])?;
        let body = parse_block(parser, &[TokenKind::End])?;
        parser.consume(&[TokenKind::End])?;
        Ok(Stmt::While(WhileStmt { cond, body }))
    })
}

fn parse_routine(parser: &mut Parser) -> Result<Stmt> {
    parser.within("routine-statement", |parser| {
        parser.consume(&[TokenKind::Routine])?;
        let name = parser.consume(&[TokenKind::Identifier])?.lexeme().to_string();
        parser.consume(&[TokenKind::LParen])?;
        let mut params = vec![];
        loop {
            let token = parser.consume(&[TokenKind::Identifier, TokenKind::RParen])?;
            if token.kind() == TokenKind::RParen {
                break;
            }
            params.push(token.lexeme().to_string());
        }
        let body = parse_block(parser, &[TokenKind::End])?;
        parser.consume(&[TokenKind::End])?;
        Ok(Stmt::Routine(RoutineStmt { name, params, body }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use crate::parser::{parse, ErrorKind, SyntaxError};
    use blast_ast::expr::{BinOp, Expr};
    use test_log::test;

    fn program(src: &str) -> Block {
        try_program(src).unwrap_or_else(|e| panic!("{src:?}: {e}"))
    }

    fn try_program(src: &str) -> std::result::Result<Block, SyntaxError> {
        let output = scan(src);
        assert!(!output.has_errors(), "{:?}", output.errors);
        parse(&output.tokens)
    }

    fn num_stmt(value: f64) -> Stmt {
        Stmt::expr(Expr::number(value))
    }

    #[test]
    fn test_expression_statement() {
        assert_eq!(
            program("1 + 2 * 3."),
            Block::new([Stmt::expr(Expr::binary(
                BinOp::Add,
                Expr::number(1.0),
                Expr::binary(BinOp::Mul, Expr::number(2.0), Expr::number(3.0)),
            ))])
        );
        assert_eq!(program("f."), Block::new([Stmt::expr(Expr::variable("f"))]));
        assert_eq!(program("f()."), Block::new([Stmt::expr(Expr::call("f", []))]));
    }

    #[test]
    fn test_statements_keep_source_order() {
        assert_eq!(
            program("1. 2.\n3."),
            Block::new([num_stmt(1.0), num_stmt(2.0), num_stmt(3.0)])
        );
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(program(""), Block::default());
    }

    #[test]
    fn test_if_else() {
        assert_eq!(
            program("if 1 then 2. else 3. end"),
            Block::new([Stmt::if_(
                Expr::number(1.0),
                Block::new([num_stmt(2.0)]),
                Block::new([num_stmt(3.0)]),
            )])
        );
    }

    #[test]
    fn test_if_without_else() {
        let block = program("if 1 then 2. end");
        assert_eq!(
            block,
            Block::new([Stmt::if_(
                Expr::number(1.0),
                Block::new([num_stmt(2.0)]),
                None,
            )])
        );
        let empty_else = program("if 1 then 2. else end");
        assert_ne!(block, empty_else);
        let Stmt::If(stmt) = &empty_else.stmts[0] else {
            panic!("expected if statement");
        };
        assert_eq!(stmt.else_block, Some(Block::default()));
    }

    #[test]
    fn test_while() {
        assert_eq!(
            program("while i < 3 do i : i + 1. end"),
            Block::new([Stmt::while_(
                Expr::binary(BinOp::Lt, Expr::variable("i"), Expr::number(3.0)),
                Block::new([Stmt::expr(Expr::binary(
                    BinOp::Assign,
                    Expr::variable("i"),
                    Expr::binary(BinOp::Add, Expr::variable("i"), Expr::number(1.0)),
                ))]),
            )])
        );
    }

    #[test]
    fn test_routine_params_in_order() {
        assert_eq!(
            program("routine f(a b) a. end"),
            Block::new([Stmt::routine(
                "f",
                ["a", "b"],
                Block::new([Stmt::expr(Expr::variable("a"))]),
            )])
        );
        assert_eq!(
            program("routine g() end"),
            Block::new([Stmt::routine("g", Vec::<String>::new(), Block::default())])
        );
    }

    #[test]
    fn test_nested_blocks() {
        let block = program(
            "routine f(n)
                while n > 0 do
                    if n % 2 = 0 then print(n). end
                    n : n - 1.
                end
            end
            f(10).",
        );
        assert_eq!(block.len(), 2);
        let Stmt::Routine(routine) = &block.stmts[0] else {
            panic!("expected routine");
        };
        let Stmt::While(body) = &routine.body.stmts[0] else {
            panic!("expected while");
        };
        assert_eq!(body.body.len(), 2);
        assert!(matches!(body.body.stmts[0], Stmt::If(IfStmt { else_block: None, .. })));
    }

    #[test]
    fn test_missing_period() {
        let error = try_program("1 + 2").unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::expected_token([TokenKind::Period], None)
        );
        assert_eq!(error.non_terminals, ["program", "block", "statement"]);
    }

    #[test]
    fn test_missing_end() {
        let error = try_program("if x then y.").unwrap_err();
        assert_eq!(error.kind, ErrorKind::expected_token([TokenKind::End], None));
        assert_eq!(
            error.non_terminals,
            ["program", "block", "statement", "if-statement"]
        );
    }

    #[test]
    fn test_stray_terminator() {
        let error = try_program("1. end").unwrap_err();
        assert!(matches!(
            error.kind,
            ErrorKind::ExpectedExpression { found: Some(ref token) } if token.kind() == TokenKind::End
        ));
    }

    #[test]
    fn test_bad_parameter() {
        let error = try_program("routine f(a 1) end").unwrap_err();
        let ErrorKind::ExpectedToken { expected, .. } = error.kind else {
            panic!("expected token error");
        };
        assert_eq!(expected, [TokenKind::Identifier, TokenKind::RParen]);
    }

    #[test]
    fn test_error_after_statements() {
        let error = try_program("a.\nb.\nc d.").unwrap_err();
        assert_eq!(error.location.offset(), 8);
    }
}
