//! Statements

use crate::block::Block;
use crate::expr::Expr;

/// A statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression followed by `.`
    Expr(Expr),
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
    Routine(RoutineStmt),
}

impl Stmt {
    pub fn expr(expr: Expr) -> Self {
        Self::Expr(expr)
    }

    pub fn if_(cond: Expr, then_block: Block, else_block: impl Into<Option<Block>>) -> Self {
        Self::If(IfStmt {
            cond,
            then_block,
            else_block: else_block.into(),
        })
    }

    pub fn while_(cond: Expr, body: Block) -> Self {
        Self::While(WhileStmt { cond, body })
    }

    pub fn routine(
        name: impl Into<String>,
        params: impl IntoIterator<Item = impl Into<String>>,
        body: Block,
    ) -> Self {
        Self::Routine(RoutineStmt {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            body,
        })
    }
}

/// `if cond then ... [else ...] end`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
    /// `None` when no `else` clause was written, which is distinct from an empty `else`
    pub else_block: Option<Block>,
}

/// `while cond do ... end`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Block,
}

/// `routine name(params) ... end`
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineStmt {
    pub name: String,
    pub params: Vec<String>,
    pub body: Block,
}
