//! Expressions

use blast_tokens::token::TokenKind;
use std::fmt::{Display, Formatter};

/// An expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    String(String),
    Variable(String),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::Call(CallExpr {
            name: name.into(),
            args: args.into_iter().collect(),
        })
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Self::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Call a routine by name. Arguments are kept in the order they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// A unary operation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
}

impl UnaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(Self::Neg),
            _ => None,
        }
    }

    /// The kind of token this operator is written as
    pub fn token_kind(self) -> TokenKind {
        match self {
            UnaryOp::Neg => TokenKind::Minus,
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token_kind().symbol())
    }
}

/// A binary operation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `:`
    Assign,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// `**`
    Exp,
}

impl BinOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Colon => Self::Assign,
            TokenKind::Eq => Self::Eq,
            TokenKind::Ne => Self::Ne,
            TokenKind::Lt => Self::Lt,
            TokenKind::Le => Self::Le,
            TokenKind::Gt => Self::Gt,
            TokenKind::Ge => Self::Ge,
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Mul => Self::Mul,
            TokenKind::Div => Self::Div,
            TokenKind::Mod => Self::Mod,
            TokenKind::Exp => Self::Exp,
            _ => return None,
        };
        Some(op)
    }

    /// The kind of token this operator is written as
    pub fn token_kind(self) -> TokenKind {
        match self {
            BinOp::Assign => TokenKind::Colon,
            BinOp::Eq => TokenKind::Eq,
            BinOp::Ne => TokenKind::Ne,
            BinOp::Lt => TokenKind::Lt,
            BinOp::Le => TokenKind::Le,
            BinOp::Gt => TokenKind::Gt,
            BinOp::Ge => TokenKind::Ge,
            BinOp::Add => TokenKind::Plus,
            BinOp::Sub => TokenKind::Minus,
            BinOp::Mul => TokenKind::Mul,
            BinOp::Div => TokenKind::Div,
            BinOp::Mod => TokenKind::Mod,
            BinOp::Exp => TokenKind::Exp,
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token_kind().symbol())
    }
}
