#![doc = include_str!("../README.md")]

pub mod block;
pub mod expr;
pub mod printer;
pub mod statements;
pub mod visitor;

pub use block::Block;
pub use expr::{BinOp, Expr, UnaryOp};
pub use statements::Stmt;
