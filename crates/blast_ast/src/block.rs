//! A sequence of statements

use crate::statements::Stmt;

/// An ordered list of statements. A whole program is parsed into a block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            stmts: stmts.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

impl FromIterator<Stmt> for Block {
    fn from_iter<T: IntoIterator<Item = Stmt>>(iter: T) -> Self {
        Self::new(iter)
    }
}
