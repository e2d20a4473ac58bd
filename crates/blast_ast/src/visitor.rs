//! Visits the nodes of a syntax tree.
//!
//! Every method of [`Visitor`] has a default implementation that calls the free function of the
//! same name, which walks the node's children. Implementors override only the nodes they care
//! about and call the free function to keep walking.

use crate::block::Block;
use crate::expr::{BinaryExpr, CallExpr, Expr, UnaryExpr};
use crate::statements::{IfStmt, RoutineStmt, Stmt, WhileStmt};

pub trait Visitor {
    type Err;

    fn visit_block(&mut self, block: &Block) -> Result<(), Self::Err> {
        visit_block(self, block)
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), Self::Err> {
        visit_stmt(self, stmt)
    }

    fn visit_expr_stmt(&mut self, expr: &Expr) -> Result<(), Self::Err> {
        self.visit_expr(expr)
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> Result<(), Self::Err> {
        visit_if(self, stmt)
    }

    fn visit_while(&mut self, stmt: &WhileStmt) -> Result<(), Self::Err> {
        visit_while(self, stmt)
    }

    fn visit_routine(&mut self, stmt: &RoutineStmt) -> Result<(), Self::Err> {
        visit_routine(self, stmt)
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), Self::Err> {
        visit_expr(self, expr)
    }

    fn visit_number(&mut self, _value: f64) -> Result<(), Self::Err> {
        Ok(())
    }

    fn visit_string(&mut self, _value: &str) -> Result<(), Self::Err> {
        Ok(())
    }

    fn visit_variable(&mut self, _name: &str) -> Result<(), Self::Err> {
        Ok(())
    }

    fn visit_call(&mut self, call: &CallExpr) -> Result<(), Self::Err> {
        visit_call(self, call)
    }

    fn visit_unary(&mut self, unary: &UnaryExpr) -> Result<(), Self::Err> {
        visit_unary(self, unary)
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) -> Result<(), Self::Err> {
        visit_binary(self, binary)
    }
}

pub fn visit_block<V: Visitor + ?Sized>(visitor: &mut V, block: &Block) -> Result<(), V::Err> {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt)?;
    }
    Ok(())
}

pub fn visit_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) -> Result<(), V::Err> {
    match stmt {
        Stmt::Expr(expr) => visitor.visit_expr_stmt(expr),
        Stmt::Block(block) => visitor.visit_block(block),
        Stmt::If(stmt) => visitor.visit_if(stmt),
        Stmt::While(stmt) => visitor.visit_while(stmt),
        Stmt::Routine(stmt) => visitor.visit_routine(stmt),
    }
}

pub fn visit_if<V: Visitor + ?Sized>(visitor: &mut V, stmt: &IfStmt) -> Result<(), V::Err> {
    visitor.visit_expr(&stmt.cond)?;
    visitor.visit_block(&stmt.then_block)?;
    if let Some(else_block) = &stmt.else_block {
        visitor.visit_block(else_block)?;
    }
    Ok(())
}

pub fn visit_while<V: Visitor + ?Sized>(visitor: &mut V, stmt: &WhileStmt) -> Result<(), V::Err> {
    visitor.visit_expr(&stmt.cond)?;
    visitor.visit_block(&stmt.body)
}

pub fn visit_routine<V: Visitor + ?Sized>(
    visitor: &mut V,
    stmt: &RoutineStmt,
) -> Result<(), V::Err> {
    visitor.visit_block(&stmt.body)
}

pub fn visit_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) -> Result<(), V::Err> {
    match expr {
        Expr::Number(value) => visitor.visit_number(*value),
        Expr::String(value) => visitor.visit_string(value),
        Expr::Variable(name) => visitor.visit_variable(name),
        Expr::Call(call) => visitor.visit_call(call),
        Expr::Unary(unary) => visitor.visit_unary(unary),
        Expr::Binary(binary) => visitor.visit_binary(binary),
    }
}

pub fn visit_call<V: Visitor + ?Sized>(visitor: &mut V, call: &CallExpr) -> Result<(), V::Err> {
    for arg in &call.args {
        visitor.visit_expr(arg)?;
    }
    Ok(())
}

pub fn visit_unary<V: Visitor + ?Sized>(visitor: &mut V, unary: &UnaryExpr) -> Result<(), V::Err> {
    visitor.visit_expr(&unary.operand)
}

pub fn visit_binary<V: Visitor + ?Sized>(
    visitor: &mut V,
    binary: &BinaryExpr,
) -> Result<(), V::Err> {
    visitor.visit_expr(&binary.left)?;
    visitor.visit_expr(&binary.right)
}
