//! Renders a syntax tree back into blast source.
//!
//! The output is canonical rather than a copy of what was parsed: binary operands that are
//! themselves operations are parenthesized, negations are written as `(-x)` and every nested
//! block is indented by four spaces. Parsing the printed text gives back an equal tree.

use crate::block::Block;
use crate::expr::{BinaryExpr, CallExpr, Expr, UnaryExpr};
use crate::statements::{IfStmt, RoutineStmt, WhileStmt};
use crate::visitor::Visitor;
use itertools::Itertools;
use std::fmt::{Display, Formatter, Write};

const INDENT: &str = "    ";

/// Writes a tree as source text into a [`Write`]
pub struct Printer<'w, W: Write + ?Sized> {
    out: &'w mut W,
    depth: usize,
}

impl<'w, W: Write + ?Sized> Printer<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self { out, depth: 0 }
    }

    fn indent(&mut self) -> std::fmt::Result {
        for _ in 0..self.depth {
            self.out.write_str(INDENT)?;
        }
        Ok(())
    }

    fn nested(&mut self, block: &Block) -> std::fmt::Result {
        self.depth += 1;
        let result = self.visit_block(block);
        self.depth -= 1;
        result
    }

    fn end(&mut self) -> std::fmt::Result {
        self.indent()?;
        self.out.write_str("end\n")
    }

    /// Operands that are operations get their own parentheses
    fn operand(&mut self, expr: &Expr) -> std::fmt::Result {
        match expr {
            Expr::Binary(_) => {
                self.out.write_char('(')?;
                self.visit_expr(expr)?;
                self.out.write_char(')')
            }
            _ => self.visit_expr(expr),
        }
    }
}

/// Whether the printed form of `expr` starts with `(`
fn opens_with_paren(expr: &Expr) -> bool {
    match expr {
        Expr::Unary(_) => true,
        Expr::Binary(binary) => matches!(*binary.left, Expr::Binary(_) | Expr::Unary(_)),
        _ => false,
    }
}

/// Whether the printed form of `expr` ends with a variable name, which would read back as a call
/// if the next argument opens with `(`
fn closes_with_identifier(expr: &Expr) -> bool {
    match expr {
        Expr::Variable(_) => true,
        Expr::Binary(binary) => matches!(*binary.right, Expr::Variable(_)),
        _ => false,
    }
}

impl<W: Write + ?Sized> Visitor for Printer<'_, W> {
    type Err = std::fmt::Error;

    fn visit_expr_stmt(&mut self, expr: &Expr) -> Result<(), Self::Err> {
        self.indent()?;
        self.visit_expr(expr)?;
        self.out.write_str(".\n")
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> Result<(), Self::Err> {
        self.indent()?;
        self.out.write_str("if ")?;
        self.visit_expr(&stmt.cond)?;
        self.out.write_str(" then\n")?;
        self.nested(&stmt.then_block)?;
        if let Some(else_block) = &stmt.else_block {
            self.indent()?;
            self.out.write_str("else\n")?;
            self.nested(else_block)?;
        }
        self.end()
    }

    fn visit_while(&mut self, stmt: &WhileStmt) -> Result<(), Self::Err> {
        self.indent()?;
        self.out.write_str("while ")?;
        self.visit_expr(&stmt.cond)?;
        self.out.write_str(" do\n")?;
        self.nested(&stmt.body)?;
        self.end()
    }

    fn visit_routine(&mut self, stmt: &RoutineStmt) -> Result<(), Self::Err> {
        self.indent()?;
        writeln!(self.out, "routine {}({})", stmt.name, stmt.params.iter().join(" "))?;
        self.nested(&stmt.body)?;
        self.end()
    }

    fn visit_number(&mut self, value: f64) -> Result<(), Self::Err> {
        write!(self.out, "{value}")
    }

    fn visit_string(&mut self, value: &str) -> Result<(), Self::Err> {
        write!(self.out, "\"{value}\"")
    }

    fn visit_variable(&mut self, name: &str) -> Result<(), Self::Err> {
        self.out.write_str(name)
    }

    fn visit_call(&mut self, call: &CallExpr) -> Result<(), Self::Err> {
        write!(self.out, "{}(", call.name)?;
        for (idx, arg) in call.args.iter().enumerate() {
            if idx > 0 {
                self.out.write_char(' ')?;
            }
            let next_opens = call.args.get(idx + 1).is_some_and(opens_with_paren);
            if next_opens && closes_with_identifier(arg) {
                self.out.write_char('(')?;
                self.visit_expr(arg)?;
                self.out.write_char(')')?;
            } else {
                self.visit_expr(arg)?;
            }
        }
        self.out.write_char(')')
    }

    fn visit_unary(&mut self, unary: &UnaryExpr) -> Result<(), Self::Err> {
        write!(self.out, "({}", unary.op)?;
        self.operand(&unary.operand)?;
        self.out.write_char(')')
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) -> Result<(), Self::Err> {
        self.operand(&binary.left)?;
        write!(self.out, " {} ", binary.op)?;
        self.operand(&binary.right)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Printer::new(f).visit_block(self)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Printer::new(f).visit_expr(self)
    }
}
