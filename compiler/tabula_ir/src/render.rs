//! Canonical rendering with minimal parentheses.
//!
//! The rendered text of a node is both its display form and the identity used
//! to deduplicate subexpressions, so it must be deterministic and must parse
//! back to a structurally equal tree.
//!
//! # Bracket rules
//!
//! Prefix operand: parenthesize when the operand binds looser than the
//! operator, or binds equally and is left-associative. `!` is the only prefix
//! operator and is not left-associative, so `!!x` never gets brackets.
//!
//! Binary operands: the left side is parenthesized only when it binds looser.
//! The right side is parenthesized when it binds looser, or binds equally and
//! is left-associative, which keeps `a -> (b -> c)` distinct from
//! `a -> b -> c`.
//!
//! # Caching
//!
//! Operator nodes store their text in a `OnceLock` on first request. The tree
//! is immutable, so the cached text never goes stale.

use std::fmt;

use crate::expr::{Expr, ExprKind};
use crate::ops::{BinaryOp, Precedence};
use crate::stack::ensure_sufficient_stack;

impl Expr {
    /// Canonical text of this node.
    pub fn render(&self) -> &str {
        match self.kind() {
            ExprKind::Const(false) => "0",
            ExprKind::Const(true) => "1",
            ExprKind::Variable(name) => name,
            ExprKind::Not(_) | ExprKind::Binary { .. } => self
                .repr
                .get_or_init(|| ensure_sufficient_stack(|| self.render_operator())),
        }
    }

    fn render_operator(&self) -> String {
        let mut out = String::new();
        match self.kind() {
            ExprKind::Not(operand) => {
                out.push('!');
                push_operand(&mut out, operand, prefix_needs_parens(operand));
            }
            ExprKind::Binary { op, left, right } => {
                let precedence = op.precedence();
                push_operand(&mut out, left, left.precedence() < precedence);
                push_symbol(&mut out, *op);
                push_operand(&mut out, right, right_needs_parens(precedence, right));
            }
            ExprKind::Const(_) | ExprKind::Variable(_) => out.push_str(self.render()),
        }
        out
    }
}

fn prefix_needs_parens(operand: &Expr) -> bool {
    let inner = operand.precedence();
    inner < Precedence::PREFIX
        || (inner == Precedence::PREFIX && operand.associativity().is_left())
}

fn right_needs_parens(precedence: Precedence, operand: &Expr) -> bool {
    let inner = operand.precedence();
    inner < precedence || (inner == precedence && operand.associativity().is_left())
}

fn push_operand(out: &mut String, operand: &Expr, parens: bool) {
    if parens {
        out.push('(');
    }
    out.push_str(operand.render());
    if parens {
        out.push(')');
    }
}

fn push_symbol(out: &mut String, op: BinaryOp) {
    out.push(' ');
    out.push_str(op.symbol());
    out.push(' ');
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}
