//! Expression tree.
//!
//! A formula is a tree of [`Expr`] nodes. Each node exclusively owns its
//! children, so `Clone` is a deep copy and two parsed formulas never share
//! structure. Apart from the render cache (see `render.rs`) a node is never
//! mutated after construction.

use std::fmt;
use std::mem;
use std::sync::OnceLock;

use crate::ops::{Associativity, BinaryOp, Precedence};
use crate::stack::ensure_sufficient_stack;

/// The closed set of node kinds.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExprKind {
    /// `0` or `1`.
    Const(bool),
    /// A free variable, identified by name.
    Variable(String),
    /// `!operand`.
    Not(Box<Expr>),
    /// `left op right`.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// A node of the expression tree.
///
/// Equality is structural and ignores whether the rendered form has been
/// cached yet. Dropping a node frees its subtree without recursion.
pub struct Expr {
    kind: ExprKind,
    /// Canonical text, filled on first `render()` of an operator node.
    pub(crate) repr: OnceLock<String>,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr {
            kind,
            repr: OnceLock::new(),
        }
    }

    pub fn constant(value: bool) -> Self {
        Expr::new(ExprKind::Const(value))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::new(ExprKind::Variable(name.into()))
    }

    pub fn not(operand: Expr) -> Self {
        Expr::new(ExprKind::Not(Box::new(operand)))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::new(ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Or, left, right)
    }

    pub fn xor(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Xor, left, right)
    }

    pub fn implies(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Implies, left, right)
    }

    pub fn iff(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Iff, left, right)
    }

    #[inline]
    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    pub fn into_kind(mut self) -> ExprKind {
        mem::replace(&mut self.kind, ExprKind::Const(false))
    }

    pub fn precedence(&self) -> Precedence {
        match &self.kind {
            ExprKind::Const(_) | ExprKind::Variable(_) => Precedence::ATOM,
            ExprKind::Not(_) => Precedence::PREFIX,
            ExprKind::Binary { op, .. } => op.precedence(),
        }
    }

    pub fn associativity(&self) -> Associativity {
        match &self.kind {
            ExprKind::Not(_) => Associativity::Prefix,
            ExprKind::Const(_) | ExprKind::Variable(_) | ExprKind::Binary { .. } => {
                Associativity::Left
            }
        }
    }

    /// `Const` or `Variable`.
    #[inline]
    pub fn is_atomic(&self) -> bool {
        matches!(self.kind, ExprKind::Const(_) | ExprKind::Variable(_))
    }

    /// `Not` or any binary connective.
    #[inline]
    pub fn is_operator(&self) -> bool {
        !self.is_atomic()
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Expr {
            kind: self.kind.clone(),
            repr: self.repr.clone(),
        })
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(&mut self.kind, &mut pending);
        while let Some(mut child) = pending.pop() {
            detach_children(&mut child.kind, &mut pending);
        }
    }
}

/// Move the children of an operator node onto `pending`, leaving a leaf.
fn detach_children(kind: &mut ExprKind, pending: &mut Vec<Box<Expr>>) {
    if matches!(kind, ExprKind::Const(_) | ExprKind::Variable(_)) {
        return;
    }
    match mem::replace(kind, ExprKind::Const(false)) {
        ExprKind::Not(operand) => pending.push(operand),
        ExprKind::Binary { left, right, .. } => {
            pending.push(left);
            pending.push(right);
        }
        ExprKind::Const(_) | ExprKind::Variable(_) => {}
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.kind == other.kind)
    }
}

impl Eq for Expr {}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_node(f))
    }
}

impl Expr {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Const(value) => write!(f, "Const({value})"),
            ExprKind::Variable(name) => write!(f, "Variable({name:?})"),
            ExprKind::Not(operand) => f.debug_tuple("Not").field(operand).finish(),
            ExprKind::Binary { op, left, right } => f
                .debug_tuple(&format!("{op:?}"))
                .field(left)
                .field(right)
                .finish(),
        }
    }
}

impl From<ExprKind> for Expr {
    fn from(kind: ExprKind) -> Self {
        Expr::new(kind)
    }
}
