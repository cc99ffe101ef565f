//! Post-order traversal of the expression tree.
//!
//! # Order
//!
//! Children are always visited before their parent: a unary node visits its
//! operand, then itself; a binary node visits left, right, then itself;
//! leaves visit only themselves. Analyses depend on this order: it decides
//! which occurrence of a duplicated subexpression counts as the first one.
//!
//! # Example
//!
//! ```
//! use tabula_ir::Expr;
//!
//! let expr = Expr::and(Expr::variable("a"), Expr::not(Expr::variable("b")));
//! let mut seen = Vec::new();
//! expr.traverse(&mut |node: &Expr| seen.push(node.render().to_owned()));
//! assert_eq!(seen, ["a", "b", "!b", "a & !b"]);
//! ```

use crate::expr::{Expr, ExprKind};
use crate::stack::ensure_sufficient_stack;

/// Read-only visitor invoked once per node.
///
/// Any `FnMut(&Expr)` closure is a visitor.
pub trait Visitor<'ast> {
    fn visit(&mut self, expr: &'ast Expr);
}

impl<'ast, F> Visitor<'ast> for F
where
    F: FnMut(&'ast Expr),
{
    fn visit(&mut self, expr: &'ast Expr) {
        self(expr);
    }
}

impl Expr {
    /// Walk the subtree rooted here in post-order.
    pub fn traverse<'ast, V>(&'ast self, visitor: &mut V)
    where
        V: Visitor<'ast> + ?Sized,
    {
        walk_expr(visitor, self);
    }
}

/// Visit the children of `expr`, then `expr` itself.
pub fn walk_expr<'ast, V>(visitor: &mut V, expr: &'ast Expr)
where
    V: Visitor<'ast> + ?Sized,
{
    ensure_sufficient_stack(|| match expr.kind() {
        ExprKind::Const(_) | ExprKind::Variable(_) => {}
        ExprKind::Not(operand) => walk_expr(visitor, operand),
        ExprKind::Binary { left, right, .. } => {
            walk_expr(visitor, left);
            walk_expr(visitor, right);
        }
    });
    visitor.visit(expr);
}
