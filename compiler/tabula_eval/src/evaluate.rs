//! Evaluation of an expression under an assignment.
//!
//! Evaluation is strict: both operands of a binary node are always
//! evaluated, so a missing variable is reported even when the other operand
//! alone would decide the result.

use rustc_hash::FxHashMap;
use tabula_ir::stack::ensure_sufficient_stack;
use tabula_ir::{Expr, ExprKind};

use crate::errors::{undeclared_variable, EvalError};
use crate::operators::evaluate_binary;

/// Variable name to truth value.
pub type Assignment = FxHashMap<String, bool>;

/// Something that has a truth value under an assignment.
pub trait Evaluate {
    /// # Errors
    ///
    /// Returns [`EvalError::UndeclaredVariable`] if a variable reached during
    /// evaluation has no entry in `assignment`.
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError>;
}

impl Evaluate for Expr {
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        ensure_sufficient_stack(|| match self.kind() {
            ExprKind::Const(value) => Ok(*value),
            ExprKind::Variable(name) => assignment
                .get(name)
                .copied()
                .ok_or_else(|| undeclared_variable(name)),
            ExprKind::Not(operand) => Ok(!operand.evaluate(assignment)?),
            ExprKind::Binary { op, left, right } => {
                let left = left.evaluate(assignment)?;
                let right = right.evaluate(assignment)?;
                Ok(evaluate_binary(*op, left, right))
            }
        })
    }
}
