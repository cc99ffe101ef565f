//! Truth functions of the connectives.

use tabula_ir::BinaryOp;

/// Apply a binary connective to two truth values.
#[inline]
pub fn evaluate_binary(op: BinaryOp, left: bool, right: bool) -> bool {
    match op {
        BinaryOp::And => left && right,
        BinaryOp::Or => left || right,
        BinaryOp::Xor => left != right,
        BinaryOp::Implies => !left || right,
        BinaryOp::Iff => left == right,
    }
}
