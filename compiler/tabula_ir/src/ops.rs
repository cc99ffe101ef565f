//! Operators, precedence levels and associativity.
//!
//! Precedence is a pure function of the node kind. Higher binds tighter:
//!
//! | level | nodes |
//! |---|---|
//! | 5 | `Const`, `Variable` |
//! | 4 | `!` |
//! | 3 | `&` |
//! | 2 | `\|`, `^` |
//! | 1 | `->`, `<->` |

use std::fmt;

/// Binding strength of a node kind.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Precedence(u8);

impl Precedence {
    /// `->` and `<->`.
    pub const IMPLICATION: Precedence = Precedence(1);
    /// `|` and `^`.
    pub const DISJUNCTION: Precedence = Precedence(2);
    /// `&`.
    pub const CONJUNCTION: Precedence = Precedence(3);
    /// Prefix `!`.
    pub const PREFIX: Precedence = Precedence(4);
    /// Constants and variables.
    pub const ATOM: Precedence = Precedence(5);

    #[inline]
    pub const fn level(self) -> u8 {
        self.0
    }
}

/// Which side a node kind associates to, as seen by the bracket rules.
///
/// Atoms count as left-associative; `!` is a prefix operator and therefore
/// never left-associative.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Associativity {
    Left,
    Prefix,
}

impl Associativity {
    #[inline]
    pub fn is_left(self) -> bool {
        self == Associativity::Left
    }
}

/// Binary connectives. All of them associate to the left.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Xor,
        BinaryOp::Implies,
        BinaryOp::Iff,
    ];

    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOp::And => Precedence::CONJUNCTION,
            BinaryOp::Or | BinaryOp::Xor => Precedence::DISJUNCTION,
            BinaryOp::Implies | BinaryOp::Iff => Precedence::IMPLICATION,
        }
    }

    /// Source symbol, without surrounding spaces.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Implies => "->",
            BinaryOp::Iff => "<->",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
