//! Evaluation and truth-table enumeration for Tabula formulas.
//!
//! - [`Evaluate`]: truth value of an [`Expr`] under an [`Assignment`]
//! - [`collect_variables`], [`collect_operators`], [`count_operators`]:
//!   post-order analysis passes
//! - [`enumerate_table`]: every assignment of the variables, in Gray-code
//!   order, stored in binary order

mod collect;
mod errors;
mod evaluate;
mod gray;
mod operators;
mod table;

pub use collect::{
    check_capacity, collect_operators, collect_subexpressions, collect_variables,
    count_operators, OperatorCounter, SubexpressionCollector, VariableCollector, MAX_VARIABLES,
};
pub use errors::{CapacityError, EvalError, TableError};
pub use evaluate::{Assignment, Evaluate};
pub use gray::{GrayStep, GrayWalk};
pub use operators::evaluate_binary;
pub use table::{enumerate_table, TruthTable};


#[cfg(test)]
mod tests;
