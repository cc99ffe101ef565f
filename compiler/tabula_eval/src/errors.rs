//! Error types for evaluation and enumeration.

/// Evaluation failed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EvalError {
    /// The assignment has no value for a variable the formula uses.
    #[error("undeclared variable `{name}`")]
    UndeclaredVariable { name: String },
}

/// More distinct variables than a table can enumerate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("too many variables: {found} (at most {max})")]
pub struct CapacityError {
    pub found: usize,
    pub max: usize,
}

/// Truth-table enumeration failed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum TableError {
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

pub(crate) fn undeclared_variable(name: &str) -> EvalError {
    EvalError::UndeclaredVariable {
        name: name.to_owned(),
    }
}
