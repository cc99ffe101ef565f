//! Truth-table enumeration.
//!
//! Rows are stored in binary order: row `r` holds the assignment whose
//! binary digits are `r`, with the first variable as the most significant
//! bit. They are computed in Gray-code order so each step flips exactly one
//! variable of the live assignment.

use tabula_ir::Expr;
use tracing::debug;

use crate::collect::check_count;
use crate::errors::{CapacityError, TableError};
use crate::evaluate::{Assignment, Evaluate};
use crate::gray::GrayWalk;

/// A complete truth table, row-major.
///
/// Each row has one cell per variable followed by one cell per formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<String>,
    formulas: usize,
    cells: Vec<bool>,
}

impl TruthTable {
    /// Variable names heading the first columns.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn formula_count(&self) -> usize {
        self.formulas
    }

    /// Cells per row.
    pub fn width(&self) -> usize {
        self.variables.len() + self.formulas
    }

    /// `2^k` for `k` variables.
    pub fn row_count(&self) -> usize {
        1 << self.variables.len()
    }

    /// Row `index`, or `None` past the end.
    pub fn row(&self, index: usize) -> Option<&[bool]> {
        if index >= self.row_count() {
            return None;
        }
        let width = self.width();
        self.cells.get(index * width..(index + 1) * width)
    }

    /// Rows in binary order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.row_count()).filter_map(|index| self.row(index))
    }
}

/// Build the truth table of `formulas` over `variables`.
///
/// `variables` must be distinct and must cover every variable the formulas
/// use; the first one is the most significant bit of the row index.
///
/// # Errors
///
/// Returns [`TableError::Capacity`] for more than
/// [`MAX_VARIABLES`](crate::MAX_VARIABLES) variables, and
/// [`TableError::Eval`] if a formula uses a variable not in `variables`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(variables = variables.len(), formulas = formulas.len())
)]
pub fn enumerate_table<S: AsRef<str>>(
    variables: &[S],
    formulas: &[&Expr],
) -> Result<TruthTable, TableError> {
    let k = variables.len();
    check_count(k)?;
    let too_many = || CapacityError {
        found: k,
        max: crate::MAX_VARIABLES,
    };
    let bits = u32::try_from(k).map_err(|_| too_many())?;

    let width = k + formulas.len();
    let rows = 1usize << k;
    let mut cells = vec![false; rows * width];
    let mut assignment: Assignment = variables
        .iter()
        .map(|name| (name.as_ref().to_owned(), false))
        .collect();

    for step in GrayWalk::new(bits) {
        if let Some(bit) = step.flipped {
            // Bit `b` is variable `k - 1 - b`.
            let index = k - 1 - bit as usize;
            if let Some(value) = assignment.get_mut(variables[index].as_ref()) {
                *value = !*value;
            }
        }

        let row = usize::try_from(step.code).map_err(|_| too_many())?;
        let row_cells = &mut cells[row * width..(row + 1) * width];
        let (variable_cells, formula_cells) = row_cells.split_at_mut(k);
        for (column, cell) in variable_cells.iter_mut().enumerate() {
            *cell = (step.code >> (k - 1 - column)) & 1 == 1;
        }
        for (cell, formula) in formula_cells.iter_mut().zip(formulas) {
            *cell = formula.evaluate(&assignment)?;
        }
    }

    debug!(rows, width, "table enumerated");
    Ok(TruthTable {
        variables: variables
            .iter()
            .map(|name| name.as_ref().to_owned())
            .collect(),
        formulas: formulas.len(),
        cells,
    })
}

#[cfg(test)]
mod tests;
