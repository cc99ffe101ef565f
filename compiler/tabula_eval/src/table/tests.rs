#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tabula_ir::Expr;

use super::*;
use crate::test_helpers::formula;
use crate::{collect_operators, collect_variables, EvalError, MAX_VARIABLES};

fn bits(row: &[bool]) -> Vec<u8> {
    row.iter().map(|&cell| u8::from(cell)).collect()
}

fn table_for(source: &str) -> TruthTable {
    let expr = formula(source);
    let variables: Vec<String> = collect_variables(&expr).into_iter().collect();
    let operators = collect_operators(&expr);
    enumerate_table(&variables, &operators).unwrap()
}

#[test]
fn implication_table() {
    let table = table_for("a -> b");
    assert_eq!(table.variables(), ["a", "b"]);
    assert_eq!(table.formula_count(), 1);
    assert_eq!(table.width(), 3);
    let rows: Vec<Vec<u8>> = table.rows().map(bits).collect();
    assert_eq!(
        rows,
        vec![vec![0, 0, 1], vec![0, 1, 1], vec![1, 0, 0], vec![1, 1, 1]]
    );
}

#[test]
fn first_variable_is_most_significant() {
    let table = table_for("c & !a | b");
    assert_eq!(table.variables(), ["a", "b", "c"]);
    // Row 4 is a=1, b=0, c=0.
    assert_eq!(bits(&table.row(4).unwrap()[..3]), [1, 0, 0]);
    // Row 1 is a=0, b=0, c=1: !a = 1, c & !a = 1, whole formula = 1.
    assert_eq!(bits(table.row(1).unwrap()), [0, 0, 1, 1, 1, 1]);
}

#[test]
fn no_variables_is_one_row() {
    let table = table_for("1 & !0");
    assert_eq!(table.row_count(), 1);
    assert_eq!(bits(table.row(0).unwrap()), [1, 1]);
    assert_eq!(table.row(1), None);
}

#[test]
fn nothing_to_tabulate() {
    let table = table_for("1");
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.width(), 0);
    assert_eq!(table.rows().count(), 1);
    assert_eq!(table.row(0), Some(&[][..]));
}

#[test]
fn thirty_two_variables_are_rejected() {
    let names: Vec<String> = (0..=MAX_VARIABLES).map(|i| format!("v{i}")).collect();
    let err = enumerate_table(&names, &[]).unwrap_err();
    assert_eq!(
        err,
        TableError::Capacity(CapacityError {
            found: 32,
            max: MAX_VARIABLES
        })
    );
    assert_eq!(err.to_string(), "too many variables: 32 (at most 31)");
}

#[test]
fn variable_missing_from_the_list() {
    let expr = formula("a & b");
    let err = enumerate_table(&["a"], &[&expr]).unwrap_err();
    assert_eq!(
        err,
        TableError::Eval(EvalError::UndeclaredVariable {
            name: "b".to_owned()
        })
    );
}

fn arb_formula() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        1 => any::<bool>().prop_map(Expr::constant),
        4 => "[a-e]".prop_map(Expr::variable),
    ];
    leaf.prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::not),
            (
                prop::sample::select(tabula_ir::BinaryOp::ALL.to_vec()),
                inner.clone(),
                inner
            )
                .prop_map(|(op, left, right)| Expr::binary(op, left, right)),
        ]
    })
}

proptest! {
    #[test]
    fn rows_match_direct_evaluation(expr in arb_formula()) {
        let variables: Vec<String> = collect_variables(&expr).into_iter().collect();
        let operators = collect_operators(&expr);
        let table = enumerate_table(&variables, &operators).unwrap();
        let k = variables.len();
        prop_assert_eq!(table.rows().count(), 1 << k);

        for (index, row) in table.rows().enumerate() {
            let assignment: Assignment = variables
                .iter()
                .enumerate()
                .map(|(column, name)| (name.clone(), (index >> (k - 1 - column)) & 1 == 1))
                .collect();
            for (column, name) in variables.iter().enumerate() {
                prop_assert_eq!(row[column], assignment[name]);
            }
            for (formula, &cell) in operators.iter().zip(&row[k..]) {
                prop_assert_eq!(cell, formula.evaluate(&assignment).unwrap());
            }
        }
    }
}
