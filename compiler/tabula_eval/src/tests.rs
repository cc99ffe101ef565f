#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use crate::test_helpers::formula;
use crate::{Assignment, EvalError, Evaluate};

fn assignment(pairs: &[(&str, bool)]) -> Assignment {
    pairs
        .iter()
        .map(|&(name, value)| (name.to_owned(), value))
        .collect()
}

#[test]
fn constants_ignore_the_assignment() {
    let empty = Assignment::default();
    assert_eq!(formula("1").evaluate(&empty), Ok(true));
    assert_eq!(formula("0").evaluate(&empty), Ok(false));
    assert_eq!(formula("!0 & (1 -> 1)").evaluate(&empty), Ok(true));
}

#[test]
fn variables_are_looked_up() {
    let values = assignment(&[("a", true), ("b", false)]);
    assert_eq!(formula("a").evaluate(&values), Ok(true));
    assert_eq!(formula("a & b").evaluate(&values), Ok(false));
    assert_eq!(formula("a -> b").evaluate(&values), Ok(false));
    assert_eq!(formula("b -> a").evaluate(&values), Ok(true));
    assert_eq!(formula("a ^ b <-> !b").evaluate(&values), Ok(true));
}

#[test]
fn missing_variable_is_an_error() {
    let values = assignment(&[("a", true)]);
    assert_eq!(
        formula("a & c").evaluate(&values),
        Err(EvalError::UndeclaredVariable {
            name: "c".to_owned()
        })
    );
}

#[test]
fn evaluation_is_strict() {
    // The left operand alone decides these, the right is still evaluated.
    let values = assignment(&[("a", false)]);
    for source in ["a & missing", "!a | missing", "a -> missing"] {
        assert_eq!(
            formula(source).evaluate(&values),
            Err(EvalError::UndeclaredVariable {
                name: "missing".to_owned()
            }),
            "{source}"
        );
    }
}

#[test]
fn error_message_names_the_variable() {
    let err = formula("q").evaluate(&Assignment::default()).unwrap_err();
    assert_eq!(err.to_string(), "undeclared variable `q`");
}

#[test]
fn deep_negation_chain_evaluates() {
    let source = format!("{}x", "!".repeat(3_001));
    let values = assignment(&[("x", false)]);
    assert_eq!(formula(&source).evaluate(&values), Ok(true));
}
