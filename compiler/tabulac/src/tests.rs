#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Cursor;

use pretty_assertions::assert_eq;

use super::*;

fn options(args: &[&str]) -> CliOptions {
    parse_args(args.iter().map(|arg| (*arg).to_owned())).unwrap()
}

#[test]
fn first_line_of_input_without_terminator() {
    let formula = read_formula(&options(&[]), Cursor::new("a & b\r\nignored\n")).unwrap();
    assert_eq!(formula, "a & b");
}

#[test]
fn empty_input_is_an_empty_formula() {
    let formula = read_formula(&options(&[]), Cursor::new("")).unwrap();
    assert_eq!(formula, "");
}

#[test]
fn argument_wins_over_input() {
    let formula = read_formula(&options(&["x | y"]), Cursor::new("a\n")).unwrap();
    assert_eq!(formula, "x | y");
}

#[test]
fn run_dispatches_on_command() {
    let mut out = Vec::new();
    run(&options(&["parse"]), "a&b|c", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a & b | c\n");

    let mut out = Vec::new();
    run(&options(&["help"]), "", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), USAGE);

    let mut out = Vec::new();
    run(&options(&["--table-only"]), "p", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "p\n0\n1\n");
}

#[test]
fn evaluation_errors_have_their_own_exit_code() {
    let err = CliError::from(tabula_eval::TableError::Eval(
        tabula_eval::EvalError::UndeclaredVariable {
            name: "x".to_owned(),
        },
    ));
    assert_eq!(err.exit_code(), 5);
    assert_eq!(err.to_string(), "undeclared variable `x`");
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

#[test]
fn deeply_nested_syntax_error_exits_with_parse_code() {
    let source = format!("{}x )", "!".repeat(1_000_000));
    let mut out = Vec::new();
    let err = run(&options(&["parse"]), &source, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Parse(_)));
    assert_eq!(err.exit_code(), 3);
    assert!(out.is_empty());
}
