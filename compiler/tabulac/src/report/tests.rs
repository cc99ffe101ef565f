#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use tabula_eval::CapacityError;

use super::*;

fn render(err: &CliError, source: &str) -> String {
    let mut out = Vec::new();
    report_error(err, source, false, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn lex_error(source: &str) -> CliError {
    CliError::from(tabula_lexer::lex(source).unwrap_err())
}

fn parse_error(source: &str) -> CliError {
    let tokens = tabula_lexer::lex(source).unwrap();
    CliError::from(tabula_parse::parse_with_hint(&tokens, source).unwrap_err())
}

#[test]
fn lexical_error_points_at_the_character() {
    let text = render(&lex_error("a @ b"), "a @ b");
    assert!(text.contains("lexical error: unexpected character"), "{text}");
    assert!(text.contains("`@` is not part of any token"), "{text}");
    assert!(text.contains("a @ b"), "{text}");
}

#[test]
fn malformed_operator_has_help() {
    let text = render(&lex_error("a <- b"), "a <- b");
    assert!(text.contains("malformed operator"), "{text}");
    assert!(text.contains("equivalence is written `<->`"), "{text}");
}

#[test]
fn unclosed_paren() {
    let text = render(&parse_error("(a & b"), "(a & b");
    assert!(text.contains("syntax error: unclosed `(`"), "{text}");
    assert!(text.contains("this `(` is never closed"), "{text}");
}

#[test]
fn end_of_input() {
    let text = render(&parse_error("a &"), "a &");
    assert!(text.contains("unexpected end of input"), "{text}");
    assert!(text.contains("formula ends here"), "{text}");
}

#[test]
fn trailing_input() {
    let text = render(&parse_error("a b"), "a b");
    assert!(text.contains("expected end of input"), "{text}");
    assert!(text.contains("operands must be joined by an operator"), "{text}");
}

#[test]
fn other_errors_are_one_line() {
    let err = CliError::Capacity(CapacityError { found: 40, max: 31 });
    assert_eq!(render(&err, "ignored"), "error: too many variables: 40 (at most 31)\n");
}

#[test]
fn label_ranges_count_characters() {
    assert_eq!(labelled("é @", 3..4), ("é @".to_owned(), 2..3));
}

#[test]
fn empty_range_at_end_gets_a_blank() {
    assert_eq!(labelled("a &", 3..3), ("a & ".to_owned(), 3..4));
    assert_eq!(labelled("a b", 2..2), ("a b".to_owned(), 2..3));
}

#[test]
fn stray_close_paren_has_no_operand_help() {
    let text = render(&parse_error("a)"), "a)");
    assert!(text.contains("unexpected `)`"), "{text}");
    assert!(!text.contains("joined by an operator"), "{text}");
}

/// Accepts writes but cannot flush them.
struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[test]
fn failed_flush_is_reported_before_the_error() {
    let err = CliError::from(tabula_eval::TableError::Eval(
        tabula_eval::EvalError::UndeclaredVariable {
            name: "x".to_owned(),
        },
    ));
    let mut diagnostics = Vec::new();
    report_failure(&err, "x", false, &mut BrokenPipe, &mut diagnostics).unwrap();
    assert_eq!(
        String::from_utf8(diagnostics).unwrap(),
        "error: cannot write output: pipe closed\nerror: undeclared variable `x`\n"
    );
}

#[test]
fn successful_flush_only_reports_the_error() {
    let err = CliError::from(tabula_eval::TableError::Eval(
        tabula_eval::EvalError::UndeclaredVariable {
            name: "x".to_owned(),
        },
    ));
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    report_failure(&err, "x", false, &mut out, &mut diagnostics).unwrap();
    assert_eq!(
        String::from_utf8(diagnostics).unwrap(),
        "error: undeclared variable `x`\n"
    );
}
