//! Rendering failures for the terminal.
//!
//! Lexical and syntax errors point into the formula with an `ariadne`
//! report; every other failure is a single `error:` line.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use tabula_lexer::LexError;
use tabula_parse::{ParseError, ParseErrorKind};

use crate::CliError;

/// Write `err` to `out`. `source` is the formula that failed.
///
/// # Errors
///
/// Propagates write failures on `out`.
pub fn report_error<W: Write>(
    err: &CliError,
    source: &str,
    color: bool,
    out: &mut W,
) -> io::Result<()> {
    match err {
        CliError::Lex(err) => lex_report(err, source, color, out),
        CliError::Parse(err) => parse_report(err, source, color, out),
        _ => writeln!(out, "error: {err}"),
    }
}

/// Flush what was printed before `err`, then report it on `diagnostics`.
/// A failed flush is reported first.
///
/// # Errors
///
/// Propagates write failures on `diagnostics`.
pub fn report_failure<O: Write, D: Write>(
    err: &CliError,
    source: &str,
    color: bool,
    out: &mut O,
    diagnostics: &mut D,
) -> io::Result<()> {
    if let Err(flush_err) = out.flush() {
        writeln!(diagnostics, "error: cannot write output: {flush_err}")?;
    }
    report_error(err, source, color, diagnostics)
}

fn lex_report<W: Write>(err: &LexError, source: &str, color: bool, out: &mut W) -> io::Result<()> {
    let (text, range) = labelled(source, err.span.to_range());
    let label = Label::new(range.clone())
        .with_message(format!("`{}` is not part of any token", err.text))
        .with_color(Color::Red);
    let mut report = Report::build(ReportKind::Error, (), range.start)
        .with_config(Config::default().with_color(color))
        .with_message(format!("lexical error: {}", err.kind))
        .with_label(label);
    if let Some(hint) = err.hint() {
        report = report.with_help(hint);
    }
    report.finish().write(Source::from(text), out)
}

fn parse_report<W: Write>(
    err: &ParseError,
    source: &str,
    color: bool,
    out: &mut W,
) -> io::Result<()> {
    let (text, range) = labelled(source, err.span.to_range());
    let label_message = match err.kind {
        ParseErrorKind::UnclosedParen => "this `(` is never closed".to_owned(),
        ParseErrorKind::UnexpectedEof => "formula ends here".to_owned(),
        ParseErrorKind::UnexpectedToken { found } | ParseErrorKind::TrailingInput { found } => {
            format!("unexpected {found}")
        }
    };
    let mut report = Report::build(ReportKind::Error, (), range.start)
        .with_config(Config::default().with_color(color))
        .with_message(format!("syntax error: {}", err.label()))
        .with_label(
            Label::new(range.clone())
                .with_message(label_message)
                .with_color(Color::Red),
        );
    match err.kind {
        ParseErrorKind::UnclosedParen => report = report.with_help("add a matching `)`"),
        ParseErrorKind::TrailingInput { found } if found.starts_operand() => {
            report = report.with_help("operands must be joined by an operator");
        }
        ParseErrorKind::TrailingInput { .. }
        | ParseErrorKind::UnexpectedToken { .. }
        | ParseErrorKind::UnexpectedEof => {}
    }
    report.finish().write(Source::from(text), out)
}

/// Source text and a non-empty label range in characters.
///
/// Spans are byte offsets while reports count characters. End-of-input
/// spans are empty; they get a trailing blank to point at.
fn labelled(source: &str, bytes: Range<usize>) -> (String, Range<usize>) {
    let mut text = source.to_owned();
    let start = bytes.start.min(text.len());
    let end = bytes.end.clamp(start, text.len());
    let chars_before =
        |offset: usize| text.get(..offset).map_or(0, |prefix| prefix.chars().count());
    let start = chars_before(start);
    let mut end = chars_before(end);
    if end == start {
        if start == text.chars().count() {
            text.push(' ');
        }
        end = start + 1;
    }
    (text, start..end)
}

#[cfg(test)]
mod tests;
