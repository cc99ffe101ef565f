//! The `table`, `lex` and `parse` commands.
//!
//! Each command takes the formula text and writes its result to `out`; the
//! caller owns stdout and decides how failures are reported.

use std::io::Write;

use tabula_eval::{
    check_capacity, collect_operators, collect_variables, count_operators, enumerate_table,
    TruthTable,
};
use tabula_ir::Expr;
use tracing::debug;

use crate::CliError;

/// Lex and parse `source` into an expression.
///
/// # Errors
///
/// Returns [`CliError::Lex`] or [`CliError::Parse`].
pub fn parse_formula(source: &str) -> Result<Expr, CliError> {
    let tokens = tabula_lexer::lex(source)?;
    let expr = tabula_parse::parse_with_hint(&tokens, source)?;
    Ok(expr)
}

/// Print the operation count, the numbered subformulas and the truth table.
///
/// With `table_only`, print just the header and the rows.
///
/// # Errors
///
/// Any lexical, syntax, capacity, evaluation or write failure.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_table<W: Write>(source: &str, table_only: bool, out: &mut W) -> Result<(), CliError> {
    let expr = parse_formula(source)?;
    let variables = collect_variables(&expr);
    check_capacity(&variables)?;
    let variables: Vec<String> = variables.into_iter().collect();
    let formulas = collect_operators(&expr);
    debug!(
        variables = variables.len(),
        formulas = formulas.len(),
        "tabulating"
    );
    let table = enumerate_table(&variables, &formulas)?;

    if !table_only {
        writeln!(out)?;
        writeln!(out, "{} operations", count_operators(&expr))?;
        for (index, formula) in formulas.iter().enumerate() {
            writeln!(out, "F{} = {formula}", index + 1)?;
        }
        writeln!(out)?;
    }
    write_table(&table, out)?;
    Ok(())
}

/// Header row then one line per assignment, cells separated by tabs.
fn write_table<W: Write>(table: &TruthTable, out: &mut W) -> std::io::Result<()> {
    let header: Vec<String> = table
        .variables()
        .iter()
        .cloned()
        .chain((1..=table.formula_count()).map(|index| format!("F{index}")))
        .collect();
    writeln!(out, "{}", header.join("\t"))?;

    let mut line = String::with_capacity(table.width() * 2);
    for row in table.rows() {
        line.clear();
        for (column, &cell) in row.iter().enumerate() {
            if column > 0 {
                line.push('\t');
            }
            line.push(if cell { '1' } else { '0' });
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print one token per line as `Kind @ start..end`, with variable names.
///
/// # Errors
///
/// A lexical or write failure.
pub fn run_lex<W: Write>(source: &str, out: &mut W) -> Result<(), CliError> {
    let tokens = tabula_lexer::lex(source)?;
    for token in &tokens {
        match token.kind {
            tabula_ir::TokenKind::Variable => {
                writeln!(out, "{token:?} `{}`", tokens.text(token.span))?;
            }
            _ => writeln!(out, "{token:?}")?,
        }
    }
    Ok(())
}

/// Print the canonical rendering of the formula.
///
/// # Errors
///
/// A lexical, syntax or write failure.
pub fn run_parse<W: Write>(source: &str, out: &mut W) -> Result<(), CliError> {
    let expr = parse_formula(source)?;
    writeln!(out, "{expr}")?;
    Ok(())
}
