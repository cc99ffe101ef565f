//! Parser tests over lexed input.


use tabula_ir::Expr;

use crate::{parse, ParseError};

fn parse_str(source: &str) -> Result<Expr, ParseError> {
    let tokens = match tabula_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("lexing {source:?} failed: {err}"),
    };
    parse(&tokens)
}

fn parse_ok(source: &str) -> Expr {
    match parse_str(source) {
        Ok(expr) => expr,
        Err(err) => panic!("parsing {source:?} failed: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse_str(source) {
        Ok(expr) => panic!("expected {source:?} to fail, got {expr:?}"),
        Err(err) => err,
    }
}
