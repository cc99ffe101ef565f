//! Recursive descent parser for Tabula formulas.
//!
//! Turns a [`TokenList`] into an owned [`Expr`] tree. The whole list must be
//! consumed: anything left before `Eof` is a `TrailingInput` error.

mod cursor;
mod error;
mod grammar;

use tabula_ir::{Expr, TokenList};
use tracing::debug;

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// Parser state.
pub(crate) struct Parser<'a, 'src> {
    cursor: Cursor<'a, 'src>,
}

impl<'a, 'src> Parser<'a, 'src> {
    fn new(tokens: &'a TokenList<'src>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse one formula and require the end of input after it.
    fn parse_formula(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            let token = self.cursor.current();
            return Err(ParseError::new(
                ParseErrorKind::TrailingInput { found: token.kind },
                token.span,
            ));
        }
        Ok(expr)
    }
}

/// Parse a token list into an expression tree.
///
/// # Errors
///
/// Returns a [`ParseError`] if the tokens do not form exactly one formula.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList<'_>) -> Result<Expr, ParseError> {
    let result = Parser::new(tokens).parse_formula();
    match &result {
        Ok(expr) => debug!(formula = %expr, "parsed"),
        Err(err) => debug!(%err, "parse failed"),
    }
    result
}

/// Like [`parse`], but attaches `hint` (typically the source line) to any
/// error message. The hint never changes the outcome.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying `hint` if parsing fails.
pub fn parse_with_hint(tokens: &TokenList<'_>, hint: &str) -> Result<Expr, ParseError> {
    parse(tokens).map_err(|err| err.with_hint(hint))
}

#[cfg(test)]
mod tests;
