//! Parse error types.
//!
//! A `ParseError` records WHERE (`span`) and WHAT (`kind`), plus an optional
//! caller-supplied hint that is appended to the message. The hint never
//! affects whether parsing succeeds.

use std::fmt;

use tabula_ir::{Span, TokenKind};

/// A syntax error in a well-lexed formula.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub hint: Option<String>,
}

/// What kind of syntax error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// An operand was expected but an operator or `)` was found.
    #[error("expected an operand, found {found}")]
    UnexpectedToken { found: TokenKind },
    /// Input ended where an operand was expected.
    #[error("unexpected end of input, expected an operand")]
    UnexpectedEof,
    /// A `(` without its matching `)`. The span points at the `(`.
    #[error("unclosed `(`")]
    UnclosedParen,
    /// A complete formula was followed by more tokens.
    #[error("expected end of input, found {found}")]
    TrailingInput { found: TokenKind },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            hint: None,
        }
    }

    /// Attach a hint; an empty hint is ignored.
    #[must_use]
    pub fn with_hint(mut self, hint: &str) -> Self {
        if !hint.is_empty() {
            self.hint = Some(hint.to_owned());
        }
        self
    }

    /// Message without location or hint, for diagnostic labels.
    pub fn label(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)?;
        if let Some(hint) = &self.hint {
            write!(f, " in `{hint}`")?;
        }
        Ok(())
    }
}
