//! Lexer error types.
//!
//! A `LexError` carries WHERE (`span`), WHAT (`kind`) and the offending
//! source `text`, which is all the shell needs to render a labelled
//! diagnostic.

use tabula_ir::Span;

/// A lexical error: a character that cannot begin or continue any token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} `{text}` at {span}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub text: String,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character outside the formula alphabet.
    #[error("unexpected character")]
    UnexpectedCharacter { found: char },
    /// `-`, `<`, `<-` or `>` that is not part of `->` or `<->`.
    #[error("malformed operator")]
    MalformedOperator,
    /// Input longer than a span can address.
    #[error("input too large")]
    SourceTooLarge,
}

impl LexError {
    pub(crate) fn unexpected(span: Span, text: &str) -> Self {
        let found = text.chars().next().unwrap_or('\u{FFFD}');
        LexError {
            kind: LexErrorKind::UnexpectedCharacter { found },
            span,
            text: text.to_owned(),
        }
    }

    pub(crate) fn malformed(span: Span, text: &str) -> Self {
        LexError {
            kind: LexErrorKind::MalformedOperator,
            span,
            text: text.to_owned(),
        }
    }

    /// Short help line for the diagnostic, if the fix is obvious.
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::MalformedOperator if self.text.starts_with('<') => {
                Some("equivalence is written `<->`")
            }
            LexErrorKind::MalformedOperator => Some("implication is written `->`"),
            LexErrorKind::UnexpectedCharacter { found } if found.is_ascii_digit() => {
                Some("only `0` and `1` are literals")
            }
            LexErrorKind::UnexpectedCharacter { .. } | LexErrorKind::SourceTooLarge => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_text_and_span() {
        let err = LexError::unexpected(Span::new(1, 2), "@");
        assert_eq!(err.to_string(), "unexpected character `@` at 1..2");
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: '@' });
    }

    #[test]
    fn hints() {
        assert_eq!(
            LexError::malformed(Span::new(2, 4), "<-").hint(),
            Some("equivalence is written `<->`")
        );
        assert_eq!(
            LexError::malformed(Span::new(2, 3), "-").hint(),
            Some("implication is written `->`")
        );
        assert_eq!(
            LexError::unexpected(Span::new(0, 1), "2").hint(),
            Some("only `0` and `1` are literals")
        );
        assert_eq!(LexError::unexpected(Span::new(0, 1), "#").hint(), None);
    }
}
