//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use tabula_ir::{Span, Token, TokenKind, TokenList};

/// Cursor over a [`TokenList`].
///
/// Reading past the last token yields a synthetic `Eof` at the end of the
/// source, so hand-built lists without a trailing `Eof` still parse.
pub(crate) struct Cursor<'a, 'src> {
    tokens: &'a TokenList<'src>,
    pos: usize,
}

impl<'a, 'src> Cursor<'a, 'src> {
    pub(crate) fn new(tokens: &'a TokenList<'src>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token.
    #[inline]
    pub(crate) fn current(&self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => *token,
            None => Token::new(TokenKind::Eof, self.tokens.end_span()),
        }
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Advance to the next token and return the one consumed.
    ///
    /// Never moves past `Eof`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Source text for a span, used to resolve variable names.
    #[inline]
    pub(crate) fn text(&self, span: Span) -> &'src str {
        self.tokens.text(span)
    }
}
