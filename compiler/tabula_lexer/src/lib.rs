//! Lexer for Tabula formulas using logos.
//!
//! Produces a [`TokenList`] that borrows the source, terminated by `Eof`.
//! Lexing stops at the first character that cannot start or continue a
//! token; no partial token list is ever returned.

mod lex_error;
mod raw_token;

use logos::Logos;
use tabula_ir::{Span, Token, TokenKind, TokenList};
use tracing::{debug, trace};

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Lex `source` into tokens.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered, in source order.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenList<'_>, LexError> {
    let end = u32::try_from(source.len()).map_err(|_| too_large())?;
    let mut tokens = TokenList::new(source);
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::try_from_range(lexer.span()).map_err(|_| too_large())?;
        let slice = lexer.slice();
        let kind = match result {
            Ok(raw) => raw
                .kind()
                .ok_or_else(|| LexError::malformed(span, slice))?,
            Err(()) => return Err(LexError::unexpected(span, slice)),
        };
        trace!(?kind, %span, "token");
        tokens.push(Token::new(kind, span));
    }

    tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
    debug!(count = tokens.len(), "lexed");
    Ok(tokens)
}

fn too_large() -> LexError {
    LexError {
        kind: LexErrorKind::SourceTooLarge,
        span: Span::DUMMY,
        text: String::new(),
    }
}
