//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion to [`TokenKind`].

use logos::Logos;
use tabula_ir::TokenKind;

/// Raw token from logos.
///
/// `Stray` matches the pieces of an arrow that never became one (`-`, `<`,
/// `<-`, `>`). Longest match means `->` and `<->` always win over it.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[token("0")]
    False,
    #[token("1")]
    True,

    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("->")]
    Arrow,
    #[token("<->")]
    DoubleArrow,

    #[regex(r"<-?|-|>")]
    Stray,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

impl RawToken {
    /// The final token kind, or `None` for a stray arrow fragment.
    pub(crate) fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::False => TokenKind::Literal(false),
            RawToken::True => TokenKind::Literal(true),
            RawToken::Bang => TokenKind::Not,
            RawToken::Amp => TokenKind::And,
            RawToken::Pipe => TokenKind::Or,
            RawToken::Caret => TokenKind::Xor,
            RawToken::Arrow => TokenKind::Implies,
            RawToken::DoubleArrow => TokenKind::Iff,
            RawToken::Ident => TokenKind::Variable,
            RawToken::Stray => return None,
        };
        Some(kind)
    }
}
