//! Token types produced by the lexer and consumed by the parser.
//!
//! Tokens carry no payload beyond what the parser needs: literals carry
//! their value, variables carry nothing and are resolved through their span
//! against the source held by [`TokenList`].

use std::fmt;
use std::ops::Index;

use super::Span;

/// The alphabet of the formula language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Always the last token of a lexed list.
    Eof,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `0` or `1`
    Literal(bool),
    /// An identifier; the name is the token's source text.
    Variable,
    /// `!`
    Not,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `->`
    Implies,
    /// `<->`
    Iff,
}

impl TokenKind {
    /// Human-readable description used in parser diagnostics.
    pub fn description(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Literal(false) => "literal `0`",
            TokenKind::Literal(true) => "literal `1`",
            TokenKind::Variable => "a variable",
            TokenKind::Not => "`!`",
            TokenKind::And => "`&`",
            TokenKind::Or => "`|`",
            TokenKind::Xor => "`^`",
            TokenKind::Implies => "`->`",
            TokenKind::Iff => "`<->`",
        }
    }

    /// Whether a token of this kind can start an operand.
    pub fn starts_operand(self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::Literal(_) | TokenKind::Variable | TokenKind::Not
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Ordered token sequence together with the source it was cut from.
///
/// The list borrows the source so variable names can be recovered from
/// spans without copying them during lexing.
#[derive(Clone)]
pub struct TokenList<'src> {
    source: &'src str,
    tokens: Vec<Token>,
}

impl<'src> TokenList<'src> {
    /// Create an empty list over `source`.
    pub fn new(source: &'src str) -> Self {
        TokenList {
            source,
            tokens: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Source text covered by `span`, or `""` if the span is out of range.
    pub fn text(&self, span: Span) -> &'src str {
        self.source.get(span.to_range()).unwrap_or("")
    }

    /// Span of the end of the source, used when the list lacks an `Eof` token.
    pub fn end_span(&self) -> Span {
        let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        Span::point(end)
    }

    /// The token kinds in order, mostly useful in tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}

impl Index<usize> for TokenList<'_> {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList<'_> {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    // Small kind + 8-byte span, 4-aligned.
    crate::static_assert_size!(Token, 12);
}
