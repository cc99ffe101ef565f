//! Formula grammar.
//!
//! Precedence chain, loosest first:
//!
//! ```text
//! expr       := impl_expr
//! impl_expr  := or_expr (('->' | '<->') or_expr)*
//! or_expr    := and_expr (('|' | '^') and_expr)*
//! and_expr   := unary ('&' unary)*
//! unary      := '!' unary | atom
//! atom       := '0' | '1' | variable | '(' expr ')'
//! ```
//!
//! Every binary level folds to the left and runs of `!` are counted in a
//! loop. Nesting only recurses through parenthesized atoms, which go through
//! `ensure_sufficient_stack`.

use tabula_ir::stack::ensure_sufficient_stack;
use tabula_ir::{BinaryOp, Expr, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_, '_> {
    /// Parse an expression at the loosest precedence level.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_implication())
    }

    /// Parse `->` and `<->`.
    fn parse_implication(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_disjunction()?;

        while let Some(op) = self.match_implication_op() {
            self.cursor.advance();
            let right = self.parse_disjunction()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `|` and `^`.
    fn parse_disjunction(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_conjunction()?;

        while let Some(op) = self.match_disjunction_op() {
            self.cursor.advance();
            let right = self.parse_conjunction()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `&`.
    fn parse_conjunction(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while self.cursor.check(TokenKind::And) {
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = Expr::and(left, right);
        }

        Ok(left)
    }

    /// Parse prefix `!`. A run of `n` bangs wraps the atom `n` times, so
    /// `!!x` nests.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let mut negations = 0usize;
        while self.cursor.check(TokenKind::Not) {
            self.cursor.advance();
            negations += 1;
        }

        let mut expr = self.parse_atom()?;
        for _ in 0..negations {
            expr = Expr::not(expr);
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Literal(value) => {
                self.cursor.advance();
                Ok(Expr::constant(value))
            }
            TokenKind::Variable => {
                self.cursor.advance();
                Ok(Expr::variable(self.cursor.text(token.span)))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                if !self.cursor.check(TokenKind::RParen) {
                    return Err(ParseError::new(ParseErrorKind::UnclosedParen, token.span));
                }
                self.cursor.advance();
                Ok(inner)
            }
            TokenKind::Eof => Err(ParseError::new(ParseErrorKind::UnexpectedEof, token.span)),
            found => Err(ParseError::new(
                ParseErrorKind::UnexpectedToken { found },
                token.span,
            )),
        }
    }

    fn match_implication_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Implies => Some(BinaryOp::Implies),
            TokenKind::Iff => Some(BinaryOp::Iff),
            _ => None,
        }
    }

    fn match_disjunction_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Or => Some(BinaryOp::Or),
            TokenKind::Xor => Some(BinaryOp::Xor),
            _ => None,
        }
    }
}
