//! Tabula IR - shared data structures for the formula engine.
//!
//! This crate contains everything the lexer, parser and evaluator agree on:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - The expression tree (`Expr`, `ExprKind`, `BinaryOp`)
//! - Operator precedence and associativity
//! - Canonical, minimally parenthesized rendering with a write-once cache
//! - Post-order traversal through the `Visitor` trait
//!
//! # Design Philosophy
//!
//! - **Closed node set**: `ExprKind` is an enum, every consumer matches exhaustively.
//! - **Exclusive ownership**: each node owns its children through `Box`, `Clone` is deep.
//! - **Immutable after parse**: the only post-construction write is the render cache,
//!   which is a `OnceLock` and therefore safe to publish from any reader.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod expr;
mod ops;
mod render;
mod span;
pub mod stack;
mod token;
pub mod visitor;

pub use expr::{Expr, ExprKind};
pub use ops::{Associativity, BinaryOp, Precedence};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use visitor::Visitor;
