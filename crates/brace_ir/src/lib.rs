//! Brace IR - token model for bracket matching
//!
//! This crate contains the data structures shared by the highlighter lexers
//! and the matching engine:
//! - Spans for source locations
//! - Token kinds, tokens and `TokenList` for lexer output
//! - `TokenStream`, the immutable pairing of text and tokens
//! - The `TokenCursor` trait and its slice-backed `StreamCursor`
//! - `Language`, the lexical family a text belongs to
//!
//! # Design Philosophy
//!
//! - **Immutable inputs**: streams are built once and only read afterwards
//! - **Cheap cursors**: cursors are `Copy`-sized views; cloning one is how
//!   lookahead works without disturbing the caller's position

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod language;
mod span;
mod stream;
mod token;

pub use language::Language;
pub use span::{Span, SpanError};
pub use stream::{StreamCursor, TokenCursor, TokenStream};
pub use token::{Token, TokenKind, TokenList};
