//! Immutable token streams.
//!
//! A [`TokenStream`] owns the text buffer and the tokens lexed from it.
//! Matching never mutates a stream; any number of cursors can be created
//! over the same stream and moved independently.

mod cursor;

pub use cursor::{StreamCursor, TokenCursor};

use crate::{Span, Token, TokenList};

/// Text plus the tokens covering it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenStream {
    text: String,
    tokens: TokenList,
}

impl TokenStream {
    /// Pair a text with its tokens.
    ///
    /// Tokens must be in increasing offset order and lie within the text.
    /// Gaps between tokens are allowed.
    pub fn new(text: impl Into<String>, tokens: TokenList) -> Self {
        let text = text.into();
        debug_assert!(
            tokens
                .as_slice()
                .windows(2)
                .all(|w| w[0].span.end <= w[1].span.start),
            "tokens must be ordered and non-overlapping"
        );
        debug_assert!(
            tokens
                .iter()
                .all(|t| t.span.start <= t.span.end && (t.span.end as usize) <= text.len()),
            "token spans must lie within the text"
        );
        TokenStream { text, tokens }
    }

    /// The full text buffer.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The tokens.
    #[inline]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Text of a span, or the empty string if the span is out of bounds.
    #[inline]
    pub fn token_text(&self, span: Span) -> &str {
        span.slice(&self.text).unwrap_or_default()
    }

    /// Cursor on the token containing `offset`.
    ///
    /// If `offset` falls in a gap between tokens the cursor lands on the
    /// next token. At or past the end of the last token the cursor is at
    /// end.
    pub fn cursor_at(&self, offset: u32) -> StreamCursor<'_> {
        let tokens = self.tokens.as_slice();
        let index = tokens.partition_point(|t| t.span.end <= offset);
        StreamCursor::at_index(tokens, index)
    }

    /// Cursor on the token at `index`.
    pub fn cursor_at_index(&self, index: usize) -> StreamCursor<'_> {
        StreamCursor::at_index(self.tokens.as_slice(), index)
    }

    /// Index of the token containing `offset`, if any.
    pub fn token_index_at(&self, offset: u32) -> Option<usize> {
        let tokens = self.tokens.as_slice();
        let index = tokens.partition_point(|t| t.span.end <= offset);
        tokens
            .get(index)
            .filter(|t| t.span.contains(offset))
            .map(|_| index)
    }

    /// Iterate over the tokens with their text.
    pub fn iter_with_text(&self) -> impl Iterator<Item = (&Token, &str)> {
        self.tokens.iter().map(|t| (t, self.token_text(t.span)))
    }
}
