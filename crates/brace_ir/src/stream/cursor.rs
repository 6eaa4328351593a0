//! Positionable cursors over a token sequence.

use crate::{Span, Token, TokenKind};

/// A steppable view over a token stream (the highlighter iterator).
///
/// Cursors are cheap to clone and independent: moving a clone never moves
/// the original. Lookahead is done by cloning.
///
/// # Contract
///
/// `kind`, `span`, `start` and `end` may only be called when `at_end()` is
/// false.
pub trait TokenCursor: Clone {
    /// Move to the next token.
    fn advance(&mut self);

    /// Move to the previous token.
    fn retreat(&mut self);

    /// True when positioned past the last or before the first token.
    fn at_end(&self) -> bool;

    /// Kind of the current token.
    fn kind(&self) -> TokenKind;

    /// Range of the current token.
    fn span(&self) -> Span;

    /// Start offset of the current token.
    #[inline]
    fn start(&self) -> u32 {
        self.span().start
    }

    /// End offset (exclusive) of the current token.
    #[inline]
    fn end(&self) -> u32 {
        self.span().end
    }
}

/// Slice-backed [`TokenCursor`].
///
/// Positions run from `0` ("before the first token") through `len + 1`
/// ("after the last token"); token `i` lives at position `i + 1`. Both
/// boundaries are sticky in their own direction, and stepping inward from
/// a boundary lands on the nearest token.
#[derive(Clone, Copy, Debug)]
pub struct StreamCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> StreamCursor<'a> {
    /// Cursor on token `index`, or after the last token if `index` is out of range.
    pub fn at_index(tokens: &'a [Token], index: usize) -> Self {
        let pos = index.saturating_add(1).min(tokens.len() + 1);
        StreamCursor { tokens, pos }
    }

    /// Index of the current token, or `None` at a boundary.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        if self.at_end() {
            None
        } else {
            Some(self.pos - 1)
        }
    }

    /// The current token.
    ///
    /// # Panics
    /// Panics if the cursor is at a boundary.
    #[inline]
    pub fn token(&self) -> &'a Token {
        assert!(
            !self.at_end(),
            "token cursor read outside the stream (position {} of {})",
            self.pos,
            self.tokens.len()
        );
        &self.tokens[self.pos - 1]
    }
}

impl TokenCursor for StreamCursor<'_> {
    #[inline]
    fn advance(&mut self) {
        if self.pos <= self.tokens.len() {
            self.pos += 1;
        }
    }

    #[inline]
    fn retreat(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos == 0 || self.pos > self.tokens.len()
    }

    #[inline]
    fn kind(&self) -> TokenKind {
        self.token().kind
    }

    #[inline]
    fn span(&self) -> Span {
        self.token().span
    }
}
