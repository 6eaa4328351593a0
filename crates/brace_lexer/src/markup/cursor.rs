//! Byte cursor for the markup scanner.
//!
//! Reads past the end return `0x00`; use [`ByteCursor::is_eof`] to tell EOF
//! apart from an interior null byte.

/// Returns the earliest (minimum) of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Forward-only cursor over the source bytes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        ByteCursor {
            buf: source.as_bytes(),
            pos: 0,
        }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.peek_at(0)
    }

    /// Byte `n` positions ahead, `0x00` past the end.
    #[inline]
    pub(crate) fn peek_at(&self, n: usize) -> u8 {
        self.buf.get(self.pos + n).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn starts_with(&self, prefix: &[u8]) -> bool {
        self.buf[self.pos.min(self.buf.len())..].starts_with(prefix)
    }

    /// Advance by `n` bytes, clamped to the end of the source.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Width of the UTF-8 character starting with `byte`.
    #[inline]
    fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next occurrence of `needle`.
    ///
    /// Returns `false` and moves to EOF if there is none.
    pub(crate) fn skip_to(&mut self, needle: &[u8]) -> bool {
        let remaining = &self.buf[self.pos..];
        match memchr::memmem::find(remaining, needle) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.buf.len();
                false
            }
        }
    }

    /// Advance to the next `byte`, or EOF.
    pub(crate) fn skip_to_byte(&mut self, byte: u8) -> bool {
        let remaining = &self.buf[self.pos..];
        match memchr::memchr(byte, remaining) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.buf.len();
                false
            }
        }
    }

    /// Advance past plain text to the next `<`, `&` or ASCII whitespace byte.
    pub(crate) fn skip_text(&mut self) {
        let remaining = &self.buf[self.pos..];
        let markup = memchr::memchr2(b'<', b'&', remaining);
        let space = remaining.iter().position(|&b| is_space(b));
        match earliest_of(markup, space) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.buf.len(),
        }
    }
}

/// Markup whitespace: space, tab, CR, LF, form feed.
#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0C)
}

/// Characters that may start a tag or attribute name.
#[inline]
pub(crate) fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b':' || b >= 0x80
}

/// Characters that may continue a tag or attribute name.
#[inline]
pub(crate) fn is_name_char(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit() || b == b'-' || b == b'.'
}
