//! Markup lexer for XML, HTML, XHTML and JSP.
//!
//! A small modal scanner: in content mode it recognizes text, entities,
//! comments, CDATA sections, declarations, scriptlets and tag openers; in
//! tag mode it recognizes names, `=`, quoted values and the tag closers
//! `>` and `/>`.

mod cursor;

use brace_ir::{Span, Token, TokenKind, TokenList};
use cursor::{is_name_char, is_name_start, is_space, ByteCursor};

/// Markup dialect switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkupOptions {
    /// Recognize `<% ... %>` scriptlet sections (JSP).
    pub scriptlets: bool,
}

/// Lex markup into a `TokenList`.
pub fn lex_markup(source: &str, options: MarkupOptions) -> TokenList {
    let mut scanner = MarkupScanner {
        cursor: ByteCursor::new(source),
        options,
        mode: Mode::Content,
        tokens: TokenList::with_capacity(source.len() / 4),
    };
    while !scanner.cursor.is_eof() {
        match scanner.mode {
            Mode::Content => scanner.content(),
            Mode::Tag { expect_name } => scanner.tag(expect_name),
        }
    }
    scanner.tokens
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Content,
    /// Inside `<name ...` or `</name ...`; the first name is the tag name.
    Tag {
        expect_name: bool,
    },
}

struct MarkupScanner<'a> {
    cursor: ByteCursor<'a>,
    options: MarkupOptions,
    mode: Mode,
    tokens: TokenList,
}

impl MarkupScanner<'_> {
    fn push(&mut self, kind: TokenKind, start: usize) {
        let end = self.cursor.pos();
        if end > start {
            self.tokens.push(Token::new(kind, Span::from_range(start..end)));
        }
    }

    /// Consume exactly `len` bytes as one token.
    fn fixed(&mut self, kind: TokenKind, len: usize) {
        let start = self.cursor.pos();
        self.cursor.advance_n(len);
        self.push(kind, start);
    }

    fn content(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b'<' => self.markup_open(),
            b'&' => self.entity(),
            b if is_space(b) => {
                self.cursor.eat_while(is_space);
                self.push(TokenKind::Whitespace, start);
            }
            _ => {
                self.cursor.skip_text();
                self.push(TokenKind::MarkupText, start);
            }
        }
    }

    /// Content-mode `<`: comment, CDATA, scriptlet, declaration or tag.
    fn markup_open(&mut self) {
        if self.cursor.starts_with(b"<!--") {
            self.fixed(TokenKind::MarkupCommentStart, 4);
            self.delimited(TokenKind::MarkupCommentData, b"-->", TokenKind::MarkupCommentEnd);
        } else if self.cursor.starts_with(b"<![CDATA[") {
            self.fixed(TokenKind::CdataStart, 9);
            self.delimited(TokenKind::CdataData, b"]]>", TokenKind::CdataEnd);
        } else if self.options.scriptlets && self.cursor.starts_with(b"<%") {
            let (kind, len) = match self.cursor.peek_at(2) {
                b'=' => (TokenKind::ScriptExpressionStart, 3),
                b'@' => (TokenKind::ScriptDirectiveStart, 3),
                b'!' => (TokenKind::ScriptDeclarationStart, 3),
                _ => (TokenKind::ScriptletStart, 2),
            };
            self.fixed(kind, len);
            self.delimited(TokenKind::ScriptCode, b"%>", TokenKind::ScriptletEnd);
        } else if self.cursor.starts_with(b"</") {
            self.fixed(TokenKind::EndTagStart, 2);
            self.mode = Mode::Tag { expect_name: true };
        } else if self.cursor.starts_with(b"<!") || self.cursor.starts_with(b"<?") {
            let start = self.cursor.pos();
            if self.cursor.skip_to_byte(b'>') {
                self.cursor.advance_n(1);
            }
            self.push(TokenKind::MarkupDeclaration, start);
        } else if is_name_start(self.cursor.peek_at(1)) {
            self.fixed(TokenKind::StartTagStart, 1);
            self.mode = Mode::Tag { expect_name: true };
        } else {
            self.fixed(TokenKind::MarkupText, 1);
        }
    }

    /// Body up to `end`, then the terminator itself. Unterminated bodies
    /// run to the end of the text.
    fn delimited(&mut self, body: TokenKind, end: &[u8], end_kind: TokenKind) {
        let start = self.cursor.pos();
        let found = self.cursor.skip_to(end);
        self.push(body, start);
        if found {
            self.fixed(end_kind, end.len());
        }
    }

    /// `&name;` or `&#123;`; a lone `&` is text.
    fn entity(&mut self) {
        let start = self.cursor.pos();
        let mut probe = self.cursor;
        probe.advance_n(1);
        if probe.current() == b'#' {
            probe.advance_n(1);
        }
        let body = probe.pos();
        probe.eat_while(|b| b.is_ascii_alphanumeric());
        if probe.pos() > body && probe.current() == b';' {
            probe.advance_n(1);
            self.cursor = probe;
            self.push(TokenKind::EntityRef, start);
        } else {
            self.fixed(TokenKind::MarkupText, 1);
        }
    }

    fn tag(&mut self, expect_name: bool) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b if is_space(b) => {
                self.cursor.eat_while(is_space);
                self.push(TokenKind::Whitespace, start);
            }
            b'>' => {
                self.fixed(TokenKind::TagEnd, 1);
                self.mode = Mode::Content;
            }
            b'/' if self.cursor.peek_at(1) == b'>' => {
                self.fixed(TokenKind::EmptyElementEnd, 2);
                self.mode = Mode::Content;
            }
            b'=' => self.fixed(TokenKind::AttrEq, 1),
            quote @ (b'"' | b'\'') => self.attribute_value(quote),
            // A stray `<` ends an unclosed tag.
            b'<' => self.mode = Mode::Content,
            b if is_name_start(b) => {
                self.cursor.eat_while(is_name_char);
                let kind = if expect_name {
                    TokenKind::TagName
                } else {
                    TokenKind::AttrName
                };
                self.push(kind, start);
                self.mode = Mode::Tag { expect_name: false };
            }
            _ => {
                self.cursor.advance_char();
                self.push(TokenKind::BadCharacter, start);
            }
        }
    }

    fn attribute_value(&mut self, quote: u8) {
        self.fixed(TokenKind::AttrValueStart, 1);
        let start = self.cursor.pos();
        let found = self.cursor.skip_to_byte(quote);
        self.push(TokenKind::AttrValue, start);
        if found {
            self.fixed(TokenKind::AttrValueEnd, 1);
        }
    }
}

#[cfg(test)]
mod tests;
