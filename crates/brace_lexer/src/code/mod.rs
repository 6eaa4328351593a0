//! Code lexer using logos.
//!
//! The main lexer covers Java-like code. On `/**` it morphs into the
//! doc-comment lexer, which runs until `*/` and then morphs back.

use brace_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw code token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum CodeToken {
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    // `/**/` is an empty block comment; `/**` followed by anything else
    // starts a doc comment.
    #[token("/*", block_comment)]
    #[token("/**/")]
    BlockComment,

    #[token("/**")]
    DocStart,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,

    #[regex(r"[+\-*/%=!&|^~?:@#\\`]")]
    Operator,

    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[lLfFdD]?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    Char,

    #[regex(r"([A-Za-z_$]|[^\x00-\x7F])([A-Za-z0-9_$]|[^\x00-\x7F])*")]
    Ident,
}

/// Raw doc-comment token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum DocToken {
    #[token("*/")]
    End,

    #[token("{")]
    InlineTagStart,

    #[token("}")]
    InlineTagEnd,

    #[regex(r"@[A-Za-z][A-Za-z0-9_]*")]
    TagName,

    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"[^ \t\r\n\x0C{}@*]+")]
    #[token("*")]
    #[token("@")]
    Data,
}

/// Lex Java-like code into a `TokenList`.
pub fn lex_code(source: &str) -> TokenList {
    let mut result = TokenList::with_capacity(source.len() / 2);
    let mut lexer = CodeToken::lexer(source);

    while let Some(token_result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let kind = match token_result {
            Ok(CodeToken::DocStart) => {
                result.push(Token::new(TokenKind::DocCommentStart, span));
                let mut doc = lexer.morph::<DocToken>();
                lex_doc_body(&mut doc, &mut result);
                lexer = doc.morph();
                continue;
            }
            Ok(raw) => convert_token(raw),
            Err(()) => TokenKind::BadCharacter,
        };
        result.push(Token::new(kind, span));
    }

    result
}

/// Extend a `/*` token through its `*/`, or to the end of the text.
fn block_comment(lex: &mut logos::Lexer<'_, CodeToken>) -> bool {
    let rest = lex.remainder();
    let len = memchr::memmem::find(rest.as_bytes(), b"*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
    true
}

/// Lex a doc comment body up to and including its `*/`.
fn lex_doc_body(doc: &mut logos::Lexer<'_, DocToken>, result: &mut TokenList) {
    while let Some(token_result) = doc.next() {
        let span = Span::from_range(doc.span());
        let kind = match token_result {
            Ok(DocToken::End) => {
                result.push(Token::new(TokenKind::DocCommentEnd, span));
                return;
            }
            Ok(DocToken::InlineTagStart) => TokenKind::DocInlineTagStart,
            Ok(DocToken::InlineTagEnd) => TokenKind::DocInlineTagEnd,
            Ok(DocToken::TagName) => TokenKind::DocTagName,
            Ok(DocToken::Whitespace) => TokenKind::Whitespace,
            Ok(DocToken::Data) | Err(()) => TokenKind::DocCommentData,
        };
        result.push(Token::new(kind, span));
    }
}

fn convert_token(raw: CodeToken) -> TokenKind {
    match raw {
        CodeToken::Whitespace => TokenKind::Whitespace,
        CodeToken::LineComment => TokenKind::LineComment,
        CodeToken::BlockComment => TokenKind::BlockComment,
        CodeToken::DocStart => TokenKind::DocCommentStart,
        CodeToken::LParen => TokenKind::LParen,
        CodeToken::RParen => TokenKind::RParen,
        CodeToken::LBrace => TokenKind::LBrace,
        CodeToken::RBrace => TokenKind::RBrace,
        CodeToken::LBracket => TokenKind::LBracket,
        CodeToken::RBracket => TokenKind::RBracket,
        CodeToken::Lt => TokenKind::Lt,
        CodeToken::Gt => TokenKind::Gt,
        CodeToken::Comma => TokenKind::Comma,
        CodeToken::Semicolon => TokenKind::Semicolon,
        CodeToken::Dot => TokenKind::Dot,
        CodeToken::Operator => TokenKind::Operator,
        CodeToken::Number => TokenKind::Number,
        CodeToken::String => TokenKind::StringLiteral,
        CodeToken::Char => TokenKind::CharLiteral,
        CodeToken::Ident => TokenKind::Ident,
    }
}
