//! Token kinds produced by the highlighter lexers.

use std::fmt;

/// Token kinds across the host language, its doc comments, markup dialects
/// and embedded scripts.
///
/// Kinds carry no payload: the text of a token is read back from the
/// stream through its span. Which kinds act as brackets is decided by the
/// bracket tables, not by this enum.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Trivia ===
    Whitespace,
    LineComment,
    BlockComment,
    BadCharacter,

    // === Code ===
    Ident,
    Number,
    StringLiteral,
    CharLiteral,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    /// `<` used as an operator or generic delimiter in code
    Lt,
    /// `>` used as an operator or generic delimiter in code
    Gt,
    Comma,
    Semicolon,
    Dot,
    Operator,

    // === Doc comments ===
    /// `/**`
    DocCommentStart,
    /// `*/` closing a doc comment
    DocCommentEnd,
    DocCommentData,
    /// `{` opening an inline tag such as `{@link Foo}`
    DocInlineTagStart,
    /// `}` closing an inline tag
    DocInlineTagEnd,
    /// `@link`, `@param`, ...
    DocTagName,

    // === Markup ===
    MarkupText,
    /// `<` opening a start tag
    StartTagStart,
    /// `</` opening an end tag
    EndTagStart,
    /// `>` closing a start or end tag
    TagEnd,
    /// `/>` closing an empty element
    EmptyElementEnd,
    TagName,
    AttrName,
    /// `=` between an attribute name and its value
    AttrEq,
    /// Opening quote of an attribute value
    AttrValueStart,
    AttrValue,
    /// Closing quote of an attribute value
    AttrValueEnd,
    /// `<!--`
    MarkupCommentStart,
    MarkupCommentData,
    /// `-->`
    MarkupCommentEnd,
    /// `<![CDATA[`
    CdataStart,
    CdataData,
    /// `]]>`
    CdataEnd,
    /// `&amp;`, `&#10;`, ...
    EntityRef,
    /// `<!DOCTYPE ...>` or `<?xml ...?>`
    MarkupDeclaration,

    // === Embedded script ===
    /// `<%`
    ScriptletStart,
    /// `<%=`
    ScriptExpressionStart,
    /// `<%@`
    ScriptDirectiveStart,
    /// `<%!`
    ScriptDeclarationStart,
    /// `%>`
    ScriptletEnd,
    ScriptCode,
}

impl TokenKind {
    /// Number of variants.
    pub const COUNT: usize = TokenKind::ScriptCode as usize + 1;

    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::Whitespace,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::BadCharacter,
        TokenKind::Ident,
        TokenKind::Number,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Dot,
        TokenKind::Operator,
        TokenKind::DocCommentStart,
        TokenKind::DocCommentEnd,
        TokenKind::DocCommentData,
        TokenKind::DocInlineTagStart,
        TokenKind::DocInlineTagEnd,
        TokenKind::DocTagName,
        TokenKind::MarkupText,
        TokenKind::StartTagStart,
        TokenKind::EndTagStart,
        TokenKind::TagEnd,
        TokenKind::EmptyElementEnd,
        TokenKind::TagName,
        TokenKind::AttrName,
        TokenKind::AttrEq,
        TokenKind::AttrValueStart,
        TokenKind::AttrValue,
        TokenKind::AttrValueEnd,
        TokenKind::MarkupCommentStart,
        TokenKind::MarkupCommentData,
        TokenKind::MarkupCommentEnd,
        TokenKind::CdataStart,
        TokenKind::CdataData,
        TokenKind::CdataEnd,
        TokenKind::EntityRef,
        TokenKind::MarkupDeclaration,
        TokenKind::ScriptletStart,
        TokenKind::ScriptExpressionStart,
        TokenKind::ScriptDirectiveStart,
        TokenKind::ScriptDeclarationStart,
        TokenKind::ScriptletEnd,
        TokenKind::ScriptCode,
    ];

    /// Whitespace and comments: tokens a reader skips over.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::DocCommentStart
                | TokenKind::DocCommentEnd
                | TokenKind::DocCommentData
                | TokenKind::MarkupCommentStart
                | TokenKind::MarkupCommentData
                | TokenKind::MarkupCommentEnd
        )
    }

    /// Human-readable name, used by the CLI and in `Debug` output.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::BadCharacter => "bad character",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::StringLiteral => "string",
            TokenKind::CharLiteral => "char",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Operator => "operator",
            TokenKind::DocCommentStart => "/**",
            TokenKind::DocCommentEnd => "doc */",
            TokenKind::DocCommentData => "doc text",
            TokenKind::DocInlineTagStart => "doc {",
            TokenKind::DocInlineTagEnd => "doc }",
            TokenKind::DocTagName => "doc tag name",
            TokenKind::MarkupText => "text",
            TokenKind::StartTagStart => "tag <",
            TokenKind::EndTagStart => "tag </",
            TokenKind::TagEnd => "tag >",
            TokenKind::EmptyElementEnd => "tag />",
            TokenKind::TagName => "tag name",
            TokenKind::AttrName => "attribute name",
            TokenKind::AttrEq => "attribute =",
            TokenKind::AttrValueStart => "attribute value start",
            TokenKind::AttrValue => "attribute value",
            TokenKind::AttrValueEnd => "attribute value end",
            TokenKind::MarkupCommentStart => "<!--",
            TokenKind::MarkupCommentData => "comment text",
            TokenKind::MarkupCommentEnd => "-->",
            TokenKind::CdataStart => "<![CDATA[",
            TokenKind::CdataData => "cdata text",
            TokenKind::CdataEnd => "]]>",
            TokenKind::EntityRef => "entity reference",
            TokenKind::MarkupDeclaration => "declaration",
            TokenKind::ScriptletStart => "<%",
            TokenKind::ScriptExpressionStart => "<%=",
            TokenKind::ScriptDirectiveStart => "<%@",
            TokenKind::ScriptDeclarationStart => "<%!",
            TokenKind::ScriptletEnd => "%>",
            TokenKind::ScriptCode => "script code",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
